//! Contest filter selection.
//!
//! Each category (type, kind) is narrowed by a small state machine. The
//! transition function is pure: it takes one line of input and returns the
//! next machine plus an [`Effect`] for the console to render. Reading input is
//! left to the caller.
use std::collections::BTreeSet;
use std::fmt::{self, Display, Write};

use crate::models::{ContestMetadata, ContestPhase, ContestType};

pub const OFFICIAL_ICPC_KIND: &str = "Official ICPC Contest";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    AwaitingYesNo,
    Offering,
    Done,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect<T> {
    /// The answer was accepted and another prompt follows.
    Continue,
    /// An option moved from the available list into the chosen list.
    Added(T),
    /// The input was invalid; nothing changed.
    Rejected(String),
    Finished,
}

#[derive(Debug, Clone)]
pub struct Selection<T> {
    category: &'static str,
    original: Vec<T>,
    available: Vec<T>,
    chosen: Vec<T>,
    state: SelectionState,
}

fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

impl<T: Clone + PartialEq + Display> Selection<T> {
    pub fn new(category: &'static str, options: Vec<T>) -> Self {
        let state = if options.is_empty() {
            SelectionState::Done
        } else {
            SelectionState::AwaitingYesNo
        };
        Self {
            category,
            original: options.clone(),
            available: options,
            chosen: Vec::new(),
            state,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn is_done(&self) -> bool {
        self.state == SelectionState::Done
    }

    #[cfg(test)]
    pub fn available(&self) -> &[T] {
        &self.available
    }

    #[cfg(test)]
    pub fn chosen(&self) -> &[T] {
        &self.chosen
    }

    /// Text to show before reading the next line.
    pub fn prompt(&self) -> String {
        match self.state {
            SelectionState::AwaitingYesNo if self.chosen.is_empty() => {
                format!("Filter by contest {}? (y/n)", self.category)
            }
            SelectionState::AwaitingYesNo => {
                format!("Add another contest {}? (y/n)", self.category)
            }
            SelectionState::Offering => {
                let mut menu = format!("Available contest {} options:\n", self.category);
                for (position, option) in self.available.iter().enumerate() {
                    let _ = writeln!(menu, "  {}. {}", position + 1, option);
                }
                let _ = write!(menu, "Enter a number (1-{}):", self.available.len());
                menu
            }
            SelectionState::Done => String::new(),
        }
    }

    pub fn step(mut self, input: &str) -> (Self, Effect<T>) {
        match self.state {
            SelectionState::Done => (self, Effect::Finished),
            SelectionState::AwaitingYesNo => match parse_yes_no(input) {
                Some(true) => {
                    self.state = SelectionState::Offering;
                    (self, Effect::Continue)
                }
                Some(false) => {
                    self.state = SelectionState::Done;
                    (self, Effect::Finished)
                }
                None => {
                    let message = format!("Please answer y or n, not \"{}\".", input.trim());
                    (self, Effect::Rejected(message))
                }
            },
            SelectionState::Offering => {
                let choice = input
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .filter(|n| (1..=self.available.len()).contains(n));
                let Some(position) = choice else {
                    let message = format!(
                        "Please enter a number between 1 and {}.",
                        self.available.len()
                    );
                    return (self, Effect::Rejected(message));
                };

                let option = self.available.remove(position - 1);
                self.chosen.push(option.clone());
                self.state = if self.available.is_empty() {
                    SelectionState::Done
                } else {
                    SelectionState::AwaitingYesNo
                };
                (self, Effect::Added(option))
            }
        }
    }

    /// Ends the selection. Choosing nothing means choosing everything.
    pub fn finish(self) -> Vec<T> {
        if self.chosen.is_empty() {
            self.original
        } else {
            self.chosen
        }
    }
}

/// Distinct contest types and kinds in catalog order.
pub fn catalog_options(catalog: &[ContestMetadata]) -> (Vec<ContestType>, Vec<String>) {
    let mut types = Vec::new();
    let mut kinds: Vec<String> = Vec::new();

    for contest in catalog {
        if !types.contains(&contest.contest_type) {
            types.push(contest.contest_type);
        }
        if let Some(kind) = &contest.kind {
            if !kinds.contains(kind) {
                kinds.push(kind.clone());
            }
        }
    }

    (types, kinds)
}

/// Predicate over catalog entries built from the user's choices.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSelection {
    pub types: Vec<ContestType>,
    pub kinds: Vec<String>,
    /// `None` puts no constraint on the season, not even that it exists.
    pub season_years: Option<BTreeSet<i32>>,
}

impl FilterSelection {
    pub fn official_icpc() -> Self {
        Self {
            types: vec![ContestType::Icpc],
            kinds: vec![OFFICIAL_ICPC_KIND.to_string()],
            season_years: None,
        }
    }

    pub fn matches(&self, contest: &ContestMetadata) -> bool {
        if let Some(years) = &self.season_years {
            match contest.season_start_year() {
                Some(year) if years.contains(&year) => {}
                _ => return false,
            }
        }

        self.types.contains(&contest.contest_type)
            && contest.phase == ContestPhase::Finished
            && contest
                .kind
                .as_ref()
                .is_some_and(|kind| self.kinds.contains(kind))
    }
}

impl Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let types: Vec<String> = self.types.iter().map(ToString::to_string).collect();
        write!(f, "types [{}], kinds [{}]", types.join(", "), self.kinds.join(", "))?;
        match &self.season_years {
            Some(years) => match (years.first(), years.last()) {
                (Some(first), Some(last)) => write!(f, ", seasons {first}-{last}"),
                _ => write!(f, ", no seasons"),
            },
            None => write!(f, ", any season"),
        }
    }
}
