use std::fmt::Display;
use std::io::{self, BufRead, Write};

use crate::filter::{catalog_options, Effect, FilterSelection, Selection};
use crate::models::ContestMetadata;
use crate::years;

/// Interactive prompts over any line-oriented input and output.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Bytes that are not UTF-8 become replacement characters, so a garbled
    /// line is rejected by the prompt instead of ending the session.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&raw).into_owned()))
    }

    /// Shows `prompt` and returns the reply, or an empty string at end of input.
    pub fn ask(&mut self, prompt: &str) -> io::Result<String> {
        writeln!(self.output, "{prompt}")?;
        self.output.flush()?;
        Ok(self.read_line()?.unwrap_or_default())
    }

    pub fn run_selection<T>(&mut self, mut selection: Selection<T>) -> io::Result<Vec<T>>
    where
        T: Clone + PartialEq + Display,
    {
        while !selection.is_done() {
            writeln!(self.output, "{}", selection.prompt())?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                tracing::debug!("input closed during selection");
                break;
            };

            let (next, effect) = selection.step(&line);
            selection = next;
            match effect {
                Effect::Added(option) => writeln!(self.output, "Added {option}.")?,
                Effect::Rejected(message) => writeln!(self.output, "{message}")?,
                Effect::Continue | Effect::Finished => {}
            }
        }

        Ok(selection.finish())
    }

    pub fn choose_filters(
        &mut self,
        catalog: &[ContestMetadata],
        current_year: i32,
    ) -> io::Result<FilterSelection> {
        let (types, kinds) = catalog_options(catalog);
        let types = self.run_selection(Selection::new("type", types))?;
        let kinds = self.run_selection(Selection::new("kind", kinds))?;

        let start = self.ask(&format!(
            "First season start year ({}-{}):",
            years::EARLIEST_SEASON,
            current_year + 1
        ))?;
        let end = self.ask("Last season start year:")?;
        let (range, rejection) = years::resolve_or_default(&start, &end, current_year);
        if let Some(err) = rejection {
            writeln!(
                self.output,
                "Invalid year range ({err}); using {}-{} instead.",
                range.start, range.end
            )?;
        }

        Ok(FilterSelection {
            types,
            kinds,
            season_years: Some(range.season_years()),
        })
    }
}
