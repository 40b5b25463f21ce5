use std::collections::BTreeSet;

use chrono::{Datelike, Utc};
use thiserror::Error;

pub const EARLIEST_SEASON: i32 = 2000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum YearRangeError {
    #[error("\"{0}\" is not a year")]
    NotNumeric(String),
    #[error("start year {start} is after end year {end}")]
    Reversed { start: i32, end: i32 },
    #[error("start year {0} is before 2000")]
    TooEarly(i32),
    #[error("end year {end} is after {latest}")]
    TooLate { end: i32, latest: i32 },
}

/// Inclusive range of season start years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
}

impl YearRange {
    pub fn default_for(current_year: i32) -> Self {
        Self {
            start: EARLIEST_SEASON,
            end: current_year,
        }
    }

    pub fn season_years(&self) -> BTreeSet<i32> {
        (self.start..=self.end).collect()
    }
}

pub fn current_year() -> i32 {
    Utc::now().year()
}

fn parse_year(raw: &str) -> Result<i32, YearRangeError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(YearRangeError::NotNumeric(trimmed.to_string()));
    }
    trimmed
        .parse()
        .map_err(|_| YearRangeError::NotNumeric(trimmed.to_string()))
}

pub fn resolve_year_range(
    start: &str,
    end: &str,
    current_year: i32,
) -> Result<YearRange, YearRangeError> {
    let start = parse_year(start)?;
    let end = parse_year(end)?;

    if start > end {
        return Err(YearRangeError::Reversed { start, end });
    }
    if start < EARLIEST_SEASON {
        return Err(YearRangeError::TooEarly(start));
    }
    let latest = current_year + 1;
    if end > latest {
        return Err(YearRangeError::TooLate { end, latest });
    }

    Ok(YearRange { start, end })
}

/// Like [`resolve_year_range`], falling back to `[2000, current_year]`.
/// The rejection, if any, is returned so the caller can tell the user.
pub fn resolve_or_default(
    start: &str,
    end: &str,
    current_year: i32,
) -> (YearRange, Option<YearRangeError>) {
    match resolve_year_range(start, end, current_year) {
        Ok(range) => (range, None),
        Err(err) => (YearRange::default_for(current_year), Some(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_range() {
        let (range, err) = resolve_or_default("2005", "2010", 2026);
        assert!(err.is_none());
        assert_eq!(range, YearRange { start: 2005, end: 2010 });
        let years: Vec<i32> = range.season_years().into_iter().collect();
        assert_eq!(years, vec![2005, 2006, 2007, 2008, 2009, 2010]);
    }

    #[test]
    fn trims_whitespace() {
        let range = resolve_year_range("  2012\n", " 2014 ", 2026).unwrap();
        assert_eq!(range, YearRange { start: 2012, end: 2014 });
    }

    #[test]
    fn non_numeric_falls_back_to_default() {
        let (range, err) = resolve_or_default("abc", "2010", 2026);
        assert_eq!(range, YearRange { start: 2000, end: 2026 });
        assert_eq!(err, Some(YearRangeError::NotNumeric("abc".to_string())));
    }

    #[test]
    fn signs_are_not_numeric() {
        assert!(matches!(
            resolve_year_range("+2005", "2010", 2026),
            Err(YearRangeError::NotNumeric(_))
        ));
    }

    #[test]
    fn rejects_out_of_bounds_ranges() {
        assert_eq!(
            resolve_year_range("2011", "2010", 2026),
            Err(YearRangeError::Reversed { start: 2011, end: 2010 })
        );
        assert_eq!(
            resolve_year_range("1999", "2010", 2026),
            Err(YearRangeError::TooEarly(1999))
        );
        assert_eq!(
            resolve_year_range("2020", "2028", 2026),
            Err(YearRangeError::TooLate { end: 2028, latest: 2027 })
        );
    }

    #[test]
    fn next_year_is_allowed_as_end() {
        let range = resolve_year_range("2000", "2027", 2026).unwrap();
        assert_eq!(range.end, 2027);
    }
}
