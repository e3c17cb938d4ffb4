// src/core/date.rs
use std::fmt;

use chrono::{Local, NaiveDate};

use crate::config::consts::DATE_FORMAT;
use crate::error::{AttendanceError, Result};

/// A validated attendance date. Displays as `MM-DD-YYYY`, which is also the
/// stem of the record file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AttendanceDate(NaiveDate);

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

impl AttendanceDate {
    /// Parse against the local calendar day.
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_on(text, today())
    }

    /// Parse `MM-DD-YYYY` and reject anything after `today`.
    ///
    /// The shape check is strict (zero-padded, dashes only) so the file name
    /// always equals what the user would type back in "Modify" mode.
    pub fn parse_on(text: &str, today: NaiveDate) -> Result<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AttendanceError::EmptyDate);
        }
        if !has_date_shape(text) {
            return Err(AttendanceError::InvalidDate(s!(text)));
        }
        let date = NaiveDate::parse_from_str(text, DATE_FORMAT)
            .map_err(|_| AttendanceError::InvalidDate(s!(text)))?;
        if date > today {
            return Err(AttendanceError::FutureDate(s!(text)));
        }
        Ok(Self(date))
    }

    pub fn naive(&self) -> NaiveDate { self.0 }

    /// File stem, e.g. `01-02-2025`.
    pub fn stem(&self) -> String {
        self.0.format(DATE_FORMAT).to_string()
    }
}

impl fmt::Display for AttendanceDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

/// True for a saved-record file stem: `MM-DD-YYYY` naming a real day.
/// Unlike `parse`, future dates pass.
pub fn is_record_stem(s: &str) -> bool {
    has_date_shape(s) && NaiveDate::parse_from_str(s, DATE_FORMAT).is_ok()
}

/// `DD-DD-DDDD`
fn has_date_shape(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 10
        && b[2] == b'-'
        && b[5] == b'-'
        && b.iter()
            .enumerate()
            .all(|(i, c)| i == 2 || i == 5 || c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn accepts_past_and_today() {
        let today = day(2025, 3, 10);
        let d = AttendanceDate::parse_on("01-02-2025", today).unwrap();
        assert_eq!(d.naive(), day(2025, 1, 2));
        assert_eq!(d.stem(), "01-02-2025");
        assert!(AttendanceDate::parse_on("03-10-2025", today).is_ok());
    }

    #[test]
    fn rejects_bad_shapes_and_days() {
        let today = day(2025, 3, 10);
        for bad in ["13-01-2025", "1-2-2025", "2025-01-02", "02-30-2024", "01/02/2025", "ab-cd-efgh"] {
            let err = AttendanceDate::parse_on(bad, today).unwrap_err();
            assert!(matches!(err, AttendanceError::InvalidDate(_)), "{bad}: {err:?}");
        }
    }

    #[test]
    fn rejects_empty_and_future() {
        let today = day(2025, 3, 10);
        assert!(matches!(
            AttendanceDate::parse_on("  ", today),
            Err(AttendanceError::EmptyDate)
        ));
        assert!(matches!(
            AttendanceDate::parse_on("03-11-2025", today),
            Err(AttendanceError::FutureDate(_))
        ));
    }
}
