//! Range value types shared by the selection machine and the controller.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Short en-UK date style used on the toggle label.
pub const LABEL_FORMAT: &str = "%d/%m/%Y";

/// A possibly incomplete range.
///
/// `to` is `None` while only the start point has been picked. Once both
/// ends are set, `from <= to` holds for ranges produced by selection
/// (the initial range is taken as given).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        DateRange {
            from: Some(from),
            to: Some(to),
        }
    }

    /// Range with only the start point picked.
    pub fn starting_at(from: NaiveDate) -> Self {
        DateRange {
            from: Some(from),
            to: None,
        }
    }

    /// Both endpoints, if the range is fully bounded.
    pub fn complete(&self) -> Option<SelectedRange> {
        match (self.from, self.to) {
            (Some(from), Some(to)) => Some(SelectedRange { from, to }),
            _ => None,
        }
    }
}

impl From<SelectedRange> for DateRange {
    fn from(r: SelectedRange) -> Self {
        DateRange::new(r.from, r.to)
    }
}

/// A fully bounded range: the payload of a range-selected notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectedRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl SelectedRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        SelectedRange { from, to }
    }

    /// Number of calendar days covered, endpoints included.
    pub fn days(&self) -> i64 {
        (self.to - self.from).num_days() + 1
    }
}

impl fmt::Display for SelectedRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.from.format(LABEL_FORMAT),
            self.to.format(LABEL_FORMAT)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_complete_requires_both_ends() {
        assert_eq!(DateRange::starting_at(d(2024, 1, 5)).complete(), None);
        assert_eq!(
            DateRange::new(d(2024, 1, 3), d(2024, 1, 5)).complete(),
            Some(SelectedRange::new(d(2024, 1, 3), d(2024, 1, 5)))
        );
    }

    #[test]
    fn test_label_uses_short_uk_style() {
        let r = SelectedRange::new(d(2024, 1, 10), d(2024, 1, 20));
        assert_eq!(r.to_string(), "10/01/2024 - 20/01/2024");
        assert_eq!(r.days(), 11);
    }
}
