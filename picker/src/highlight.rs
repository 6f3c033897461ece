//! Classification of a calendar day against the current range.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::range::DateRange;

/// A single highlight tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    From,
    To,
    Between,
}

impl Tag {
    /// Presentation class name used by HTML renderers.
    pub fn class_name(self) -> &'static str {
        match self {
            Tag::From => "rangepicker__selected-from",
            Tag::To => "rangepicker__selected-to",
            Tag::Between => "rangepicker__selected-between",
        }
    }
}

/// The set of tags carried by one cell.
///
/// `from` and `to` may both be set on a single-day range. `between` never
/// coexists with an endpoint tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Highlight {
    pub from: bool,
    pub to: bool,
    pub between: bool,
}

impl Highlight {
    pub const NONE: Highlight = Highlight {
        from: false,
        to: false,
        between: false,
    };

    pub fn is_none(&self) -> bool {
        *self == Highlight::NONE
    }

    pub fn contains(&self, tag: Tag) -> bool {
        match tag {
            Tag::From => self.from,
            Tag::To => self.to,
            Tag::Between => self.between,
        }
    }

    pub fn tags(&self) -> Vec<Tag> {
        [Tag::From, Tag::To, Tag::Between]
            .into_iter()
            .filter(|t| self.contains(*t))
            .collect()
    }
}

/// Tag `date` against `range`.
pub fn classify(range: &DateRange, date: NaiveDate) -> Highlight {
    let from = range.from == Some(date);
    let to = range.to == Some(date);
    let between = match (range.from, range.to) {
        (Some(start), Some(end)) => start < date && date < end,
        _ => false,
    };
    Highlight { from, to, between }
}
