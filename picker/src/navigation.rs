//! Anchor-month navigation.

use serde::{Deserialize, Serialize};

use crate::calendar::YearMonth;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Prev,
    Next,
}

/// Holds the left-hand month; the right-hand month is always the next one.
///
/// Navigation is unbounded in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    anchor: YearMonth,
}

impl Navigator {
    pub fn new(anchor: YearMonth) -> Self {
        Navigator { anchor }
    }

    pub fn anchor(&self) -> YearMonth {
        self.anchor
    }

    pub fn next(&mut self) {
        self.anchor = self.anchor.succ();
    }

    pub fn prev(&mut self) {
        self.anchor = self.anchor.pred();
    }

    pub fn step(&mut self, direction: Direction) {
        match direction {
            Direction::Prev => self.prev(),
            Direction::Next => self.next(),
        }
        tracing::debug!("Anchor month now {}", self.anchor);
    }

    pub fn visible_months(&self) -> [YearMonth; 2] {
        [self.anchor, self.anchor.succ()]
    }
}
