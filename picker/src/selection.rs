//! Two-click range selection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::range::{DateRange, SelectedRange};

/// Which endpoint the next click sets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionPhase {
    #[default]
    AwaitingFrom,
    AwaitingTo,
}

/// Holds the in-progress or completed range.
///
/// Every click advances the phase exactly once; no click is rejected.
#[derive(Debug, Clone)]
pub struct SelectionMachine {
    range: DateRange,
    phase: SelectionPhase,
}

impl SelectionMachine {
    pub fn new(initial: DateRange) -> Self {
        SelectionMachine {
            range: initial,
            phase: SelectionPhase::AwaitingFrom,
        }
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn phase(&self) -> SelectionPhase {
        self.phase
    }

    /// Apply a click. Returns the finished range when the click completes it.
    ///
    /// A second click on or before the first one swaps the endpoints.
    pub fn click(&mut self, date: NaiveDate) -> Option<SelectedRange> {
        match (self.phase, self.range.from) {
            (SelectionPhase::AwaitingTo, Some(from)) => {
                let completed = if date > from {
                    SelectedRange::new(from, date)
                } else {
                    SelectedRange::new(date, from)
                };
                self.range = completed.into();
                self.phase = SelectionPhase::AwaitingFrom;
                tracing::debug!("Range completed: {completed}");
                Some(completed)
            }
            _ => {
                self.range = DateRange::starting_at(date);
                self.phase = SelectionPhase::AwaitingTo;
                tracing::debug!("Range start picked: {date}");
                None
            }
        }
    }
}
