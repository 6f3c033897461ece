//! Payloads passed from the range picker to the dashboard's collaborators
//! (charts and the best-sellers table).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A completed range selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeSelectedEvent {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl RangeSelectedEvent {
    /// `from=YYYY-MM-DD&to=YYYY-MM-DD`.
    pub fn query(&self) -> String {
        format!(
            "from={}&to={}",
            self.from.format("%Y-%m-%d"),
            self.to.format("%Y-%m-%d")
        )
    }
}

/// Refetch request issued to one collaborator after a range is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub collaborator: String,
    pub url: String,
}

impl RefreshRequest {
    /// Request for a column chart series (`api/dashboard/<series>`).
    pub fn chart(backend_url: &str, series: &str, event: &RangeSelectedEvent) -> Self {
        RefreshRequest {
            collaborator: format!("{series}-chart"),
            url: format!("{backend_url}api/dashboard/{series}?{}", event.query()),
        }
    }

    /// Request for the first `limit` best-selling rows.
    pub fn bestsellers(backend_url: &str, limit: u32, event: &RangeSelectedEvent) -> Self {
        RefreshRequest {
            collaborator: "bestsellers-table".into(),
            url: format!(
                "{backend_url}api/dashboard/bestsellers?_start=1&_end={limit}&{}",
                event.query()
            ),
        }
    }
}
