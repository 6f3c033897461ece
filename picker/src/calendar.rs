//! Month grid construction.
//!
//! A month grid holds only the days of that month. The weekday column
//! places Monday in column 1 and Sunday in column 7. The first cell
//! carries its column as `grid_start` so a 7-column renderer can offset
//! it without placeholder cells.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::PickerError;
use crate::highlight::Highlight;

/// Fixed Monday-first weekday header.
pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

// ─── YearMonth ───────────────────────────────────────────────────────────────

/// A calendar month. `month` is 1–12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    /// Normalises `month` into 1–12, carrying whole years.
    pub fn new(year: i32, month: u32) -> Self {
        let zero_based = month.saturating_sub(1);
        YearMonth {
            year: year.saturating_add((zero_based / 12) as i32),
            month: zero_based % 12 + 1,
        }
    }

    /// The month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        YearMonth {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Following month; December rolls over into January.
    pub fn succ(self) -> Self {
        if self.month == 12 {
            YearMonth {
                year: self.year.saturating_add(1),
                month: 1,
            }
        } else {
            YearMonth {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Preceding month; January rolls back into December.
    pub fn pred(self) -> Self {
        if self.month == 1 {
            YearMonth {
                year: self.year.saturating_sub(1),
                month: 12,
            }
        } else {
            YearMonth {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn first_day(self) -> Result<NaiveDate, PickerError> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).ok_or(PickerError::MonthOutOfRange {
            year: self.year,
            month: self.month,
        })
    }

    pub fn label(self) -> &'static str {
        match self.month {
            1 => "January", 2 => "February", 3 => "March", 4 => "April",
            5 => "May", 6 => "June", 7 => "July", 8 => "August",
            9 => "September", 10 => "October", 11 => "November", 12 => "December",
            _ => "?",
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.label(), self.year)
    }
}

// ─── Cells ───────────────────────────────────────────────────────────────────

/// One day of a displayed month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    pub date: NaiveDate,
    /// 1 = Monday … 7 = Sunday.
    pub weekday_column: u8,
    /// Column of the first cell of the month; `None` for every other cell.
    pub grid_start: Option<u8>,
    pub highlight: Highlight,
}

impl DayCell {
    /// Value a renderer attaches to the cell so activations can be resolved
    /// back to a date.
    pub fn value(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Monday-first column for `date`.
pub fn weekday_column(date: NaiveDate) -> u8 {
    date.weekday().number_from_monday() as u8
}

/// Days of `month`, in order, with weekday columns and no highlight.
///
/// Month length falls out of walking day by day until the month number
/// changes. A month chrono cannot represent yields an empty grid.
pub fn build_month(month: YearMonth) -> Vec<DayCell> {
    let first = match month.first_day() {
        Ok(d) => d,
        Err(e) => {
            tracing::warn!("Cannot build month grid: {e}");
            return Vec::new();
        }
    };

    let mut cells = Vec::with_capacity(31);
    let mut day = Some(first);
    while let Some(date) = day.filter(|d| d.month() == month.month) {
        let column = weekday_column(date);
        cells.push(DayCell {
            date,
            weekday_column: column,
            grid_start: (date == first).then_some(column),
            highlight: Highlight::NONE,
        });
        day = date.succ_opt();
    }
    cells
}

/// Resolve a cell value (`YYYY-MM-DD`) back into a date.
pub fn resolve_cell(value: &str) -> Result<NaiveDate, PickerError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| PickerError::InvalidCellValue(value.to_string()))
}

// ─── tests ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_month_lengths() {
        let cases = [
            (2024, 1, 31),
            (2024, 2, 29),
            (2023, 2, 28),
            (1900, 2, 28),
            (2000, 2, 29),
            (2024, 4, 30),
            (2024, 12, 31),
        ];
        for (year, month, len) in cases {
            let cells = build_month(YearMonth::new(year, month));
            assert_eq!(cells.len(), len, "{year}-{month}");
            assert_eq!(cells.first().unwrap().date, d(year, month, 1));
            assert_eq!(cells.last().unwrap().date, d(year, month, len as u32));
        }
    }

    #[test]
    fn test_every_month_of_a_decade_stays_in_month() {
        let mut ym = YearMonth::new(2020, 1);
        for _ in 0..120 {
            let cells = build_month(ym);
            let next_first = ym.succ().first_day().unwrap();
            let expected = (next_first - ym.first_day().unwrap()).num_days() as usize;
            assert_eq!(cells.len(), expected);
            assert!(cells.iter().all(|c| YearMonth::of(c.date) == ym));
            assert!(cells.windows(2).all(|w| w[0].date.succ_opt() == Some(w[1].date)));
            ym = ym.succ();
        }
    }

    #[test]
    fn test_weekday_columns_are_monday_first() {
        // 2024-01-01 is a Monday, 2024-01-07 a Sunday.
        assert_eq!(weekday_column(d(2024, 1, 1)), 1);
        assert_eq!(weekday_column(d(2024, 1, 6)), 6);
        assert_eq!(weekday_column(d(2024, 1, 7)), 7);

        for cell in build_month(YearMonth::new(2024, 9)) {
            match cell.date.weekday() {
                chrono::Weekday::Mon => assert_eq!(cell.weekday_column, 1),
                chrono::Weekday::Sun => assert_eq!(cell.weekday_column, 7),
                _ => assert!((2..=6).contains(&cell.weekday_column)),
            }
        }
    }

    #[test]
    fn test_grid_start_only_on_first_cell() {
        // September 2024 starts on a Sunday.
        let cells = build_month(YearMonth::new(2024, 9));
        assert_eq!(cells[0].grid_start, Some(7));
        assert!(cells[1..].iter().all(|c| c.grid_start.is_none()));

        // February 2021 starts on a Monday.
        let cells = build_month(YearMonth::new(2021, 2));
        assert_eq!(cells[0].grid_start, Some(1));
    }

    #[test]
    fn test_year_month_rollover() {
        assert_eq!(YearMonth::new(2024, 12).succ(), YearMonth::new(2025, 1));
        assert_eq!(YearMonth::new(2024, 1).pred(), YearMonth::new(2023, 12));
        assert_eq!(YearMonth::new(2024, 13), YearMonth::new(2025, 1));
        assert_eq!(YearMonth::new(2024, 3).to_string(), "March 2024");
    }

    #[test]
    fn test_resolve_cell() {
        assert_eq!(resolve_cell("2024-01-05"), Ok(d(2024, 1, 5)));
        assert_eq!(
            resolve_cell("2024-02-30"),
            Err(PickerError::InvalidCellValue("2024-02-30".into()))
        );
        assert!(resolve_cell("").is_err());
    }

    #[test]
    fn test_cell_value_round_trips_through_resolver() {
        let cell = build_month(YearMonth::new(2024, 1))[4];
        assert_eq!(cell.value(), "2024-01-05");
        assert_eq!(resolve_cell(&cell.value()), Ok(cell.date));
    }
}
