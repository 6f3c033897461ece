//! Error types for the picker core.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PickerError {
    /// A cell activation carried a value that is not a `YYYY-MM-DD` date.
    #[error("invalid calendar cell value: {0:?}")]
    InvalidCellValue(String),

    #[error("month {year}-{month:02} is outside the supported calendar")]
    MonthOutOfRange { year: i32, month: u32 },
}
