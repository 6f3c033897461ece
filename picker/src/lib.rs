//! Dash Picker – headless two-month date-range picker.
//!
//! The crate produces plain data (month grids with highlight tags, the
//! current range, open/closed state) and leaves markup to a renderer.

pub mod calendar;
pub mod controller;
pub mod error;
pub mod highlight;
pub mod navigation;
pub mod range;
pub mod render;
pub mod selection;
pub mod visibility;

pub use controller::{RangePicker, SelectOutcome};
pub use error::PickerError;
pub use range::{DateRange, SelectedRange};
