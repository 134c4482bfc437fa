//! Domain records shown by the companion screens.
//!
//! Every record is plain data: no identity beyond a string id used by
//! front ends for list keys, no persistence.

pub mod conversation;
pub mod document;
pub mod enums;
pub mod games;
pub mod home;
pub mod medication;
pub mod partner;
pub mod timeline;

pub use conversation::*;
pub use document::*;
pub use enums::*;
pub use games::*;
pub use home::*;
pub use medication::*;
pub use partner::*;
pub use timeline::*;

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },
}

const MONTHS_PT: [&str; 12] = [
    "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
];

/// Short Brazilian Portuguese date, e.g. `15 Set 2024`.
pub fn format_date_pt(date: NaiveDate) -> String {
    format!("{} {} {}", date.day(), MONTHS_PT[date.month0() as usize], date.year())
}

/// Day and month only, e.g. `15 Out`.
pub fn format_day_month_pt(date: NaiveDate) -> String {
    format!("{} {}", date.day(), MONTHS_PT[date.month0() as usize])
}
