use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::enums::AdherenceStatus;

/// Reminder clock format: 24h, zero-padded.
pub const TIME_FORMAT: &str = "%H:%M";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReminderError {
    #[error("Invalid reminder time: {0} (expected HH:MM)")]
    InvalidTime(String),

    #[error("Medication not found: {0}")]
    MedicationNotFound(String),

    #[error("No medication selected")]
    NoMedicationSelected,
}

/// A medication with its daily reminder times.
///
/// `times` is kept in chronological order and never holds the same clock
/// value twice. Use [`Medication::add_time`] rather than pushing directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medication {
    pub id: String,
    pub name: String,
    pub dosage: String,
    pub instructions: String,
    pub times: Vec<String>,
    pub enabled: bool,
    pub doctor: String,
    pub prescription_date: NaiveDate,
}

/// Adherence for one day of the current month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdherenceRecord {
    pub day: u32,
    pub status: AdherenceStatus,
}

/// Parse `H:MM` or `HH:MM` into a clock value.
pub fn parse_reminder_time(raw: &str) -> Result<NaiveTime, ReminderError> {
    NaiveTime::parse_from_str(raw.trim(), TIME_FORMAT)
        .map_err(|_| ReminderError::InvalidTime(raw.to_string()))
}

impl Medication {
    /// Reminder times as clock values. Malformed entries are skipped.
    pub fn reminder_times(&self) -> Vec<NaiveTime> {
        self.times
            .iter()
            .filter_map(|t| parse_reminder_time(t).ok())
            .collect()
    }

    pub fn has_time(&self, time: NaiveTime) -> bool {
        self.reminder_times().contains(&time)
    }

    /// Insert a reminder time. Returns `Ok(false)` when the time is
    /// already scheduled; the list is left untouched in that case.
    pub fn add_time(&mut self, raw: &str) -> Result<bool, ReminderError> {
        let time = parse_reminder_time(raw)?;
        if self.has_time(time) {
            return Ok(false);
        }

        let formatted = time.format(TIME_FORMAT).to_string();
        let position = self
            .times
            .iter()
            .position(|t| parse_reminder_time(t).map(|existing| existing > time).unwrap_or(false))
            .unwrap_or(self.times.len());
        self.times.insert(position, formatted);
        Ok(true)
    }

    /// Remove a reminder time. Returns whether anything was removed.
    pub fn remove_time(&mut self, raw: &str) -> Result<bool, ReminderError> {
        let time = parse_reminder_time(raw)?;
        let before = self.times.len();
        self.times
            .retain(|t| parse_reminder_time(t).map(|existing| existing != time).unwrap_or(true));
        Ok(self.times.len() != before)
    }
}
