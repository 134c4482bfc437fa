use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::TimelineEventType;

/// A single entry on the patient's health history timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub id: String,
    pub date: NaiveDate,
    pub title: String,
    pub detail: TimelineDetail,
}

/// Type-specific payload. Each event type carries only its own fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TimelineDetail {
    Consulta { doctor: String, summary: String },
    Exame { doctor: String, highlights: Vec<String> },
    Receita { doctor: String, medication: String },
}

impl TimelineEvent {
    pub fn event_type(&self) -> TimelineEventType {
        match self.detail {
            TimelineDetail::Consulta { .. } => TimelineEventType::Consulta,
            TimelineDetail::Exame { .. } => TimelineEventType::Exame,
            TimelineDetail::Receita { .. } => TimelineEventType::Receita,
        }
    }

    pub fn doctor(&self) -> &str {
        match &self.detail {
            TimelineDetail::Consulta { doctor, .. }
            | TimelineDetail::Exame { doctor, .. }
            | TimelineDetail::Receita { doctor, .. } => doctor,
        }
    }
}
