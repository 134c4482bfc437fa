use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub starts_at: NaiveDateTime,
    pub doctor: String,
}

/// Card in the educational content carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationalContent {
    pub title: String,
    pub category: String,
    pub duration_minutes: u32,
    pub image: String,
}

/// Digital member card data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberCard {
    pub holder_name: String,
    pub member_id: String,
    pub birth_date: String,
    pub member_since: String,
    pub insurance: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}
