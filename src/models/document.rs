use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::DocumentCategory;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    /// File format shown on the card, e.g. `PDF`.
    pub file_type: String,
    pub date: NaiveDate,
    pub doctor: String,
    pub category: DocumentCategory,
}
