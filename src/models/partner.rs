use serde::{Deserialize, Serialize};

use super::enums::PartnerCategory;

/// A benefits-club partner card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    pub id: String,
    pub name: String,
    pub category: PartnerCategory,
    pub discount: String,
    pub distance: String,
    pub logo: String,
}

/// Expanded benefit shown under the partner list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenefitDetail {
    pub partner_id: String,
    pub title: String,
    pub headline: String,
    pub logo: String,
    pub how_to_use: Vec<String>,
    pub address: String,
    pub phone: String,
    pub website: String,
}
