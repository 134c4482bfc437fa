//! Benefícios: partner directory with search and category chips.

use serde::Serialize;

use crate::filter::{category_chips, CategoryChip, EmptyState, ListController};
use crate::models::{BenefitDetail, Partner, PartnerCategory};
use crate::repository::PartnerRepository;

pub struct BenefitsPage {
    list: ListController<Partner>,
    featured: Option<BenefitDetail>,
}

#[derive(Debug, Serialize)]
pub struct BenefitsView<'a> {
    pub query: &'a str,
    pub chips: Vec<CategoryChip>,
    pub partners: Vec<&'a Partner>,
    pub empty_state: Option<EmptyState>,
    pub featured: Option<&'a BenefitDetail>,
}

impl BenefitsPage {
    pub fn new(repo: &dyn PartnerRepository) -> Self {
        Self {
            list: ListController::new(repo.partners()),
            featured: repo.featured_benefit(),
        }
    }

    pub fn list(&self) -> &ListController<Partner> {
        &self.list
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.list.set_query(query);
    }

    /// Chip click: toggles the category.
    pub fn select_category(&mut self, category: PartnerCategory) {
        self.list.set_category(Some(category.as_str()));
    }

    pub fn chips(&self) -> Vec<CategoryChip> {
        category_chips(
            PartnerCategory::ALL
                .iter()
                .map(|c| (c.as_str(), c.label(), c.glyph())),
            self.list.selected_category(),
        )
    }

    /// The featured card only shows while some partner is listed.
    pub fn featured_benefit(&self) -> Option<&BenefitDetail> {
        if self.list.empty_state().is_some() {
            return None;
        }
        self.featured.as_ref()
    }

    pub fn view(&self) -> BenefitsView<'_> {
        BenefitsView {
            query: self.list.query(),
            chips: self.chips(),
            partners: self.list.filtered().collect(),
            empty_state: self.list.empty_state(),
            featured: self.featured_benefit(),
        }
    }
}
