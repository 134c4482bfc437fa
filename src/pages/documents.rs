//! Documentos: medical documents with title search and category chips.

use serde::Serialize;

use crate::filter::{category_chips, CategoryChip, EmptyState, ListController};
use crate::models::{format_date_pt, Document, DocumentCategory};
use crate::repository::DocumentRepository;

pub struct DocumentsPage {
    list: ListController<Document>,
}

/// Document card as displayed.
#[derive(Debug, Serialize)]
pub struct DocumentCard<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub file_type: &'a str,
    pub date: String,
    pub doctor: &'a str,
    pub category: DocumentCategory,
    pub category_label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct DocumentsView<'a> {
    pub query: &'a str,
    pub chips: Vec<CategoryChip>,
    pub documents: Vec<DocumentCard<'a>>,
    pub empty_state: Option<EmptyState>,
}

impl DocumentsPage {
    pub fn new(repo: &dyn DocumentRepository) -> Self {
        Self {
            list: ListController::new(repo.documents()),
        }
    }

    pub fn list(&self) -> &ListController<Document> {
        &self.list
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.list.set_query(query);
    }

    pub fn select_category(&mut self, category: DocumentCategory) {
        self.list.set_category(Some(category.as_str()));
    }

    pub fn chips(&self) -> Vec<CategoryChip> {
        category_chips(
            DocumentCategory::ALL
                .iter()
                .map(|c| (c.as_str(), c.label(), c.glyph())),
            self.list.selected_category(),
        )
    }

    pub fn view(&self) -> DocumentsView<'_> {
        DocumentsView {
            query: self.list.query(),
            chips: self.chips(),
            documents: self
                .list
                .filtered()
                .map(|doc| DocumentCard {
                    id: &doc.id,
                    title: &doc.title,
                    file_type: &doc.file_type,
                    date: format_date_pt(doc.date),
                    doctor: &doc.doctor,
                    category: doc.category,
                    category_label: doc.category.label(),
                })
                .collect(),
            empty_state: self.list.empty_state(),
        }
    }
}
