use crate::models::{Document, Partner, TimelineEvent};

/// A record that can be searched by text and narrowed by category.
pub trait Filterable {
    /// Text fields the free-text query is matched against.
    fn search_fields(&self) -> Vec<&str>;

    /// Closed-set category key, compared exactly against the selection.
    fn category_key(&self) -> &str;
}

/// Decide whether `record` is visible for `query` and `category`.
///
/// Text: case-insensitive substring of any search field; an empty query
/// matches everything. Category: `None` passes all, otherwise exact key
/// equality, so an unknown key matches nothing.
pub fn matches<T: Filterable + ?Sized>(record: &T, query: &str, category: Option<&str>) -> bool {
    matches_text(record, query) && matches_category(record, category)
}

pub fn matches_text<T: Filterable + ?Sized>(record: &T, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

pub fn matches_category<T: Filterable + ?Sized>(record: &T, category: Option<&str>) -> bool {
    match category {
        None => true,
        Some(selected) => record.category_key() == selected,
    }
}

impl Filterable for Partner {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.discount.as_str()]
    }

    fn category_key(&self) -> &str {
        self.category.as_str()
    }
}

impl Filterable for Document {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str()]
    }

    fn category_key(&self) -> &str {
        self.category.as_str()
    }
}

impl Filterable for TimelineEvent {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.doctor()]
    }

    fn category_key(&self) -> &str {
        self.event_type().as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DocumentCategory, PartnerCategory};
    use chrono::NaiveDate;

    fn partner(name: &str, discount: &str, category: PartnerCategory) -> Partner {
        Partner {
            id: "p".into(),
            name: name.into(),
            category,
            discount: discount.into(),
            distance: "1 km".into(),
            logo: "💊".into(),
        }
    }

    fn document(title: &str, category: DocumentCategory) -> Document {
        Document {
            id: "d".into(),
            title: title.into(),
            file_type: "PDF".into(),
            date: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
            doctor: "Dr. Silva".into(),
            category,
        }
    }

    #[test]
    fn empty_query_and_no_category_match() {
        let p = partner("Nutri Vida", "10% em consultas", PartnerCategory::Nutricao);
        assert!(matches(&p, "", None));
    }

    #[test]
    fn text_match_is_case_insensitive() {
        let p = partner("Farmácia Saúde Total", "15% em medicamentos", PartnerCategory::Farmacia);
        assert!(matches(&p, "SAÚDE", None));
        assert!(matches(&p, "medicamentos", None));
        assert!(!matches(&p, "academia", None));
    }

    #[test]
    fn partner_discount_is_searched_but_document_doctor_is_not() {
        let d = document("Atestado Médico", DocumentCategory::Atestado);
        assert!(!matches(&d, "silva", None));
        assert!(matches(&d, "atestado", None));
    }

    #[test]
    fn category_is_exact_and_combined_with_text() {
        let d = document("Resultado de Exame - Hemograma", DocumentCategory::Exame);
        assert!(matches(&d, "", Some("exame")));
        assert!(!matches(&d, "", Some("exam")));
        assert!(!matches(&d, "hemograma", Some("receita")));
        assert!(matches(&d, "hemograma", Some("exame")));
    }

    #[test]
    fn unknown_category_matches_nothing() {
        let p = partner("Academia Viva Bem", "25% na mensalidade", PartnerCategory::Fitness);
        assert!(!matches(&p, "", Some("padaria")));
    }
}
