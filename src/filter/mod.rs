//! Search + category filtering shared by every list screen.
//!
//! A page owns a [`ListController`] over its records. The controller keeps
//! the free-text query and the selected category chip; the visible list is
//! derived on every read through [`matches`].

mod controller;
mod predicate;

pub use controller::*;
pub use predicate::*;

use serde::Serialize;

/// A filter chip as rendered above a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryChip {
    pub id: &'static str,
    pub label: &'static str,
    pub glyph: &'static str,
    pub active: bool,
}

/// Build chips for `(id, label, glyph)` options, marking the selected one.
pub fn category_chips<I>(options: I, selected: Option<&str>) -> Vec<CategoryChip>
where
    I: IntoIterator<Item = (&'static str, &'static str, &'static str)>,
{
    options
        .into_iter()
        .map(|(id, label, glyph)| CategoryChip {
            id,
            label,
            glyph,
            active: selected == Some(id),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_selected_chip_is_active() {
        let chips = category_chips(
            [("exame", "Exames", "🔬"), ("receita", "Receitas", "💊")],
            Some("receita"),
        );
        assert!(!chips[0].active);
        assert!(chips[1].active);
    }

    #[test]
    fn unknown_selection_activates_nothing() {
        let chips = category_chips([("exame", "Exames", "🔬")], Some("atestado"));
        assert!(chips.iter().all(|c| !c.active));
    }
}
