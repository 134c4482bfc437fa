//! Path routing and the bottom navigation bar.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "route", content = "param", rename_all = "kebab-case")]
pub enum Route {
    Dashboard,
    Tratamentos,
    Documentos,
    Beneficios,
    MenteAtiva,
    Mensagens,
    Conversa(String),
    NotFound(String),
}

impl Route {
    /// Resolve a location. Query string, fragment and a trailing slash are
    /// ignored; a path without a leading `/` or anything unrecognised is
    /// `NotFound`.
    pub fn parse(location: &str) -> Self {
        let path = location
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Self::Dashboard;
        }
        let Some(rest) = trimmed.strip_prefix('/') else {
            return Self::NotFound(location.to_string());
        };

        let segments: Vec<&str> = rest.split('/').collect();
        match segments.as_slice() {
            ["tratamentos"] => Self::Tratamentos,
            ["documentos"] => Self::Documentos,
            ["beneficios"] => Self::Beneficios,
            ["mente-ativa"] => Self::MenteAtiva,
            ["mensagens"] => Self::Mensagens,
            ["mensagens", id] if !id.is_empty() => Self::Conversa((*id).to_string()),
            _ => Self::NotFound(location.to_string()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Dashboard => "/".into(),
            Self::Tratamentos => "/tratamentos".into(),
            Self::Documentos => "/documentos".into(),
            Self::Beneficios => "/beneficios".into(),
            Self::MenteAtiva => "/mente-ativa".into(),
            Self::Mensagens => "/mensagens".into(),
            Self::Conversa(id) => format!("/mensagens/{id}"),
            Self::NotFound(path) => path.clone(),
        }
    }
}

/// Bottom navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub icon: &'static str,
    pub path: &'static str,
    pub active: bool,
}

const NAV: [(&str, &str, &str); 5] = [
    ("Início", "home", "/"),
    ("Tratamentos", "pill", "/tratamentos"),
    ("Documentos", "file-text", "/documentos"),
    ("Benefícios", "gift", "/beneficios"),
    ("Mente Ativa", "brain", "/mente-ativa"),
];

/// Navigation bar for `current`. An item is active only on its exact
/// path, so a conversation screen highlights nothing.
pub fn nav_items(current: &Route) -> Vec<NavItem> {
    let current = current.path();
    NAV.iter()
        .map(|&(label, icon, path)| NavItem {
            label,
            icon,
            path,
            active: current == path,
        })
        .collect()
}
