/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::models::ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err($crate::models::ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use str_enum;

str_enum!(PartnerCategory {
    Farmacia => "farmacia",
    Laboratorio => "laboratorio",
    Nutricao => "nutricao",
    Fitness => "fitness",
    Consultas => "consultas",
});

str_enum!(DocumentCategory {
    Prescricao => "prescricao",
    Exame => "exame",
    Receita => "receita",
    Atestado => "atestado",
});

str_enum!(TimelineEventType {
    Consulta => "consulta",
    Exame => "exame",
    Receita => "receita",
});

str_enum!(MessageSender {
    Patient => "patient",
    Doctor => "doctor",
});

str_enum!(FeedbackCategory {
    NewFeature => "nova-funcionalidade",
    ScreenImprovement => "melhoria-de-tela",
    Other => "outros",
});

str_enum!(ReportedScreen {
    Dashboard => "dashboard",
    Tratamentos => "tratamentos",
    Documentos => "documentos",
    Beneficios => "beneficios",
    MenteAtiva => "mente-ativa",
    Perfil => "perfil",
    Outro => "outro",
});

str_enum!(AdherenceStatus {
    Complete => "complete",
    Partial => "partial",
    Missed => "missed",
});

str_enum!(DoseStatus {
    Now => "now",
    Upcoming => "upcoming",
});

impl PartnerCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Farmacia => "Farmácias",
            Self::Laboratorio => "Laboratórios",
            Self::Nutricao => "Nutrição",
            Self::Fitness => "Fitness",
            Self::Consultas => "Consultas",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Farmacia => "💊",
            Self::Laboratorio => "🔬",
            Self::Nutricao => "🥗",
            Self::Fitness => "🏃",
            Self::Consultas => "👨‍⚕️",
        }
    }
}

impl DocumentCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Prescricao => "Prescrições",
            Self::Exame => "Exames",
            Self::Receita => "Receitas",
            Self::Atestado => "Atestados",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Prescricao => "📋",
            Self::Exame => "🔬",
            Self::Receita => "💊",
            Self::Atestado => "📄",
        }
    }
}

impl TimelineEventType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Consulta => "Consultas",
            Self::Exame => "Exames",
            Self::Receita => "Receitas",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Consulta => "🩺",
            Self::Exame => "🔬",
            Self::Receita => "💊",
        }
    }
}

impl FeedbackCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::NewFeature => "Nova Funcionalidade",
            Self::ScreenImprovement => "Melhoria de Tela",
            Self::Other => "Outros",
        }
    }
}

impl ReportedScreen {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Tratamentos => "Tratamentos",
            Self::Documentos => "Documentos",
            Self::Beneficios => "Benefícios",
            Self::MenteAtiva => "Mente Ativa",
            Self::Perfil => "Meu Perfil",
            Self::Outro => "Outro",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn partner_category_round_trip() {
        for variant in PartnerCategory::ALL {
            assert_eq!(PartnerCategory::from_str(variant.as_str()).unwrap(), *variant);
        }
        assert_eq!(PartnerCategory::ALL.len(), 5);
    }

    #[test]
    fn document_category_strings() {
        assert_eq!(DocumentCategory::Prescricao.as_str(), "prescricao");
        assert_eq!(DocumentCategory::Exame.as_str(), "exame");
        assert_eq!(DocumentCategory::Receita.as_str(), "receita");
        assert_eq!(DocumentCategory::Atestado.as_str(), "atestado");
    }

    #[test]
    fn reported_screen_uses_kebab_case_key() {
        assert_eq!(ReportedScreen::MenteAtiva.as_str(), "mente-ativa");
        assert_eq!(
            ReportedScreen::from_str("mente-ativa").unwrap(),
            ReportedScreen::MenteAtiva
        );
    }

    #[test]
    fn serde_uses_string_keys() {
        let json = serde_json::to_string(&TimelineEventType::Consulta).unwrap();
        assert_eq!(json, "\"consulta\"");
        let parsed: MessageSender = serde_json::from_str("\"doctor\"").unwrap();
        assert_eq!(parsed, MessageSender::Doctor);
    }

    #[test]
    fn invalid_enum_returns_error() {
        let err = PartnerCategory::from_str("padaria").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid enum value for PartnerCategory: padaria"
        );
        assert!(DocumentCategory::from_str("Exame").is_err());
        assert!(TimelineEventType::from_str("").is_err());
    }

    #[test]
    fn labels_are_portuguese() {
        assert_eq!(PartnerCategory::Nutricao.label(), "Nutrição");
        assert_eq!(DocumentCategory::Atestado.glyph(), "📄");
        assert_eq!(FeedbackCategory::ScreenImprovement.label(), "Melhoria de Tela");
    }
}
