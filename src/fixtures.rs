//! In-memory record set used until real data sources exist.
//!
//! All data here is fictional.

use chrono::NaiveDate;

use crate::models::{
    AdherenceRecord, AdherenceStatus, Appointment, BenefitDetail, Conversation,
    ConversationThread, DailyChallenge, Document, DocumentCategory, EducationalContent, FaqItem,
    Game, Medication, MemberCard, Message, MessageSender, Partner, PartnerCategory,
    TimelineDetail, TimelineEvent, UserStats,
};
use crate::repository::{
    BrainGamesRepository, ConversationRepository, DocumentRepository, HomeRepository,
    MedicationRepository, PartnerRepository, TimelineRepository,
};

/// Serves the built-in fixture records through every repository trait.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureStore;

impl FixtureStore {
    pub fn new() -> Self {
        Self
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn partner(
    id: &str,
    name: &str,
    category: PartnerCategory,
    discount: &str,
    distance: &str,
) -> Partner {
    Partner {
        id: id.into(),
        name: name.into(),
        category,
        discount: discount.into(),
        distance: distance.into(),
        logo: category.glyph().into(),
    }
}

fn message(id: &str, sender: MessageSender, text: &str, timestamp: &str) -> Message {
    Message {
        id: id.into(),
        text: text.into(),
        sender,
        timestamp: timestamp.into(),
    }
}

impl PartnerRepository for FixtureStore {
    fn partners(&self) -> Vec<Partner> {
        vec![
            partner(
                "1",
                "Farmácia Saúde Total",
                PartnerCategory::Farmacia,
                "15% em medicamentos",
                "2,5 km",
            ),
            partner(
                "2",
                "Laboratório Exame Fácil",
                PartnerCategory::Laboratorio,
                "20% em todos os exames",
                "1,8 km",
            ),
            partner("3", "Nutri Vida", PartnerCategory::Nutricao, "10% em consultas", "3,2 km"),
            partner(
                "4",
                "Academia Viva Bem",
                PartnerCategory::Fitness,
                "25% na mensalidade",
                "1,2 km",
            ),
            partner(
                "5",
                "Clínica Santa Clara",
                PartnerCategory::Consultas,
                "15% em consultas especializadas",
                "4,5 km",
            ),
        ]
    }

    fn featured_benefit(&self) -> Option<BenefitDetail> {
        Some(BenefitDetail {
            partner_id: "1".into(),
            title: "Farmácia Saúde Total".into(),
            headline: "15% de desconto em todos os medicamentos genéricos".into(),
            logo: PartnerCategory::Farmacia.glyph().into(),
            how_to_use: vec![
                "Apresente o QR Code acima no caixa".into(),
                "Aguarde a validação do desconto".into(),
                "Aproveite sua economia!".into(),
            ],
            address: "Rua das Flores, 123 - Centro".into(),
            phone: "(11) 3456-7890".into(),
            website: "www.farmaciasaudetotal.com.br".into(),
        })
    }
}

impl DocumentRepository for FixtureStore {
    fn documents(&self) -> Vec<Document> {
        let doc = |id: &str, title: &str, day: u32, category: DocumentCategory| Document {
            id: id.into(),
            title: title.into(),
            file_type: "PDF".into(),
            date: date(2024, 9, day),
            doctor: "Dr. Silva".into(),
            category,
        };
        vec![
            doc("1", "Prescrição Médica", 15, DocumentCategory::Prescricao),
            doc("2", "Resultado de Exame - Hemograma", 10, DocumentCategory::Exame),
            doc("3", "Receita Médica Digital", 8, DocumentCategory::Receita),
            doc("4", "Atestado Médico", 5, DocumentCategory::Atestado),
        ]
    }
}

impl MedicationRepository for FixtureStore {
    fn medications(&self) -> Vec<Medication> {
        vec![
            Medication {
                id: "1".into(),
                name: "Losartana".into(),
                dosage: "50mg".into(),
                instructions: "1 comprimido após o café da manhã".into(),
                times: vec!["08:00".into(), "20:00".into()],
                enabled: true,
                doctor: "Dr. Silva".into(),
                prescription_date: date(2024, 9, 15),
            },
            Medication {
                id: "2".into(),
                name: "Metformina".into(),
                dosage: "850mg".into(),
                instructions: "1 comprimido antes do almoço".into(),
                times: vec!["12:00".into()],
                enabled: true,
                doctor: "Dra. Maria Santos".into(),
                prescription_date: date(2024, 8, 20),
            },
            Medication {
                id: "3".into(),
                name: "Sinvastatina".into(),
                dosage: "20mg".into(),
                instructions: "1 comprimido antes de dormir".into(),
                times: vec!["22:00".into()],
                enabled: false,
                doctor: "Dr. Silva".into(),
                prescription_date: date(2024, 9, 15),
            },
        ]
    }

    fn adherence(&self) -> Vec<AdherenceRecord> {
        let complete = [1, 2, 5, 6, 7, 9, 12, 13, 14, 16];
        let partial = [3, 8, 10, 15];
        let missed = [4, 11];

        let mut records: Vec<AdherenceRecord> = complete
            .iter()
            .map(|&day| (day, AdherenceStatus::Complete))
            .chain(partial.iter().map(|&day| (day, AdherenceStatus::Partial)))
            .chain(missed.iter().map(|&day| (day, AdherenceStatus::Missed)))
            .map(|(day, status)| AdherenceRecord { day, status })
            .collect();
        records.sort_by_key(|r| r.day);
        records
    }
}

impl TimelineRepository for FixtureStore {
    fn timeline(&self) -> Vec<TimelineEvent> {
        vec![
            TimelineEvent {
                id: "t1".into(),
                date: date(2024, 9, 15),
                title: "Consulta de rotina - Cardiologia".into(),
                detail: TimelineDetail::Consulta {
                    doctor: "Dr. Silva".into(),
                    summary: "Pressão controlada. Manter Losartana 50mg.".into(),
                },
            },
            TimelineEvent {
                id: "t2".into(),
                date: date(2024, 9, 10),
                title: "Hemograma completo".into(),
                detail: TimelineDetail::Exame {
                    doctor: "Dr. Silva".into(),
                    highlights: vec![
                        "Hemoglobina 13,5 g/dL (normal)".into(),
                        "Leucócitos dentro da referência".into(),
                    ],
                },
            },
            TimelineEvent {
                id: "t3".into(),
                date: date(2024, 9, 8),
                title: "Receita - Losartana".into(),
                detail: TimelineDetail::Receita {
                    doctor: "Dr. Silva".into(),
                    medication: "Losartana 50mg".into(),
                },
            },
            TimelineEvent {
                id: "t4".into(),
                date: date(2024, 8, 20),
                title: "Consulta - Endocrinologia".into(),
                detail: TimelineDetail::Consulta {
                    doctor: "Dra. Maria Santos".into(),
                    summary: "Ajuste de dieta e início de Metformina.".into(),
                },
            },
            TimelineEvent {
                id: "t5".into(),
                date: date(2024, 8, 20),
                title: "Receita - Metformina".into(),
                detail: TimelineDetail::Receita {
                    doctor: "Dra. Maria Santos".into(),
                    medication: "Metformina 850mg".into(),
                },
            },
        ]
    }
}

impl ConversationRepository for FixtureStore {
    fn conversations(&self) -> Vec<Conversation> {
        vec![
            Conversation {
                id: "1".into(),
                doctor_name: "Dr. Carlos Silva".into(),
                doctor_photo: None,
                last_message: "Ok, combinado. Fico no aguardo...".into(),
                timestamp: "Ontem".into(),
                unread: true,
                unread_count: Some(2),
            },
            Conversation {
                id: "2".into(),
                doctor_name: "Dra. Maria Santos".into(),
                doctor_photo: None,
                last_message: "Não esqueça de tomar o medicamento às 8h".into(),
                timestamp: "14:30".into(),
                unread: false,
                unread_count: None,
            },
            Conversation {
                id: "3".into(),
                doctor_name: "Clínica São Lucas".into(),
                doctor_photo: None,
                last_message: "Sua consulta está confirmada para amanhã".into(),
                timestamp: "Ter".into(),
                unread: true,
                unread_count: Some(1),
            },
        ]
    }

    fn thread(&self, conversation_id: &str) -> Option<ConversationThread> {
        use MessageSender::{Doctor, Patient};

        let (doctor_name, messages) = match conversation_id {
            "1" => (
                "Dr. Carlos Silva",
                vec![
                    message("1", Doctor, "Olá! Como você está se sentindo hoje?", "14:20"),
                    message(
                        "2",
                        Patient,
                        "Estou melhor, obrigado! A dor diminuiu bastante.",
                        "14:22",
                    ),
                    message(
                        "3",
                        Doctor,
                        "Ótimo! Continue tomando a medicação como prescrito.",
                        "14:25",
                    ),
                    message("4", Patient, "Ok, combinado. Fico no aguardo...", "Ontem"),
                ],
            ),
            "2" => (
                "Dra. Maria Santos",
                vec![
                    message("1", Doctor, "Bom dia! Lembre-se de tomar o medicamento.", "08:00"),
                    message("2", Doctor, "Não esqueça de tomar o medicamento às 8h", "14:30"),
                ],
            ),
            "3" => (
                "Clínica São Lucas",
                vec![message("1", Doctor, "Sua consulta está confirmada para amanhã", "Ter")],
            ),
            _ => return None,
        };

        Some(ConversationThread {
            id: conversation_id.to_string(),
            doctor_name: doctor_name.into(),
            doctor_photo: None,
            messages,
        })
    }
}

impl HomeRepository for FixtureStore {
    fn next_appointment(&self) -> Option<Appointment> {
        date(2025, 10, 15)
            .and_hms_opt(10, 30, 0)
            .map(|starts_at| Appointment {
                starts_at,
                doctor: "Dr. Silva".into(),
            })
    }

    fn educational_content(&self) -> Vec<EducationalContent> {
        let card = |title: &str, category: &str, duration_minutes: u32, image: &str| {
            EducationalContent {
                title: title.into(),
                category: category.into(),
                duration_minutes,
                image: image.into(),
            }
        };
        vec![
            card("Como medir a pressão arterial", "Hipertensão", 5, "🩺"),
            card("Alimentação saudável para o coração", "Nutrição", 8, "🥗"),
            card("Exercícios leves para idosos", "Atividade Física", 10, "🧘"),
        ]
    }

    fn member_card(&self) -> MemberCard {
        MemberCard {
            holder_name: "Maria Silva".into(),
            member_id: "12345678-9".into(),
            birth_date: "15/03/1985".into(),
            member_since: "Out/2025".into(),
            insurance: "Unimed Regional".into(),
        }
    }

    fn faq(&self) -> Vec<FaqItem> {
        let item = |question: &str, answer: &str| FaqItem {
            question: question.into(),
            answer: answer.into(),
        };
        vec![
            item(
                "Como altero o horário de um lembrete?",
                "Você pode alterar o horário de um lembrete acessando a seção 'Tratamentos', \
                 selecionando o medicamento desejado e tocando em 'Editar Lembrete'.",
            ),
            item(
                "Não estou recebendo as notificações. O que fazer?",
                "Verifique se as notificações estão ativadas nas configurações do seu dispositivo \
                 e também nas configurações do aplicativo em 'Meu Perfil > Notificações'.",
            ),
            item(
                "Como compartilho minha receita com a farmácia?",
                "Acesse 'Documentos e Registros', toque na receita desejada e selecione a opção \
                 'Compartilhar'. Você poderá enviar por WhatsApp, e-mail ou outras formas.",
            ),
        ]
    }

    fn unread_notifications(&self) -> u32 {
        3
    }
}

impl BrainGamesRepository for FixtureStore {
    fn user_stats(&self) -> UserStats {
        UserStats {
            points: 1250,
            level: 5,
            streak: 7,
        }
    }

    fn games(&self) -> Vec<Game> {
        let game = |id: &str, name: &str, icon: &str, description: &str, best: Option<u32>| Game {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
            description: description.into(),
            personal_best: best,
        };
        vec![
            game("1", "Jogo da Memória", "🎴", "Encontre os pares de cartas", Some(45)),
            game("2", "Caminho Lógico", "🧩", "Complete o caminho com lógica", Some(82)),
            game("3", "Quebra-Cabeça", "🧩", "Monte a imagem completa", Some(120)),
            game("4", "Palavras Cruzadas", "📝", "Complete as palavras", Some(67)),
            game("5", "Sequência Numérica", "🔢", "Encontre o padrão dos números", None),
            game("6", "Diferenças", "🔍", "Encontre as diferenças nas imagens", None),
        ]
    }

    fn daily_challenge(&self) -> DailyChallenge {
        DailyChallenge {
            game: "Jogo da Memória".into(),
            description: "Encontre 5 pares em menos de 1 minuto!".into(),
            reward: "+50 pontos".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn partner_ids_are_unique() {
        let partners = FixtureStore.partners();
        let ids: HashSet<_> = partners.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(partners.len(), 5);
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn medication_times_have_no_duplicates() {
        for med in FixtureStore.medications() {
            let unique: HashSet<_> = med.times.iter().collect();
            assert_eq!(unique.len(), med.times.len(), "{}", med.name);
        }
    }

    #[test]
    fn every_listed_conversation_has_a_thread() {
        let store = FixtureStore::new();
        for conversation in store.conversations() {
            let thread = store.thread(&conversation.id).unwrap();
            assert_eq!(thread.doctor_name, conversation.doctor_name);
            let last = thread.messages.last().unwrap();
            assert_eq!(last.text, conversation.last_message);
        }
        assert!(store.thread("99").is_none());
    }

    #[test]
    fn adherence_is_sorted_and_unique_per_day() {
        let records = FixtureStore.adherence();
        let days: Vec<u32> = records.iter().map(|r| r.day).collect();
        let mut sorted = days.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(days, sorted);
        assert_eq!(days.len(), 16);
    }

    #[test]
    fn timeline_is_most_recent_first() {
        let events = FixtureStore.timeline();
        assert!(events.windows(2).all(|w| w[0].date >= w[1].date));
    }
}
