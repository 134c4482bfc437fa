//! Mensagens: conversation list and the per-clinician chat screen.

use chrono::{Local, NaiveTime};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{
    initials, Conversation, ConversationThread, Message, MessageSender, TIME_FORMAT,
};
use crate::repository::ConversationRepository;

/// Conversation list row with its avatar fallback.
#[derive(Debug, Clone, Serialize)]
pub struct ConversationRow<'a> {
    #[serde(flatten)]
    pub conversation: &'a Conversation,
    pub initials: String,
}

pub struct MessagesPage {
    conversations: Vec<Conversation>,
}

impl MessagesPage {
    pub fn new(repo: &dyn ConversationRepository) -> Self {
        Self {
            conversations: repo.conversations(),
        }
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn rows(&self) -> Vec<ConversationRow<'_>> {
        self.conversations
            .iter()
            .map(|conversation| ConversationRow {
                conversation,
                initials: initials(&conversation.doctor_name),
            })
            .collect()
    }

    /// Unread messages across every conversation.
    pub fn unread_total(&self) -> u32 {
        self.conversations
            .iter()
            .filter(|c| c.unread)
            .map(|c| c.unread_count.unwrap_or(1))
            .sum()
    }
}

/// `/mensagens/{id}` resolves to one of these.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum ConversationScreen {
    Found(ConversationPage),
    NotFound { conversation_id: String },
}

impl ConversationScreen {
    pub fn open(repo: &dyn ConversationRepository, conversation_id: &str) -> Self {
        match repo.thread(conversation_id) {
            Some(thread) => Self::Found(ConversationPage::new(thread)),
            None => {
                tracing::warn!(conversation_id, "Conversation not found");
                Self::NotFound {
                    conversation_id: conversation_id.to_string(),
                }
            }
        }
    }

    pub fn page(&self) -> Option<&ConversationPage> {
        match self {
            Self::Found(page) => Some(page),
            Self::NotFound { .. } => None,
        }
    }

    pub fn page_mut(&mut self) -> Option<&mut ConversationPage> {
        match self {
            Self::Found(page) => Some(page),
            Self::NotFound { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversationPage {
    thread: ConversationThread,
    draft: String,
}

impl ConversationPage {
    pub fn new(thread: ConversationThread) -> Self {
        Self {
            thread,
            draft: String::new(),
        }
    }

    pub fn thread(&self) -> &ConversationThread {
        &self.thread
    }

    pub fn initials(&self) -> String {
        initials(&self.thread.doctor_name)
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Send the draft stamped with the current local time.
    pub fn send(&mut self) -> Option<&Message> {
        self.send_at(Local::now().time())
    }

    /// Append the trimmed draft as a patient message and clear the draft.
    /// A blank draft sends nothing and is kept as typed.
    pub fn send_at(&mut self, at: NaiveTime) -> Option<&Message> {
        let text = self.draft.trim();
        if text.is_empty() {
            return None;
        }

        let message = Message {
            id: Uuid::new_v4().to_string(),
            text: text.to_string(),
            sender: MessageSender::Patient,
            timestamp: at.format(TIME_FORMAT).to_string(),
        };
        tracing::debug!(conversation = %self.thread.id, "Message sent");
        self.thread.messages.push(message);
        self.draft.clear();
        self.thread.messages.last()
    }
}
