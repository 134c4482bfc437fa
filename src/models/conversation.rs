use serde::{Deserialize, Serialize};

use super::enums::MessageSender;

/// Row in the conversation list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub doctor_name: String,
    pub doctor_photo: Option<String>,
    pub last_message: String,
    pub timestamp: String,
    pub unread: bool,
    pub unread_count: Option<u32>,
}

/// Full message history with one clinician.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationThread {
    pub id: String,
    pub doctor_name: String,
    pub doctor_photo: Option<String>,
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub text: String,
    pub sender: MessageSender,
    /// Display stamp: a clock time (`14:20`) or a relative day (`Ontem`).
    pub timestamp: String,
}

/// Avatar fallback: first letter of each word, uppercased, at most two.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(initials("Dr. Carlos Silva"), "DC");
        assert_eq!(initials("clínica são lucas"), "CS");
    }

    #[test]
    fn initials_of_single_word_and_empty() {
        assert_eq!(initials("Maria"), "M");
        assert_eq!(initials("   "), "");
    }
}
