//! Collaborator interfaces the screens read their records from.
//!
//! Screens receive these as trait objects; the in-memory
//! [`FixtureStore`](crate::fixtures::FixtureStore) implements all of them.

use crate::models::{
    AdherenceRecord, Appointment, BenefitDetail, Conversation, ConversationThread,
    DailyChallenge, Document, EducationalContent, FaqItem, Game, Medication, MemberCard,
    Partner, TimelineEvent, UserStats,
};

pub trait PartnerRepository: Send + Sync {
    fn partners(&self) -> Vec<Partner>;

    /// Benefit highlighted under the partner list.
    fn featured_benefit(&self) -> Option<BenefitDetail>;
}

pub trait DocumentRepository: Send + Sync {
    fn documents(&self) -> Vec<Document>;
}

pub trait MedicationRepository: Send + Sync {
    fn medications(&self) -> Vec<Medication>;

    /// Per-day adherence for the current month. Days without a record
    /// have no status.
    fn adherence(&self) -> Vec<AdherenceRecord>;
}

pub trait TimelineRepository: Send + Sync {
    /// Health history, most recent first.
    fn timeline(&self) -> Vec<TimelineEvent>;
}

pub trait ConversationRepository: Send + Sync {
    fn conversations(&self) -> Vec<Conversation>;

    /// `None` when no conversation has this id.
    fn thread(&self, conversation_id: &str) -> Option<ConversationThread>;
}

pub trait HomeRepository: Send + Sync {
    fn next_appointment(&self) -> Option<Appointment>;
    fn educational_content(&self) -> Vec<EducationalContent>;
    fn member_card(&self) -> MemberCard;
    fn faq(&self) -> Vec<FaqItem>;
    fn unread_notifications(&self) -> u32;
}

pub trait BrainGamesRepository: Send + Sync {
    fn user_stats(&self) -> UserStats;
    fn games(&self) -> Vec<Game>;
    fn daily_challenge(&self) -> DailyChallenge;
}
