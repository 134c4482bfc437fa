//! Screen state, one module per route.
//!
//! Each page is built from its repositories, owns its local edits, and
//! exposes a serialisable `view()` for whatever front end renders it.

pub mod benefits;
pub mod brain_games;
pub mod dashboard;
pub mod documents;
pub mod help;
pub mod messages;
pub mod treatments;

pub use benefits::BenefitsPage;
pub use brain_games::BrainGamesPage;
pub use dashboard::DashboardPage;
pub use documents::DocumentsPage;
pub use help::HelpCenter;
pub use messages::{ConversationPage, ConversationScreen, MessagesPage};
pub use treatments::TreatmentsPage;
