pub mod card;
pub mod config;
pub mod disclosure;
pub mod filter;
pub mod fixtures;
pub mod forms;
pub mod models;
pub mod pages;
pub mod repository;
pub mod routes;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::card::{CardError, DigitalCard};
use crate::config::CompanionConfig;
use crate::disclosure::{DisclosureController, OverlayId};
use crate::fixtures::FixtureStore;
use crate::forms::{FeedbackSubmissionService, LoggingSubmissionService};
use crate::pages::{
    BenefitsPage, BrainGamesPage, ConversationScreen, DashboardPage, DocumentsPage, HelpCenter,
    MessagesPage, TreatmentsPage,
};
use crate::repository::{
    BrainGamesRepository, ConversationRepository, DocumentRepository, HomeRepository,
    MedicationRepository, PartnerRepository, TimelineRepository,
};
use crate::routes::{nav_items, NavItem, Route};

/// Install the global `fmt` subscriber. `RUST_LOG` overrides the default
/// filter. A second call is a no-op.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init();
}

// ═══════════════════════════════════════════════════════════
// Collaborators
// ═══════════════════════════════════════════════════════════

/// Record sources for every screen.
#[derive(Clone)]
pub struct Repositories {
    pub partners: Arc<dyn PartnerRepository>,
    pub documents: Arc<dyn DocumentRepository>,
    pub medications: Arc<dyn MedicationRepository>,
    pub timeline: Arc<dyn TimelineRepository>,
    pub conversations: Arc<dyn ConversationRepository>,
    pub home: Arc<dyn HomeRepository>,
    pub brain_games: Arc<dyn BrainGamesRepository>,
}

impl Repositories {
    /// Every source backed by the built-in fixture data.
    pub fn fixtures() -> Self {
        let store = Arc::new(FixtureStore::new());
        Self {
            partners: store.clone(),
            documents: store.clone(),
            medications: store.clone(),
            timeline: store.clone(),
            conversations: store.clone(),
            home: store.clone(),
            brain_games: store,
        }
    }
}

// ═══════════════════════════════════════════════════════════
// Companion app root
// ═══════════════════════════════════════════════════════════

/// State of the screen the current route shows.
pub enum Screen {
    Dashboard(DashboardPage),
    Treatments(TreatmentsPage),
    Documents(DocumentsPage),
    Benefits(BenefitsPage),
    BrainGames(BrainGamesPage),
    Messages(MessagesPage),
    Conversation(ConversationScreen),
    NotFound { path: String },
}

/// Root of the headless app: current route and screen, overlay state and
/// the global help center and digital card.
pub struct Companion {
    config: CompanionConfig,
    repos: Repositories,
    route: Route,
    screen: Screen,
    overlays: DisclosureController,
    help: HelpCenter,
    card: DigitalCard,
}

impl Companion {
    pub fn new(
        config: CompanionConfig,
        repos: Repositories,
        service: Arc<dyn FeedbackSubmissionService>,
    ) -> Self {
        tracing::info!("{} companion starting v{}", config::APP_NAME, config::APP_VERSION);

        let help = HelpCenter::new(repos.home.as_ref(), service);
        let card = DigitalCard::new(repos.home.member_card(), config.qr_refresh_interval());
        let route = Route::Dashboard;
        let screen = Self::build_screen(&config, &repos, &route);
        Self {
            config,
            repos,
            route,
            screen,
            overlays: DisclosureController::new(),
            help,
            card,
        }
    }

    /// Fixture data with a logging-only feedback service.
    pub fn with_fixtures(config: CompanionConfig) -> Self {
        Self::new(config, Repositories::fixtures(), Arc::new(LoggingSubmissionService))
    }

    pub fn config(&self) -> &CompanionConfig {
        &self.config
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Run a screen command that may open or close screen-level panels.
    /// Global widgets are resynced afterwards.
    pub fn with_screen<R>(
        &mut self,
        command: impl FnOnce(&mut Screen, &mut DisclosureController) -> R,
    ) -> R {
        let result = command(&mut self.screen, &mut self.overlays);
        self.sync_globals();
        result
    }

    pub fn nav_items(&self) -> Vec<NavItem> {
        nav_items(&self.route)
    }

    /// Go to `path`. The destination is rebuilt from the repositories, so
    /// local edits on it are gone, and every overlay closes.
    pub fn navigate(&mut self, path: &str) -> &Screen {
        let route = Route::parse(path);
        tracing::debug!(from = %self.route.path(), to = %route.path(), "Navigate");

        self.screen = Self::build_screen(&self.config, &self.repos, &route);
        self.route = route;
        self.overlays.close_all();
        self.sync_globals();
        &self.screen
    }

    fn build_screen(config: &CompanionConfig, repos: &Repositories, route: &Route) -> Screen {
        match route {
            Route::Dashboard => Screen::Dashboard(DashboardPage::new(
                config,
                repos.home.as_ref(),
                repos.medications.as_ref(),
            )),
            Route::Tratamentos => Screen::Treatments(TreatmentsPage::new(
                repos.medications.as_ref(),
                repos.timeline.as_ref(),
            )),
            Route::Documentos => Screen::Documents(DocumentsPage::new(repos.documents.as_ref())),
            Route::Beneficios => Screen::Benefits(BenefitsPage::new(repos.partners.as_ref())),
            Route::MenteAtiva => {
                Screen::BrainGames(BrainGamesPage::new(repos.brain_games.as_ref()))
            }
            Route::Mensagens => Screen::Messages(MessagesPage::new(repos.conversations.as_ref())),
            Route::Conversa(id) => {
                Screen::Conversation(ConversationScreen::open(repos.conversations.as_ref(), id))
            }
            Route::NotFound(path) => {
                tracing::warn!(path = %path, "No route for path");
                Screen::NotFound { path: path.clone() }
            }
        }
    }

    // ── Overlays ────────────────────────────────────────────

    pub fn overlays(&self) -> &DisclosureController {
        &self.overlays
    }

    pub fn is_open(&self, id: OverlayId) -> bool {
        self.overlays.is_open(id)
    }

    pub fn open_profile_menu(&mut self) {
        self.overlays.open(OverlayId::ProfileMenu);
        self.sync_globals();
    }

    /// "Ver perfil completo": the menu gives way to the full profile in a
    /// single step.
    pub fn show_full_profile(&mut self) {
        self.overlays
            .transition(OverlayId::ProfileMenu, OverlayId::FullProfile);
        self.sync_globals();
    }

    pub fn close_overlay(&mut self, id: OverlayId) {
        self.overlays.close(id);
        self.sync_globals();
    }

    /// Keep the global widgets in line with what is visible: the card only
    /// refreshes while shown, help drafts die with their dialog.
    fn sync_globals(&mut self) {
        if !self.overlays.is_open(OverlayId::DigitalCard) {
            self.card.stop();
        }
        self.help.discard_if_closed(&self.overlays);
    }

    // ── Help center ─────────────────────────────────────────

    pub fn help(&self) -> &HelpCenter {
        &self.help
    }

    /// Run a help center command. Opening the help dialog or its sheet
    /// closes account-group siblings, so global widgets are resynced
    /// afterwards.
    pub fn with_help<R>(
        &mut self,
        command: impl FnOnce(&mut HelpCenter, &mut DisclosureController) -> R,
    ) -> R {
        let result = command(&mut self.help, &mut self.overlays);
        self.sync_globals();
        result
    }

    pub fn open_help(&mut self) {
        self.help.open(&mut self.overlays);
        self.sync_globals();
    }

    pub fn close_help(&mut self) {
        self.help.close(&mut self.overlays);
        self.sync_globals();
    }

    // ── Digital card ────────────────────────────────────────

    pub fn card(&self) -> &DigitalCard {
        &self.card
    }

    /// Show the member card and start rotating its QR code. Needs a tokio
    /// runtime; without one the card stays closed.
    pub fn open_digital_card(&mut self) -> Result<(), CardError> {
        self.card.start()?;
        self.overlays.open(OverlayId::DigitalCard);
        self.sync_globals();
        Ok(())
    }

    pub fn close_digital_card(&mut self) {
        self.close_overlay(OverlayId::DigitalCard);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;

    use crate::disclosure::DisclosureSnapshot;
    use crate::models::PartnerCategory;

    fn app() -> Companion {
        Companion::with_fixtures(CompanionConfig::default())
    }

    #[test]
    fn starts_on_dashboard() {
        let app = app();
        assert_eq!(app.route(), &Route::Dashboard);
        assert!(matches!(app.screen(), Screen::Dashboard(_)));
        assert!(app.nav_items()[0].active);
    }

    #[test]
    fn navigate_resolves_every_route() {
        let mut app = app();
        assert!(matches!(app.navigate("/tratamentos"), Screen::Treatments(_)));
        assert!(matches!(app.navigate("/documentos"), Screen::Documents(_)));
        assert!(matches!(app.navigate("/beneficios"), Screen::Benefits(_)));
        assert!(matches!(app.navigate("/mente-ativa"), Screen::BrainGames(_)));
        assert!(matches!(app.navigate("/mensagens"), Screen::Messages(_)));
        assert!(matches!(
            app.navigate("/mensagens/1"),
            Screen::Conversation(ConversationScreen::Found(_))
        ));
        assert!(matches!(
            app.navigate("/mensagens/99"),
            Screen::Conversation(ConversationScreen::NotFound { .. })
        ));
        assert!(matches!(app.navigate("/nada"), Screen::NotFound { path } if path == "/nada"));
    }

    #[test]
    fn navigation_discards_page_state() {
        let mut app = app();
        app.navigate("/beneficios");
        app.with_screen(|screen, _| {
            if let Screen::Benefits(page) = screen {
                page.select_category(PartnerCategory::Fitness);
                assert_eq!(page.view().partners.len(), 1);
            }
        });

        app.navigate("/");
        app.navigate("/beneficios");
        let Screen::Benefits(page) = app.screen() else {
            panic!("expected benefits screen");
        };
        assert_eq!(page.view().partners.len(), 5);
    }

    #[test]
    fn full_profile_replaces_menu_in_one_notification() {
        let mut app = app();
        app.open_profile_menu();

        let seen: Rc<Cell<usize>> = Rc::default();
        let last: Rc<Cell<Option<bool>>> = Rc::default();
        {
            let seen = seen.clone();
            let last = last.clone();
            app.overlays.subscribe(move |snap: &DisclosureSnapshot| {
                seen.set(seen.get() + 1);
                last.set(Some(
                    snap.is_open(OverlayId::FullProfile) && !snap.is_open(OverlayId::ProfileMenu),
                ));
            });
        }

        app.show_full_profile();
        assert_eq!(seen.get(), 1);
        assert_eq!(last.get(), Some(true));
    }

    #[test]
    fn navigation_closes_overlays_and_help_drafts() {
        let mut app = app();
        app.open_help();
        app.with_help(|help, overlays| {
            help.feedback_mut().set_text("sugestão");
            help.open_bug_report(overlays);
        });
        assert!(app.is_open(OverlayId::BugReport));

        app.navigate("/documentos");
        assert!(!app.is_open(OverlayId::Help));
        assert!(!app.is_open(OverlayId::BugReport));
        assert_eq!(app.help().feedback().text(), "");
    }

    #[test]
    fn profile_menu_closes_help() {
        let mut app = app();
        app.open_help();
        app.with_help(|help, _| help.feedback_mut().set_text("rascunho"));
        app.open_profile_menu();
        assert!(!app.is_open(OverlayId::Help));
        assert_eq!(app.help().feedback().text(), "");
    }

    #[test]
    fn digital_card_needs_runtime() {
        let mut app = app();
        assert_eq!(app.open_digital_card(), Err(CardError::NoRuntime));
        assert!(!app.is_open(OverlayId::DigitalCard));
    }

    #[tokio::test(start_paused = true)]
    async fn digital_card_refreshes_only_while_open() {
        let mut app = app();
        app.open_digital_card().unwrap();
        assert!(app.is_open(OverlayId::DigitalCard));

        tokio::time::sleep(Duration::from_secs(31)).await;
        assert_eq!(app.card().rotation(), 1);

        app.navigate("/tratamentos");
        assert!(!app.card().is_refreshing());
        tokio::time::sleep(Duration::from_secs(90)).await;
        assert_eq!(app.card().rotation(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn bug_report_sheet_hides_card_and_stops_refresh() {
        let mut app = app();
        app.open_digital_card().unwrap();
        assert!(app.card().is_refreshing());

        app.with_help(|help, overlays| help.open_bug_report(overlays));
        assert!(app.is_open(OverlayId::BugReport));
        assert!(!app.is_open(OverlayId::DigitalCard));
        assert!(!app.card().is_refreshing());

        tokio::time::sleep(Duration::from_secs(95)).await;
        assert_eq!(app.card().rotation(), 0);
    }

    #[test]
    fn treatments_panel_keeps_help_drafts_in_sync() {
        let mut app = app();
        app.navigate("/tratamentos");
        app.open_help();
        app.with_help(|help, _| help.feedback_mut().set_text("rascunho"));

        app.with_screen(|screen, overlays| {
            if let Screen::Treatments(page) = screen {
                page.show_detail("1", overlays).unwrap();
            }
        });
        assert!(app.is_open(OverlayId::MedicationDetail));
        assert!(app.is_open(OverlayId::Help));
        assert_eq!(app.help().feedback().text(), "rascunho");

        app.with_screen(|_, overlays| overlays.close(OverlayId::Help));
        assert_eq!(app.help().feedback().text(), "");
    }
}
