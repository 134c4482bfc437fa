//! Feedback and bug-report drafts.
//!
//! Drafts hold field values until `submit`, which validates required
//! fields, hands the payload to a [`FeedbackSubmissionService`] and moves
//! the form to its terminal `Submitted` state. Closing the dialog calls
//! `reset`, which discards the draft.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::models::{FeedbackCategory, ReportedScreen};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Required field is empty: {field}")]
pub struct ValidationError {
    pub field: &'static str,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Submission failed: {0}")]
pub struct SubmissionError(pub String);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Submission(#[from] SubmissionError),

    #[error("Form already submitted")]
    AlreadySubmitted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackPayload {
    pub text: String,
    pub category: Option<FeedbackCategory>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BugReportPayload {
    pub screen: Option<ReportedScreen>,
    pub description: String,
    /// File name of an attached screenshot.
    pub screenshot: Option<String>,
}

/// Acknowledgement returned by the delivery collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub id: Uuid,
    pub submitted_at: NaiveDateTime,
}

impl SubmissionReceipt {
    pub fn now() -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Local::now().naive_local(),
        }
    }
}

/// Delivery of user feedback to whoever handles it.
pub trait FeedbackSubmissionService: Send + Sync {
    fn submit_feedback(&self, payload: &FeedbackPayload)
        -> Result<SubmissionReceipt, SubmissionError>;

    fn submit_bug_report(
        &self,
        payload: &BugReportPayload,
    ) -> Result<SubmissionReceipt, SubmissionError>;
}

/// Records submissions in the log and acknowledges them. No delivery.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingSubmissionService;

impl FeedbackSubmissionService for LoggingSubmissionService {
    fn submit_feedback(
        &self,
        payload: &FeedbackPayload,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        let receipt = SubmissionReceipt::now();
        tracing::info!(
            receipt = %receipt.id,
            category = ?payload.category,
            chars = payload.text.chars().count(),
            "Feedback received"
        );
        Ok(receipt)
    }

    fn submit_bug_report(
        &self,
        payload: &BugReportPayload,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        let receipt = SubmissionReceipt::now();
        tracing::info!(
            receipt = %receipt.id,
            screen = ?payload.screen,
            has_screenshot = payload.screenshot.is_some(),
            "Bug report received"
        );
        Ok(receipt)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FormStatus {
    Draft,
    Submitted(SubmissionReceipt),
}

fn require(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError { field })
    } else {
        Ok(())
    }
}

// ═══════════════════════════════════════════
// Feedback ("Melhore o GAPS")
// ═══════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackForm {
    text: String,
    category: Option<FeedbackCategory>,
    status: FormStatus,
}

impl Default for FeedbackForm {
    fn default() -> Self {
        Self {
            text: String::new(),
            category: None,
            status: FormStatus::Draft,
        }
    }
}

impl FeedbackForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn category(&self) -> Option<FeedbackCategory> {
        self.category
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.status, FormStatus::Submitted(_))
    }

    /// Ignored once submitted.
    pub fn set_text(&mut self, text: impl Into<String>) {
        if !self.is_submitted() {
            self.text = text.into();
        }
    }

    /// Replaces the category; the feedback chips have no deselect.
    pub fn select_category(&mut self, category: FeedbackCategory) {
        if !self.is_submitted() {
            self.category = Some(category);
        }
    }

    pub fn submit(
        &mut self,
        service: &dyn FeedbackSubmissionService,
    ) -> Result<SubmissionReceipt, FormError> {
        if self.is_submitted() {
            return Err(FormError::AlreadySubmitted);
        }
        if let Err(e) = require(&self.text, "text") {
            tracing::warn!(field = e.field, "Feedback rejected");
            return Err(e.into());
        }

        let payload = FeedbackPayload {
            text: self.text.trim().to_string(),
            category: self.category,
        };
        let receipt = service.submit_feedback(&payload)?;
        self.status = FormStatus::Submitted(receipt.clone());
        Ok(receipt)
    }

    /// Discard the draft (dialog closed).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// ═══════════════════════════════════════════
// Bug report ("Reportar Problema Técnico")
// ═══════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BugReportForm {
    screen: Option<ReportedScreen>,
    description: String,
    screenshot: Option<String>,
    status: FormStatus,
}

impl Default for BugReportForm {
    fn default() -> Self {
        Self {
            screen: None,
            description: String::new(),
            screenshot: None,
            status: FormStatus::Draft,
        }
    }
}

impl BugReportForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Option<ReportedScreen> {
        self.screen
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn screenshot(&self) -> Option<&str> {
        self.screenshot.as_deref()
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.status, FormStatus::Submitted(_))
    }

    pub fn select_screen(&mut self, screen: ReportedScreen) {
        if !self.is_submitted() {
            self.screen = Some(screen);
        }
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        if !self.is_submitted() {
            self.description = description.into();
        }
    }

    pub fn attach_screenshot(&mut self, file_name: Option<String>) {
        if !self.is_submitted() {
            self.screenshot = file_name.filter(|name| !name.trim().is_empty());
        }
    }

    pub fn submit(
        &mut self,
        service: &dyn FeedbackSubmissionService,
    ) -> Result<SubmissionReceipt, FormError> {
        if self.is_submitted() {
            return Err(FormError::AlreadySubmitted);
        }
        if let Err(e) = require(&self.description, "description") {
            tracing::warn!(field = e.field, "Bug report rejected");
            return Err(e.into());
        }

        let payload = BugReportPayload {
            screen: self.screen,
            description: self.description.trim().to_string(),
            screenshot: self.screenshot.clone(),
        };
        let receipt = service.submit_bug_report(&payload)?;
        self.status = FormStatus::Submitted(receipt.clone());
        Ok(receipt)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Captures payloads; optionally fails every call.
    #[derive(Default)]
    pub(crate) struct RecordingService {
        pub feedback: Mutex<Vec<FeedbackPayload>>,
        pub bug_reports: Mutex<Vec<BugReportPayload>>,
        pub fail: bool,
    }

    impl FeedbackSubmissionService for RecordingService {
        fn submit_feedback(
            &self,
            payload: &FeedbackPayload,
        ) -> Result<SubmissionReceipt, SubmissionError> {
            if self.fail {
                return Err(SubmissionError("offline".into()));
            }
            self.feedback.lock().unwrap().push(payload.clone());
            Ok(SubmissionReceipt::now())
        }

        fn submit_bug_report(
            &self,
            payload: &BugReportPayload,
        ) -> Result<SubmissionReceipt, SubmissionError> {
            if self.fail {
                return Err(SubmissionError("offline".into()));
            }
            self.bug_reports.lock().unwrap().push(payload.clone());
            Ok(SubmissionReceipt::now())
        }
    }

    #[test]
    fn empty_feedback_is_validation_error() {
        let mut form = FeedbackForm::new();
        form.set_text("   ");
        let err = form.submit(&LoggingSubmissionService).unwrap_err();
        assert_eq!(err, FormError::Validation(ValidationError { field: "text" }));
        assert_eq!(form.status(), &FormStatus::Draft);
    }

    #[test]
    fn feedback_submits_trimmed_payload() {
        let service = RecordingService::default();
        let mut form = FeedbackForm::new();
        form.set_text("  Modo escuro, por favor ");
        form.select_category(FeedbackCategory::ScreenImprovement);

        let receipt = form.submit(&service).unwrap();

        assert_eq!(form.status(), &FormStatus::Submitted(receipt));
        let sent = service.feedback.lock().unwrap();
        assert_eq!(sent[0].text, "Modo escuro, por favor");
        assert_eq!(sent[0].category, Some(FeedbackCategory::ScreenImprovement));
    }

    #[test]
    fn submitted_is_terminal_until_reset() {
        let mut form = FeedbackForm::new();
        form.set_text("Ótimo app");
        form.submit(&LoggingSubmissionService).unwrap();

        form.set_text("changed");
        assert_eq!(form.text(), "Ótimo app");
        assert_eq!(
            form.submit(&LoggingSubmissionService),
            Err(FormError::AlreadySubmitted)
        );

        form.reset();
        assert_eq!(form.text(), "");
        assert_eq!(form.status(), &FormStatus::Draft);
    }

    #[test]
    fn category_selection_replaces() {
        let mut form = FeedbackForm::new();
        form.select_category(FeedbackCategory::NewFeature);
        form.select_category(FeedbackCategory::NewFeature);
        assert_eq!(form.category(), Some(FeedbackCategory::NewFeature));
        form.select_category(FeedbackCategory::Other);
        assert_eq!(form.category(), Some(FeedbackCategory::Other));
    }

    #[test]
    fn delivery_failure_keeps_draft() {
        let service = RecordingService {
            fail: true,
            ..Default::default()
        };
        let mut form = BugReportForm::new();
        form.set_description("Tela travou");
        let err = form.submit(&service).unwrap_err();
        assert_eq!(err, FormError::Submission(SubmissionError("offline".into())));
        assert!(!form.is_submitted());
        assert_eq!(form.description(), "Tela travou");
    }

    #[test]
    fn bug_report_requires_description_only() {
        let service = RecordingService::default();
        let mut form = BugReportForm::new();
        assert!(matches!(
            form.submit(&service),
            Err(FormError::Validation(ValidationError { field: "description" }))
        ));

        form.set_description("Lembrete não tocou");
        form.attach_screenshot(Some(" ".into()));
        form.submit(&service).unwrap();

        let sent = service.bug_reports.lock().unwrap();
        assert_eq!(sent[0].screen, None);
        assert_eq!(sent[0].screenshot, None);
    }

    #[test]
    fn bug_report_carries_screen_and_screenshot() {
        let service = RecordingService::default();
        let mut form = BugReportForm::new();
        form.select_screen(ReportedScreen::Tratamentos);
        form.set_description("Horário errado");
        form.attach_screenshot(Some("print.png".into()));
        form.submit(&service).unwrap();

        let sent = service.bug_reports.lock().unwrap();
        assert_eq!(sent[0].screen, Some(ReportedScreen::Tratamentos));
        assert_eq!(sent[0].screenshot.as_deref(), Some("print.png"));
    }
}
