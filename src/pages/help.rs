//! Help center behind the floating help button: FAQ accordion, feedback
//! form and the bug-report sheet stacked on top of the dialog.

use std::sync::Arc;

use serde::Serialize;

use crate::disclosure::{DisclosureController, OverlayId, Toggle};
use crate::forms::{
    BugReportForm, FeedbackForm, FeedbackSubmissionService, FormError, SubmissionReceipt,
};
use crate::models::FaqItem;
use crate::repository::HomeRepository;

#[derive(Debug, Serialize)]
pub struct FaqEntry<'a> {
    #[serde(flatten)]
    pub item: &'a FaqItem,
    pub expanded: bool,
}

pub struct HelpCenter {
    faq: Vec<FaqItem>,
    expanded: Toggle<usize>,
    feedback: FeedbackForm,
    bug_report: BugReportForm,
    service: Arc<dyn FeedbackSubmissionService>,
}

impl HelpCenter {
    pub fn new(home: &dyn HomeRepository, service: Arc<dyn FeedbackSubmissionService>) -> Self {
        Self {
            faq: home.faq(),
            expanded: Toggle::new(),
            feedback: FeedbackForm::new(),
            bug_report: BugReportForm::new(),
            service,
        }
    }

    // ── Dialog ──────────────────────────────────────────────

    pub fn open(&mut self, overlays: &mut DisclosureController) {
        overlays.open(OverlayId::Help);
    }

    /// Close the dialog (and the sheet on top of it), discarding drafts.
    pub fn close(&mut self, overlays: &mut DisclosureController) {
        overlays.close(OverlayId::Help);
        self.discard_if_closed(overlays);
    }

    /// Drop drafts and collapse the FAQ once the dialog is no longer
    /// visible, whoever closed it.
    pub fn discard_if_closed(&mut self, overlays: &DisclosureController) {
        if !overlays.is_open(OverlayId::BugReport) {
            self.bug_report.reset();
        }
        if !overlays.is_open(OverlayId::Help) {
            self.feedback.reset();
            self.expanded.clear();
        }
    }

    // ── FAQ ─────────────────────────────────────────────────

    pub fn faq(&self) -> Vec<FaqEntry<'_>> {
        self.faq
            .iter()
            .enumerate()
            .map(|(index, item)| FaqEntry {
                item,
                expanded: self.expanded.is(&index),
            })
            .collect()
    }

    /// Expand `index`, collapsing any other item; collapse it if it is
    /// already expanded. Out-of-range indices are ignored.
    pub fn toggle_faq(&mut self, index: usize) {
        if index < self.faq.len() {
            self.expanded.toggle(index);
        }
    }

    pub fn expanded_faq(&self) -> Option<usize> {
        self.expanded.current().copied()
    }

    // ── Feedback ────────────────────────────────────────────

    pub fn feedback(&self) -> &FeedbackForm {
        &self.feedback
    }

    pub fn feedback_mut(&mut self) -> &mut FeedbackForm {
        &mut self.feedback
    }

    pub fn submit_feedback(&mut self) -> Result<SubmissionReceipt, FormError> {
        self.feedback.submit(self.service.as_ref())
    }

    // ── Bug report sheet ────────────────────────────────────

    pub fn bug_report(&self) -> &BugReportForm {
        &self.bug_report
    }

    pub fn bug_report_mut(&mut self) -> &mut BugReportForm {
        &mut self.bug_report
    }

    pub fn open_bug_report(&mut self, overlays: &mut DisclosureController) {
        overlays.open(OverlayId::BugReport);
    }

    pub fn close_bug_report(&mut self, overlays: &mut DisclosureController) {
        overlays.close(OverlayId::BugReport);
        self.bug_report.reset();
    }

    /// Submit the report; on success the sheet closes and its draft is
    /// discarded. On failure both stay as they were.
    pub fn submit_bug_report(
        &mut self,
        overlays: &mut DisclosureController,
    ) -> Result<SubmissionReceipt, FormError> {
        let receipt = self.bug_report.submit(self.service.as_ref())?;
        self.close_bug_report(overlays);
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::FixtureStore;
    use crate::forms::tests::RecordingService;
    use crate::forms::{FormStatus, SubmissionError, ValidationError};
    use crate::models::{FeedbackCategory, ReportedScreen};

    fn center(service: Arc<RecordingService>) -> HelpCenter {
        HelpCenter::new(&FixtureStore, service)
    }

    #[test]
    fn faq_accordion_keeps_one_expanded() {
        let mut help = center(Arc::default());
        help.toggle_faq(0);
        help.toggle_faq(2);
        assert_eq!(help.expanded_faq(), Some(2));
        let expanded: Vec<bool> = help.faq().iter().map(|e| e.expanded).collect();
        assert_eq!(expanded, vec![false, false, true]);

        help.toggle_faq(2);
        assert_eq!(help.expanded_faq(), None);

        help.toggle_faq(9);
        assert_eq!(help.expanded_faq(), None);
    }

    #[test]
    fn feedback_goes_to_service() {
        let service = Arc::new(RecordingService::default());
        let mut help = center(service.clone());

        help.feedback_mut().set_text("Modo escuro, por favor");
        help.feedback_mut().select_category(FeedbackCategory::NewFeature);
        help.submit_feedback().unwrap();

        assert!(help.feedback().is_submitted());
        let sent = service.feedback.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].category, Some(FeedbackCategory::NewFeature));
    }

    #[test]
    fn empty_feedback_is_rejected() {
        let mut help = center(Arc::default());
        assert_eq!(
            help.submit_feedback(),
            Err(FormError::Validation(ValidationError { field: "text" }))
        );
    }

    #[test]
    fn bug_report_submit_closes_sheet_only() {
        let service = Arc::new(RecordingService::default());
        let mut help = center(service.clone());
        let mut overlays = DisclosureController::new();

        help.open(&mut overlays);
        help.open_bug_report(&mut overlays);
        help.bug_report_mut().select_screen(ReportedScreen::Tratamentos);
        help.bug_report_mut().set_description("Lembrete não aparece");
        help.submit_bug_report(&mut overlays).unwrap();

        assert!(!overlays.is_open(OverlayId::BugReport));
        assert!(overlays.is_open(OverlayId::Help));
        assert_eq!(help.bug_report().status(), &FormStatus::Draft);
        assert_eq!(help.bug_report().description(), "");
        assert_eq!(service.bug_reports.lock().unwrap().len(), 1);
    }

    #[test]
    fn failed_bug_report_keeps_sheet_open() {
        let service = Arc::new(RecordingService {
            fail: true,
            ..Default::default()
        });
        let mut help = center(service);
        let mut overlays = DisclosureController::new();

        help.open_bug_report(&mut overlays);
        help.bug_report_mut().set_description("Tela travou");
        let err = help.submit_bug_report(&mut overlays).unwrap_err();

        assert!(matches!(err, FormError::Submission(SubmissionError(_))));
        assert!(overlays.is_open(OverlayId::BugReport));
        assert_eq!(help.bug_report().description(), "Tela travou");
    }

    #[test]
    fn closing_dialog_discards_drafts() {
        let mut help = center(Arc::default());
        let mut overlays = DisclosureController::new();

        help.open(&mut overlays);
        help.toggle_faq(1);
        help.feedback_mut().set_text("rascunho");
        help.open_bug_report(&mut overlays);
        help.bug_report_mut().set_description("rascunho");

        help.close(&mut overlays);

        assert!(!overlays.is_open(OverlayId::Help));
        assert!(!overlays.is_open(OverlayId::BugReport));
        assert_eq!(help.feedback().text(), "");
        assert_eq!(help.bug_report().description(), "");
        assert_eq!(help.expanded_faq(), None);
    }
}
