//! Tratamentos: medication reminders, adherence calendar, health timeline.
//!
//! Medications are a page-local copy; toggling a reminder or editing its
//! times never reaches the repository and is gone once the page is rebuilt.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::disclosure::{DisclosureController, OverlayId, Toggle};
use crate::filter::{category_chips, CategoryChip, EmptyState, ListController};
use crate::models::enums::str_enum;
use crate::models::{
    format_date_pt, AdherenceRecord, AdherenceStatus, Medication, ReminderError, TimelineEvent,
    TimelineEventType,
};
use crate::repository::{MedicationRepository, TimelineRepository};

str_enum!(TreatmentsTab {
    Current => "atuais",
    History => "historico",
    Timeline => "linha-do-tempo",
});

/// One cell of the adherence calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub status: Option<AdherenceStatus>,
}

pub struct TreatmentsPage {
    tab: TreatmentsTab,
    medications: Vec<Medication>,
    adherence: Vec<AdherenceRecord>,
    timeline: ListController<TimelineEvent>,
    detail: Toggle<String>,
    new_time_draft: String,
    selected_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct TimelineView<'a> {
    pub query: &'a str,
    pub chips: Vec<CategoryChip>,
    pub events: Vec<&'a TimelineEvent>,
    pub empty_state: Option<EmptyState>,
}

impl TreatmentsPage {
    pub fn new(medications: &dyn MedicationRepository, timeline: &dyn TimelineRepository) -> Self {
        Self {
            tab: TreatmentsTab::Current,
            medications: medications.medications(),
            adherence: medications.adherence(),
            timeline: ListController::new(timeline.timeline()),
            detail: Toggle::new(),
            new_time_draft: String::new(),
            selected_date: None,
        }
    }

    pub fn tab(&self) -> TreatmentsTab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: TreatmentsTab) {
        self.tab = tab;
    }

    pub fn medications(&self) -> &[Medication] {
        &self.medications
    }

    pub fn medication(&self, id: &str) -> Option<&Medication> {
        self.medications.iter().find(|m| m.id == id)
    }

    fn medication_mut(&mut self, id: &str) -> Result<&mut Medication, ReminderError> {
        self.medications
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| ReminderError::MedicationNotFound(id.to_string()))
    }

    /// Flip the reminder switch. Returns the new state.
    pub fn toggle_enabled(&mut self, id: &str) -> Result<bool, ReminderError> {
        let med = self.medication_mut(id)?;
        med.enabled = !med.enabled;
        tracing::debug!(medication = %med.name, enabled = med.enabled, "Reminder toggled");
        Ok(med.enabled)
    }

    pub fn add_time(&mut self, id: &str, time: &str) -> Result<bool, ReminderError> {
        let med = self.medication_mut(id)?;
        let added = med.add_time(time)?;
        if !added {
            tracing::warn!(medication = %med.name, time, "Reminder time already scheduled");
        }
        Ok(added)
    }

    pub fn remove_time(&mut self, id: &str, time: &str) -> Result<bool, ReminderError> {
        self.medication_mut(id)?.remove_time(time)
    }

    // ── Medication detail overlay ───────────────────────────

    pub fn show_detail(
        &mut self,
        id: &str,
        overlays: &mut DisclosureController,
    ) -> Result<(), ReminderError> {
        if self.medication(id).is_none() {
            return Err(ReminderError::MedicationNotFound(id.to_string()));
        }
        self.detail.set(Some(id.to_string()));
        self.new_time_draft.clear();
        overlays.open(OverlayId::MedicationDetail);
        Ok(())
    }

    pub fn hide_detail(&mut self, overlays: &mut DisclosureController) {
        self.detail.clear();
        self.new_time_draft.clear();
        overlays.close(OverlayId::MedicationDetail);
    }

    /// Medication shown in the detail overlay, if it is open.
    pub fn detail<'a>(&'a self, overlays: &DisclosureController) -> Option<&'a Medication> {
        if !overlays.is_open(OverlayId::MedicationDetail) {
            return None;
        }
        self.detail.current().and_then(|id| self.medication(id))
    }

    pub fn new_time_draft(&self) -> &str {
        &self.new_time_draft
    }

    pub fn set_new_time_draft(&mut self, value: impl Into<String>) {
        self.new_time_draft = value.into();
    }

    /// Add the drafted time to the medication in the detail overlay. The
    /// draft is cleared unless the time was invalid.
    pub fn commit_new_time(&mut self) -> Result<bool, ReminderError> {
        let id = self
            .detail
            .current()
            .cloned()
            .ok_or(ReminderError::NoMedicationSelected)?;
        let draft = self.new_time_draft.clone();
        let added = self.add_time(&id, &draft)?;
        self.new_time_draft.clear();
        Ok(added)
    }

    // ── Adherence calendar ──────────────────────────────────

    pub fn adherence_status(&self, day: u32) -> Option<AdherenceStatus> {
        self.adherence
            .iter()
            .find(|record| record.day == day)
            .map(|record| record.status)
    }

    /// Every day of `month` with its adherence status. Records are keyed by
    /// day of month, so any month shows the same pattern.
    pub fn calendar(&self, year: i32, month: u32) -> Vec<CalendarDay> {
        let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
            return Vec::new();
        };
        first
            .iter_days()
            .take_while(|date| date.month() == month)
            .map(|date| CalendarDay {
                date,
                status: self.adherence_status(date.day()),
            })
            .collect()
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    pub fn select_date(&mut self, date: Option<NaiveDate>) {
        self.selected_date = date;
    }

    // ── Health timeline ─────────────────────────────────────

    pub fn timeline(&self) -> &ListController<TimelineEvent> {
        &self.timeline
    }

    pub fn set_timeline_query(&mut self, query: impl Into<String>) {
        self.timeline.set_query(query);
    }

    pub fn open_timeline_filter(&mut self, overlays: &mut DisclosureController) {
        overlays.open(OverlayId::TimelineFilter);
    }

    /// Toggle an event type from the filter sheet, then close the sheet.
    pub fn apply_timeline_filter(
        &mut self,
        event_type: TimelineEventType,
        overlays: &mut DisclosureController,
    ) {
        self.timeline.set_category(Some(event_type.as_str()));
        overlays.close(OverlayId::TimelineFilter);
    }

    pub fn timeline_view(&self) -> TimelineView<'_> {
        TimelineView {
            query: self.timeline.query(),
            chips: category_chips(
                TimelineEventType::ALL
                    .iter()
                    .map(|t| (t.as_str(), t.label(), t.glyph())),
                self.timeline.selected_category(),
            ),
            events: self.timeline.filtered().collect(),
            empty_state: self.timeline.empty_state(),
        }
    }

    /// Prescription line for the detail overlay, e.g. `Dr. Silva · 15 Set 2024`.
    pub fn prescribed_by(med: &Medication) -> String {
        format!("{} · {}", med.doctor, format_date_pt(med.prescription_date))
    }
}
