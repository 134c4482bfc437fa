//! Início: today's care card, educational carousel, header.

use std::collections::BTreeSet;

use chrono::{Local, NaiveTime, Timelike};
use serde::Serialize;

use crate::config::CompanionConfig;
use crate::models::{
    format_day_month_pt, Appointment, DoseStatus, EducationalContent, Medication, TIME_FORMAT,
};
use crate::repository::{HomeRepository, MedicationRepository};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// The reminder shown under "Próximo medicamento".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextDose {
    pub medication_id: String,
    pub name: String,
    pub dosage: String,
    pub time: String,
    pub status: DoseStatus,
    /// The dose is tomorrow's first: nothing is left today.
    pub tomorrow: bool,
}

/// Appointment as the dashboard prints it: `15 Out às 10:30`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppointmentCard {
    pub when: String,
    pub doctor: String,
}

impl From<&Appointment> for AppointmentCard {
    fn from(appointment: &Appointment) -> Self {
        Self {
            when: format!(
                "{} às {}",
                format_day_month_pt(appointment.starts_at.date()),
                appointment.starts_at.format(TIME_FORMAT)
            ),
            doctor: appointment.doctor.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DashboardView<'a> {
    pub greeting_name: &'a str,
    pub unread_notifications: u32,
    pub next_dose: Option<NextDose>,
    pub next_appointment: Option<AppointmentCard>,
    pub educational_content: &'a [EducationalContent],
}

// ---------------------------------------------------------------------------
// Next dose
// ---------------------------------------------------------------------------

const MINUTES_PER_DAY: i64 = 24 * 60;

fn minutes_of_day(time: NaiveTime) -> i64 {
    i64::from(time.hour()) * 60 + i64::from(time.minute())
}

/// Pick the reminder to show at `now`.
///
/// A reminder up to `window_minutes` in the past is still due and shows as
/// `Now`, as does one at most `window_minutes` ahead; later reminders are
/// `Upcoming`. When nothing is left today the earliest reminder of
/// tomorrow is returned, with the same window applied across midnight.
/// Disabled medications and times in `skip` are ignored.
pub fn next_dose(
    medications: &[Medication],
    now: NaiveTime,
    window_minutes: i64,
    skip: &BTreeSet<(String, NaiveTime)>,
) -> Option<NextDose> {
    let now_minutes = minutes_of_day(now);
    let reminders: Vec<(&Medication, NaiveTime)> = medications
        .iter()
        .filter(|m| m.enabled)
        .flat_map(|m| m.reminder_times().into_iter().map(move |t| (m, t)))
        .filter(|(m, t)| !skip.contains(&(m.id.clone(), *t)))
        .collect();

    let today = reminders
        .iter()
        .map(|&(m, t)| (m, t, minutes_of_day(t) - now_minutes))
        .filter(|&(_, _, diff)| diff >= -window_minutes)
        .min_by_key(|&(_, t, diff)| (diff, t));

    let dose = |m: &Medication, t: NaiveTime, status, tomorrow| NextDose {
        medication_id: m.id.clone(),
        name: m.name.clone(),
        dosage: m.dosage.clone(),
        time: t.format(TIME_FORMAT).to_string(),
        status,
        tomorrow,
    };

    let status = |diff: i64| {
        if diff <= window_minutes {
            DoseStatus::Now
        } else {
            DoseStatus::Upcoming
        }
    };

    if let Some((m, t, diff)) = today {
        return Some(dose(m, t, status(diff), false));
    }

    // Skipped (taken) doses are today's only; tomorrow starts fresh.
    medications
        .iter()
        .filter(|m| m.enabled)
        .flat_map(|m| m.reminder_times().into_iter().map(move |t| (m, t)))
        .min_by_key(|&(_, t)| t)
        .map(|(m, t)| {
            let diff = minutes_of_day(t) + MINUTES_PER_DAY - now_minutes;
            dose(m, t, status(diff), true)
        })
}

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

pub struct DashboardPage {
    patient_name: String,
    dose_window_minutes: i64,
    unread_notifications: u32,
    medications: Vec<Medication>,
    taken: BTreeSet<(String, NaiveTime)>,
    next_appointment: Option<Appointment>,
    educational_content: Vec<EducationalContent>,
}

impl DashboardPage {
    pub fn new(
        config: &CompanionConfig,
        home: &dyn HomeRepository,
        medications: &dyn MedicationRepository,
    ) -> Self {
        Self {
            patient_name: config.patient_name.clone(),
            dose_window_minutes: config.dose_window_minutes,
            unread_notifications: home.unread_notifications(),
            medications: medications.medications(),
            taken: BTreeSet::new(),
            next_appointment: home.next_appointment(),
            educational_content: home.educational_content(),
        }
    }

    pub fn has_notifications(&self) -> bool {
        self.unread_notifications > 0
    }

    pub fn next_dose_at(&self, now: NaiveTime) -> Option<NextDose> {
        next_dose(&self.medications, now, self.dose_window_minutes, &self.taken)
    }

    /// "Marcar como tomado": hides the shown dose until the page is rebuilt.
    pub fn mark_taken_at(&mut self, now: NaiveTime) -> Option<NextDose> {
        let dose = self.next_dose_at(now)?;
        if dose.tomorrow {
            return None;
        }
        let time = NaiveTime::parse_from_str(&dose.time, TIME_FORMAT).ok()?;
        tracing::info!(medication = %dose.name, time = %dose.time, "Dose marked as taken");
        self.taken.insert((dose.medication_id.clone(), time));
        Some(dose)
    }

    pub fn mark_taken(&mut self) -> Option<NextDose> {
        self.mark_taken_at(Local::now().time())
    }

    pub fn view_at(&self, now: NaiveTime) -> DashboardView<'_> {
        DashboardView {
            greeting_name: &self.patient_name,
            unread_notifications: self.unread_notifications,
            next_dose: self.next_dose_at(now),
            next_appointment: self.next_appointment.as_ref().map(AppointmentCard::from),
            educational_content: &self.educational_content,
        }
    }

    pub fn view(&self) -> DashboardView<'_> {
        self.view_at(Local::now().time())
    }
}
