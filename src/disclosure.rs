//! Overlay visibility: dialogs, sheets and drill-down panels.
//!
//! Overlays are grouped; members of one group are mutually exclusive, so
//! opening one closes its siblings. A nested overlay (the bug-report sheet
//! inside the help dialog) lives and dies with its parent. Every operation
//! is a single state update followed by at most one listener notification.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::models::enums::str_enum;

str_enum!(OverlayId {
    ProfileMenu => "profileMenu",
    FullProfile => "fullProfile",
    Help => "help",
    BugReport => "bugReport",
    DigitalCard => "digitalCard",
    MedicationDetail => "medicationDetail",
    TimelineFilter => "timelineFilter",
});

/// Mutual-exclusion group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayGroup {
    /// Dialogs launched from the header avatar.
    Account,
    /// Panels on the treatments screen.
    Treatments,
}

impl OverlayId {
    pub fn group(&self) -> Option<OverlayGroup> {
        match self {
            Self::ProfileMenu | Self::FullProfile | Self::Help | Self::DigitalCard => {
                Some(OverlayGroup::Account)
            }
            Self::MedicationDetail | Self::TimelineFilter => Some(OverlayGroup::Treatments),
            Self::BugReport => None,
        }
    }

    /// Overlay this one is stacked on, if any.
    pub fn parent(&self) -> Option<OverlayId> {
        match self {
            Self::BugReport => Some(Self::Help),
            _ => None,
        }
    }
}

/// Visible overlays after a change, as handed to listeners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisclosureSnapshot {
    pub open: Vec<OverlayId>,
}

impl DisclosureSnapshot {
    pub fn is_open(&self, id: OverlayId) -> bool {
        self.open.contains(&id)
    }
}

type Listener = Box<dyn Fn(&DisclosureSnapshot)>;

#[derive(Default)]
pub struct DisclosureController {
    open: BTreeSet<OverlayId>,
    listeners: Vec<Listener>,
}

impl fmt::Debug for DisclosureController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisclosureController")
            .field("open", &self.open)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl DisclosureController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback fired once per effective state change.
    pub fn subscribe(&mut self, listener: impl Fn(&DisclosureSnapshot) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn is_open(&self, id: OverlayId) -> bool {
        self.open.contains(&id)
    }

    pub fn snapshot(&self) -> DisclosureSnapshot {
        DisclosureSnapshot {
            open: self.open.iter().copied().collect(),
        }
    }

    pub fn open(&mut self, id: OverlayId) {
        let mut next = self.open.clone();
        Self::apply_open(&mut next, id);
        self.commit(next, "open", id);
    }

    pub fn close(&mut self, id: OverlayId) {
        let mut next = self.open.clone();
        Self::apply_close(&mut next, id);
        self.commit(next, "close", id);
    }

    /// Drill-down: close `from` and open `to` as one update. Works even
    /// when `from` is not open; `to` still opens.
    pub fn transition(&mut self, from: OverlayId, to: OverlayId) {
        let mut next = self.open.clone();
        Self::apply_close(&mut next, from);
        Self::apply_open(&mut next, to);
        self.commit(next, "transition", to);
    }

    /// Open if closed, close if open.
    pub fn toggle(&mut self, id: OverlayId) {
        if self.is_open(id) {
            self.close(id);
        } else {
            self.open(id);
        }
    }

    pub fn close_all(&mut self) {
        if self.open.is_empty() {
            return;
        }
        self.open.clear();
        tracing::debug!("All overlays closed");
        self.notify();
    }

    fn apply_open(set: &mut BTreeSet<OverlayId>, id: OverlayId) {
        if let Some(parent) = id.parent() {
            Self::apply_open(set, parent);
        }
        if let Some(group) = id.group() {
            let siblings: Vec<OverlayId> = set
                .iter()
                .copied()
                .filter(|other| *other != id && other.group() == Some(group))
                .collect();
            for sibling in siblings {
                Self::apply_close(set, sibling);
            }
        }
        set.insert(id);
    }

    fn apply_close(set: &mut BTreeSet<OverlayId>, id: OverlayId) {
        set.remove(&id);
        for child in OverlayId::ALL.iter().filter(|c| c.parent() == Some(id)) {
            set.remove(child);
        }
    }

    fn commit(&mut self, next: BTreeSet<OverlayId>, action: &'static str, id: OverlayId) {
        if next == self.open {
            return;
        }
        self.open = next;
        tracing::debug!(action, overlay = %id, open = ?self.open, "Overlay state changed");
        self.notify();
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        for listener in &self.listeners {
            listener(&snapshot);
        }
    }
}

/// Nullable selection with click-again-to-clear semantics: an accordion's
/// expanded row, the medication whose detail is shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toggle<K> {
    current: Option<K>,
}

impl<K> Default for Toggle<K> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<K: PartialEq> Toggle<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&K> {
        self.current.as_ref()
    }

    pub fn is(&self, key: &K) -> bool {
        self.current.as_ref() == Some(key)
    }

    /// Select `key`, or clear if it is already selected.
    pub fn toggle(&mut self, key: K) {
        if self.is(&key) {
            self.current = None;
        } else {
            self.current = Some(key);
        }
    }

    pub fn set(&mut self, key: Option<K>) {
        self.current = key;
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
