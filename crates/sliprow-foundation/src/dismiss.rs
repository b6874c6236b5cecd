//! Single-slot outside-click dismissal guard.
//!
//! At most one guard exists process-wide because at most one row can be
//! revealed; arming replaces any previous guard instead of accumulating
//! listeners.

use sliprow_core::{ClickEvent, RowId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct DismissGuard {
    owner: RowId,
    /// Clicks stamped earlier than this are part of the interaction that
    /// revealed the menu and must not close it.
    eligible_at_millis: u64,
}

#[derive(Debug, Default)]
pub(crate) struct DismissSlot {
    guard: Option<DismissGuard>,
}

impl DismissSlot {
    pub fn arm(&mut self, owner: RowId, eligible_at_millis: u64) {
        if let Some(previous) = self.guard.replace(DismissGuard {
            owner,
            eligible_at_millis,
        }) {
            if previous.owner != owner {
                log::debug!(
                    "dismiss guard for row {} replaced by row {}",
                    previous.owner,
                    owner
                );
            }
        }
    }

    /// Release the guard if `owner` holds it; a no-op otherwise, so a row
    /// resetting itself cannot release a sibling's guard.
    pub fn disarm(&mut self, owner: RowId) {
        if self.guard.is_some_and(|guard| guard.owner == owner) {
            self.guard = None;
        }
    }

    pub fn owner(&self) -> Option<RowId> {
        self.guard.map(|guard| guard.owner)
    }

    /// Decide what a document click does.
    ///
    /// Returns the row to dismiss, clearing the slot first so the guard is
    /// gone before any reset runs. Clicks before the arming deadline and
    /// clicks inside the owning row leave the guard in place.
    pub fn on_click(&mut self, click: &ClickEvent) -> Option<RowId> {
        let guard = self.guard?;
        if click.timestamp_millis < guard.eligible_at_millis {
            return None;
        }
        if click.target == Some(guard.owner) {
            return None;
        }
        self.guard = None;
        Some(guard.owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arming_replaces_previous_guard() {
        let mut slot = DismissSlot::default();
        slot.arm(1, 100);
        slot.arm(2, 200);
        assert_eq!(slot.owner(), Some(2));

        // The displaced guard no longer dismisses anything.
        assert_eq!(slot.on_click(&ClickEvent::outside().at(150)), None);
        assert_eq!(slot.on_click(&ClickEvent::outside().at(250)), Some(2));
        assert_eq!(slot.owner(), None);
    }

    #[test]
    fn disarm_requires_matching_owner() {
        let mut slot = DismissSlot::default();
        slot.arm(1, 100);
        slot.disarm(2);
        assert_eq!(slot.owner(), Some(1));
        slot.disarm(1);
        assert_eq!(slot.owner(), None);
        // Disarming an empty slot is a no-op.
        slot.disarm(1);
    }

    #[test]
    fn clicks_before_deadline_are_ignored() {
        let mut slot = DismissSlot::default();
        slot.arm(1, 100);
        assert_eq!(slot.on_click(&ClickEvent::outside().at(99)), None);
        assert_eq!(slot.owner(), Some(1));
        assert_eq!(slot.on_click(&ClickEvent::outside().at(100)), Some(1));
    }

    #[test]
    fn clicks_inside_the_owner_keep_the_guard() {
        let mut slot = DismissSlot::default();
        slot.arm(1, 100);
        assert_eq!(slot.on_click(&ClickEvent::inside(1).at(200)), None);
        assert_eq!(slot.owner(), Some(1));

        // A click in a different row counts as outside.
        assert_eq!(slot.on_click(&ClickEvent::inside(9).at(200)), Some(1));
    }

    #[test]
    fn empty_slot_ignores_clicks() {
        let mut slot = DismissSlot::default();
        assert_eq!(slot.on_click(&ClickEvent::outside().at(500)), None);
    }
}
