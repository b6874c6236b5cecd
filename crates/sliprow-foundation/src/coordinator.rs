//! Exclusivity and dismissal coordination across mounted rows.
//!
//! A thread-local singleton wrapped in free functions keeps the registry of
//! mounted rows and the single dismissal slot. Rows register at mount and
//! unregister from their registration guard's `Drop`. Broadcasts always
//! collect target handles first and invoke them after the coordinator cell
//! is released, so row callbacks can re-enter these functions freely.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use indexmap::IndexMap;
use sliprow_core::{ClickEvent, RowId};

use crate::dismiss::DismissSlot;
use crate::row::RowHandle;

thread_local! {
    static COORDINATOR: RefCell<Coordinator> = RefCell::new(Coordinator::new());
}

struct Coordinator {
    next_id: RowId,
    /// Mounted rows in mount order; values are weak so an unmounted row is
    /// pruned on the next broadcast even if its guard never ran.
    rows: IndexMap<RowId, Weak<RefCell<dyn RowHandle>>>,
    dismiss: DismissSlot,
}

impl Coordinator {
    fn new() -> Self {
        Self {
            next_id: 1,
            rows: IndexMap::new(),
            dismiss: DismissSlot::default(),
        }
    }

    fn allocate_id(&mut self) -> RowId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Live handles of every row except `of`, pruning dead entries.
    fn siblings_of(&mut self, of: RowId) -> Vec<Rc<RefCell<dyn RowHandle>>> {
        let mut live = Vec::new();
        self.rows.retain(|&id, weak| match weak.upgrade() {
            Some(handle) => {
                if id != of {
                    live.push(handle);
                }
                true
            }
            None => false,
        });
        live
    }
}

pub(crate) fn allocate_row_id() -> RowId {
    COORDINATOR.with(|cell| cell.borrow_mut().allocate_id())
}

pub(crate) fn register_row(id: RowId, handle: Weak<RefCell<dyn RowHandle>>) {
    COORDINATOR.with(|cell| {
        cell.borrow_mut().rows.insert(id, handle);
    });
}

pub(crate) fn unregister_row(id: RowId) {
    COORDINATOR.with(|cell| {
        cell.borrow_mut().rows.shift_remove(&id);
    });
}

/// Force every mounted row except `of` back to rest.
///
/// Called on every gesture start, before the starting row mutates its own
/// state, which is what keeps at most one row dragging or revealed.
pub(crate) fn reset_siblings(of: RowId) {
    let siblings = COORDINATOR.with(|cell| cell.borrow_mut().siblings_of(of));
    for handle in siblings {
        handle.borrow_mut().force_reset();
    }
}

pub(crate) fn arm_dismiss(owner: RowId, eligible_at_millis: u64) {
    COORDINATOR.with(|cell| {
        cell.borrow_mut().dismiss.arm(owner, eligible_at_millis);
    });
}

pub(crate) fn disarm_dismiss(owner: RowId) {
    COORDINATOR.with(|cell| {
        cell.borrow_mut().dismiss.disarm(owner);
    });
}

/// Feed a document-level click into the dismissal guard.
///
/// The host calls this for every click anywhere in its document. Without an
/// eligible guard this is a no-op; otherwise the revealed row resets and
/// emits its close event. The slot is cleared inside the coordinator borrow,
/// before the reset runs, so the guard can never fire twice.
pub fn dispatch_document_click(click: &ClickEvent) {
    let dismissed = COORDINATOR.with(|cell| {
        let mut coordinator = cell.borrow_mut();
        let owner = coordinator.dismiss.on_click(click)?;
        coordinator.rows.get(&owner).and_then(Weak::upgrade)
    });
    if let Some(handle) = dismissed {
        log::debug!("outside click dismisses revealed row");
        handle.borrow_mut().force_reset();
    }
}

/// Number of currently mounted rows.
pub fn mounted_rows() -> usize {
    COORDINATOR.with(|cell| {
        let mut coordinator = cell.borrow_mut();
        coordinator.rows.retain(|_, weak| weak.strong_count() > 0);
        coordinator.rows.len()
    })
}

/// Row currently owning the dismissal guard, if any.
pub fn armed_dismiss_owner() -> Option<RowId> {
    COORDINATOR.with(|cell| cell.borrow().dismiss.owner())
}
