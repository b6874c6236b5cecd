//! Recording presenter and event log.
//!
//! Both types hand out cheap clones sharing the same interior state, so a
//! test can keep one clone while the engine owns the other.

use std::cell::RefCell;
use std::rc::Rc;

use sliprow_core::PanDirection;
use sliprow_foundation::{RevealFrame, SwipePresenter};

#[derive(Debug, Default)]
struct RecordingState {
    left_width: Option<f32>,
    right_width: Option<f32>,
    frames: Vec<RevealFrame>,
}

/// Presenter that records every applied frame and serves scripted panel
/// measurements.
///
/// Panels start unmeasured, mirroring a row whose panels have not been laid
/// out yet.
#[derive(Clone, Debug, Default)]
pub struct RecordingPresenter {
    state: Rc<RefCell<RecordingState>>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a measured panel width.
    pub fn with_panel_width(self, direction: PanDirection, width: f32) -> Self {
        self.set_panel_width(direction, Some(width));
        self
    }

    pub fn set_panel_width(&self, direction: PanDirection, width: Option<f32>) {
        let mut state = self.state.borrow_mut();
        match direction {
            PanDirection::Left => state.left_width = width,
            PanDirection::Right => state.right_width = width,
            PanDirection::None => {}
        }
    }

    /// All frames applied so far, in order.
    pub fn frames(&self) -> Vec<RevealFrame> {
        self.state.borrow().frames.clone()
    }

    pub fn last_frame(&self) -> Option<RevealFrame> {
        self.state.borrow().frames.last().copied()
    }

    pub fn clear_frames(&self) {
        self.state.borrow_mut().frames.clear();
    }
}

impl SwipePresenter for RecordingPresenter {
    fn panel_width(&self, direction: PanDirection) -> Option<f32> {
        let state = self.state.borrow();
        match direction {
            PanDirection::Left => state.left_width,
            PanDirection::Right => state.right_width,
            PanDirection::None => None,
        }
    }

    fn apply(&mut self, frame: &RevealFrame) {
        self.state.borrow_mut().frames.push(*frame);
    }
}

/// One observed callback from the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordedEvent<T> {
    MenuOpened(T),
    MenuClosed(T),
    DefaultAction(PanDirection, T),
    ActionInvoked { name: String, data: T },
    ActionDone(T),
}

/// Shared, ordered log of emitted callbacks.
pub struct EventLog<T> {
    events: Rc<RefCell<Vec<RecordedEvent<T>>>>,
}

impl<T> Clone for EventLog<T> {
    fn clone(&self) -> Self {
        Self {
            events: Rc::clone(&self.events),
        }
    }
}

impl<T> Default for EventLog<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> EventLog<T> {
    pub fn new() -> Self {
        Self {
            events: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn push(&self, event: RecordedEvent<T>) {
        self.events.borrow_mut().push(event);
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    pub fn menu_opened_count(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|event| matches!(event, RecordedEvent::MenuOpened(_)))
            .count()
    }

    pub fn menu_closed_count(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|event| matches!(event, RecordedEvent::MenuClosed(_)))
            .count()
    }
}

impl<T: Clone> EventLog<T> {
    /// Snapshot of the log so far.
    pub fn events(&self) -> Vec<RecordedEvent<T>> {
        self.events.borrow().clone()
    }

    /// Drain the log, returning everything observed since the last take.
    pub fn take(&self) -> Vec<RecordedEvent<T>> {
        std::mem::take(&mut *self.events.borrow_mut())
    }
}
