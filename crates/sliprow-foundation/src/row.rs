//! Per-row swipe engine.
//!
//! A [`SwipeRow`] owns one row's configuration, its reveal state machine,
//! and the presenter that renders it. The host feeds it the pan lifecycle
//! events of gestures originating in the row and activates action buttons;
//! everything page-wide (sibling resets, outside-click dismissal) goes
//! through the coordinator.

use std::cell::RefCell;
use std::rc::Rc;

use sliprow_core::gesture_constants::DISMISS_ARM_DELAY_MS;
use sliprow_core::{ClickEvent, ConfigError, PanEvent, RowId, SwipeConfig};

use crate::coordinator;
use crate::interpreter::{self, EndOutcome};
use crate::presenter::SwipePresenter;
use crate::reveal::{RevealFrame, RevealState, RevealStateMachine};

/// Engine-facing handle the coordinator keeps for every mounted row.
pub(crate) trait RowHandle {
    fn force_reset(&mut self);
}

/// Unregisters the row and releases any dismissal guard it owns when the
/// row is dropped, so an unmount while revealed cannot leave a stale guard
/// behind.
struct RowRegistration {
    id: RowId,
}

impl Drop for RowRegistration {
    fn drop(&mut self) {
        coordinator::disarm_dismiss(self.id);
        coordinator::unregister_row(self.id);
    }
}

pub struct SwipeRow<T: 'static> {
    id: RowId,
    config: SwipeConfig<T>,
    machine: RevealStateMachine,
    presenter: Box<dyn SwipePresenter>,
    #[allow(dead_code)]
    registration: Option<RowRegistration>,
}

impl<T: 'static> SwipeRow<T> {
    /// Validate the configuration and register the row with the
    /// coordinator.
    ///
    /// The returned handle is the row's identity for its whole lifetime;
    /// dropping the last clone unmounts it.
    pub fn mount(
        config: SwipeConfig<T>,
        presenter: Box<dyn SwipePresenter>,
    ) -> Result<Rc<RefCell<Self>>, ConfigError> {
        config.validate()?;
        let id = coordinator::allocate_row_id();
        let row = Rc::new(RefCell::new(Self {
            id,
            config,
            machine: RevealStateMachine::new(),
            presenter,
            registration: None,
        }));
        let handle: Rc<RefCell<dyn RowHandle>> = row.clone();
        coordinator::register_row(id, Rc::downgrade(&handle));
        row.borrow_mut().registration = Some(RowRegistration { id });
        Ok(row)
    }

    pub fn id(&self) -> RowId {
        self.id
    }

    pub fn config(&self) -> &SwipeConfig<T> {
        &self.config
    }

    pub fn frame(&self) -> RevealFrame {
        self.machine.frame()
    }

    pub fn state(&self) -> RevealState {
        self.machine.state()
    }

    /// A pan gesture began in this row.
    ///
    /// Siblings reset unconditionally; this row only becomes the drag
    /// target when the gesture's direction is one of its enabled
    /// directions. Otherwise it stays passive for the remainder of the
    /// gesture, which is how a direction is disabled.
    pub fn on_pan_start(&mut self, event: &PanEvent) {
        coordinator::reset_siblings(self.id);
        if !self.config.is_enabled(event.direction) {
            return;
        }
        let was_revealed = self.machine.state().is_revealed();
        if was_revealed {
            coordinator::disarm_dismiss(self.id);
        }
        let frame = self.machine.begin_drag(event.direction);
        self.presenter.apply(&frame);
        if was_revealed {
            self.emit_menu_closed();
        }
    }

    /// A pan gesture moved; `delta_x` is cumulative since gesture start.
    pub fn on_pan_move(&mut self, event: &PanEvent) {
        let RevealState::Dragging(current) = self.machine.state() else {
            return;
        };
        if event.direction.is_horizontal() && event.direction != current {
            // Direction reversal returns the content to origin; the new
            // direction then re-gates below like any other move.
            if let Some(frame) = self.machine.drag_to(current, 0.0) {
                self.presenter.apply(&frame);
            }
        }
        let width = self.presenter.panel_width(event.direction);
        if let Some(offset) =
            interpreter::drag_offset(&self.config, event.direction, event.delta_x, width)
        {
            if let Some(frame) = self.machine.drag_to(event.direction, offset) {
                self.presenter.apply(&frame);
            }
        }
    }

    /// A pan gesture ended; resolve reveal, default action, or springback.
    ///
    /// The host is expected to suppress its platform's default gesture
    /// completion behavior before delivering this event.
    pub fn on_pan_end(&mut self, event: &PanEvent) {
        if !self.machine.state().is_dragging() {
            return;
        }
        let outcome = interpreter::end_outcome(&self.config, event.delta_x, |direction| {
            self.presenter.panel_width(direction)
        });
        match outcome {
            EndOutcome::Reveal { direction, offset } => {
                self.emit_menu_opened();
                let frame = self.machine.reveal(direction, offset);
                self.presenter.apply(&frame);
                coordinator::arm_dismiss(self.id, event.timestamp_millis + DISMISS_ARM_DELAY_MS);
                log::debug!("row {} revealed {:?} at offset {}", self.id, direction, offset);
            }
            EndOutcome::DefaultAction { direction } => {
                self.emit_menu_opened();
                let handler = self
                    .config
                    .direction(direction)
                    .and_then(|cfg| cfg.on_default_action.clone());
                if let Some(handler) = handler {
                    handler(&self.config.data);
                }
                if let Some(frame) = self.machine.rest() {
                    self.presenter.apply(&frame);
                }
                self.emit_menu_closed();
            }
            EndOutcome::Springback => {
                if let Some(frame) = self.machine.rest() {
                    self.presenter.apply(&frame);
                }
            }
        }
    }

    /// Activate an action button in the revealed panel by name.
    ///
    /// No-op unless the row is revealed. The menu closes first, then the
    /// action's handler runs with its data override or the row's context
    /// data, then the row-level completion callback fires.
    pub fn activate_action(&mut self, name: &str, click: &ClickEvent) {
        let RevealState::Revealed(direction) = self.machine.state() else {
            return;
        };
        self.reset();
        let Some(cfg) = self.config.direction(direction) else {
            return;
        };
        let Some(action) = cfg.find_action(name) else {
            log::debug!(
                "row {}: no action named {:?} in the {:?} panel",
                self.id,
                name,
                direction
            );
            return;
        };
        action.invoke(click, &self.config.data);
        if let Some(done) = &self.config.on_action_done {
            done(click, &self.config.data);
        }
    }

    /// Force back to rest.
    ///
    /// Idempotent: on an already-resting row nothing is presented and no
    /// event fires. Leaving the revealed state emits `menu_closed`, whether
    /// the reset came from the user or from the coordinator.
    pub fn reset(&mut self) {
        let was_revealed = self.machine.state().is_revealed();
        let Some(frame) = self.machine.rest() else {
            return;
        };
        self.presenter.apply(&frame);
        coordinator::disarm_dismiss(self.id);
        if was_revealed {
            self.emit_menu_closed();
        }
    }

    fn emit_menu_opened(&self) {
        if let Some(handler) = &self.config.on_menu_opened {
            handler(&self.config.data);
        }
    }

    fn emit_menu_closed(&self) {
        if let Some(handler) = &self.config.on_menu_closed {
            handler(&self.config.data);
        }
    }
}

impl<T: 'static> RowHandle for SwipeRow<T> {
    fn force_reset(&mut self) {
        if !self.machine.state().is_resting() {
            log::debug!("row {} force-reset by coordinator", self.id);
        }
        self.reset();
    }
}
