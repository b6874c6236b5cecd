//! Scripted driver for engine scenarios.
//!
//! The robot owns a monotonic clock and stamps every event it delivers,
//! advancing one frame (16 ms) per event — dismissal-delay behavior is
//! therefore exercised with real timestamp arithmetic rather than sleeps.
//!
//! # Example
//!
//! ```
//! use sliprow_core::prelude::*;
//! use sliprow_testing::prelude::*;
//!
//! let mut robot = SwipeRobot::new();
//! let row = robot.mount(
//!     SwipeConfig::new("row-1").with_left(DirectionConfig::active()),
//!     RecordingPresenter::new().with_panel_width(PanDirection::Left, 120.0),
//!     EventLog::new(),
//! );
//!
//! robot.swipe(&row, PanDirection::Left, -80.0);
//! assert!(row.state().is_revealed());
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use sliprow_core::gesture_constants::DISMISS_ARM_DELAY_MS;
use sliprow_core::{ClickEvent, PanDirection, PanEvent, RowId, SwipeConfig};
use sliprow_foundation::coordinator;
use sliprow_foundation::{RevealFrame, RevealState, SwipeRow};

use crate::recording::{EventLog, RecordedEvent, RecordingPresenter};

const FRAME_MILLIS: u64 = 16;

/// A mounted row together with its recording presenter and event log.
pub struct RobotRow<T: 'static> {
    row: Rc<RefCell<SwipeRow<T>>>,
    pub presenter: RecordingPresenter,
    pub events: EventLog<T>,
}

impl<T: 'static> RobotRow<T> {
    pub fn id(&self) -> RowId {
        self.row.borrow().id()
    }

    pub fn engine(&self) -> &Rc<RefCell<SwipeRow<T>>> {
        &self.row
    }

    pub fn state(&self) -> RevealState {
        self.row.borrow().state()
    }

    pub fn frame(&self) -> RevealFrame {
        self.row.borrow().frame()
    }

    pub fn offset(&self) -> f32 {
        self.frame().offset
    }

    pub fn reset(&self) {
        self.row.borrow_mut().reset();
    }
}

/// Drives mounted rows with scripted gestures and clicks.
pub struct SwipeRobot {
    now_millis: u64,
}

impl Default for SwipeRobot {
    fn default() -> Self {
        Self::new()
    }
}

impl SwipeRobot {
    pub fn new() -> Self {
        // Arbitrary nonzero epoch so deadline arithmetic never wraps.
        Self { now_millis: 1_000 }
    }

    pub fn now(&self) -> u64 {
        self.now_millis
    }

    pub fn advance(&mut self, millis: u64) {
        self.now_millis += millis;
    }

    /// Advance past the dismissal arming delay, so the next click is
    /// eligible to dismiss.
    pub fn settle(&mut self) {
        self.advance(DISMISS_ARM_DELAY_MS + FRAME_MILLIS);
    }

    fn stamp(&mut self) -> u64 {
        let now = self.now_millis;
        self.now_millis += FRAME_MILLIS;
        now
    }

    /// Mount a row, wiring the menu lifecycle callbacks into `events`.
    ///
    /// Direction-specific handlers (default actions, action buttons) are
    /// wired by the test itself, against the same log, before calling this.
    pub fn mount<T: Clone + 'static>(
        &self,
        config: SwipeConfig<T>,
        presenter: RecordingPresenter,
        events: EventLog<T>,
    ) -> RobotRow<T> {
        let log = events.clone();
        let config = config.on_menu_opened(move |data: &T| {
            log.push(RecordedEvent::MenuOpened(data.clone()));
        });
        let log = events.clone();
        let config = config.on_menu_closed(move |data: &T| {
            log.push(RecordedEvent::MenuClosed(data.clone()));
        });
        let log = events.clone();
        let config = config.on_action_done(move |_, data: &T| {
            log.push(RecordedEvent::ActionDone(data.clone()));
        });
        let row = SwipeRow::mount(config, Box::new(presenter.clone()))
            .expect("robot configs must validate");
        RobotRow {
            row,
            presenter,
            events,
        }
    }

    pub fn pan_start<T>(&mut self, row: &RobotRow<T>, direction: PanDirection) {
        let event = PanEvent::start(direction).at(self.stamp());
        row.row.borrow_mut().on_pan_start(&event);
    }

    pub fn pan_move<T>(&mut self, row: &RobotRow<T>, direction: PanDirection, delta_x: f32) {
        let event = PanEvent::moved(direction, delta_x).at(self.stamp());
        row.row.borrow_mut().on_pan_move(&event);
    }

    pub fn pan_end<T>(&mut self, row: &RobotRow<T>, direction: PanDirection, delta_x: f32) {
        let event = PanEvent::ended(direction, delta_x).at(self.stamp());
        row.row.borrow_mut().on_pan_end(&event);
    }

    /// Full start → move → end gesture with a single cumulative delta.
    pub fn swipe<T>(&mut self, row: &RobotRow<T>, direction: PanDirection, delta_x: f32) {
        self.pan_start(row, direction);
        self.pan_move(row, direction, delta_x);
        self.pan_end(row, direction, delta_x);
    }

    /// A document click outside every row.
    pub fn click_outside(&mut self) {
        let click = ClickEvent::outside().at(self.stamp());
        coordinator::dispatch_document_click(&click);
    }

    /// A document click landing inside the given row.
    pub fn click_inside<T>(&mut self, row: &RobotRow<T>) {
        let click = ClickEvent::inside(row.id()).at(self.stamp());
        coordinator::dispatch_document_click(&click);
    }

    /// Click an action button in the row's revealed panel.
    pub fn click_action<T>(&mut self, row: &RobotRow<T>, name: &str) {
        let click = ClickEvent::inside(row.id()).at(self.stamp());
        row.row.borrow_mut().activate_action(name, &click);
    }
}
