//! Reveal state machine.
//!
//! The machine holds the per-row visual state and hands out pure
//! [`RevealFrame`] values; it never touches a rendered surface itself.
//! Presenters apply frames, which keeps the state machine independent of
//! any rendering technology.

use sliprow_core::PanDirection;

/// Visual state of one row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    /// Content at zero offset, no panel visible.
    Resting,
    /// A gesture in an enabled direction is in flight.
    Dragging(PanDirection),
    /// An action panel is fully shown; content offset by its width.
    Revealed(PanDirection),
}

impl RevealState {
    pub fn is_resting(self) -> bool {
        matches!(self, RevealState::Resting)
    }

    pub fn is_dragging(self) -> bool {
        matches!(self, RevealState::Dragging(_))
    }

    pub fn is_revealed(self) -> bool {
        matches!(self, RevealState::Revealed(_))
    }

    /// Direction of a drag or reveal, if any.
    pub fn direction(self) -> Option<PanDirection> {
        match self {
            RevealState::Resting => None,
            RevealState::Dragging(direction) | RevealState::Revealed(direction) => Some(direction),
        }
    }
}

/// One pure `{state, offset}` value, the engine's only output to the
/// presentation layer.
///
/// Offsets are signed: negative while swiping left, positive while swiping
/// right, zero at rest.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealFrame {
    pub state: RevealState,
    pub offset: f32,
}

impl RevealFrame {
    pub const RESTING: Self = Self {
        state: RevealState::Resting,
        offset: 0.0,
    };

    /// Which action panel should be visible for this frame.
    pub fn visible_panel(&self) -> Option<PanDirection> {
        self.state.direction()
    }
}

/// Per-row state machine, reused across the row's entire lifetime.
///
/// Initial state is `Resting` and there is no terminal state. Transition
/// methods return the frame to present, or `None` when nothing changed.
#[derive(Debug)]
pub struct RevealStateMachine {
    frame: RevealFrame,
}

impl Default for RevealStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl RevealStateMachine {
    pub fn new() -> Self {
        Self {
            frame: RevealFrame::RESTING,
        }
    }

    pub fn frame(&self) -> RevealFrame {
        self.frame
    }

    pub fn state(&self) -> RevealState {
        self.frame.state
    }

    /// Enter `Dragging(direction)` at zero offset, from any state.
    ///
    /// Callers must only pass enabled directions; the machine keeps the
    /// invariant that a drag direction is always an enabled one.
    pub fn begin_drag(&mut self, direction: PanDirection) -> RevealFrame {
        self.frame = RevealFrame {
            state: RevealState::Dragging(direction),
            offset: 0.0,
        };
        self.frame
    }

    /// Update the offset (and direction) of an in-flight drag.
    ///
    /// Returns `None` when no drag is in flight; moves arriving outside a
    /// drag are ignored rather than an error.
    pub fn drag_to(&mut self, direction: PanDirection, offset: f32) -> Option<RevealFrame> {
        if !self.frame.state.is_dragging() {
            return None;
        }
        self.frame = RevealFrame {
            state: RevealState::Dragging(direction),
            offset,
        };
        Some(self.frame)
    }

    /// Snap to `Revealed(direction)` at the panel's measured width.
    pub fn reveal(&mut self, direction: PanDirection, offset: f32) -> RevealFrame {
        self.frame = RevealFrame {
            state: RevealState::Revealed(direction),
            offset,
        };
        self.frame
    }

    /// Force back to `Resting` with zero offset.
    ///
    /// Idempotent: returns `None` on an already-resting machine so callers
    /// can skip presenting and emitting events.
    pub fn rest(&mut self) -> Option<RevealFrame> {
        if self.frame.state.is_resting() {
            return None;
        }
        self.frame = RevealFrame::RESTING;
        Some(self.frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_resting() {
        let machine = RevealStateMachine::new();
        assert_eq!(machine.frame(), RevealFrame::RESTING);
        assert!(machine.state().is_resting());
        assert_eq!(machine.frame().visible_panel(), None);
    }

    #[test]
    fn drag_reveal_rest_cycle() {
        let mut machine = RevealStateMachine::new();

        let frame = machine.begin_drag(PanDirection::Left);
        assert_eq!(frame.state, RevealState::Dragging(PanDirection::Left));
        assert_eq!(frame.offset, 0.0);

        let frame = machine
            .drag_to(PanDirection::Left, -72.0)
            .expect("drag in flight");
        assert_eq!(frame.offset, -72.0);
        assert_eq!(frame.visible_panel(), Some(PanDirection::Left));

        let frame = machine.reveal(PanDirection::Left, -120.0);
        assert_eq!(frame.state, RevealState::Revealed(PanDirection::Left));
        assert_eq!(frame.offset, -120.0);

        let frame = machine.rest().expect("was revealed");
        assert_eq!(frame, RevealFrame::RESTING);
    }

    #[test]
    fn rest_is_idempotent() {
        let mut machine = RevealStateMachine::new();
        assert!(machine.rest().is_none());

        machine.begin_drag(PanDirection::Right);
        assert!(machine.rest().is_some());
        assert!(machine.rest().is_none());
    }

    #[test]
    fn moves_outside_a_drag_are_ignored() {
        let mut machine = RevealStateMachine::new();
        assert!(machine.drag_to(PanDirection::Left, -30.0).is_none());

        machine.reveal(PanDirection::Left, -120.0);
        assert!(machine.drag_to(PanDirection::Left, -30.0).is_none());
        assert_eq!(machine.state(), RevealState::Revealed(PanDirection::Left));
    }

    #[test]
    fn drag_direction_can_change() {
        let mut machine = RevealStateMachine::new();
        machine.begin_drag(PanDirection::Left);
        let frame = machine
            .drag_to(PanDirection::Right, 64.0)
            .expect("drag in flight");
        assert_eq!(frame.state, RevealState::Dragging(PanDirection::Right));
        assert_eq!(frame.offset, 64.0);
    }
}
