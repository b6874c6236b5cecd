//! Pan and click input types consumed by the swipe engine.
//!
//! The host's gesture recognizer is expected to serialize pan lifecycle
//! events per row (start, zero or more moves, end) and to restrict them to
//! horizontal panning. Timestamps ride on the events themselves; the engine
//! never reads a wall clock, which keeps time fully scriptable in tests.

/// Identity of a mounted row, used only for equality checks.
pub type RowId = u64;

/// Direction reported by the gesture recognizer.
///
/// `None` is what recognizers typically report on a pan start before any
/// movement has accumulated; the engine treats it like a disabled direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanDirection {
    Left,
    Right,
    None,
}

impl PanDirection {
    /// Sign of offsets applied in this direction: leftward drags produce
    /// negative offsets, rightward drags positive ones.
    pub fn sign(self) -> f32 {
        match self {
            PanDirection::Left => -1.0,
            PanDirection::Right => 1.0,
            PanDirection::None => 0.0,
        }
    }

    /// Whether a cumulative `delta_x` agrees in sign with this direction.
    ///
    /// A zero delta matches neither direction.
    pub fn matches_delta(self, delta_x: f32) -> bool {
        match self {
            PanDirection::Left => delta_x < 0.0,
            PanDirection::Right => delta_x > 0.0,
            PanDirection::None => false,
        }
    }

    pub fn is_horizontal(self) -> bool {
        !matches!(self, PanDirection::None)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanPhase {
    Start,
    Move,
    End,
}

/// One pan lifecycle event.
///
/// `delta_x` is the cumulative signed displacement since gesture start
/// (negative = leftward), not a per-event delta.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanEvent {
    pub phase: PanPhase,
    pub direction: PanDirection,
    pub delta_x: f32,
    pub timestamp_millis: u64,
}

impl PanEvent {
    pub fn new(phase: PanPhase, direction: PanDirection, delta_x: f32) -> Self {
        Self {
            phase,
            direction,
            delta_x,
            timestamp_millis: 0,
        }
    }

    pub fn start(direction: PanDirection) -> Self {
        Self::new(PanPhase::Start, direction, 0.0)
    }

    pub fn moved(direction: PanDirection, delta_x: f32) -> Self {
        Self::new(PanPhase::Move, direction, delta_x)
    }

    pub fn ended(direction: PanDirection, delta_x: f32) -> Self {
        Self::new(PanPhase::End, direction, delta_x)
    }

    /// Stamp the event with a host-supplied time.
    pub fn at(mut self, timestamp_millis: u64) -> Self {
        self.timestamp_millis = timestamp_millis;
        self
    }
}

/// A document-level click, reported by the host for outside-click dismissal
/// and action activation.
///
/// `target` names the row the click landed in, if any; the coordinator only
/// compares it for equality against the revealed row's id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClickEvent {
    pub target: Option<RowId>,
    pub timestamp_millis: u64,
}

impl ClickEvent {
    pub fn new(target: Option<RowId>) -> Self {
        Self {
            target,
            timestamp_millis: 0,
        }
    }

    /// A click that landed inside the given row.
    pub fn inside(row: RowId) -> Self {
        Self::new(Some(row))
    }

    /// A click that landed outside every mounted row.
    pub fn outside() -> Self {
        Self::new(None)
    }

    pub fn at(mut self, timestamp_millis: u64) -> Self {
        self.timestamp_millis = timestamp_millis;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_signs() {
        assert_eq!(PanDirection::Left.sign(), -1.0);
        assert_eq!(PanDirection::Right.sign(), 1.0);
        assert_eq!(PanDirection::None.sign(), 0.0);
    }

    #[test]
    fn delta_sign_matching() {
        assert!(PanDirection::Left.matches_delta(-12.0));
        assert!(!PanDirection::Left.matches_delta(12.0));
        assert!(PanDirection::Right.matches_delta(0.5));
        assert!(!PanDirection::Right.matches_delta(-0.5));
        assert!(!PanDirection::Left.matches_delta(0.0));
        assert!(!PanDirection::None.matches_delta(-50.0));
    }

    #[test]
    fn event_builders_stamp_time() {
        let event = PanEvent::moved(PanDirection::Left, -30.0).at(120);
        assert_eq!(event.phase, PanPhase::Move);
        assert_eq!(event.delta_x, -30.0);
        assert_eq!(event.timestamp_millis, 120);

        let click = ClickEvent::inside(7).at(200);
        assert_eq!(click.target, Some(7));
        assert_eq!(click.timestamp_millis, 200);
        assert_eq!(ClickEvent::outside().target, None);
    }
}
