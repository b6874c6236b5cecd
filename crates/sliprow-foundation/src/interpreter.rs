//! Decision logic mapping cumulative pan deltas to engine outcomes.
//!
//! These are pure functions over the row configuration and the presenter's
//! panel measurements; the row engine applies their results to the state
//! machine and fires callbacks.

use sliprow_core::gesture_constants::UNMEASURED_PANEL_SLACK;
use sliprow_core::{PanDirection, SwipeConfig};

/// What a gesture end resolves to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum EndOutcome {
    /// Threshold crossed, panel configured to show.
    Reveal { direction: PanDirection, offset: f32 },
    /// Threshold crossed, panel configured hidden: fire the direction's
    /// default action and spring back.
    DefaultAction { direction: PanDirection },
    /// Threshold not reached; return to rest. A normal outcome, not an
    /// error.
    Springback,
}

/// Panel width stand-in when the panel has not been laid out yet.
pub(crate) fn panel_width_or_fallback(min_swipe_distance: f32, measured: Option<f32>) -> f32 {
    measured.unwrap_or(min_swipe_distance + UNMEASURED_PANEL_SLACK)
}

/// Offset a move event applies, or `None` when the move is gated out.
///
/// A move only produces an offset when its direction is enabled, the delta
/// sign matches the direction, and the magnitude strictly exceeds the
/// activation threshold. The magnitude is clamped to the panel width so the
/// content never overshoots the panel underneath it.
pub(crate) fn drag_offset<T>(
    config: &SwipeConfig<T>,
    direction: PanDirection,
    delta_x: f32,
    measured_width: Option<f32>,
) -> Option<f32> {
    if !config.is_enabled(direction) || !direction.matches_delta(delta_x) {
        return None;
    }
    if delta_x.abs() <= config.min_swipe_distance {
        return None;
    }
    let clamp = panel_width_or_fallback(config.min_swipe_distance, measured_width);
    let distance = delta_x.abs().min(clamp);
    Some(distance * direction.sign())
}

/// Resolve a gesture end from the final cumulative delta.
///
/// At most one direction can satisfy the threshold because the two
/// directions require opposite delta signs.
pub(crate) fn end_outcome<T>(
    config: &SwipeConfig<T>,
    delta_x: f32,
    measured_width: impl Fn(PanDirection) -> Option<f32>,
) -> EndOutcome {
    for direction in [PanDirection::Left, PanDirection::Right] {
        let Some(cfg) = config.direction(direction) else {
            continue;
        };
        if !cfg.enabled || !direction.matches_delta(delta_x) {
            continue;
        }
        if delta_x.abs() < config.min_swipe_distance {
            continue;
        }
        if cfg.show_actions {
            let width = panel_width_or_fallback(config.min_swipe_distance, measured_width(direction));
            return EndOutcome::Reveal {
                direction,
                offset: width * direction.sign(),
            };
        }
        return EndOutcome::DefaultAction { direction };
    }
    EndOutcome::Springback
}

#[cfg(test)]
mod tests {
    use super::*;
    use sliprow_core::DirectionConfig;

    fn left_only() -> SwipeConfig<()> {
        SwipeConfig::new(()).with_left(DirectionConfig::active())
    }

    #[test]
    fn move_below_threshold_is_gated() {
        let config = left_only();
        assert_eq!(
            drag_offset(&config, PanDirection::Left, -50.0, Some(120.0)),
            None
        );
        assert_eq!(
            drag_offset(&config, PanDirection::Left, -49.0, Some(120.0)),
            None
        );
    }

    #[test]
    fn move_clamps_to_panel_width() {
        let config = left_only();
        assert_eq!(
            drag_offset(&config, PanDirection::Left, -80.0, Some(120.0)),
            Some(-80.0)
        );
        assert_eq!(
            drag_offset(&config, PanDirection::Left, -200.0, Some(120.0)),
            Some(-120.0)
        );
    }

    #[test]
    fn move_uses_fallback_when_unmeasured() {
        let config = left_only();
        // 50 + 10 slack
        assert_eq!(
            drag_offset(&config, PanDirection::Left, -80.0, None),
            Some(-60.0)
        );
    }

    #[test]
    fn move_requires_matching_sign_and_enabled_direction() {
        let config = left_only();
        assert_eq!(
            drag_offset(&config, PanDirection::Left, 80.0, Some(120.0)),
            None
        );
        assert_eq!(
            drag_offset(&config, PanDirection::Right, 80.0, Some(120.0)),
            None
        );
        assert_eq!(
            drag_offset(&config, PanDirection::None, -80.0, Some(120.0)),
            None
        );
    }

    #[test]
    fn end_at_threshold_reveals() {
        let config = left_only();
        let outcome = end_outcome(&config, -50.0, |_| Some(120.0));
        assert_eq!(
            outcome,
            EndOutcome::Reveal {
                direction: PanDirection::Left,
                offset: -120.0
            }
        );
    }

    #[test]
    fn end_below_threshold_springs_back() {
        let config = left_only();
        assert_eq!(
            end_outcome(&config, -49.9, |_| Some(120.0)),
            EndOutcome::Springback
        );
    }

    #[test]
    fn end_with_hidden_actions_fires_default() {
        let config = SwipeConfig::new(())
            .with_left(DirectionConfig::active().with_show_actions(false));
        assert_eq!(
            end_outcome(&config, -80.0, |_| Some(120.0)),
            EndOutcome::DefaultAction {
                direction: PanDirection::Left
            }
        );
    }

    #[test]
    fn end_in_disabled_direction_springs_back() {
        let config = left_only();
        assert_eq!(
            end_outcome(&config, 80.0, |_| Some(120.0)),
            EndOutcome::Springback
        );
    }

    #[test]
    fn end_reveal_uses_fallback_width() {
        let config = left_only();
        assert_eq!(
            end_outcome(&config, -80.0, |_| None),
            EndOutcome::Reveal {
                direction: PanDirection::Left,
                offset: -60.0
            }
        );
    }
}
