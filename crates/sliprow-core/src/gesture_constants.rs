//! Shared gesture constants for consistent swipe handling.
//!
//! These values are in logical pixels and milliseconds. They are deliberately
//! centralized so the interpreter, the coordinator, and tests all agree on
//! the same thresholds.

/// Default activation threshold in logical pixels.
///
/// A gesture whose cumulative horizontal displacement stays below this
/// distance springs back on release instead of revealing the action panel.
/// 50 px is large enough that list scrolling does not accidentally reveal
/// actions, while staying comfortably reachable with a thumb drag.
pub const DEFAULT_MIN_SWIPE_DISTANCE: f32 = 50.0;

/// Extra distance added to the threshold when an action panel has not been
/// laid out yet.
///
/// `min_swipe_distance + UNMEASURED_PANEL_SLACK` stands in for the panel
/// width both as the drag clamp and as the revealed offset, so a row whose
/// panel was never measured still opens far enough to be usable.
pub const UNMEASURED_PANEL_SLACK: f32 = 10.0;

/// Delay in milliseconds before the outside-click dismissal guard becomes
/// eligible.
///
/// The pointer release that reveals the menu is followed by the platform's
/// own click dispatch; the guard must outlast that propagation or the menu
/// would close in the same interaction that opened it.
pub const DISMISS_ARM_DELAY_MS: u64 = 50;
