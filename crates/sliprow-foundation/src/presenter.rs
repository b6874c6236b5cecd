//! Presentation seam.
//!
//! The engine emits [`RevealFrame`] values; a presenter applies them to
//! whatever surface the host renders with and reports panel measurements
//! back. Swapping the presenter swaps the rendering technology without
//! touching the state machine.

use sliprow_core::PanDirection;

use crate::reveal::RevealFrame;

pub trait SwipePresenter {
    /// Measured width of the action panel for a direction, or `None` while
    /// the panel has not been laid out.
    fn panel_width(&self, direction: PanDirection) -> Option<f32>;

    /// Apply a frame to the rendered surface.
    fn apply(&mut self, frame: &RevealFrame);
}

/// Presenter that renders nothing and never measures a panel.
///
/// Useful for headless rows and as the default in examples; the engine
/// falls back to `min_swipe_distance + UNMEASURED_PANEL_SLACK` offsets.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPresenter;

impl SwipePresenter for NullPresenter {
    fn panel_width(&self, _direction: PanDirection) -> Option<f32> {
        None
    }

    fn apply(&mut self, _frame: &RevealFrame) {}
}
