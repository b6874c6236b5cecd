//! Swipe-to-reveal engine: gesture interpretation, reveal state, and
//! page-wide coordination for Sliprow.

pub mod coordinator;
mod dismiss;
mod interpreter;
pub mod presenter;
pub mod reveal;
pub mod row;

pub use presenter::{NullPresenter, SwipePresenter};
pub use reveal::{RevealFrame, RevealState, RevealStateMachine};
pub use row::SwipeRow;

pub mod prelude {
    pub use crate::coordinator::dispatch_document_click;
    pub use crate::presenter::{NullPresenter, SwipePresenter};
    pub use crate::reveal::{RevealFrame, RevealState};
    pub use crate::row::SwipeRow;
    pub use sliprow_core::prelude::*;
}
