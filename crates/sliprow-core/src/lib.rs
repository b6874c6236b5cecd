//! Input events, configuration, and action types for Sliprow.

pub mod action;
pub mod config;
pub mod gesture_constants;
pub mod input;

pub use action::{ActionHandler, SwipeAction};
pub use config::{
    ActionDoneHandler, ActionList, ConfigError, ContextHandler, DirectionConfig, SwipeConfig,
};
pub use input::{ClickEvent, PanDirection, PanEvent, PanPhase, RowId};

pub mod prelude {
    pub use crate::action::SwipeAction;
    pub use crate::config::{ConfigError, DirectionConfig, SwipeConfig};
    pub use crate::input::{ClickEvent, PanDirection, PanEvent, PanPhase, RowId};
}
