//! Row configuration, validation, and the callback surface.

use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;
use thiserror::Error;

use crate::action::SwipeAction;
use crate::gesture_constants::DEFAULT_MIN_SWIPE_DISTANCE;
use crate::input::{ClickEvent, PanDirection};

/// Ordered action list; typical panels carry one to three buttons.
pub type ActionList<T> = SmallVec<[SwipeAction<T>; 4]>;

/// Handler receiving the row's context data.
pub type ContextHandler<T> = Rc<dyn Fn(&T)>;

/// Handler receiving the originating click and the row's context data.
pub type ActionDoneHandler<T> = Rc<dyn Fn(&ClickEvent, &T)>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("min swipe distance must be a finite positive number, got {0}")]
    InvalidMinSwipeDistance(f32),
}

/// Settings for one swipe direction.
///
/// With `show_actions` set, crossing the threshold reveals the action panel;
/// without it, the threshold instead fires `on_default_action` and the row
/// springs back. `fallback_label`/`fallback_icon` describe the default
/// button a presenter renders when no actions are configured.
pub struct DirectionConfig<T> {
    pub enabled: bool,
    pub show_actions: bool,
    pub actions: ActionList<T>,
    pub fallback_label: Option<String>,
    pub fallback_icon: Option<String>,
    pub on_default_action: Option<ContextHandler<T>>,
}

impl<T> Default for DirectionConfig<T> {
    fn default() -> Self {
        Self {
            enabled: false,
            show_actions: true,
            actions: SmallVec::new(),
            fallback_label: None,
            fallback_icon: None,
            on_default_action: None,
        }
    }
}

impl<T> DirectionConfig<T> {
    /// An enabled direction with default settings.
    pub fn active() -> Self {
        Self {
            enabled: true,
            ..Self::default()
        }
    }

    pub fn with_actions(mut self, actions: impl IntoIterator<Item = SwipeAction<T>>) -> Self {
        self.actions = actions.into_iter().collect();
        self
    }

    pub fn with_show_actions(mut self, show_actions: bool) -> Self {
        self.show_actions = show_actions;
        self
    }

    pub fn with_fallback(
        mut self,
        label: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        self.fallback_label = Some(label.into());
        self.fallback_icon = Some(icon.into());
        self
    }

    pub fn with_default_action(mut self, handler: impl Fn(&T) + 'static) -> Self {
        self.on_default_action = Some(Rc::new(handler));
        self
    }

    /// First action with the given name, if any.
    pub fn find_action(&self, name: &str) -> Option<&SwipeAction<T>> {
        self.actions.iter().find(|action| action.name == name)
    }
}

impl<T> fmt::Debug for DirectionConfig<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectionConfig")
            .field("enabled", &self.enabled)
            .field("show_actions", &self.show_actions)
            .field("actions", &self.actions.len())
            .field("fallback_label", &self.fallback_label)
            .finish()
    }
}

/// Full configuration of a swipeable row.
///
/// `data` is an opaque context value threaded to every callback; individual
/// actions may override it via [`SwipeAction::with_data`].
pub struct SwipeConfig<T> {
    pub min_swipe_distance: f32,
    pub left: DirectionConfig<T>,
    pub right: DirectionConfig<T>,
    pub data: T,
    pub on_menu_opened: Option<ContextHandler<T>>,
    pub on_menu_closed: Option<ContextHandler<T>>,
    pub on_action_done: Option<ActionDoneHandler<T>>,
}

impl<T> SwipeConfig<T> {
    pub fn new(data: T) -> Self {
        Self {
            min_swipe_distance: DEFAULT_MIN_SWIPE_DISTANCE,
            left: DirectionConfig::default(),
            right: DirectionConfig::default(),
            data,
            on_menu_opened: None,
            on_menu_closed: None,
            on_action_done: None,
        }
    }

    pub fn with_min_swipe_distance(mut self, distance: f32) -> Self {
        self.min_swipe_distance = distance;
        self
    }

    pub fn with_left(mut self, left: DirectionConfig<T>) -> Self {
        self.left = left;
        self
    }

    pub fn with_right(mut self, right: DirectionConfig<T>) -> Self {
        self.right = right;
        self
    }

    pub fn on_menu_opened(mut self, handler: impl Fn(&T) + 'static) -> Self {
        self.on_menu_opened = Some(Rc::new(handler));
        self
    }

    pub fn on_menu_closed(mut self, handler: impl Fn(&T) + 'static) -> Self {
        self.on_menu_closed = Some(Rc::new(handler));
        self
    }

    pub fn on_action_done(mut self, handler: impl Fn(&ClickEvent, &T) + 'static) -> Self {
        self.on_action_done = Some(Rc::new(handler));
        self
    }

    /// Per-direction settings; `PanDirection::None` has none.
    pub fn direction(&self, direction: PanDirection) -> Option<&DirectionConfig<T>> {
        match direction {
            PanDirection::Left => Some(&self.left),
            PanDirection::Right => Some(&self.right),
            PanDirection::None => None,
        }
    }

    pub fn is_enabled(&self, direction: PanDirection) -> bool {
        self.direction(direction).is_some_and(|cfg| cfg.enabled)
    }

    /// Check the numeric settings.
    ///
    /// Also warns about action lists that can never be shown, which is a
    /// configuration smell rather than an error: the default-action mode
    /// simply ignores them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_swipe_distance.is_finite() || self.min_swipe_distance <= 0.0 {
            return Err(ConfigError::InvalidMinSwipeDistance(self.min_swipe_distance));
        }
        for (direction, cfg) in [
            (PanDirection::Left, &self.left),
            (PanDirection::Right, &self.right),
        ] {
            if cfg.enabled && !cfg.show_actions && !cfg.actions.is_empty() {
                log::warn!(
                    "swipe {:?} has {} action(s) configured but show_actions is off; \
                     the panel will fire the default action instead",
                    direction,
                    cfg.actions.len()
                );
            }
        }
        Ok(())
    }
}

impl<T> fmt::Debug for SwipeConfig<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeConfig")
            .field("min_swipe_distance", &self.min_swipe_distance)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}
