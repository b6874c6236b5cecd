//! Action descriptors for revealed swipe panels.

use std::fmt;
use std::rc::Rc;

use crate::input::ClickEvent;

/// Handler invoked when an action button is activated.
///
/// Receives the originating click and either the action's own data override
/// or the row's context data.
pub type ActionHandler<T> = Rc<dyn Fn(&ClickEvent, &T)>;

/// One button in a revealed action panel.
///
/// `name` identifies the action for activation lookups; names should be
/// unique within a panel but this is not enforced — the first match wins.
/// `label`, `icon`, and `css_class` are presentation-only and ignored by
/// the engine.
pub struct SwipeAction<T> {
    pub name: String,
    pub label: Option<String>,
    pub icon: Option<String>,
    pub css_class: Option<String>,
    pub data: Option<T>,
    handler: ActionHandler<T>,
}

impl<T> SwipeAction<T> {
    pub fn new(name: impl Into<String>, handler: impl Fn(&ClickEvent, &T) + 'static) -> Self {
        Self {
            name: name.into(),
            label: None,
            icon: None,
            css_class: None,
            data: None,
            handler: Rc::new(handler),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_css_class(mut self, css_class: impl Into<String>) -> Self {
        self.css_class = Some(css_class.into());
        self
    }

    /// Override the context data passed to this action's handler.
    pub fn with_data(mut self, data: T) -> Self {
        self.data = Some(data);
        self
    }

    /// Invoke the handler with this action's data override, falling back to
    /// the row's context data.
    pub fn invoke(&self, click: &ClickEvent, context: &T) {
        let data = self.data.as_ref().unwrap_or(context);
        (self.handler)(click, data);
    }
}

impl<T: Clone> Clone for SwipeAction<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            label: self.label.clone(),
            icon: self.icon.clone(),
            css_class: self.css_class.clone(),
            data: self.data.clone(),
            handler: Rc::clone(&self.handler),
        }
    }
}

impl<T> fmt::Debug for SwipeAction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeAction")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("icon", &self.icon)
            .field("css_class", &self.css_class)
            .field("has_data", &self.data.is_some())
            .finish()
    }
}
