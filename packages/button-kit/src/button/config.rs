//! Declarative inputs for one render pass.

use crate::event::{DomEvent, MouseDownHandler};
use crate::types::{AttrValue, Attributes, Content};

/// Resolved rendering inputs for a single button render.
///
/// Built with the consuming setters below and handed to
/// [`Button::render`](super::Button::render), which takes it by value.
#[derive(Debug, Clone)]
pub struct ButtonConfiguration {
    pub(crate) children: Content,
    pub(crate) class_name: Option<String>,
    pub(crate) is_disabled: bool,
    pub(crate) form_submit: bool,
    pub(crate) focus_on_click: bool,
    pub(crate) on_mouse_down: Option<MouseDownHandler>,
    pub(crate) rest: Attributes,
}

impl ButtonConfiguration {
    /// Configuration with the given children and every option at its default.
    pub fn new(children: impl Into<Content>) -> Self {
        Self {
            children: children.into(),
            class_name: None,
            is_disabled: false,
            form_submit: false,
            focus_on_click: true,
            on_mouse_down: None,
            rest: Attributes::new(),
        }
    }

    /// Extra class merged with the root class.
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn disabled(mut self, is_disabled: bool) -> Self {
        self.is_disabled = is_disabled;
        self
    }

    /// Render as a form submit control instead of a plain button.
    pub fn form_submit(mut self, form_submit: bool) -> Self {
        self.form_submit = form_submit;
        self
    }

    /// When false, every mouse-down has its default action prevented so the
    /// control does not take focus.
    pub fn focus_on_click(mut self, focus_on_click: bool) -> Self {
        self.focus_on_click = focus_on_click;
        self
    }

    pub fn on_mouse_down(self, callback: impl Fn(&mut dyn DomEvent) + 'static) -> Self {
        self.mouse_down_handler(MouseDownHandler::new(callback))
    }

    /// Attach an existing (possibly shared) handler.
    pub fn mouse_down_handler(mut self, handler: MouseDownHandler) -> Self {
        self.on_mouse_down = Some(handler);
        self
    }

    /// Pass-through attribute forwarded onto the control unchanged.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.rest.set(name, value);
        self
    }

    /// Add several pass-through attributes.
    pub fn attrs(mut self, attributes: impl IntoIterator<Item = (String, AttrValue)>) -> Self {
        for (name, value) in attributes {
            self.rest.set(name, value);
        }
        self
    }

    pub fn children(&self) -> &Content {
        &self.children
    }

    pub fn is_disabled(&self) -> bool {
        self.is_disabled
    }

    pub fn is_form_submit(&self) -> bool {
        self.form_submit
    }

    pub fn focuses_on_click(&self) -> bool {
        self.focus_on_click
    }

    pub fn rest(&self) -> &Attributes {
        &self.rest
    }
}
