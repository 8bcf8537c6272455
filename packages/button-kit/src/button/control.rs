//! The output of one render pass and its query surface.

use crate::event::{Dispatch, DomEvent, MouseDownHandler};
use crate::types::{AttrValue, Attributes, Content, ControlType, Element};

/// Tag of every rendered control.
pub const CONTROL_TAG: &str = "button";

/// A rendered button control.
#[derive(Debug, Clone)]
pub struct RenderedControl {
    pub(crate) control_type: ControlType,
    pub(crate) disabled: bool,
    pub(crate) classes: Vec<String>,
    pub(crate) attributes: Attributes,
    pub(crate) children: Content,
    pub(crate) on_mouse_down: Option<MouseDownHandler>,
}

impl RenderedControl {
    pub fn tag(&self) -> &'static str {
        CONTROL_TAG
    }

    pub fn control_type(&self) -> ControlType {
        self.control_type
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Space-joined class attribute.
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    pub fn class_list(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Children exactly as configured.
    pub fn children(&self) -> &Content {
        &self.children
    }

    /// Text of all descendant text nodes.
    pub fn text(&self) -> String {
        self.children.text()
    }

    /// Pass-through attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    /// Forwarded pass-through attributes.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Look up any prop of the control by name, component-owned or forwarded.
    ///
    /// `children` resolves to the text content.
    pub fn prop(&self, name: &str) -> Option<AttrValue> {
        match name {
            "type" => Some(AttrValue::from(self.control_type.as_str())),
            "disabled" => Some(AttrValue::Bool(self.disabled)),
            "class" | "className" => Some(AttrValue::Text(self.class_name())),
            "children" => Some(AttrValue::Text(self.text())),
            _ => self.attributes.get(name).cloned(),
        }
    }

    /// The attached mouse-down handler.
    pub fn on_mouse_down(&self) -> Option<&MouseDownHandler> {
        self.on_mouse_down.as_ref()
    }

    /// Invoke the attached handler directly, as a test renderer would.
    ///
    /// Does not consult the disabled flag. Returns whether a handler ran.
    pub fn simulate_mouse_down(&self, event: &mut dyn DomEvent) -> bool {
        match &self.on_mouse_down {
            Some(handler) => {
                handler.call(event);
                true
            }
            None => false,
        }
    }

    /// Deliver a mouse-down the way a host environment does: disabled
    /// controls never receive it.
    pub fn dispatch_mouse_down(&self, event: &mut dyn DomEvent) -> Dispatch {
        if self.disabled {
            tracing::trace!("mouse-down withheld from disabled control");
            return Dispatch::Withheld;
        }

        if self.simulate_mouse_down(event) {
            tracing::trace!(prevented = event.default_prevented(), "mouse-down handled");
            Dispatch::Handled
        } else {
            Dispatch::Unhandled
        }
    }

    /// Convert into a generic element tree.
    ///
    /// Attribute order: `type`, `class`, `disabled` (only when set), then
    /// pass-through attributes in insertion order.
    pub fn to_element(&self) -> Element {
        let mut element = Element::new(CONTROL_TAG)
            .with_attr("type", self.control_type.as_str())
            .with_attr("class", self.class_name());
        if self.disabled {
            element.attributes.set("disabled", true);
        }
        for (name, value) in self.attributes.iter() {
            element.attributes.set(name, value.clone());
        }
        element.with_children(self.children.clone())
    }

    /// Render as HTML markup.
    pub fn to_html(&self) -> String {
        self.to_element().to_html()
    }
}
