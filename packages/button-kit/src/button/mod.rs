//! Button component.
//!
//! Renders a [`ButtonConfiguration`] into a [`RenderedControl`]: a native
//! button element with a merged class list, forwarded attributes and an
//! optional mouse-down handler.

mod config;
mod control;

pub use config::ButtonConfiguration;
pub use control::{RenderedControl, CONTROL_TAG};

use crate::event::MouseDownHandler;
use crate::types::{is_valid_attribute_name, Attributes, ControlType};
use serde::{Deserialize, Serialize};

/// Default root class of every rendered control.
pub const ROOT_CLASS: &str = "root";

/// Prop names owned by the component. Pass-through attributes cannot
/// override them.
pub const RESERVED_PROPS: &[&str] = &[
    "type",
    "disabled",
    "class",
    "className",
    "children",
    "onMouseDown",
];

/// Class map for the component.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ButtonStyles {
    /// Class always present on the rendered control
    pub root: String,
}

impl Default for ButtonStyles {
    fn default() -> Self {
        Self {
            root: ROOT_CLASS.to_string(),
        }
    }
}

/// The button component.
///
/// Stateless: each call to [`render`](Self::render) maps one configuration to
/// one control.
#[derive(Debug, Clone, Default)]
pub struct Button {
    styles: ButtonStyles,
}

impl Button {
    /// Button with the default root class.
    pub fn new() -> Self {
        Self::default()
    }

    /// Button with a custom class map.
    ///
    /// A root with no class tokens falls back to [`ROOT_CLASS`], so every
    /// rendered control carries a root class.
    pub fn with_styles(mut styles: ButtonStyles) -> Self {
        if styles.root.split_whitespace().next().is_none() {
            tracing::warn!(root = %styles.root, "empty root class, using default");
            styles.root = ROOT_CLASS.to_string();
        }
        Self { styles }
    }

    pub fn styles(&self) -> &ButtonStyles {
        &self.styles
    }

    /// Render one configuration.
    pub fn render(&self, config: ButtonConfiguration) -> RenderedControl {
        let ButtonConfiguration {
            children,
            class_name,
            is_disabled,
            form_submit,
            focus_on_click,
            on_mouse_down,
            rest,
        } = config;

        let control = RenderedControl {
            control_type: ControlType::from_form_submit(form_submit),
            disabled: is_disabled,
            classes: merge_classes(&self.styles.root, class_name.as_deref()),
            attributes: forward_attributes(rest),
            children,
            on_mouse_down: mouse_down_handler(focus_on_click, on_mouse_down),
        };

        tracing::debug!(
            control_type = %control.control_type,
            disabled = control.disabled,
            class = %control.class_name(),
            "rendered button"
        );

        control
    }
}

/// Render with the default styles.
pub fn button(config: ButtonConfiguration) -> RenderedControl {
    Button::new().render(config)
}

/// Root class first, then the caller's tokens. Repeated tokens keep their
/// first position; duplicates are collapsed on purpose since only class
/// membership is observable.
fn merge_classes(root: &str, class_name: Option<&str>) -> Vec<String> {
    let mut classes: Vec<String> = Vec::new();
    let tokens = root
        .split_whitespace()
        .chain(class_name.unwrap_or_default().split_whitespace());
    for token in tokens {
        if !classes.iter().any(|c| c == token) {
            classes.push(token.to_string());
        }
    }
    classes
}

fn forward_attributes(rest: Attributes) -> Attributes {
    let mut forwarded = Attributes::new();
    for (name, value) in rest.iter() {
        if RESERVED_PROPS.contains(&name) {
            tracing::debug!(
                attribute = name,
                "pass-through attribute shadows a component prop, dropped"
            );
            continue;
        }
        if !is_valid_attribute_name(name) {
            tracing::warn!(attribute = name, "invalid attribute name, dropped");
            continue;
        }
        forwarded.set(name, value.clone());
    }
    forwarded
}

/// With focus-on-click the caller's handler is attached as is. Without it,
/// a wrapper prevents the default action first and then calls the caller.
fn mouse_down_handler(
    focus_on_click: bool,
    on_mouse_down: Option<MouseDownHandler>,
) -> Option<MouseDownHandler> {
    if focus_on_click {
        return on_mouse_down;
    }

    Some(MouseDownHandler::new(move |event| {
        event.prevent_default();
        if let Some(handler) = &on_mouse_down {
            handler.call(event);
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Dispatch, DomEvent, MouseDownEvent};
    use crate::types::{AttrValue, Content, Element};
    use std::cell::Cell;
    use std::rc::Rc;

    /// Event that counts `prevent_default` calls.
    #[derive(Default)]
    struct SpyEvent {
        prevent_default_calls: usize,
    }

    impl DomEvent for SpyEvent {
        fn prevent_default(&mut self) {
            self.prevent_default_calls += 1;
        }

        fn default_prevented(&self) -> bool {
            self.prevent_default_calls > 0
        }
    }

    fn event_addr(event: &dyn DomEvent) -> usize {
        event as *const _ as *const () as usize
    }

    /// Handler that counts calls and records the address of the event it saw.
    fn spy_handler() -> (MouseDownHandler, Rc<Cell<usize>>, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        let seen = Rc::new(Cell::new(0));
        let (c, s) = (calls.clone(), seen.clone());
        let handler = MouseDownHandler::new(move |event| {
            c.set(c.get() + 1);
            s.set(event_addr(event));
        });
        (handler, calls, seen)
    }

    #[test]
    fn test_render_with_default_props() {
        let control = button(ButtonConfiguration::new("Click Me"));
        assert_eq!(control.tag(), "button");
        assert_eq!(control.text(), "Click Me");
        assert_eq!(control.prop("type"), Some(AttrValue::from("button")));
        assert_eq!(control.prop("disabled"), Some(AttrValue::Bool(false)));
        assert!(control.has_class(ROOT_CLASS));
        assert!(control.on_mouse_down().is_none());
    }

    #[test]
    fn test_render_with_class_name() {
        let control = button(ButtonConfiguration::new("Test Button").class_name("custom-class"));
        assert_eq!(control.control_type(), ControlType::Button);
        assert!(control.has_class("custom-class"));
        assert!(control.has_class("root"));
        assert!(control.class_name().contains("custom-class"));
        assert_eq!(control.children(), &Content::from("Test Button"));
    }

    #[test]
    fn test_class_merge_variants() {
        for class_name in ["custom", "a b", "  spaced  ", "root", "root extra"] {
            let control = button(ButtonConfiguration::new("x").class_name(class_name));
            assert!(control.has_class("root"));
            for token in class_name.split_whitespace() {
                assert!(control.has_class(token), "missing {token}");
            }
            assert_eq!(control.class_list().iter().filter(|c| *c == "root").count(), 1);
        }

        let control = button(ButtonConfiguration::new("x").class_name(""));
        assert_eq!(control.class_list(), &["root".to_string()]);
    }

    #[test]
    fn test_custom_root_class() {
        let styles = ButtonStyles {
            root: "btn".to_string(),
        };
        let control =
            Button::with_styles(styles).render(ButtonConfiguration::new("x").class_name("wide"));
        assert_eq!(control.class_name(), "btn wide");
        assert!(!control.has_class("root"));
    }

    #[test]
    fn test_empty_root_class_falls_back() {
        for root in ["", "   "] {
            let button = Button::with_styles(ButtonStyles {
                root: root.to_string(),
            });
            assert_eq!(button.styles().root, ROOT_CLASS);

            let control = button.render(ButtonConfiguration::new("x").class_name("custom"));
            assert_eq!(control.class_list(), &["root".to_string(), "custom".to_string()]);
        }
    }

    #[test]
    fn test_repeated_caller_classes_collapse() {
        let control = button(ButtonConfiguration::new("x").class_name("a a b"));
        assert_eq!(control.class_name(), "root a b");
    }

    #[test]
    fn test_render_children() {
        for text in ["Test Button", "", "Ünïcödé <tag>"] {
            let control = button(ButtonConfiguration::new(text));
            assert_eq!(control.children().as_text(), Some(text));
            assert_eq!(control.text(), text);
        }
    }

    #[test]
    fn test_render_nested_children_verbatim() {
        let children = Content::Fragment(vec![
            Content::from(Element::new("span").with_attr("class", "icon")),
            Content::from("Save"),
        ]);
        let control = button(ButtonConfiguration::new(children.clone()));
        assert_eq!(control.children(), &children);
        assert_eq!(control.text(), "Save");
    }

    #[test]
    fn test_disabled_state() {
        let control = button(ButtonConfiguration::new("Disabled").disabled(true));
        assert!(control.is_disabled());
        assert_eq!(control.prop("disabled"), Some(AttrValue::Bool(true)));

        let control = button(ButtonConfiguration::new("Enabled").disabled(false));
        assert!(!control.is_disabled());
    }

    #[test]
    fn test_form_submit_type() {
        let control = button(ButtonConfiguration::new("Submit").form_submit(true));
        assert_eq!(control.prop("type"), Some(AttrValue::from("submit")));

        let control = button(ButtonConfiguration::new("Plain").form_submit(false));
        assert_eq!(control.prop("type"), Some(AttrValue::from("button")));
    }

    #[test]
    fn test_type_cannot_be_overridden() {
        let control = button(
            ButtonConfiguration::new("x")
                .attr("type", "reset")
                .attr("disabled", true)
                .attr("className", "sneaky"),
        );
        assert_eq!(control.control_type(), ControlType::Button);
        assert!(!control.is_disabled());
        assert!(!control.has_class("sneaky"));
        assert!(control.attributes().is_empty());
    }

    #[test]
    fn test_prevent_default_when_focus_on_click_false() {
        let (handler, calls, seen) = spy_handler();
        let control = button(
            ButtonConfiguration::new("No Focus")
                .focus_on_click(false)
                .mouse_down_handler(handler),
        );

        let mut event = SpyEvent::default();
        assert!(control.simulate_mouse_down(&mut event));
        assert_eq!(event.prevent_default_calls, 1);
        assert_eq!(calls.get(), 1);
        assert_eq!(seen.get(), event_addr(&event));
    }

    #[test]
    fn test_no_prevent_default_when_focus_on_click_true() {
        let (handler, calls, seen) = spy_handler();
        let control = button(
            ButtonConfiguration::new("Focus")
                .focus_on_click(true)
                .mouse_down_handler(handler),
        );

        let mut event = SpyEvent::default();
        control.simulate_mouse_down(&mut event);
        assert_eq!(event.prevent_default_calls, 0);
        assert_eq!(calls.get(), 1);
        assert_eq!(seen.get(), event_addr(&event));
    }

    #[test]
    fn test_no_prevent_default_by_default() {
        let (handler, calls, _) = spy_handler();
        let control = button(ButtonConfiguration::new("Test Button").mouse_down_handler(handler));

        let mut event = SpyEvent::default();
        control.simulate_mouse_down(&mut event);
        assert!(!event.default_prevented());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_prevent_default_without_caller_handler() {
        let control = button(ButtonConfiguration::new("No Focus No Handler").focus_on_click(false));
        assert!(control.on_mouse_down().is_some());

        let mut event = SpyEvent::default();
        control.simulate_mouse_down(&mut event);
        assert_eq!(event.prevent_default_calls, 1);
    }

    #[test]
    fn test_pass_through_props() {
        let control = button(
            ButtonConfiguration::new("Props Test")
                .attr("data-testid", "test-button")
                .attr("aria-label", "Test Button"),
        );
        assert_eq!(control.prop("data-testid"), Some(AttrValue::from("test-button")));
        assert_eq!(control.attribute("aria-label"), Some(&AttrValue::from("Test Button")));
        assert_eq!(control.prop("aria-hidden"), None);
    }

    #[test]
    fn test_parsed_values_render_unchanged() {
        let mut config = ButtonConfiguration::new("x");
        for pair in ["data-code=007", "data-delta=+5", "tabindex=2"] {
            let (name, value) = Attributes::parse_pair(pair).unwrap();
            config = config.attr(name, value);
        }
        assert_eq!(
            button(config).to_html(),
            concat!(
                "<button type=\"button\" class=\"root\" data-code=\"007\" ",
                "data-delta=\"+5\" tabindex=\"2\">x</button>",
            )
        );
    }

    #[test]
    fn test_invalid_attribute_names_dropped() {
        let control = button(ButtonConfiguration::new("x").attr("bad name", "v").attr("ok", "v"));
        assert!(control.attribute("bad name").is_none());
        assert!(control.attribute("ok").is_some());
    }

    #[test]
    fn test_disabled_keeps_caller_handler_attached() {
        let (handler, _, _) = spy_handler();
        let control = button(
            ButtonConfiguration::new("Test Button")
                .disabled(true)
                .mouse_down_handler(handler.clone()),
        );
        assert_eq!(control.prop("disabled"), Some(AttrValue::Bool(true)));
        let attached = control.on_mouse_down().expect("handler attached");
        assert!(attached.ptr_eq(&handler));
    }

    #[test]
    fn test_dispatch_withheld_when_disabled() {
        let (handler, calls, _) = spy_handler();
        let control = button(
            ButtonConfiguration::new("x")
                .disabled(true)
                .focus_on_click(false)
                .mouse_down_handler(handler),
        );

        let mut event = MouseDownEvent::default();
        assert_eq!(control.dispatch_mouse_down(&mut event), Dispatch::Withheld);
        assert!(!event.default_prevented());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_dispatch_handled_and_unhandled() {
        let control = button(ButtonConfiguration::new("x").focus_on_click(false));
        let mut event = MouseDownEvent::at(1.0, 2.0);
        assert_eq!(control.dispatch_mouse_down(&mut event), Dispatch::Handled);
        assert!(event.default_prevented());

        let control = button(ButtonConfiguration::new("x"));
        let mut event = MouseDownEvent::default();
        assert_eq!(control.dispatch_mouse_down(&mut event), Dispatch::Unhandled);
        assert!(!event.default_prevented());
    }

    #[test]
    fn test_render_is_deterministic() {
        let make = || {
            ButtonConfiguration::new("Same")
                .class_name("a")
                .form_submit(true)
                .attr("data-testid", "same")
        };
        assert_eq!(button(make()).to_html(), button(make()).to_html());
        assert_eq!(button(make()).to_element(), button(make()).to_element());
    }

    #[test]
    fn test_to_html() {
        let control = button(
            ButtonConfiguration::new("Save & go")
                .class_name("custom")
                .disabled(true)
                .form_submit(true)
                .attr("data-testid", "save"),
        );
        assert_eq!(
            control.to_html(),
            concat!(
                "<button type=\"submit\" class=\"root custom\" disabled ",
                "data-testid=\"save\">Save &amp; go</button>",
            )
        );
    }

    #[test]
    fn test_to_element_json() {
        let control = button(ButtonConfiguration::new("Click Me").attr("aria-label", "Click"));
        let json = serde_json::to_value(control.to_element()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "tag": "button",
                "attributes": { "type": "button", "class": "root", "aria-label": "Click" },
                "children": "Click Me",
            })
        );
    }
}
