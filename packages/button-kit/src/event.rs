//! Mouse-down events and handlers.

use serde::Serialize;
use std::fmt;
use std::rc::Rc;

/// The part of a DOM event a button handler can act on.
pub trait DomEvent {
    /// Suppress the host's default action for this event.
    fn prevent_default(&mut self);

    /// Whether `prevent_default` has been called.
    fn default_prevented(&self) -> bool;
}

/// Pointer button that produced a mouse-down.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    #[default]
    Primary,
    Auxiliary,
    Secondary,
}

/// A mouse-down event delivered to a control.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct MouseDownEvent {
    pub button: MouseButton,
    pub client_x: f64,
    pub client_y: f64,
    default_prevented: bool,
}

impl MouseDownEvent {
    /// Primary-button press at the given client coordinates.
    pub fn at(client_x: f64, client_y: f64) -> Self {
        Self {
            client_x,
            client_y,
            ..Default::default()
        }
    }

    pub fn with_button(mut self, button: MouseButton) -> Self {
        self.button = button;
        self
    }
}

impl DomEvent for MouseDownEvent {
    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Shared mouse-down callback.
///
/// Cloning shares the same callback; `ptr_eq` tells whether two handlers are
/// the same attachment.
#[derive(Clone)]
pub struct MouseDownHandler(Rc<dyn Fn(&mut dyn DomEvent)>);

impl MouseDownHandler {
    pub fn new(callback: impl Fn(&mut dyn DomEvent) + 'static) -> Self {
        Self(Rc::new(callback))
    }

    /// Invoke the callback with `event`.
    pub fn call(&self, event: &mut dyn DomEvent) {
        (self.0)(event)
    }

    /// Whether both handlers share one callback.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for MouseDownHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MouseDownHandler")
            .field(&Rc::as_ptr(&self.0).cast::<()>())
            .finish()
    }
}

/// What the host did with a mouse-down dispatched at a control.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Dispatch {
    /// The control is disabled; no handler ran.
    Withheld,
    /// The attached handler ran.
    Handled,
    /// No handler is attached.
    Unhandled,
}
