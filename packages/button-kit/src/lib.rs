//! Button Kit - a framework-independent button component.
//!
//! This crate maps a declarative [`ButtonConfiguration`] to a rendered
//! control description:
//!
//! - **Type**: `"submit"` for form submit buttons, `"button"` otherwise
//! - **Classes**: a fixed root class merged with the caller's classes
//! - **Pass-through**: unrecognized attributes forwarded unchanged
//! - **Mouse-down**: optional default suppression, then the caller's handler
//!
//! # Example
//!
//! ```rust
//! use button_kit::{button, ButtonConfiguration, MouseDownEvent, DomEvent};
//!
//! let control = button(
//!     ButtonConfiguration::new("Save")
//!         .class_name("primary")
//!         .focus_on_click(false)
//!         .attr("data-testid", "save-button"),
//! );
//!
//! assert_eq!(control.control_type().as_str(), "button");
//! assert!(control.has_class("root"));
//! assert!(control.has_class("primary"));
//!
//! let mut event = MouseDownEvent::default();
//! control.simulate_mouse_down(&mut event);
//! assert!(event.default_prevented());
//! ```

pub mod button;
pub mod event;
pub mod markup;
pub mod settings;
pub mod types;

// Re-export commonly used types
pub use button::{button, Button, ButtonConfiguration, ButtonStyles, RenderedControl, ROOT_CLASS};
pub use event::{Dispatch, DomEvent, MouseButton, MouseDownEvent, MouseDownHandler};
pub use settings::{OutputFormat, Settings};
pub use types::{ApiResponse, AttrValue, Attributes, Content, ControlType, Element};

/// Error types for button-kit operations.
///
/// Rendering never fails; these cover settings and attribute parsing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid attribute: {0}")]
    InvalidAttribute(String),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

/// Result type for button-kit operations.
pub type Result<T> = std::result::Result<T, Error>;
