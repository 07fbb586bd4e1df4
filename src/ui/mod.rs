//! UI view-models derived from session state.
//!
//! Rendering stays out of the session machine: these are pure projections
//! a host page (or the CLI) turns into actual chrome.

pub mod bindings;
pub mod nav;

pub use bindings::ElementBinding;
pub use nav::{NavLink, NavView};
