//! Nav Toggle - responsive navigation menu toggle
//!
//! Flips a presentation class (`show-nav` by default) on every nav link
//! container each time the menu button is clicked. The stylesheet decides
//! what the class means; this crate only wires the click to the class list.
//!
//! Targets are resolved once at install time and the returned handle owns
//! the click listener, so dropping it detaches the behaviour.
//!
//! ## Example
//! ```rust
//! use nav_toggle::prelude::*;
//!
//! let dom = MemoryDom::new();
//! let button = dom.insert_element(None, "button", &["nav-toggle-btn"]).unwrap();
//! let links = dom.insert_element(None, "ul", &["nav-links"]).unwrap();
//!
//! let handle = NavToggleController::install(dom.clone(), &NavToggleConfig::default()).unwrap();
//!
//! dom.click(&button).unwrap();
//! assert!(dom.has_class(&links, "show-nav").unwrap());
//!
//! handle.detach().unwrap();
//! ```

pub mod config;
pub mod controller;
pub mod dom;
pub mod error;

#[cfg(feature = "web")]
pub mod components;

#[cfg(feature = "web")]
pub mod wasm;

// Re-export common types
pub mod prelude {
    pub use crate::config::NavToggleConfig;
    pub use crate::controller::{NavToggleController, NavToggleHandle};
    pub use crate::dom::{DomBackend, MemoryDom, MemoryElement};
    pub use crate::error::{NavResult, NavToggleError};

    #[cfg(feature = "web")]
    pub use crate::dom::WebDom;
}
