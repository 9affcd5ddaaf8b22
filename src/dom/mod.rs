//! DOM access used by the nav toggle controller.
//!
//! The controller only needs a handful of operations, so it is written
//! against [`DomBackend`] instead of `web_sys` directly. The browser build
//! plugs in [`WebDom`]; tests and native embedders use [`MemoryDom`].

pub mod memory;
pub(crate) mod selector;

#[cfg(feature = "web")]
pub mod web;

pub use memory::{MemoryDom, MemoryElement, MemoryListener};

#[cfg(feature = "web")]
pub use web::{WebDom, WebListener};

use crate::error::NavResult;

/// Callback run once per click on the element it is registered on
pub type ClickHandler = Box<dyn FnMut()>;

/// Minimal document interface: selector lookup, class tokens and click
/// listeners. Lookups are scoped to whatever root the backend was built for.
pub trait DomBackend: Clone + 'static {
    type Element: Clone + 'static;
    type Listener;

    /// First element matching `selector` in document order
    fn query_selector(&self, selector: &str) -> NavResult<Option<Self::Element>>;

    /// Every element matching `selector`, in document order
    fn query_selector_all(&self, selector: &str) -> NavResult<Vec<Self::Element>>;

    fn has_class(&self, element: &Self::Element, class_name: &str) -> NavResult<bool>;

    /// Flip `class_name` on `element`; returns whether the class is now present
    fn toggle_class(&self, element: &Self::Element, class_name: &str) -> NavResult<bool>;

    fn add_click_listener(
        &self,
        target: &Self::Element,
        handler: ClickHandler,
    ) -> NavResult<Self::Listener>;

    fn remove_click_listener(
        &self,
        target: &Self::Element,
        listener: Self::Listener,
    ) -> NavResult<()>;
}
