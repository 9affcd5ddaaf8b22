//! `web_sys` backend: the real browser document.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event};

use super::{ClickHandler, DomBackend};
use crate::error::{NavResult, NavToggleError};

const CLICK: &str = "click";

#[derive(Debug, Clone)]
enum Root {
    Document(Document),
    Element(Element),
}

/// Browser document, or a subtree of it, as a [`DomBackend`]
#[derive(Debug, Clone)]
pub struct WebDom {
    root: Root,
}

/// Registered click callback. Must outlive its registration, so the
/// controller keeps it until the listener is removed.
pub struct WebListener {
    closure: Closure<dyn FnMut(Event)>,
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

impl WebDom {
    pub fn new(document: Document) -> Self {
        Self {
            root: Root::Document(document),
        }
    }

    /// Queries only see descendants of `element`
    pub fn scoped(element: Element) -> Self {
        Self {
            root: Root::Element(element),
        }
    }

    /// The document of the current window
    pub fn from_window() -> NavResult<Self> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(NavToggleError::NoDocument)?;
        Ok(Self::new(document))
    }
}

impl DomBackend for WebDom {
    type Element = Element;
    type Listener = WebListener;

    fn query_selector(&self, selector: &str) -> NavResult<Option<Element>> {
        let found = match &self.root {
            Root::Document(document) => document.query_selector(selector),
            Root::Element(element) => element.query_selector(selector),
        };
        found.map_err(|e| NavToggleError::invalid_selector(selector, describe(&e)))
    }

    fn query_selector_all(&self, selector: &str) -> NavResult<Vec<Element>> {
        let list = match &self.root {
            Root::Document(document) => document.query_selector_all(selector),
            Root::Element(element) => element.query_selector_all(selector),
        }
        .map_err(|e| NavToggleError::invalid_selector(selector, describe(&e)))?;

        // querySelectorAll returns a static NodeList; copying it out keeps
        // the snapshot independent of later document changes.
        let elements = (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect();
        Ok(elements)
    }

    fn has_class(&self, element: &Element, class_name: &str) -> NavResult<bool> {
        Ok(element.class_list().contains(class_name))
    }

    fn toggle_class(&self, element: &Element, class_name: &str) -> NavResult<bool> {
        element
            .class_list()
            .toggle(class_name)
            .map_err(|e| NavToggleError::Dom(describe(&e)))
    }

    fn add_click_listener(&self, target: &Element, mut handler: ClickHandler) -> NavResult<WebListener> {
        let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| handler());
        target
            .add_event_listener_with_callback(CLICK, closure.as_ref().unchecked_ref())
            .map_err(|e| NavToggleError::Dom(describe(&e)))?;
        Ok(WebListener { closure })
    }

    fn remove_click_listener(&self, target: &Element, listener: WebListener) -> NavResult<()> {
        target
            .remove_event_listener_with_callback(CLICK, listener.closure.as_ref().unchecked_ref())
            .map_err(|e| NavToggleError::Dom(describe(&e)))
    }
}
