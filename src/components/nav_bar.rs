use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::config::NavToggleConfig;
use crate::controller::{NavToggleController, NavToggleHandle};
use crate::dom::WebDom;

#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Responsive nav bar. The toggle controller is installed on the rendered
/// `nav` once it is mounted, so several bars on a page stay independent.
#[component]
pub fn NavBar(brand: String, links: Vec<NavLink>) -> Element {
    let handle = use_hook(|| Rc::new(RefCell::new(None::<NavToggleHandle<WebDom>>)));

    // Detach the click listener on unmount
    let dropped = handle.clone();
    use_drop(move || {
        dropped.borrow_mut().take();
    });

    rsx! {
        nav {
            class: "navbar",
            onmounted: move |event| {
                if handle.borrow().is_some() {
                    return;
                }
                if let Some(element) = event.data().downcast::<web_sys::Element>() {
                    let scope = WebDom::scoped(element.clone());
                    match NavToggleController::install(scope, &NavToggleConfig::default()) {
                        Ok(installed) => *handle.borrow_mut() = Some(installed),
                        Err(e) => log::error!("Failed to install nav toggle: {}", e),
                    }
                }
            },

            div {
                class: "nav-header",
                span { class: "nav-brand", "{brand}" }
                button {
                    class: "nav-toggle-btn",
                    r#type: "button",
                    "☰"
                }
            }

            ul {
                class: "nav-links",
                for link in links.iter() {
                    li {
                        key: "{link.href}",
                        a { href: "{link.href}", "{link.label}" }
                    }
                }
            }
        }
    }
}
