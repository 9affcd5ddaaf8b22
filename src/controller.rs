//! Click-to-toggle wiring between a toggle control and the nav link group

use std::rc::Rc;

use crate::config::NavToggleConfig;
use crate::dom::DomBackend;
use crate::error::{NavResult, NavToggleError};

/// Resolved nav link group plus the class flipped on it.
///
/// The link list is a snapshot taken at install time; elements that start
/// matching the selector later are never touched.
pub struct NavToggleController<D: DomBackend> {
    dom: D,
    links: Vec<D::Element>,
    class_name: String,
}

impl<D: DomBackend> NavToggleController<D> {
    /// Resolve both selectors against `dom` and attach the click listener.
    ///
    /// Fails with [`NavToggleError::ControlNotFound`] when nothing matches the
    /// toggle selector. An empty link group is fine: clicks just do nothing.
    pub fn install(dom: D, config: &NavToggleConfig) -> NavResult<NavToggleHandle<D>> {
        config.validate()?;

        let control = dom
            .query_selector(&config.toggle_selector)?
            .ok_or_else(|| NavToggleError::ControlNotFound {
                selector: config.toggle_selector.clone(),
            })?;
        let links = dom.query_selector_all(&config.links_selector)?;

        log::debug!(
            "Nav toggle installed on '{}': {} link group(s) matching '{}', class '{}'",
            config.toggle_selector,
            links.len(),
            config.links_selector,
            config.class_name
        );

        let controller = Rc::new(Self {
            dom: dom.clone(),
            links,
            class_name: config.class_name.clone(),
        });

        let on_click = Rc::clone(&controller);
        let listener = dom.add_click_listener(
            &control,
            Box::new(move || {
                on_click.toggle();
            }),
        )?;

        Ok(NavToggleHandle {
            controller,
            control,
            listener: Some(listener),
        })
    }

    /// Flip the class on every resolved link element, each on its own state.
    /// Returns how many elements were toggled.
    pub(crate) fn toggle(&self) -> usize {
        let mut toggled = 0;
        for link in &self.links {
            match self.dom.toggle_class(link, &self.class_name) {
                Ok(_) => toggled += 1,
                Err(e) => log::error!("Failed to toggle '{}' on nav link: {}", self.class_name, e),
            }
        }
        toggled
    }

    pub(crate) fn links(&self) -> &[D::Element] {
        &self.links
    }

    pub(crate) fn class_name(&self) -> &str {
        &self.class_name
    }
}

/// Owns the click listener of an installed controller.
///
/// Dropping the handle detaches the listener.
pub struct NavToggleHandle<D: DomBackend> {
    controller: Rc<NavToggleController<D>>,
    control: D::Element,
    listener: Option<D::Listener>,
}

impl<D: DomBackend> NavToggleHandle<D> {
    /// The element the click listener is attached to
    pub fn control(&self) -> &D::Element {
        &self.control
    }

    pub fn links(&self) -> &[D::Element] {
        self.controller.links()
    }

    pub fn class_name(&self) -> &str {
        self.controller.class_name()
    }

    /// Same effect as a click on the control
    pub fn toggle(&self) -> usize {
        self.controller.toggle()
    }

    pub fn is_attached(&self) -> bool {
        self.listener.is_some()
    }

    /// Remove the click listener. Class state is left as it is.
    pub fn detach(mut self) -> NavResult<()> {
        self.remove_listener()
    }

    fn remove_listener(&mut self) -> NavResult<()> {
        match self.listener.take() {
            Some(listener) => self
                .controller
                .dom
                .remove_click_listener(&self.control, listener),
            None => Ok(()),
        }
    }
}

impl<D: DomBackend> Drop for NavToggleHandle<D> {
    fn drop(&mut self) {
        if let Err(e) = self.remove_listener() {
            log::warn!("Failed to detach nav toggle listener: {}", e);
        }
    }
}
