//! In-memory element tree implementing [`DomBackend`].
//!
//! Good enough to drive the controller outside a browser: elements carry a
//! tag, an optional id and a class list, clicks bubble from the target up
//! through its ancestors, and selector lookups walk the tree in document
//! order. Handles stay valid after an element is removed from the tree.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use super::selector::{parse_selector_list, Combinator, ComplexSelector, CompoundSelector};
use super::{ClickHandler, DomBackend};
use crate::error::{NavResult, NavToggleError};

static NEXT_DOCUMENT: AtomicU64 = AtomicU64::new(1);

/// Element handle, only valid for the document that created it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemoryElement {
    document: u64,
    index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemoryListener(u64);

#[derive(Debug)]
struct Node {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    parent: Option<usize>,
    children: Vec<usize>,
}

struct Registration {
    id: u64,
    target: usize,
    handler: Rc<RefCell<ClickHandler>>,
}

struct Inner {
    document: u64,
    nodes: Vec<Node>,
    /// Top-level elements of the document, in order
    roots: Vec<usize>,
    listeners: Vec<Registration>,
    next_listener: u64,
}

impl Inner {
    fn new() -> Self {
        Self {
            document: NEXT_DOCUMENT.fetch_add(1, Ordering::Relaxed),
            nodes: Vec::new(),
            roots: Vec::new(),
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Node index of `element`, if it belongs to this document
    fn index(&self, element: &MemoryElement) -> NavResult<usize> {
        if element.document != self.document {
            return Err(NavToggleError::Dom(format!(
                "element #{} belongs to another document",
                element.index
            )));
        }
        if element.index >= self.nodes.len() {
            return Err(NavToggleError::Dom(format!(
                "unknown element #{}",
                element.index
            )));
        }
        Ok(element.index)
    }

    fn handle(&self, index: usize) -> MemoryElement {
        MemoryElement {
            document: self.document,
            index,
        }
    }

    fn node(&self, element: &MemoryElement) -> NavResult<&Node> {
        let index = self.index(element)?;
        Ok(&self.nodes[index])
    }

    fn node_mut(&mut self, element: &MemoryElement) -> NavResult<&mut Node> {
        let index = self.index(element)?;
        Ok(&mut self.nodes[index])
    }

    fn ancestors(&self, id: usize) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(self.nodes[id].parent, move |&p| self.nodes[p].parent)
    }

    fn is_connected(&self, id: usize) -> bool {
        let top = self.ancestors(id).last().unwrap_or(id);
        self.roots.contains(&top)
    }

    fn detach(&mut self, id: usize) {
        match self.nodes[id].parent.take() {
            Some(parent) => self.nodes[parent].children.retain(|&c| c != id),
            None => self.roots.retain(|&r| r != id),
        }
    }

    fn collect_dfs(&self, id: usize, out: &mut Vec<usize>) {
        out.push(id);
        for &child in &self.nodes[id].children {
            self.collect_dfs(child, out);
        }
    }

    fn matches_compound(&self, id: usize, compound: &CompoundSelector) -> bool {
        let node = &self.nodes[id];
        if let Some(tag) = &compound.tag {
            if node.tag != *tag {
                return false;
            }
        }
        if !compound
            .ids
            .iter()
            .all(|wanted| node.id.as_deref() == Some(wanted.as_str()))
        {
            return false;
        }
        compound
            .classes
            .iter()
            .all(|wanted| node.classes.iter().any(|c| c == wanted))
    }

    /// Match `selector.compounds[..=index]` with `compounds[index]` on `id`
    fn matches_from(&self, id: usize, selector: &ComplexSelector, index: usize) -> bool {
        if !self.matches_compound(id, &selector.compounds[index]) {
            return false;
        }
        if index == 0 {
            return true;
        }
        match selector.combinators[index - 1] {
            Combinator::Child => self.nodes[id]
                .parent
                .is_some_and(|parent| self.matches_from(parent, selector, index - 1)),
            Combinator::Descendant => self
                .ancestors(id)
                .any(|ancestor| self.matches_from(ancestor, selector, index - 1)),
        }
    }

    fn matches(&self, id: usize, selectors: &[ComplexSelector]) -> bool {
        selectors
            .iter()
            .any(|selector| self.matches_from(id, selector, selector.compounds.len() - 1))
    }
}

fn check_class_token(class_name: &str) -> NavResult<()> {
    if class_name.is_empty() || class_name.chars().any(|c| c.is_ascii_whitespace()) {
        return Err(NavToggleError::Dom(format!(
            "'{class_name}' is not a valid class token"
        )));
    }
    Ok(())
}

/// Shared handle to an in-memory document, optionally scoped to a subtree.
///
/// Clones share the same tree.
#[derive(Clone)]
pub struct MemoryDom {
    inner: Rc<RefCell<Inner>>,
    scope: Option<MemoryElement>,
}

impl fmt::Debug for MemoryDom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("MemoryDom")
            .field("document", &inner.document)
            .field("elements", &inner.nodes.len())
            .field("listeners", &inner.listeners.len())
            .field("scope", &self.scope)
            .finish()
    }
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDom {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner::new())),
            scope: None,
        }
    }

    /// A view of the same document whose queries only see descendants of `root`
    pub fn scoped(&self, root: &MemoryElement) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
            scope: Some(*root),
        }
    }

    /// Create a detached element
    pub fn create_element(&self, tag: &str) -> MemoryElement {
        let mut inner = self.inner.borrow_mut();
        inner.nodes.push(Node {
            tag: tag.to_ascii_lowercase(),
            id: None,
            classes: Vec::new(),
            parent: None,
            children: Vec::new(),
        });
        inner.handle(inner.nodes.len() - 1)
    }

    /// Create an element with the given classes and append it under `parent`,
    /// or at the top level of the document when `parent` is `None`.
    pub fn insert_element(
        &self,
        parent: Option<&MemoryElement>,
        tag: &str,
        classes: &[&str],
    ) -> NavResult<MemoryElement> {
        let element = self.create_element(tag);
        for class_name in classes {
            self.add_class(&element, class_name)?;
        }
        match parent {
            Some(parent) => self.append_child(parent, &element)?,
            None => self.append_to_document(&element)?,
        }
        Ok(element)
    }

    pub fn set_id(&self, element: &MemoryElement, id: &str) -> NavResult<()> {
        let mut inner = self.inner.borrow_mut();
        inner.node_mut(element)?.id = Some(id.to_string());
        Ok(())
    }

    pub fn add_class(&self, element: &MemoryElement, class_name: &str) -> NavResult<()> {
        check_class_token(class_name)?;
        let mut inner = self.inner.borrow_mut();
        let node = inner.node_mut(element)?;
        if !node.classes.iter().any(|c| c == class_name) {
            node.classes.push(class_name.to_string());
        }
        Ok(())
    }

    pub fn remove_class(&self, element: &MemoryElement, class_name: &str) -> NavResult<()> {
        check_class_token(class_name)?;
        let mut inner = self.inner.borrow_mut();
        inner.node_mut(element)?.classes.retain(|c| c != class_name);
        Ok(())
    }

    pub fn class_names(&self, element: &MemoryElement) -> NavResult<Vec<String>> {
        let inner = self.inner.borrow();
        Ok(inner.node(element)?.classes.clone())
    }

    /// Move `child` to the end of `parent`'s children
    pub fn append_child(&self, parent: &MemoryElement, child: &MemoryElement) -> NavResult<()> {
        let mut inner = self.inner.borrow_mut();
        let parent = inner.index(parent)?;
        let child = inner.index(child)?;
        if parent == child || inner.ancestors(parent).any(|a| a == child) {
            return Err(NavToggleError::Dom(
                "cannot append an element inside itself".to_string(),
            ));
        }
        inner.detach(child);
        inner.nodes[child].parent = Some(parent);
        inner.nodes[parent].children.push(child);
        Ok(())
    }

    /// Move `child` to the end of the document's top level
    pub fn append_to_document(&self, child: &MemoryElement) -> NavResult<()> {
        let mut inner = self.inner.borrow_mut();
        let child = inner.index(child)?;
        inner.detach(child);
        inner.roots.push(child);
        Ok(())
    }

    /// Take `element` (and its subtree) out of the document
    pub fn remove(&self, element: &MemoryElement) -> NavResult<()> {
        let mut inner = self.inner.borrow_mut();
        let element = inner.index(element)?;
        inner.detach(element);
        Ok(())
    }

    pub fn is_connected(&self, element: &MemoryElement) -> bool {
        let inner = self.inner.borrow();
        inner
            .index(element)
            .is_ok_and(|index| inner.is_connected(index))
    }

    pub fn listener_count(&self, element: &MemoryElement) -> usize {
        let inner = self.inner.borrow();
        let Ok(index) = inner.index(element) else {
            return 0;
        };
        inner.listeners.iter().filter(|r| r.target == index).count()
    }

    /// Dispatch a click on `target`.
    ///
    /// Listeners on the target run first, then those on each ancestor, each
    /// group in registration order. A listener removed by an earlier one in
    /// the same dispatch is skipped. Returns how many listeners ran.
    pub fn click(&self, target: &MemoryElement) -> NavResult<usize> {
        let queued: Vec<(u64, Rc<RefCell<ClickHandler>>)> = {
            let inner = self.inner.borrow();
            let target = inner.index(target)?;
            let queued = std::iter::once(target)
                .chain(inner.ancestors(target))
                .flat_map(|node| {
                    inner
                        .listeners
                        .iter()
                        .filter(move |r| r.target == node)
                        .map(|r| (r.id, Rc::clone(&r.handler)))
                })
                .collect();
            queued
        };

        let mut invoked = 0;
        for (id, handler) in queued {
            let still_registered = self.inner.borrow().listeners.iter().any(|r| r.id == id);
            if !still_registered {
                continue;
            }
            match handler.try_borrow_mut() {
                Ok(mut callback) => {
                    let callback = &mut *callback;
                    callback();
                    invoked += 1;
                }
                Err(_) => log::warn!("Skipping click listener {id}: already running"),
            }
        }
        Ok(invoked)
    }

    fn query(&self, selector: &str) -> NavResult<Vec<MemoryElement>> {
        let selectors = parse_selector_list(selector)?;
        let inner = self.inner.borrow();

        let mut candidates = Vec::new();
        match &self.scope {
            Some(scope) => {
                let scope = inner.index(scope)?;
                for &child in &inner.nodes[scope].children {
                    inner.collect_dfs(child, &mut candidates);
                }
            }
            None => {
                for &root in &inner.roots {
                    inner.collect_dfs(root, &mut candidates);
                }
            }
        }

        let matched = candidates
            .into_iter()
            .filter(|&id| inner.matches(id, &selectors))
            .map(|id| inner.handle(id))
            .collect();
        Ok(matched)
    }
}

impl DomBackend for MemoryDom {
    type Element = MemoryElement;
    type Listener = MemoryListener;

    fn query_selector(&self, selector: &str) -> NavResult<Option<MemoryElement>> {
        Ok(self.query(selector)?.into_iter().next())
    }

    fn query_selector_all(&self, selector: &str) -> NavResult<Vec<MemoryElement>> {
        self.query(selector)
    }

    fn has_class(&self, element: &MemoryElement, class_name: &str) -> NavResult<bool> {
        let inner = self.inner.borrow();
        Ok(inner.node(element)?.classes.iter().any(|c| c == class_name))
    }

    fn toggle_class(&self, element: &MemoryElement, class_name: &str) -> NavResult<bool> {
        check_class_token(class_name)?;
        let mut inner = self.inner.borrow_mut();
        let node = inner.node_mut(element)?;
        if let Some(pos) = node.classes.iter().position(|c| c == class_name) {
            node.classes.remove(pos);
            Ok(false)
        } else {
            node.classes.push(class_name.to_string());
            Ok(true)
        }
    }

    fn add_click_listener(
        &self,
        target: &MemoryElement,
        handler: ClickHandler,
    ) -> NavResult<MemoryListener> {
        let mut inner = self.inner.borrow_mut();
        let target = inner.index(target)?;
        let id = inner.next_listener;
        inner.next_listener += 1;
        inner.listeners.push(Registration {
            id,
            target,
            handler: Rc::new(RefCell::new(handler)),
        });
        Ok(MemoryListener(id))
    }

    fn remove_click_listener(
        &self,
        target: &MemoryElement,
        listener: MemoryListener,
    ) -> NavResult<()> {
        let mut inner = self.inner.borrow_mut();
        let target = inner.index(target)?;
        let before = inner.listeners.len();
        inner
            .listeners
            .retain(|r| !(r.id == listener.0 && r.target == target));
        if inner.listeners.len() == before {
            return Err(NavToggleError::Dom(format!(
                "click listener {} is not registered on element #{}",
                listener.0, target
            )));
        }
        Ok(())
    }
}
