#![forbid(unsafe_code)]

//! Retained element tree.
//!
//! A renderer-agnostic node tree that components mount into. Overlays and
//! component roots are elements; the harness parses markup fragments into
//! the same tree. Nothing here draws — elements carry an optional layout
//! [`Rect`] so containers can hit test, and attributes so tests can query.
//!
//! [`Element`] is a cheap clonable handle; two handles compare equal as
//! nodes via [`same_node`](Element::same_node), never by value.
//!
//! # Example
//! ```
//! use scrim_core::Element;
//!
//! let body = Element::new("body").unwrap();
//! let overlay = Element::new("overlay").unwrap();
//! overlay.set_class("overlay");
//! body.append_child(&overlay);
//!
//! assert_eq!(body.child_count(), 1);
//! assert!(body.query(".overlay").unwrap().same_node(&overlay));
//! ```

use crate::error::Error;
use crate::geometry::Rect;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

struct NodeData {
    tag: String,
    attrs: BTreeMap<String, String>,
    area: Option<Rect>,
    parent: Option<Weak<RefCell<NodeData>>>,
    children: Vec<Element>,
}

/// Handle to a node in the element tree.
///
/// Clones share the node. The tree is single-threaded by construction
/// (`Rc`-based, deliberately not `Send`).
#[derive(Clone)]
pub struct Element {
    inner: Rc<RefCell<NodeData>>,
}

/// A parsed simple selector: `tag`, `#id`, or `.class`.
enum Selector<'a> {
    Tag(&'a str),
    Id(&'a str),
    Class(&'a str),
}

impl<'a> Selector<'a> {
    fn parse(raw: &'a str) -> Self {
        if let Some(id) = raw.strip_prefix('#') {
            Selector::Id(id)
        } else if let Some(class) = raw.strip_prefix('.') {
            Selector::Class(class)
        } else {
            Selector::Tag(raw)
        }
    }

    fn matches(&self, element: &Element) -> bool {
        match self {
            Selector::Tag(tag) => element.tag() == *tag,
            Selector::Id(id) => element.id().as_deref() == Some(*id),
            Selector::Class(class) => element.has_class(class),
        }
    }
}

/// Check that a tag looks like a tag: leading ASCII letter, then
/// letters, digits, `-` or `_`.
fn valid_tag(tag: &str) -> bool {
    let mut chars = tag.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

impl Element {
    /// Create a detached element with the given tag.
    ///
    /// Returns [`Error::InvalidTag`] for an empty or malformed tag — a
    /// configuration error, caught at construction time.
    pub fn new(tag: impl Into<String>) -> Result<Self, Error> {
        let tag = tag.into();
        if !valid_tag(&tag) {
            return Err(Error::InvalidTag(tag));
        }
        Ok(Self {
            inner: Rc::new(RefCell::new(NodeData {
                tag,
                attrs: BTreeMap::new(),
                area: None,
                parent: None,
                children: Vec::new(),
            })),
        })
    }

    /// The element's tag name.
    pub fn tag(&self) -> String {
        self.inner.borrow().tag.clone()
    }

    /// Whether two handles refer to the same node.
    #[inline]
    pub fn same_node(&self, other: &Element) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Set an attribute, replacing any previous value.
    pub fn set_attr(&self, name: impl Into<String>, value: impl Into<String>) {
        self.inner.borrow_mut().attrs.insert(name.into(), value.into());
    }

    /// Get an attribute value.
    pub fn attr(&self, name: &str) -> Option<String> {
        self.inner.borrow().attrs.get(name).cloned()
    }

    /// Set the `id` attribute.
    pub fn set_id(&self, id: impl Into<String>) {
        self.set_attr("id", id);
    }

    /// The `id` attribute, if set.
    pub fn id(&self) -> Option<String> {
        self.attr("id")
    }

    /// Set the `class` attribute (whitespace-separated class list).
    pub fn set_class(&self, class: impl Into<String>) {
        self.set_attr("class", class);
    }

    /// The `class` attribute, if set.
    pub fn class(&self) -> Option<String> {
        self.attr("class")
    }

    /// Whether the class list contains the given class.
    pub fn has_class(&self, class: &str) -> bool {
        self.inner
            .borrow()
            .attrs
            .get("class")
            .is_some_and(|list| list.split_whitespace().any(|c| c == class))
    }

    /// Set the layout bounds used for hit testing.
    pub fn set_area(&self, area: Rect) {
        self.inner.borrow_mut().area = Some(area);
    }

    /// The layout bounds, if assigned.
    pub fn area(&self) -> Option<Rect> {
        self.inner.borrow().area
    }

    /// Whether a point falls inside the element's layout bounds.
    ///
    /// An element without bounds contains nothing.
    pub fn contains_point(&self, x: u16, y: u16) -> bool {
        self.area().is_some_and(|a| a.contains(x, y))
    }

    /// Append a child, detaching it from any previous parent first.
    ///
    /// Appending an element into its own subtree would create a cycle and
    /// is ignored.
    pub fn append_child(&self, child: &Element) {
        if child.same_node(self) || self.is_attached_to(child) {
            return;
        }
        child.detach();
        child.inner.borrow_mut().parent = Some(Rc::downgrade(&self.inner));
        self.inner.borrow_mut().children.push(child.clone());
    }

    /// Remove this element from its parent. Idempotent; detaching an
    /// already-detached element is a no-op.
    pub fn detach(&self) {
        let parent = self.inner.borrow_mut().parent.take();
        if let Some(parent) = parent.and_then(|weak| weak.upgrade()) {
            parent
                .borrow_mut()
                .children
                .retain(|c| !Rc::ptr_eq(&c.inner, &self.inner));
        }
    }

    /// The parent element, if attached.
    pub fn parent(&self) -> Option<Element> {
        self.inner
            .borrow()
            .parent
            .as_ref()
            .and_then(Weak::upgrade)
            .map(|inner| Element { inner })
    }

    /// Snapshot of the element's children.
    pub fn children(&self) -> Vec<Element> {
        self.inner.borrow().children.clone()
    }

    /// Number of children.
    pub fn child_count(&self) -> usize {
        self.inner.borrow().children.len()
    }

    /// Whether `ancestor` appears on this element's parent chain.
    pub fn is_attached_to(&self, ancestor: &Element) -> bool {
        let mut current = self.parent();
        while let Some(node) = current {
            if node.same_node(ancestor) {
                return true;
            }
            current = node.parent();
        }
        false
    }

    /// First descendant matching a simple selector (`tag`, `#id`, or
    /// `.class`), depth-first in document order. The element itself is
    /// not considered.
    pub fn query(&self, selector: &str) -> Option<Element> {
        let selector = Selector::parse(selector.trim());
        self.find_first(&selector)
    }

    /// All descendants matching a simple selector, depth-first in
    /// document order.
    pub fn query_all(&self, selector: &str) -> Vec<Element> {
        let selector = Selector::parse(selector.trim());
        let mut out = Vec::new();
        self.collect_matches(&selector, &mut out);
        out
    }

    fn find_first(&self, selector: &Selector<'_>) -> Option<Element> {
        for child in self.children() {
            if selector.matches(&child) {
                return Some(child);
            }
            if let Some(found) = child.find_first(selector) {
                return Some(found);
            }
        }
        None
    }

    fn collect_matches(&self, selector: &Selector<'_>, out: &mut Vec<Element>) {
        for child in self.children() {
            if selector.matches(&child) {
                out.push(child.clone());
            }
            child.collect_matches(selector, out);
        }
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.inner.borrow();
        f.debug_struct("Element")
            .field("tag", &data.tag)
            .field("attrs", &data.attrs)
            .field("area", &data.area)
            .field("children", &data.children.len())
            .finish()
    }
}
