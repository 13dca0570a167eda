#![forbid(unsafe_code)]

//! Lifecycle test double.
//!
//! [`Harness`] constructs a component against a parsed markup fragment
//! and drives the same hook order a production host would, without a
//! renderer: tests assert on state, props, queries, and a render
//! callback instead of drawn output.
//!
//! # Example
//! ```
//! use scrim_core::Component;
//! use scrim_harness::Harness;
//!
//! struct Counter;
//!
//! impl Component for Counter {
//!     type Props = ();
//!     type State = u32;
//!
//!     fn on_mounted(&mut self, _props: &Self::Props, state: &mut Self::State) {
//!         *state = 1;
//!     }
//! }
//!
//! let harness = Harness::new(Counter, "<template><p></p></template>", ()).unwrap();
//! assert_eq!(*harness.state(), 1);
//! assert!(harness.query("p").is_some());
//! ```

use crate::fragment::{parse_fragment, strip_template};
use scrim_core::{Component, Element, Error};
use std::fmt;

/// Owns a component and drives its lifecycle against a parsed view
/// fragment.
///
/// Construction parses the markup (with `<template>` wrappers stripped)
/// into an element tree that [`query`](Self::query) runs against. The
/// mount hooks run immediately with [`new`](Self::new), or on demand
/// with [`deferred`](Self::deferred) + [`init`](Self::init).
pub struct Harness<C: Component> {
    component: C,
    props: C::Props,
    state: C::State,
    root: Element,
    on_render: Option<Box<dyn FnMut()>>,
    initialized: bool,
}

impl<C: Component> Harness<C> {
    /// Build a harness and run the mount hooks immediately.
    pub fn new(component: C, markup: &str, props: C::Props) -> Result<Self, Error> {
        let mut harness = Self::deferred(component, markup, props)?;
        harness.init();
        Ok(harness)
    }

    /// Build a harness without running the mount hooks; call
    /// [`init`](Self::init) when ready.
    pub fn deferred(component: C, markup: &str, props: C::Props) -> Result<Self, Error> {
        let root = parse_fragment(&strip_template(markup))?;
        Ok(Self {
            component,
            props,
            state: C::State::default(),
            root,
            on_render: None,
            initialized: false,
        })
    }

    /// Run the mount hooks. Idempotent: a second call is a no-op.
    pub fn init(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        self.component
            .on_before_mount(&self.props, &mut self.state);
        self.component.on_mounted(&self.props, &mut self.state);
    }

    /// Run the update hooks, invoking the render callback between them.
    pub fn update(&mut self) {
        self.component
            .on_before_update(&self.props, &mut self.state);
        self.render();
        self.component.on_updated(&self.props, &mut self.state);
    }

    /// Mutate state, then run the update hooks.
    pub fn set_state(&mut self, f: impl FnOnce(&mut C::State)) {
        f(&mut self.state);
        self.update();
    }

    /// Replace props and update, unless [`Component::should_update`]
    /// rejects the new props. Returns whether the update ran.
    pub fn update_props(&mut self, new_props: C::Props) -> bool {
        if !self.component.should_update(&new_props, &self.props) {
            return false;
        }
        self.props = new_props;
        self.update();
        true
    }

    /// Observe renders: the callback fires on every update, between the
    /// before-update and updated hooks.
    pub fn on_render(&mut self, f: impl FnMut() + 'static) {
        self.on_render = Some(Box::new(f));
    }

    fn render(&mut self) {
        if let Some(f) = &mut self.on_render {
            f();
        }
    }

    /// Run the unmount hooks and give the component back.
    pub fn unmount(mut self) -> C {
        self.component
            .on_before_unmount(&self.props, &mut self.state);
        self.component.on_unmounted(&self.props, &mut self.state);
        self.component
    }

    /// First element matching a simple selector in the parsed fragment.
    pub fn query(&self, selector: &str) -> Option<Element> {
        self.root.query(selector)
    }

    /// All elements matching a simple selector in the parsed fragment.
    pub fn query_all(&self, selector: &str) -> Vec<Element> {
        self.root.query_all(selector)
    }

    /// Root of the parsed fragment.
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// The component under test.
    pub fn component(&self) -> &C {
        &self.component
    }

    /// Mutable access to the component under test.
    pub fn component_mut(&mut self) -> &mut C {
        &mut self.component
    }

    /// Current props.
    pub fn props(&self) -> &C::Props {
        &self.props
    }

    /// Current state.
    pub fn state(&self) -> &C::State {
        &self.state
    }

    /// Mutable state access without triggering update hooks.
    pub fn state_mut(&mut self) -> &mut C::State {
        &mut self.state
    }
}

impl<C: Component> fmt::Debug for Harness<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Harness")
            .field("root", &self.root)
            .field("initialized", &self.initialized)
            .finish_non_exhaustive()
    }
}
