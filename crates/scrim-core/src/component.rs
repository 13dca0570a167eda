#![forbid(unsafe_code)]

//! Component lifecycle contract.
//!
//! A [`Component`] is typed application logic with props, state, and
//! lifecycle hooks. It never touches a renderer; mounting means being
//! attached to an [`Element`] and having hooks driven in order by a
//! [`ComponentHost`] (in production) or by the test harness.
//!
//! Hook order follows the mount/update/unmount contract:
//!
//! - mount: `on_before_mount`, `on_mounted`
//! - update: `on_before_update`, `on_updated`
//! - unmount: `on_before_unmount`, `on_unmounted`
//!
//! # Example
//! ```
//! use scrim_core::{Component, ComponentHost, Element};
//!
//! struct Greeter;
//!
//! struct GreeterProps {
//!     who: String,
//! }
//!
//! impl Component for Greeter {
//!     type Props = GreeterProps;
//!     type State = Option<String>;
//!
//!     fn name(&self) -> &'static str {
//!         "greeter"
//!     }
//!
//!     fn on_mounted(&mut self, props: &Self::Props, state: &mut Self::State) {
//!         *state = Some(format!("hello {}", props.who));
//!     }
//! }
//!
//! let root = Element::new("greeter").unwrap();
//! let host = ComponentHost::mount(Greeter, root, GreeterProps { who: "world".into() });
//! assert_eq!(host.state().as_deref(), Some("hello world"));
//! ```

use crate::element::Element;

/// Typed component with lifecycle hooks.
///
/// All hooks have no-op defaults; implement only what you need.
pub trait Component {
    /// Immutable configuration passed in by whoever mounts the component.
    type Props;
    /// Mutable component-owned state, created via `Default` at mount.
    type State: Default;

    /// The component's tag name, used as the element tag when a container
    /// (such as the modal stack) creates the component's root element.
    ///
    /// The default is empty; containers that need a name treat an empty
    /// name as a configuration error.
    fn name(&self) -> &'static str {
        ""
    }

    /// Gate for [`ComponentHost::update_props`]. Return `false` to skip
    /// the update entirely.
    fn should_update(&self, _new_props: &Self::Props, _old_props: &Self::Props) -> bool {
        true
    }

    fn on_before_mount(&mut self, _props: &Self::Props, _state: &mut Self::State) {}
    fn on_mounted(&mut self, _props: &Self::Props, _state: &mut Self::State) {}
    fn on_before_update(&mut self, _props: &Self::Props, _state: &mut Self::State) {}
    fn on_updated(&mut self, _props: &Self::Props, _state: &mut Self::State) {}
    fn on_before_unmount(&mut self, _props: &Self::Props, _state: &mut Self::State) {}
    fn on_unmounted(&mut self, _props: &Self::Props, _state: &mut Self::State) {}
}

/// Owns a mounted component and drives its lifecycle.
///
/// The host pairs the component with its props, state, and root element.
/// Dropping the host does not run unmount hooks; call
/// [`unmount`](Self::unmount) for an orderly teardown.
pub struct ComponentHost<C: Component> {
    component: C,
    props: C::Props,
    state: C::State,
    root: Element,
}

impl<C: Component> ComponentHost<C> {
    /// Mount a component onto a root element, running the mount hooks.
    pub fn mount(component: C, root: Element, props: C::Props) -> Self {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("component_mount", tag = component.name()).entered();

        let mut host = Self {
            component,
            props,
            state: C::State::default(),
            root,
        };
        host.component
            .on_before_mount(&host.props, &mut host.state);
        host.component.on_mounted(&host.props, &mut host.state);
        host
    }

    /// Run the update hooks.
    pub fn update(&mut self) {
        self.component
            .on_before_update(&self.props, &mut self.state);
        self.component.on_updated(&self.props, &mut self.state);
    }

    /// Mutate state, then run the update hooks.
    pub fn set_state(&mut self, f: impl FnOnce(&mut C::State)) {
        f(&mut self.state);
        self.update();
    }

    /// Replace props and run the update hooks, unless
    /// [`Component::should_update`] rejects the new props.
    ///
    /// Returns whether the update ran.
    pub fn update_props(&mut self, new_props: C::Props) -> bool {
        if !self.component.should_update(&new_props, &self.props) {
            return false;
        }
        self.props = new_props;
        self.update();
        true
    }

    /// Run the unmount hooks, detach the root element, and give the
    /// component back.
    pub fn unmount(mut self) -> C {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("component_unmount", tag = self.component.name()).entered();

        self.component
            .on_before_unmount(&self.props, &mut self.state);
        self.component.on_unmounted(&self.props, &mut self.state);
        self.root.detach();
        self.component
    }

    /// The mounted component.
    pub fn component(&self) -> &C {
        &self.component
    }

    /// Current props.
    pub fn props(&self) -> &C::Props {
        &self.props
    }

    /// Current state.
    pub fn state(&self) -> &C::State {
        &self.state
    }

    /// The root element the component is mounted on.
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// First matching descendant of the root element.
    pub fn query(&self, selector: &str) -> Option<Element> {
        self.root.query(selector)
    }

    /// All matching descendants of the root element.
    pub fn query_all(&self, selector: &str) -> Vec<Element> {
        self.root.query_all(selector)
    }
}
