#![forbid(unsafe_code)]

//! Scrim Core
//!
//! Foundation types for the Scrim component toolkit: a retained element
//! tree, input events, geometric primitives, and the component lifecycle
//! contract that the modal stack and the test harness both drive.
//!
//! # Key Components
//!
//! - [`Element`] - cheap clonable handle into the retained element tree
//! - [`Component`] - lifecycle hooks for typed components
//! - [`ComponentHost`] - owns a component and drives its lifecycle
//! - [`Event`] - key and mouse input events
//! - [`Rect`] - layout bounds used for hit testing and placement

pub mod component;
pub mod element;
pub mod error;
pub mod event;
pub mod geometry;

pub use component::{Component, ComponentHost};
pub use element::Element;
pub use error::Error;
pub use event::{
    Event, EventOutcome, KeyCode, KeyEvent, KeyEventKind, Modifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
pub use geometry::Rect;
