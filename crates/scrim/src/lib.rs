#![forbid(unsafe_code)]

//! Scrim public facade.
//!
//! Re-exports the Scrim crates under one roof:
//!
//! - [`core`] - element tree, events, component lifecycle
//! - [`modal`] - modal overlay stack
//! - [`harness`] - renderer-less test harness (feature `harness`, on by
//!   default)
//!
//! Most users want the [`prelude`]:
//!
//! ```
//! use scrim::prelude::*;
//!
//! struct Hello;
//!
//! impl Component for Hello {
//!     type Props = ();
//!     type State = ();
//!     fn name(&self) -> &'static str {
//!         "hello"
//!     }
//! }
//!
//! impl Modal for Hello {
//!     type Output = ();
//! }
//!
//! let screen = Element::new("screen").unwrap();
//! screen.set_area(Rect::from_size(80, 24));
//! let mut stack = ModalStack::<Hello>::new(screen);
//! let (handle, _ticket) = stack.open(Hello, (), ModalOptions::new()).unwrap();
//! assert_eq!(stack.top(), Some(handle));
//! ```

pub use scrim_core as core;
#[cfg(feature = "harness")]
pub use scrim_harness as harness;
pub use scrim_modal as modal;

/// Commonly used Scrim types.
pub mod prelude {
    pub use scrim_core::{
        Component, ComponentHost, Element, Error, Event, EventOutcome, KeyCode, KeyEvent,
        KeyEventKind, Modifiers, MouseButton, MouseEvent, MouseEventKind, Rect,
    };
    #[cfg(feature = "harness")]
    pub use scrim_harness::Harness;
    pub use scrim_modal::{Modal, ModalHandle, ModalOptions, ModalStack, ModalTicket};
}
