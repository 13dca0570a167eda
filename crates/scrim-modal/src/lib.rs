#![forbid(unsafe_code)]

//! Scrim Modal
//!
//! Modal overlay stack for Scrim components: overlay creation,
//! top-most-only dismissal, and per-modal completion tickets.
//!
//! # Key Components
//!
//! - [`ModalStack`] - insertion-ordered stack of open modals
//! - [`Modal`] - marker trait adding a completion output to a component
//! - [`ModalOptions`] - per-open configuration (parent, class, dismissal)
//! - [`ModalTicket`] - resolve-exactly-once completion primitive
//!
//! # Dismissal policy
//!
//! Only the top-most open modal reacts to Escape or a backdrop click, and
//! only when it is not marked undismissable. Everything below the top is
//! inert until the modals above it close: strict LIFO interaction order.

pub mod options;
pub mod stack;

pub use options::ModalOptions;
pub use stack::{Modal, ModalHandle, ModalStack, ModalTicket};
