#![forbid(unsafe_code)]

//! Error taxonomy.
//!
//! Everything here is a configuration error: raised synchronously, never
//! transient, never retried. Fix the calling code. Idempotency cases
//! (double close, dismiss on a non-top modal) are not errors and are
//! handled silently where they occur.

use std::fmt;

/// Configuration errors raised by element construction, modal opening,
/// and markup parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Element tag is empty or not tag-shaped.
    InvalidTag(String),
    /// A modal was opened with a component whose `name()` is empty.
    UnnamedComponent,
    /// The target parent element has no layout area to host an overlay.
    ParentUnattached,
    /// A markup fragment failed to parse.
    Markup {
        /// Byte offset into the fragment where parsing failed.
        offset: usize,
        /// What went wrong.
        message: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidTag(tag) => write!(f, "invalid element tag: {tag:?}"),
            Error::UnnamedComponent => {
                write!(f, "expected component name to be set")
            }
            Error::ParentUnattached => {
                write!(f, "expected parent element to have a layout area")
            }
            Error::Markup { offset, message } => {
                write!(f, "markup error at byte {offset}: {message}")
            }
        }
    }
}

impl std::error::Error for Error {}
