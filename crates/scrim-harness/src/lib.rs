#![forbid(unsafe_code)]

//! Scrim Harness
//!
//! Test harness for Scrim components: constructs a component against a
//! parsed-but-never-rendered markup fragment and drives its lifecycle
//! hooks by hand, so component logic is testable with no renderer and no
//! event loop.
//!
//! # Key Components
//!
//! - [`Harness`] - owns a component and drives mount/update/unmount
//! - [`parse_fragment`] - markup fragment to element tree
//! - [`strip_template`] - removes `<template>` wrapper tags

pub mod fragment;
pub mod harness;

pub use fragment::{parse_fragment, strip_template};
pub use harness::Harness;
