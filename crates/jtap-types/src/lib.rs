//! Foundation types for JTAP.
//!
//! This crate holds the error taxonomy shared by every other crate in the
//! workspace. It has no JTAG knowledge of its own.

pub mod error;

pub use error::{JtapError, Result};
