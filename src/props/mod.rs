//! Prop values and handler callbacks.
//!
//! This module handles:
//! - The dynamic `PropValue` model and its truthiness rules
//! - Shared handler callbacks and chaining with failure aggregation
//! - Conversion to and from JSON

pub mod handler;
pub mod value;

pub use handler::{Handler, HandlerError, HandlerFailures};
pub use value::{PropValue, Props, props_to_json};
