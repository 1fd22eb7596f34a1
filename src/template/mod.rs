//! Templates: a type tag plus the base props curried into it.
//!
//! This module handles:
//! - Type tags and display-name derivation
//! - TOML and JSON template and overrides file parsing

pub mod parser;
pub mod types;

pub use parser::{Format, parse_props_file, parse_props_str, parse_template_file, parse_template_str};
pub use types::{
	ComponentType, LoadedTemplate, PropTypes, Template, TypeTag, display_name_of,
};
