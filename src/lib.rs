//! curry-props - curry base props into a template and merge them with call-site overrides.
//!
//! This library provides:
//! - Soft (override wins) and hard (base wins) whole-map merges
//! - Smart per-key merges: class lists are joined, `style` objects are
//!   unioned, `on*` handlers are chained, everything else falls back by truthiness
//! - Curried templates that merge and hand the result to a constructor
//! - TOML and JSON template loading
//!
//! # Example
//!
//! ```
//! use curry_props::curry::{curry_smart, element};
//! use curry_props::props::{PropValue, Props};
//! use curry_props::template::{Template, TypeTag};
//!
//! let mut base = Props::new();
//! base.insert("className".to_string(), PropValue::from("btn"));
//!
//! let button = curry_smart(Template::new(TypeTag::native("button"), base), None, false, element);
//! assert_eq!(button.display_name(), "Curried(button)");
//!
//! let mut overrides = Props::new();
//! overrides.insert("className".to_string(), PropValue::from("btn-primary"));
//!
//! let built = button.apply(&overrides);
//! assert_eq!(built.props["className"], PropValue::from("btn btn-primary"));
//! ```

pub mod curry;
pub mod error;
pub mod merge;
pub mod props;
pub mod template;

pub use curry::{Constructor, Curried, Element, curry, curry_hard, curry_smart, curry_soft};
pub use error::{CurryError, FileKind, Result};
pub use merge::{MergePolicy, merge_complex_props};
