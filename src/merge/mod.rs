//! Props merging for curry-props.
//!
//! This module handles:
//! - Whole-map soft and hard merges
//! - Per-key strategy dispatch for smart merges
//! - Caller-supplied reducers

pub mod complex;
pub mod policy;
pub mod strategy;

pub use complex::{merge_complex_props, merge_with_table};
pub use policy::{MergePolicy, PropsReducer, allow_overwrite, force_curry};
pub use strategy::{HANDLER_PATTERN, KeyMatcher, MergeStrategy, StrategyTable};
