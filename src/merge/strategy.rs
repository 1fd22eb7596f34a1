use crate::error::{CurryError, Result};
use crate::props::{Handler, PropValue, Props};
use regex::Regex;
use std::sync::LazyLock;

/// Pattern for handler prop names such as `onClick`.
pub const HANDLER_PATTERN: &str = r"^on[A-Z]";

static STANDARD_TABLE: LazyLock<StrategyTable> = LazyLock::new(|| StrategyTable {
	entries: vec![
		(KeyMatcher::exact("className"), MergeStrategy::ClassNames),
		(KeyMatcher::exact("style"), MergeStrategy::ShallowObject),
		(
			KeyMatcher::Pattern(Regex::new(HANDLER_PATTERN).expect("handler pattern is valid")),
			MergeStrategy::Handlers,
		),
	],
	fallback: MergeStrategy::Default,
});

/// How a single prop is merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeStrategy {
	/// Join both values with a space and trim.
	ClassNames,

	/// Union of two objects; `is_hard` decides which side wins on conflict.
	ShallowObject,

	/// Chain two handlers so both run.
	Handlers,

	/// Pick one side by truthiness; `is_hard` decides which side is tried first.
	Default,
}

impl MergeStrategy {
	pub fn name(self) -> &'static str {
		match self {
			MergeStrategy::ClassNames => "class-names",
			MergeStrategy::ShallowObject => "shallow-object",
			MergeStrategy::Handlers => "handlers",
			MergeStrategy::Default => "default",
		}
	}

	/// Merge the base and override values of one prop.
	///
	/// Either side may be absent, but not both.
	pub fn apply(
		self,
		base: Option<&PropValue>,
		overriding: Option<&PropValue>,
		is_hard: bool,
	) -> PropValue {
		match self {
			MergeStrategy::ClassNames => merge_class_names(base, overriding),
			MergeStrategy::ShallowObject => merge_objects(base, overriding, is_hard),
			MergeStrategy::Handlers => merge_handlers(base, overriding),
			MergeStrategy::Default => merge_default(base, overriding, is_hard),
		}
	}
}

/// Concatenate class lists; an absent side contributes nothing.
pub fn merge_class_names(base: Option<&PropValue>, overriding: Option<&PropValue>) -> PropValue {
	let base = base.map(PropValue::to_string).unwrap_or_default();
	let overriding = overriding.map(PropValue::to_string).unwrap_or_default();
	PropValue::String(format!("{base} {overriding}").trim().to_string())
}

/// Shallow union of two objects. Anything that is not an object counts as empty.
pub fn merge_objects(
	base: Option<&PropValue>,
	overriding: Option<&PropValue>,
	is_hard: bool,
) -> PropValue {
	let empty = Props::new();
	let base = base.and_then(PropValue::as_object).unwrap_or(&empty);
	let overriding = overriding.and_then(PropValue::as_object).unwrap_or(&empty);

	let (lower, upper) = if is_hard {
		(overriding, base)
	} else {
		(base, overriding)
	};

	let mut merged = lower.clone();
	merged.extend(upper.iter().map(|(k, v)| (k.clone(), v.clone())));
	PropValue::Object(merged)
}

/// Chain two handlers, or fall back by truthiness with the base preferred.
///
/// Otherwise a truthy base is kept, and failing that the override is taken
/// as-is (possibly falsy, possibly absent).
pub fn merge_handlers(base: Option<&PropValue>, overriding: Option<&PropValue>) -> PropValue {
	if let (Some(PropValue::Handler(b)), Some(PropValue::Handler(o))) = (base, overriding) {
		return PropValue::Handler(Handler::chain(b.clone(), o.clone()));
	}

	match base {
		Some(value) if value.is_truthy() => value.clone(),
		_ => overriding.cloned().unwrap_or(PropValue::Null),
	}
}

/// Truthiness fallback: the preferred side wins only when truthy, otherwise
/// the other side is taken as-is (possibly falsy, possibly absent).
pub fn merge_default(
	base: Option<&PropValue>,
	overriding: Option<&PropValue>,
	is_hard: bool,
) -> PropValue {
	let (preferred, fallback) = if is_hard {
		(base, overriding)
	} else {
		(overriding, base)
	};

	match preferred {
		Some(value) if value.is_truthy() => value.clone(),
		_ => fallback.cloned().unwrap_or(PropValue::Null),
	}
}

/// How a prop name is recognized by a strategy table entry.
#[derive(Debug, Clone)]
pub enum KeyMatcher {
	Exact(String),
	Pattern(Regex),
}

impl KeyMatcher {
	pub fn exact(key: impl Into<String>) -> Self {
		KeyMatcher::Exact(key.into())
	}

	pub fn pattern(pattern: &str) -> Result<Self> {
		Regex::new(pattern)
			.map(KeyMatcher::Pattern)
			.map_err(|source| CurryError::InvalidPattern {
				pattern: pattern.to_string(),
				source,
			})
	}

	pub fn matches(&self, key: &str) -> bool {
		match self {
			KeyMatcher::Exact(exact) => exact == key,
			KeyMatcher::Pattern(regex) => regex.is_match(key),
		}
	}
}

/// Ordered list of (matcher, strategy) pairs. First match wins; unmatched
/// keys use the fallback.
#[derive(Debug, Clone)]
pub struct StrategyTable {
	entries: Vec<(KeyMatcher, MergeStrategy)>,
	fallback: MergeStrategy,
}

impl StrategyTable {
	/// An empty table that sends every key to `fallback`.
	pub fn new(fallback: MergeStrategy) -> Self {
		StrategyTable {
			entries: Vec::new(),
			fallback,
		}
	}

	/// The built-in table: `className`, `style`, then `on[A-Z]...` handlers.
	pub fn standard() -> &'static StrategyTable {
		&STANDARD_TABLE
	}

	/// Append an entry. Entries added later have lower priority.
	pub fn with(mut self, matcher: KeyMatcher, strategy: MergeStrategy) -> Self {
		self.entries.push((matcher, strategy));
		self
	}

	pub fn strategy_for(&self, key: &str) -> MergeStrategy {
		self.entries
			.iter()
			.find(|(matcher, _)| matcher.matches(key))
			.map(|(_, strategy)| *strategy)
			.unwrap_or(self.fallback)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn s(value: &str) -> PropValue {
		PropValue::from(value)
	}

	fn object(pairs: &[(&str, &str)]) -> PropValue {
		PropValue::Object(
			pairs
				.iter()
				.map(|(k, v)| (k.to_string(), s(v)))
				.collect(),
		)
	}

	#[test]
	fn test_standard_table_dispatch() {
		let table = StrategyTable::standard();
		assert_eq!(table.strategy_for("className"), MergeStrategy::ClassNames);
		assert_eq!(table.strategy_for("style"), MergeStrategy::ShallowObject);
		assert_eq!(table.strategy_for("onClick"), MergeStrategy::Handlers);
		assert_eq!(table.strategy_for("onMouseEnter"), MergeStrategy::Handlers);

		// Needs an uppercase letter right after "on"
		assert_eq!(table.strategy_for("one"), MergeStrategy::Default);
		assert_eq!(table.strategy_for("on"), MergeStrategy::Default);
		assert_eq!(table.strategy_for("buttonOnClick"), MergeStrategy::Default);
		assert_eq!(table.strategy_for("classname"), MergeStrategy::Default);
		assert_eq!(table.strategy_for("id"), MergeStrategy::Default);
	}

	#[test]
	fn test_custom_table_first_match_wins() {
		let table = StrategyTable::new(MergeStrategy::Default)
			.with(KeyMatcher::exact("data"), MergeStrategy::ShallowObject)
			.with(KeyMatcher::pattern("^da").unwrap(), MergeStrategy::ClassNames);

		assert_eq!(table.strategy_for("data"), MergeStrategy::ShallowObject);
		assert_eq!(table.strategy_for("dataset"), MergeStrategy::ClassNames);
		assert_eq!(table.strategy_for("style"), MergeStrategy::Default);
	}

	#[test]
	fn test_invalid_pattern() {
		match KeyMatcher::pattern("[invalid").unwrap_err() {
			CurryError::InvalidPattern { pattern, .. } => assert_eq!(pattern, "[invalid"),
			other => panic!("Expected InvalidPattern error, got {other:?}"),
		}
	}

	#[test]
	fn test_class_names() {
		assert_eq!(
			merge_class_names(Some(&s("some-class")), Some(&s("some-other-class"))),
			s("some-class some-other-class")
		);
		assert_eq!(merge_class_names(Some(&s("a")), None), s("a"));
		assert_eq!(merge_class_names(None, Some(&s("b"))), s("b"));
		assert_eq!(merge_class_names(Some(&s("")), Some(&s(""))), s(""));
	}

	#[test]
	fn test_objects_soft() {
		let base = object(&[("color", "white"), ("fontWeight", "bold")]);
		let overriding = object(&[("color", "black")]);
		assert_eq!(
			merge_objects(Some(&base), Some(&overriding), false),
			object(&[("color", "black"), ("fontWeight", "bold")])
		);
	}

	#[test]
	fn test_objects_hard() {
		let base = object(&[("color", "white")]);
		let overriding = object(&[("color", "black"), ("fontWeight", "bold")]);
		assert_eq!(
			merge_objects(Some(&base), Some(&overriding), true),
			object(&[("color", "white"), ("fontWeight", "bold")])
		);
	}

	#[test]
	fn test_objects_missing_or_scalar_counts_as_empty() {
		let base = object(&[("color", "white")]);
		assert_eq!(merge_objects(Some(&base), None, false), base);
		assert_eq!(merge_objects(None, Some(&base), true), base);
		assert_eq!(merge_objects(Some(&s("color: red")), Some(&base), false), base);
	}

	#[test]
	fn test_handlers_one_side() {
		let handler = PropValue::Handler(Handler::noop());
		assert_eq!(merge_handlers(Some(&handler), None), handler);
		assert_eq!(merge_handlers(None, Some(&handler)), handler);
		assert_eq!(merge_handlers(Some(&PropValue::Null), Some(&handler)), handler);
		assert_eq!(
			merge_handlers(None, Some(&PropValue::Bool(false))),
			PropValue::Bool(false)
		);
		assert_eq!(
			merge_handlers(Some(&PropValue::Null), Some(&PropValue::Bool(false))),
			PropValue::Bool(false)
		);
		assert_eq!(merge_handlers(Some(&PropValue::Bool(false)), None), PropValue::Null);
	}

	#[test]
	fn test_handlers_both_sides_are_chained() {
		let base = PropValue::Handler(Handler::noop());
		let overriding = PropValue::Handler(Handler::noop());
		let merged = merge_handlers(Some(&base), Some(&overriding));

		let handler = merged.as_handler().unwrap();
		assert_ne!(&merged, &base);
		assert_ne!(&merged, &overriding);
		assert!(handler.call(&[]).is_ok());
	}

	#[test]
	fn test_handlers_non_callable_keeps_base() {
		assert_eq!(
			merge_handlers(Some(&s("doThing")), Some(&PropValue::Handler(Handler::noop()))),
			s("doThing")
		);
	}

	#[test]
	fn test_default_soft_prefers_truthy_override() {
		assert_eq!(merge_default(Some(&s("b")), Some(&s("o")), false), s("o"));
		assert_eq!(merge_default(Some(&s("b")), None, false), s("b"));
		assert_eq!(merge_default(None, Some(&s("o")), false), s("o"));
	}

	#[test]
	fn test_default_hard_prefers_truthy_base() {
		assert_eq!(merge_default(Some(&s("b")), Some(&s("o")), true), s("b"));
		assert_eq!(merge_default(None, Some(&s("o")), true), s("o"));
	}

	#[test]
	fn test_default_falsy_values_fall_through() {
		let zero = PropValue::from(0_i64);

		// Falsy override loses to the base even though it is present
		assert_eq!(merge_default(Some(&s("b")), Some(&zero), false), s("b"));
		// Falsy base loses to the override under hard merges
		assert_eq!(merge_default(Some(&s("")), Some(&s("o")), true), s("o"));
		// Falsy preferred side with absent fallback yields null
		assert_eq!(merge_default(None, Some(&zero), false), PropValue::Null);
		// Falsy fallback is taken as-is
		assert_eq!(merge_default(Some(&zero), Some(&s("")), false), zero);
	}
}
