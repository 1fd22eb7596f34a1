use crate::merge::complex::merge_complex_props;
use crate::props::Props;
use std::fmt;
use std::sync::Arc;

/// Override wins on conflict.
pub fn allow_overwrite(base: &Props, overriding: &Props) -> Props {
	let mut merged = base.clone();
	merged.extend(overriding.iter().map(|(k, v)| (k.clone(), v.clone())));
	merged
}

/// Base wins on conflict.
pub fn force_curry(base: &Props, overriding: &Props) -> Props {
	allow_overwrite(overriding, base)
}

/// A caller-supplied merge: `(base, overriding) -> merged`.
#[derive(Clone)]
pub struct PropsReducer(Arc<dyn Fn(&Props, &Props) -> Props + Send + Sync>);

impl PropsReducer {
	pub fn new<F>(reducer: F) -> Self
	where
		F: Fn(&Props, &Props) -> Props + Send + Sync + 'static,
	{
		PropsReducer(Arc::new(reducer))
	}

	pub fn reduce(&self, base: &Props, overriding: &Props) -> Props {
		(self.0)(base, overriding)
	}
}

impl fmt::Debug for PropsReducer {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("PropsReducer(..)")
	}
}

/// Selects how a curried template's base props combine with call-site props.
#[derive(Debug, Clone, Default)]
pub enum MergePolicy {
	/// Override wins on every conflict.
	#[default]
	Soft,

	/// Base wins on every conflict.
	Hard,

	/// Per-key strategies; `hard` picks the winner for keys without a special rule.
	Smart { hard: bool },

	Custom(PropsReducer),
}

impl MergePolicy {
	pub fn merge(&self, base: &Props, overriding: &Props) -> Props {
		match self {
			MergePolicy::Soft => allow_overwrite(base, overriding),
			MergePolicy::Hard => force_curry(base, overriding),
			MergePolicy::Smart { hard } => merge_complex_props(base, overriding, *hard),
			MergePolicy::Custom(reducer) => reducer.reduce(base, overriding),
		}
	}

	pub fn name(&self) -> &'static str {
		match self {
			MergePolicy::Soft => "soft",
			MergePolicy::Hard => "hard",
			MergePolicy::Smart { hard: false } => "smart",
			MergePolicy::Smart { hard: true } => "smart-hard",
			MergePolicy::Custom(_) => "custom",
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::props::PropValue;

	fn props(pairs: &[(&str, &str)]) -> Props {
		pairs
			.iter()
			.map(|(k, v)| (k.to_string(), PropValue::from(*v)))
			.collect()
	}

	#[test]
	fn test_disjoint_keys_union() {
		let base = props(&[("className", "some-class")]);
		let overriding = props(&[("id", "some-id")]);
		let expected = props(&[("className", "some-class"), ("id", "some-id")]);

		assert_eq!(allow_overwrite(&base, &overriding), expected);
		assert_eq!(force_curry(&base, &overriding), expected);
	}

	#[test]
	fn test_shared_key_precedence() {
		let base = props(&[("className", "some-class")]);
		let overriding = props(&[("className", "some-other-class")]);

		assert_eq!(
			allow_overwrite(&base, &overriding),
			props(&[("className", "some-other-class")])
		);
		assert_eq!(
			force_curry(&base, &overriding),
			props(&[("className", "some-class")])
		);
	}

	#[test]
	fn test_self_merge_is_identity() {
		let input = props(&[("a", "1"), ("b", "2")]);
		assert_eq!(allow_overwrite(&input, &input), input);
		assert_eq!(force_curry(&input, &input), input);
	}

	#[test]
	fn test_soft_keeps_falsy_override() {
		let base = props(&[("title", "hello")]);
		let overriding = props(&[("title", "")]);
		assert_eq!(MergePolicy::Soft.merge(&base, &overriding), overriding);
	}

	#[test]
	fn test_default_policy_is_soft() {
		assert_eq!(MergePolicy::default().name(), "soft");
	}

	#[test]
	fn test_smart_policy_dispatches() {
		let base = props(&[("className", "a"), ("id", "x")]);
		let overriding = props(&[("className", "b"), ("id", "y")]);

		let soft = MergePolicy::Smart { hard: false }.merge(&base, &overriding);
		assert_eq!(soft, props(&[("className", "a b"), ("id", "y")]));

		let hard = MergePolicy::Smart { hard: true }.merge(&base, &overriding);
		assert_eq!(hard, props(&[("className", "a b"), ("id", "x")]));
	}

	#[test]
	fn test_custom_policy() {
		let reducer = PropsReducer::new(|base, overriding| {
			assert_eq!(base, &props(&[("className", "some-class")]));
			assert_eq!(overriding, &props(&[("className", "some-other-class")]));
			props(&[("id", "some-custom-id")])
		});

		let merged = MergePolicy::Custom(reducer).merge(
			&props(&[("className", "some-class")]),
			&props(&[("className", "some-other-class")]),
		);
		assert_eq!(merged, props(&[("id", "some-custom-id")]));
	}
}
