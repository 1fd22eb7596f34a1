use crate::merge::MergePolicy;
use crate::props::{Props, props_to_json};
use crate::template::{PropTypes, Template, TypeTag, display_name_of};
use std::fmt;
use std::sync::Arc;

/// Builds an instance of a type tag from merged props.
pub trait Constructor {
	type Output;

	fn construct(&self, tag: &TypeTag, props: Props) -> Self::Output;
}

impl<F, T> Constructor for F
where
	F: Fn(&TypeTag, Props) -> T,
{
	type Output = T;

	fn construct(&self, tag: &TypeTag, props: Props) -> T {
		self(tag, props)
	}
}

/// A plain constructed value: the tag and its final props.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
	pub tag: TypeTag,
	pub props: Props,
}

impl Element {
	pub fn to_json(&self) -> serde_json::Value {
		serde_json::json!({
			"tag": display_name_of(&self.tag),
			"props": props_to_json(&self.props),
		})
	}
}

/// Constructor producing an [`Element`].
pub fn element(tag: &TypeTag, props: Props) -> Element {
	Element {
		tag: tag.clone(),
		props,
	}
}

/// A template with a merge policy, ready to be applied to call-site props.
///
/// Each call to [`Curried::apply`] is independent; the template is shared and
/// never modified.
#[derive(Clone)]
pub struct Curried<C> {
	template: Arc<Template>,
	display_name: String,
	policy: MergePolicy,
	constructor: C,
}

impl<C: Constructor> Curried<C> {
	/// Merge the template's base props with `overriding` under this policy.
	pub fn merge(&self, overriding: &Props) -> Props {
		self.policy.merge(&self.template.props, overriding)
	}

	/// Merge, then construct the template's type with the merged props.
	pub fn apply(&self, overriding: &Props) -> C::Output {
		let props = self.merge(overriding);
		self.constructor.construct(&self.template.tag, props)
	}

	pub fn display_name(&self) -> &str {
		&self.display_name
	}

	/// The wrapped type's declared prop shapes, if it has any.
	pub fn prop_types(&self) -> Option<&PropTypes> {
		self.template.tag.prop_types()
	}

	pub fn template(&self) -> &Template {
		&self.template
	}

	pub fn policy(&self) -> &MergePolicy {
		&self.policy
	}
}

impl<C> fmt::Debug for Curried<C> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Curried")
			.field("display_name", &self.display_name)
			.field("policy", &self.policy)
			.field("template", &self.template)
			.finish_non_exhaustive()
	}
}

/// Curry `template` under `policy`.
///
/// Without an explicit `display_name` the result is named
/// `Curried(<name of the tag>)`.
pub fn curry<C: Constructor>(
	template: Template,
	display_name: Option<&str>,
	policy: MergePolicy,
	constructor: C,
) -> Curried<C> {
	let display_name = match display_name {
		Some(name) => name.to_string(),
		None => format!("Curried({})", display_name_of(&template.tag)),
	};

	tracing::debug!(
		display_name = %display_name,
		policy = policy.name(),
		base_props = template.props.len(),
		"curried template"
	);

	Curried {
		template: Arc::new(template),
		display_name,
		policy,
		constructor,
	}
}

/// Curry with call-site props winning on conflict.
pub fn curry_soft<C: Constructor>(
	template: Template,
	display_name: Option<&str>,
	constructor: C,
) -> Curried<C> {
	curry(template, display_name, MergePolicy::Soft, constructor)
}

/// Curry with the template's props winning on conflict.
pub fn curry_hard<C: Constructor>(
	template: Template,
	display_name: Option<&str>,
	constructor: C,
) -> Curried<C> {
	curry(template, display_name, MergePolicy::Hard, constructor)
}

/// Curry with per-key merge strategies.
pub fn curry_smart<C: Constructor>(
	template: Template,
	display_name: Option<&str>,
	is_hard: bool,
	constructor: C,
) -> Curried<C> {
	curry(
		template,
		display_name,
		MergePolicy::Smart { hard: is_hard },
		constructor,
	)
}
