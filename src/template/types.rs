use crate::props::Props;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Declared prop shapes of a component: prop name to a type description.
/// Carried for documentation only; nothing validates against it.
pub type PropTypes = BTreeMap<String, String>;

/// Fallback display name for components with neither a display name nor a name.
pub const ANONYMOUS_COMPONENT: &str = "Component";

/// What a template constructs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeTag {
	/// A host element such as `div`.
	Native(String),

	/// A user-defined component.
	Component(ComponentType),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentType {
	pub name: Option<String>,
	pub display_name: Option<String>,
	pub prop_types: PropTypes,
}

impl TypeTag {
	pub fn native(name: impl Into<String>) -> Self {
		TypeTag::Native(name.into())
	}

	pub fn component(name: impl Into<String>) -> Self {
		TypeTag::Component(ComponentType {
			name: Some(name.into()),
			..Default::default()
		})
	}

	pub fn prop_types(&self) -> Option<&PropTypes> {
		match self {
			TypeTag::Native(_) => None,
			TypeTag::Component(component) => Some(&component.prop_types),
		}
	}
}

/// Human-readable name of a type tag.
///
/// Native tags use their element name. Components use their display name,
/// then their name, then [`ANONYMOUS_COMPONENT`].
pub fn display_name_of(tag: &TypeTag) -> &str {
	match tag {
		TypeTag::Native(name) => name,
		TypeTag::Component(component) => component
			.display_name
			.as_deref()
			.or(component.name.as_deref())
			.unwrap_or(ANONYMOUS_COMPONENT),
	}
}

/// A type tag paired with the base props curried into it.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
	pub tag: TypeTag,
	pub props: Props,
}

impl Template {
	pub fn new(tag: TypeTag, props: Props) -> Self {
		Template { tag, props }
	}
}

/// A template loaded from disk with its source path.
#[derive(Debug, Clone)]
pub struct LoadedTemplate {
	pub template: Template,

	/// Display name requested by the file, if any.
	pub display_name: Option<String>,

	pub path: PathBuf,
}

/// On-disk template layout, shared by the TOML and JSON formats.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TemplateFile {
	#[serde(default)]
	pub tag: Option<TagSpec>,

	#[serde(default)]
	pub display_name: Option<String>,

	#[serde(default)]
	pub props: Option<serde_json::Map<String, serde_json::Value>>,

	#[serde(default)]
	pub prop_types: PropTypes,
}

/// `tag = "div"` or `tag = { name = "Button", display-name = "PrimaryButton" }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TagSpec {
	Native(String),
	Component(ComponentSpec),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ComponentSpec {
	#[serde(default)]
	pub name: Option<String>,

	#[serde(default)]
	pub display_name: Option<String>,
}
