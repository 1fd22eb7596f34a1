use crate::error::{CurryError, FileKind, Result};
use crate::props::{PropValue, Props};
use crate::template::types::{
	ComponentType, LoadedTemplate, TagSpec, Template, TemplateFile, TypeTag,
};
use serde::de::DeserializeOwned;
use std::path::Path;

/// File format, chosen by extension: `.json` is JSON, anything else TOML.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
	Toml,
	Json,
}

impl Format {
	pub fn from_path(path: &Path) -> Self {
		match path.extension().and_then(|ext| ext.to_str()) {
			Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
			_ => Format::Toml,
		}
	}
}

fn read_file(path: &Path, kind: FileKind) -> Result<String> {
	std::fs::read_to_string(path).map_err(|source| {
		if source.kind() == std::io::ErrorKind::NotFound {
			CurryError::FileNotFound {
				kind,
				path: path.to_path_buf(),
			}
		} else {
			CurryError::FileReadError {
				kind,
				path: path.to_path_buf(),
				source,
			}
		}
	})
}

fn deserialize<T: DeserializeOwned>(content: &str, path: &Path) -> Result<T> {
	match Format::from_path(path) {
		Format::Toml => toml::from_str(content).map_err(|source| CurryError::TomlParseError {
			path: path.to_path_buf(),
			source,
		}),
		Format::Json => {
			serde_json::from_str(content).map_err(|source| CurryError::JsonParseError {
				path: path.to_path_buf(),
				source,
			})
		}
	}
}

fn to_props(map: serde_json::Map<String, serde_json::Value>) -> Props {
	map.into_iter()
		.map(|(key, value)| (key, PropValue::from(value)))
		.collect()
}

/// Parse a template file from the given path.
pub fn parse_template_file(path: &Path) -> Result<LoadedTemplate> {
	let content = read_file(path, FileKind::Template)?;
	parse_template_str(&content, path)
}

/// Parse a template from a string (useful for testing). `path` picks the
/// format and labels errors.
pub fn parse_template_str(content: &str, path: &Path) -> Result<LoadedTemplate> {
	let file: TemplateFile = deserialize(content, path)?;

	let tag = match file.tag {
		Some(TagSpec::Native(name)) => {
			if !file.prop_types.is_empty() {
				tracing::warn!(path = %path.display(), "prop-types ignored for native tag {name}");
			}
			TypeTag::Native(name)
		}
		Some(TagSpec::Component(spec)) => TypeTag::Component(ComponentType {
			name: spec.name,
			display_name: spec.display_name,
			prop_types: file.prop_types,
		}),
		None => {
			return Err(CurryError::MissingTypeTag {
				path: path.to_path_buf(),
			});
		}
	};

	let props = file.props.ok_or_else(|| CurryError::MissingProps {
		path: path.to_path_buf(),
	})?;

	Ok(LoadedTemplate {
		template: Template::new(tag, to_props(props)),
		display_name: file.display_name,
		path: path.to_path_buf(),
	})
}

/// Parse an overrides file: a bare props table.
pub fn parse_props_file(path: &Path) -> Result<Props> {
	let content = read_file(path, FileKind::Overrides)?;
	parse_props_str(&content, path)
}

/// Parse an overrides table from a string.
pub fn parse_props_str(content: &str, path: &Path) -> Result<Props> {
	match deserialize::<serde_json::Value>(content, path)? {
		serde_json::Value::Object(map) => Ok(to_props(map)),
		other => Err(CurryError::PropsNotATable {
			path: path.to_path_buf(),
			found: PropValue::from(other).kind().to_string(),
		}),
	}
}
