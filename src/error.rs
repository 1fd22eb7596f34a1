use std::fmt;
use std::path::PathBuf;

/// Which input a file error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
	Template,
	Overrides,
}

impl fmt::Display for FileKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			FileKind::Template => f.write_str("Template"),
			FileKind::Overrides => f.write_str("Overrides"),
		}
	}
}

/// Library-level structured errors for curry-props.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum CurryError {
	#[error("{kind} file not found: {path}")]
	FileNotFound { kind: FileKind, path: PathBuf },

	#[error("Failed to read {kind} file: {path}")]
	FileReadError {
		kind: FileKind,
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse TOML file: {path}")]
	TomlParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Failed to parse JSON file: {path}")]
	JsonParseError {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	#[error("Template has no type tag: {path}")]
	MissingTypeTag { path: PathBuf },

	#[error("Template has no props table: {path}")]
	MissingProps { path: PathBuf },

	#[error("Invalid prop name pattern: {pattern}")]
	InvalidPattern {
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("Props must be a table, found {found}: {path}")]
	PropsNotATable { path: PathBuf, found: String },
}

/// Result type alias using CurryError.
pub type Result<T> = std::result::Result<T, CurryError>;
