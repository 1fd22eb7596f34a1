use crate::props::handler::Handler;
use std::collections::BTreeMap;
use std::fmt;

/// A props map: prop name to value.
pub type Props = BTreeMap<String, PropValue>;

/// A single prop value.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
	/// Explicit null. Also used where a merge selects a side that was absent.
	Null,

	Bool(bool),

	/// Integers keep their exact value; floats are always finite.
	Number(serde_json::Number),

	String(String),

	List(Vec<PropValue>),

	/// Nested props, e.g. a `style` object.
	Object(Props),

	/// Callback value, e.g. an `onClick` handler.
	Handler(Handler),
}

impl PropValue {
	/// Whether this value counts as "set" for fallback merges.
	///
	/// `Null`, `false`, `0` and `""` are falsy; everything else is truthy.
	/// NaN never reaches a `Number`; converting it yields `Null`.
	pub fn is_truthy(&self) -> bool {
		match self {
			PropValue::Null => false,
			PropValue::Bool(b) => *b,
			PropValue::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
			PropValue::String(s) => !s.is_empty(),
			PropValue::List(_) | PropValue::Object(_) | PropValue::Handler(_) => true,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			PropValue::String(s) => Some(s),
			_ => None,
		}
	}

	pub fn as_object(&self) -> Option<&Props> {
		match self {
			PropValue::Object(props) => Some(props),
			_ => None,
		}
	}

	pub fn as_handler(&self) -> Option<&Handler> {
		match self {
			PropValue::Handler(handler) => Some(handler),
			_ => None,
		}
	}

	/// Short name of the variant, for diagnostics.
	pub fn kind(&self) -> &'static str {
		match self {
			PropValue::Null => "null",
			PropValue::Bool(_) => "bool",
			PropValue::Number(_) => "number",
			PropValue::String(_) => "string",
			PropValue::List(_) => "list",
			PropValue::Object(_) => "object",
			PropValue::Handler(_) => "handler",
		}
	}

	/// Convert to JSON for output. Handlers have no data representation and
	/// render as the string `"[handler]"`.
	pub fn to_json(&self) -> serde_json::Value {
		use serde_json::Value;

		match self {
			PropValue::Null => Value::Null,
			PropValue::Bool(b) => Value::Bool(*b),
			PropValue::Number(n) => Value::Number(n.clone()),
			PropValue::String(s) => Value::String(s.clone()),
			PropValue::List(items) => Value::Array(items.iter().map(PropValue::to_json).collect()),
			PropValue::Object(props) => props_to_json(props),
			PropValue::Handler(_) => Value::String("[handler]".to_string()),
		}
	}
}

/// Convert a whole props map to a JSON object.
pub fn props_to_json(props: &Props) -> serde_json::Value {
	serde_json::Value::Object(
		props
			.iter()
			.map(|(key, value)| (key.clone(), value.to_json()))
			.collect(),
	)
}

impl From<serde_json::Value> for PropValue {
	fn from(value: serde_json::Value) -> Self {
		use serde_json::Value;

		match value {
			Value::Null => PropValue::Null,
			Value::Bool(b) => PropValue::Bool(b),
			Value::Number(n) => PropValue::Number(n),
			Value::String(s) => PropValue::String(s),
			Value::Array(items) => PropValue::List(items.into_iter().map(PropValue::from).collect()),
			Value::Object(map) => PropValue::Object(
				map.into_iter()
					.map(|(key, value)| (key, PropValue::from(value)))
					.collect(),
			),
		}
	}
}

impl From<&str> for PropValue {
	fn from(value: &str) -> Self {
		PropValue::String(value.to_string())
	}
}

impl From<String> for PropValue {
	fn from(value: String) -> Self {
		PropValue::String(value)
	}
}

impl From<bool> for PropValue {
	fn from(value: bool) -> Self {
		PropValue::Bool(value)
	}
}

/// Non-finite floats have no number representation and become `Null`.
impl From<f64> for PropValue {
	fn from(value: f64) -> Self {
		serde_json::Number::from_f64(value)
			.map(PropValue::Number)
			.unwrap_or(PropValue::Null)
	}
}

impl From<i64> for PropValue {
	fn from(value: i64) -> Self {
		PropValue::Number(value.into())
	}
}

impl From<u64> for PropValue {
	fn from(value: u64) -> Self {
		PropValue::Number(value.into())
	}
}

impl From<Props> for PropValue {
	fn from(value: Props) -> Self {
		PropValue::Object(value)
	}
}

impl From<Handler> for PropValue {
	fn from(value: Handler) -> Self {
		PropValue::Handler(value)
	}
}

/// Text form used when a value is joined into a class list. Objects and
/// handlers have no meaningful text and render as `[object]` / `[handler]`.
impl fmt::Display for PropValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			PropValue::Null => f.write_str("null"),
			PropValue::Bool(b) => write!(f, "{b}"),
			PropValue::Number(n) => write!(f, "{n}"),
			PropValue::String(s) => f.write_str(s),
			PropValue::List(items) => {
				for (i, item) in items.iter().enumerate() {
					if i > 0 {
						f.write_str(",")?;
					}
					write!(f, "{item}")?;
				}
				Ok(())
			}
			PropValue::Object(_) => f.write_str("[object]"),
			PropValue::Handler(_) => f.write_str("[handler]"),
		}
	}
}
