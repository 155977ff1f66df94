// std
use std::ops::Index;
// crates.io
use serde::ser::Error as _;
use serde_json::Map;
// self
use crate::_prelude::*;

/// JSON object carried as a request body.
///
/// Keys are kept exactly as supplied. Equality compares key/value pairs and ignores insertion
/// order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Parameters(Map<String, JsonValue>);
impl Parameters {
	/// Creates an empty parameter set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a parameter and returns the updated set.
	pub fn with(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
		self.insert(key, value);

		self
	}

	/// Inserts a parameter, returning the previous value for the key.
	pub fn insert(
		&mut self,
		key: impl Into<String>,
		value: impl Into<JsonValue>,
	) -> Option<JsonValue> {
		self.0.insert(key.into(), value.into())
	}

	/// Builds a parameter set from any value that serializes into a JSON object.
	pub fn from_serializable<T>(value: &T) -> Result<Self>
	where
		T: ?Sized + Serialize,
	{
		match serde_json::to_value(value).map_err(Error::Serialization)? {
			JsonValue::Object(map) => Ok(Self(map)),
			other => Err(Error::Serialization(serde_json::Error::custom(format!(
				"Request body must be a JSON object, got {}.",
				json_kind(&other)
			)))),
		}
	}

	/// Returns the value stored for `key`.
	pub fn get(&self, key: &str) -> Option<&JsonValue> {
		self.0.get(key)
	}

	/// Returns true when `key` is present.
	pub fn contains_key(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	/// Iterates over parameter names.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.0.keys().map(String::as_str)
	}

	/// Number of parameters.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true when no parameters are set.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Encodes the parameters as a JSON object.
	pub fn to_json_bytes(&self) -> Result<Vec<u8>> {
		serde_json::to_vec(&self.0).map_err(Error::Serialization)
	}

	/// Borrows the underlying JSON map.
	pub fn as_map(&self) -> &Map<String, JsonValue> {
		&self.0
	}
}
impl From<Map<String, JsonValue>> for Parameters {
	fn from(value: Map<String, JsonValue>) -> Self {
		Self(value)
	}
}
impl<K, V> FromIterator<(K, V)> for Parameters
where
	K: Into<String>,
	V: Into<JsonValue>,
{
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
	{
		Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
	}
}
impl IntoIterator for Parameters {
	type IntoIter = serde_json::map::IntoIter;
	type Item = (String, JsonValue);

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}
impl Index<&str> for Parameters {
	type Output = JsonValue;

	fn index(&self, key: &str) -> &Self::Output {
		&self.0[key]
	}
}

fn json_kind(value: &JsonValue) -> &'static str {
	match value {
		JsonValue::Null => "null",
		JsonValue::Bool(_) => "a boolean",
		JsonValue::Number(_) => "a number",
		JsonValue::String(_) => "a string",
		JsonValue::Array(_) => "an array",
		JsonValue::Object(_) => "an object",
	}
}
