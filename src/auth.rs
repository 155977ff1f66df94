//! Bearer credentials attached to every request.

// self
use crate::_prelude::*;

/// Opaque OAuth access token attached to every Control API request.
///
/// The library never fetches, refreshes, or persists tokens. Callers hand one in per request and
/// the value only leaves the process inside the `Authorization` header.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken(String);
impl AccessToken {
	/// Wraps a new token string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner token value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// Formats the token as an `Authorization` header value.
	pub fn bearer(&self) -> String {
		format!("Bearer {}", self.0)
	}
}
impl AsRef<str> for AccessToken {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl From<&str> for AccessToken {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}
impl From<String> for AccessToken {
	fn from(value: String) -> Self {
		Self::new(value)
	}
}
impl Debug for AccessToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("AccessToken").field(&"<redacted>").finish()
	}
}
impl Display for AccessToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}
