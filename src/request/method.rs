// self
use crate::_prelude::*;

/// HTTP verbs used by the Control API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
	/// Reads a resource.
	Get,
	/// Creates a subscription or performs an action.
	Post,
	/// Replaces a resource.
	Put,
	/// Removes a subscription.
	Delete,
}
impl HttpMethod {
	/// Returns the canonical verb name.
	pub const fn as_str(self) -> &'static str {
		match self {
			HttpMethod::Get => "GET",
			HttpMethod::Post => "POST",
			HttpMethod::Put => "PUT",
			HttpMethod::Delete => "DELETE",
		}
	}

	/// Converts the verb into the transport-level method type.
	pub fn as_http(self) -> ::http::Method {
		match self {
			HttpMethod::Get => ::http::Method::GET,
			HttpMethod::Post => ::http::Method::POST,
			HttpMethod::Put => ::http::Method::PUT,
			HttpMethod::Delete => ::http::Method::DELETE,
		}
	}

	/// Returns true when requests with this verb may carry a JSON body.
	pub const fn allows_body(self) -> bool {
		matches!(self, HttpMethod::Post | HttpMethod::Put)
	}
}
impl Display for HttpMethod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl From<HttpMethod> for ::http::Method {
	fn from(value: HttpMethod) -> Self {
		value.as_http()
	}
}
