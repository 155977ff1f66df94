//! Request descriptors: what to send, computed without I/O.
//!
//! [`ControlRequest`] is the contract the [`Dispatcher`](crate::dispatch::Dispatcher) consumes.
//! Every accessor is a pure function of the values supplied at construction, so calling one twice
//! yields identical results. [`Request`] is the generic implementation produced by
//! [`RequestBuilder`]; the [`endpoints`](crate::endpoints) catalogue is a thin layer of
//! constructors over it.

/// Builder API for assembling request descriptors.
pub mod builder;
/// Closed set of HTTP verbs used by the Control API.
pub mod method;
/// JSON body parameters.
pub mod parameters;

pub use builder::*;
pub use method::*;
pub use parameters::*;

// crates.io
use ::http::{
	HeaderMap, HeaderValue,
	header::{AUTHORIZATION, CONTENT_TYPE},
};
// self
use crate::{
	_prelude::*,
	auth::AccessToken,
	config::ApiConfig,
	error::ConfigError,
	http::HttpRequest,
	id::{GroupId, HouseholdId, PlayerId},
};

/// Media type attached to every request; bodies are always JSON encoded.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Contract implemented by every Control API request.
///
/// Implementations must be immutable after construction: `method`, `url`, `headers`, and `body`
/// may be called any number of times and must return the same values each time.
pub trait ControlRequest
where
	Self: Send + Sync,
{
	/// HTTP verb for this endpoint.
	fn method(&self) -> HttpMethod;

	/// Fully formed target address with all path parameters interpolated.
	fn url(&self) -> Url;

	/// Header set; always carries bearer authorization and the JSON content type.
	fn headers(&self) -> HeaderMap;

	/// Optional structured payload.
	fn body(&self) -> Option<&Parameters>;

	/// Resource namespace used for observability labels.
	fn namespace(&self) -> Namespace;

	/// JSON-encodes the body, if present.
	fn encode_body(&self) -> Result<Option<Vec<u8>>> {
		self.body().map(Parameters::to_json_bytes).transpose()
	}

	/// Assembles the transport-level request from the descriptor.
	fn to_http_request(&self) -> Result<HttpRequest> {
		let body = self.encode_body()?.unwrap_or_default();
		let mut builder =
			::http::Request::builder().method(self.method().as_http()).uri(self.url().as_str());

		if let Some(headers) = builder.headers_mut() {
			headers.extend(self.headers());
		}

		builder.body(body).map_err(|e| ConfigError::from(e).into())
	}
}

impl<T> ControlRequest for &T
where
	T: ?Sized + ControlRequest,
{
	fn method(&self) -> HttpMethod {
		T::method(self)
	}

	fn url(&self) -> Url {
		T::url(self)
	}

	fn headers(&self) -> HeaderMap {
		T::headers(self)
	}

	fn body(&self) -> Option<&Parameters> {
		T::body(self)
	}

	fn namespace(&self) -> Namespace {
		T::namespace(self)
	}
}
impl<T> ControlRequest for Box<T>
where
	T: ?Sized + ControlRequest,
{
	fn method(&self) -> HttpMethod {
		T::method(self)
	}

	fn url(&self) -> Url {
		T::url(self)
	}

	fn headers(&self) -> HeaderMap {
		T::headers(self)
	}

	fn body(&self) -> Option<&Parameters> {
		T::body(self)
	}

	fn namespace(&self) -> Namespace {
		T::namespace(self)
	}
}

/// Errors raised while constructing request descriptors.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum RequestError {
	/// Every request must be scoped to a household, group, or player.
	#[error("Request is missing a household, group, or player target.")]
	MissingTarget,
	/// Every request must name the resource namespace it addresses.
	#[error("Request is missing a resource namespace.")]
	MissingNamespace,
	/// The verb does not carry a body.
	#[error("{method} requests must not carry a body.")]
	BodyNotAllowed {
		/// Verb that rejected the body.
		method: HttpMethod,
	},
	/// The access token cannot be expressed as an HTTP header value.
	#[error("Access token contains characters that are not valid in an HTTP header.")]
	InvalidToken,
	/// A numeric parameter fell outside the range accepted by the Control API.
	#[error("Parameter `{parameter}` must be within {min}..={max}, got {value}.")]
	OutOfRange {
		/// Wire name of the parameter.
		parameter: &'static str,
		/// Rejected value.
		value: i64,
		/// Inclusive lower bound.
		min: i64,
		/// Inclusive upper bound.
		max: i64,
	},
}
impl RequestError {
	/// Validates that `value` lies within `min..=max`.
	pub fn check_range(
		parameter: &'static str,
		value: i64,
		min: i64,
		max: i64,
	) -> Result<(), Self> {
		if (min..=max).contains(&value) {
			Ok(())
		} else {
			Err(Self::OutOfRange { parameter, value, min, max })
		}
	}
}

/// Vendor resource namespaces addressed by the catalogue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Namespace {
	/// Household favorites.
	Favorites,
	/// Household playlists.
	Playlists,
	/// Group volume.
	GroupVolume,
	/// Player volume.
	PlayerVolume,
	/// Group playback state and transport controls.
	Playback,
	/// Metadata of the item currently playing in a group.
	PlaybackMetadata,
	/// Household group topology.
	Groups,
}
impl Namespace {
	/// Returns the wire name used in URL paths and event payloads.
	pub const fn as_str(self) -> &'static str {
		match self {
			Namespace::Favorites => "favorites",
			Namespace::Playlists => "playlists",
			Namespace::GroupVolume => "groupVolume",
			Namespace::PlayerVolume => "playerVolume",
			Namespace::Playback => "playback",
			Namespace::PlaybackMetadata => "playbackMetadata",
			Namespace::Groups => "groups",
		}
	}
}
impl Display for Namespace {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Scope a request path starts from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Target {
	/// `households/{householdId}`.
	Household(HouseholdId),
	/// `groups/{groupId}`.
	Group(GroupId),
	/// `players/{playerId}`.
	Player(PlayerId),
}
impl Target {
	/// Returns the two leading path segments for the target.
	pub fn segments(&self) -> [&str; 2] {
		match self {
			Target::Household(id) => ["households", id.as_ref()],
			Target::Group(id) => ["groups", id.as_ref()],
			Target::Player(id) => ["players", id.as_ref()],
		}
	}
}
impl From<HouseholdId> for Target {
	fn from(value: HouseholdId) -> Self {
		Self::Household(value)
	}
}
impl From<GroupId> for Target {
	fn from(value: GroupId) -> Self {
		Self::Group(value)
	}
}
impl From<PlayerId> for Target {
	fn from(value: PlayerId) -> Self {
		Self::Player(value)
	}
}

/// Immutable request descriptor produced by [`RequestBuilder`].
#[derive(Clone, Debug, PartialEq)]
pub struct Request {
	method: HttpMethod,
	url: Url,
	headers: HeaderMap,
	body: Option<Parameters>,
	namespace: Namespace,
}
impl Request {
	/// Creates a new builder resolving paths against `config` and authorizing with `token`.
	pub fn builder<'a>(config: &'a ApiConfig, token: &'a AccessToken) -> RequestBuilder<'a> {
		RequestBuilder::new(config, token)
	}
}
impl ControlRequest for Request {
	fn method(&self) -> HttpMethod {
		self.method
	}

	fn url(&self) -> Url {
		self.url.clone()
	}

	fn headers(&self) -> HeaderMap {
		self.headers.clone()
	}

	fn body(&self) -> Option<&Parameters> {
		self.body.as_ref()
	}

	fn namespace(&self) -> Namespace {
		self.namespace
	}
}

/// Builds the header set shared by every request: bearer authorization plus JSON content type.
pub fn authorized_headers(token: &AccessToken) -> Result<HeaderMap, RequestError> {
	let mut authorization =
		HeaderValue::from_str(&token.bearer()).map_err(|_| RequestError::InvalidToken)?;

	authorization.set_sensitive(true);

	let mut headers = HeaderMap::with_capacity(2);

	headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
	headers.insert(AUTHORIZATION, authorization);

	Ok(headers)
}
