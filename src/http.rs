//! Transport primitives for Control API exchanges.
//!
//! The module exposes [`ControlHttpClient`], the dispatcher's only dependency on an HTTP stack,
//! together with [`TransportErrorMapper`] so downstream crates can plug in their own client and
//! still surface failures through the crate's [`Error`] taxonomy. A reqwest-backed client is
//! provided behind the default `reqwest` feature, and [`RecordingHttpClient`] offers an
//! in-memory transport for tests and demos.

// std
use std::collections::VecDeque;
// crates.io
use ::http::{HeaderMap, Method, StatusCode, header::RETRY_AFTER};
use time::format_description::well_known::Rfc2822;
// self
use crate::{_prelude::*, error::TransportError, request::Namespace};
#[cfg(feature = "reqwest")] use crate::error::ConfigError;

/// Transport-level request handed to a [`ControlHttpClient`].
pub type HttpRequest = ::http::Request<Vec<u8>>;
/// Transport-level response returned by a [`ControlHttpClient`].
pub type HttpResponse = ::http::Response<Vec<u8>>;
/// Boxed future returned by [`ControlHttpClient::send`].
pub type TransportFuture<'a, E> =
	Pin<Box<dyn Future<Output = Result<HttpResponse, E>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of executing Control API requests.
///
/// Implementations perform exactly one exchange per call and must not retry. Any HTTP response
/// (successful or not) is returned as `Ok`; status classification happens in the dispatcher.
/// `Err` is reserved for failures where no response was received.
pub trait ControlHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Sends `request` and resolves with the raw response.
	fn send(&self, request: HttpRequest) -> TransportFuture<'_, Self::TransportError>;
}

/// Maps HTTP transport failures into crate [`Error`] values.
pub trait TransportErrorMapper<E>
where
	Self: 'static + Send + Sync,
	E: 'static + Send + Sync + StdError,
{
	/// Converts an error emitted by the transport into a crate error.
	fn map_transport_error(&self, namespace: Namespace, error: E) -> Error;
}

/// Mapper that reports every transport failure as [`TransportError::Network`].
#[derive(Clone, Copy, Debug, Default)]
pub struct NetworkErrorMapper;
impl<E> TransportErrorMapper<E> for NetworkErrorMapper
where
	E: 'static + Send + Sync + StdError,
{
	fn map_transport_error(&self, namespace: Namespace, error: E) -> Error {
		let _ = namespace;

		TransportError::network(error).into()
	}
}

/// Status metadata captured from a Control API response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResponseMetadata {
	/// HTTP status code.
	pub status: u16,
	/// Retry-After hint expressed as a relative duration.
	pub retry_after: Option<Duration>,
}
impl ResponseMetadata {
	/// Extracts metadata from a transport response.
	pub fn from_response(response: &HttpResponse) -> Self {
		Self {
			status: response.status().as_u16(),
			retry_after: parse_retry_after(response.headers()),
		}
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Builds a client from a reqwest builder, surfacing failures as [`ConfigError`].
	pub fn from_builder(builder: reqwest::ClientBuilder) -> Result<Self, ConfigError> {
		Ok(Self(builder.build()?))
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl ControlHttpClient for ReqwestHttpClient {
	type TransportError = ReqwestError;

	fn send(&self, request: HttpRequest) -> TransportFuture<'_, Self::TransportError> {
		let client = self.0.clone();

		Box::pin(async move {
			let response = client.execute(request.try_into()?).await?;
			let status = response.status();
			let version = response.version();
			let headers = response.headers().to_owned();
			let mut response_new = HttpResponse::new(response.bytes().await?.to_vec());

			*response_new.status_mut() = status;
			*response_new.version_mut() = version;
			*response_new.headers_mut() = headers;

			Ok(response_new)
		})
	}
}

/// Default mapper for reqwest-backed transports.
#[cfg(feature = "reqwest")]
#[derive(Clone, Copy, Debug, Default)]
pub struct ReqwestTransportErrorMapper;
#[cfg(feature = "reqwest")]
impl TransportErrorMapper<ReqwestError> for ReqwestTransportErrorMapper {
	fn map_transport_error(&self, namespace: Namespace, err: ReqwestError) -> Error {
		// Namespace reserved for provider-specific classification.
		let _ = namespace;

		if err.is_builder() {
			return ConfigError::from(err).into();
		}
		if err.is_timeout() {
			return TransportError::timeout(err).into();
		}

		TransportError::from(err).into()
	}
}

/// Request captured by [`RecordingHttpClient`].
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedRequest {
	/// HTTP verb.
	pub method: Method,
	/// Absolute target URI.
	pub uri: String,
	/// Headers exactly as sent.
	pub headers: HeaderMap,
	/// Raw body bytes, empty when the descriptor had no body.
	pub body: Vec<u8>,
}
impl RecordedRequest {
	/// Parses the recorded body as JSON, returning `None` for empty bodies.
	pub fn json_body(&self) -> Option<JsonValue> {
		if self.body.is_empty() { None } else { serde_json::from_slice(&self.body).ok() }
	}
}

/// Failures produced by [`RecordingHttpClient`].
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum RecordingTransportError {
	/// Scripted connection failure.
	#[error("Connection refused by {host}.")]
	ConnectionRefused {
		/// Host that refused the connection.
		host: String,
	},
	/// A request arrived after every scripted reply was consumed.
	#[error("No scripted reply left for {method} {uri}.")]
	Unscripted {
		/// HTTP verb of the unexpected request.
		method: String,
		/// Target of the unexpected request.
		uri: String,
	},
}

#[derive(Debug)]
enum ScriptedReply {
	Respond { status: StatusCode, headers: HeaderMap, body: Vec<u8> },
	Fail(RecordingTransportError),
}

#[derive(Debug, Default)]
struct RecordingState {
	replies: VecDeque<ScriptedReply>,
	requests: Vec<RecordedRequest>,
}

/// In-memory transport that replays scripted replies in order and records every request.
///
/// Clones share the same script and log, so a test can keep one handle for assertions while the
/// dispatcher owns another.
#[derive(Clone, Debug, Default)]
pub struct RecordingHttpClient {
	state: Arc<Mutex<RecordingState>>,
}
impl RecordingHttpClient {
	/// Queues a response with the provided status and body.
	pub fn respond(&self, status: u16, body: impl Into<Vec<u8>>) -> &Self {
		self.respond_with_headers(status, HeaderMap::new(), body)
	}

	/// Queues a response with explicit headers.
	pub fn respond_with_headers(
		&self,
		status: u16,
		headers: HeaderMap,
		body: impl Into<Vec<u8>>,
	) -> &Self {
		let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

		self.state.lock().replies.push_back(ScriptedReply::Respond {
			status,
			headers,
			body: body.into(),
		});

		self
	}

	/// Queues a transport failure.
	pub fn fail(&self, error: RecordingTransportError) -> &Self {
		self.state.lock().replies.push_back(ScriptedReply::Fail(error));

		self
	}

	/// Returns every request received so far.
	pub fn requests(&self) -> Vec<RecordedRequest> {
		self.state.lock().requests.clone()
	}

	/// Number of scripted replies not yet consumed.
	pub fn pending_replies(&self) -> usize {
		self.state.lock().replies.len()
	}
}
impl ControlHttpClient for RecordingHttpClient {
	type TransportError = RecordingTransportError;

	fn send(&self, request: HttpRequest) -> TransportFuture<'_, Self::TransportError> {
		let (parts, body) = request.into_parts();
		let recorded = RecordedRequest {
			method: parts.method,
			uri: parts.uri.to_string(),
			headers: parts.headers,
			body,
		};
		let reply = {
			let mut state = self.state.lock();
			let reply = state.replies.pop_front();

			state.requests.push(recorded.clone());

			reply
		};

		Box::pin(async move {
			match reply {
				Some(ScriptedReply::Respond { status, headers, body }) => {
					let mut response = HttpResponse::new(body);

					*response.status_mut() = status;
					*response.headers_mut() = headers;

					Ok(response)
				},
				Some(ScriptedReply::Fail(error)) => Err(error),
				None => Err(RecordingTransportError::Unscripted {
					method: recorded.method.to_string(),
					uri: recorded.uri,
				}),
			}
		})
	}
}

/// Parses a `Retry-After` header expressed either in seconds or as an RFC 2822 date.
pub fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
	let value = headers.get(RETRY_AFTER)?;
	let raw = value.to_str().ok()?.trim();

	if let Ok(secs) = raw.parse::<u64>() {
		return Some(Duration::seconds(i64::try_from(secs).ok()?));
	}
	if let Ok(moment) = OffsetDateTime::parse(raw, &Rfc2822) {
		let delta = moment - OffsetDateTime::now_utc();

		if delta.is_positive() {
			return Some(delta);
		}
	}

	None
}

#[cfg(test)]
mod tests {
	// crates.io
	use ::http::HeaderValue;
	// self
	use super::*;

	fn request(method: Method, uri: &str, body: &[u8]) -> HttpRequest {
		::http::Request::builder()
			.method(method)
			.uri(uri)
			.body(body.to_vec())
			.expect("Test request should build.")
	}

	#[test]
	fn retry_after_accepts_seconds_and_rejects_garbage() {
		let mut headers = HeaderMap::new();

		headers.insert(RETRY_AFTER, HeaderValue::from_static("120"));

		assert_eq!(parse_retry_after(&headers), Some(Duration::seconds(120)));

		headers.insert(RETRY_AFTER, HeaderValue::from_static("soon"));

		assert_eq!(parse_retry_after(&headers), None);
		assert_eq!(parse_retry_after(&HeaderMap::new()), None);
	}

	#[test]
	fn retry_after_ignores_past_dates() {
		let mut headers = HeaderMap::new();

		headers.insert(RETRY_AFTER, HeaderValue::from_static("Wed, 21 Oct 2015 07:28:00 GMT"));

		assert_eq!(parse_retry_after(&headers), None);
	}

	#[tokio::test]
	async fn recording_client_replays_in_order() {
		let client = RecordingHttpClient::default();

		client.respond(200, b"{}".to_vec()).fail(RecordingTransportError::ConnectionRefused {
			host: "api.ws.sonos.com".into(),
		});

		let first = client
			.send(request(Method::POST, "https://example.com/a", b"{\"x\":1}"))
			.await
			.expect("First scripted reply should succeed.");

		assert_eq!(first.status(), StatusCode::OK);
		assert_eq!(first.body(), b"{}");

		let second = client
			.send(request(Method::DELETE, "https://example.com/b", b""))
			.await
			.expect_err("Second scripted reply should fail.");

		assert!(matches!(second, RecordingTransportError::ConnectionRefused { .. }));

		let third = client
			.send(request(Method::GET, "https://example.com/c", b""))
			.await
			.expect_err("Unscripted requests should fail.");

		assert_eq!(
			third,
			RecordingTransportError::Unscripted {
				method: "GET".into(),
				uri: "https://example.com/c".into()
			}
		);

		let recorded = client.requests();

		assert_eq!(recorded.len(), 3);
		assert_eq!(recorded[0].json_body(), Some(serde_json::json!({ "x": 1 })));
		assert_eq!(recorded[1].json_body(), None);
		assert_eq!(client.pending_replies(), 0);
	}

	#[test]
	fn network_mapper_wraps_any_error() {
		let err = NetworkErrorMapper.map_transport_error(
			Namespace::Favorites,
			RecordingTransportError::ConnectionRefused { host: "localhost".into() },
		);

		assert!(matches!(err, Error::Transport(TransportError::Network { .. })));
	}
}
