//! Crate-wide error types shared by request construction and dispatch.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
///
/// Construction-time problems ([`Error::Config`], [`Error::Identifier`], [`Error::Request`]) are
/// returned by constructors. Everything else arrives through the dispatch outcome.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Identifier failed validation.
	#[error(transparent)]
	Identifier(#[from] crate::id::IdentifierError),
	/// Request descriptor could not be built.
	#[error(transparent)]
	Request(#[from] crate::request::RequestError),
	/// Transport failure (DNS, TCP, TLS, timeout).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Response body could not be decoded into the requested model.
	#[error(transparent)]
	Decode(#[from] crate::model::DecodeError),

	/// The Control API answered with a non-success HTTP status.
	#[error("Control API responded with HTTP {status}.")]
	Status {
		/// HTTP status code returned by the Control API.
		status: u16,
		/// Retry-After hint from upstream, if supplied. Informational only.
		retry_after: Option<Duration>,
		/// Raw response body, possibly empty.
		body: Vec<u8>,
	},
	/// Request body could not be encoded as JSON.
	#[error("Request body could not be encoded as JSON.")]
	Serialization(#[source] serde_json::Error),
}
impl Error {
	/// Returns the HTTP status attached to the error, when the Control API produced one.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Status { status, .. } => Some(*status),
			_ => None,
		}
	}
}

/// Configuration and validation failures raised before a request leaves the process.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// HTTP request construction failed.
	#[error(transparent)]
	HttpRequest(#[from] ::http::Error),
	/// Base URL cannot be parsed.
	#[error("Control API base URL is invalid.")]
	InvalidBaseUrl {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Base URL uses a scheme other than `http` or `https`.
	#[error("Control API base URL must use http or https, got `{scheme}`.")]
	UnsupportedScheme {
		/// Scheme that failed validation.
		scheme: String,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the Control API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying HTTP client gave up waiting for the Control API.
	#[error("Request timed out while calling the Control API.")]
	Timeout {
		/// Transport-specific timeout error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the Control API.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}

	/// Wraps a transport-specific timeout error.
	pub fn timeout(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Timeout { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}
