//! Request execution: one descriptor in, one [`Outcome`] out.
//!
//! The [`Dispatcher`] owns the injected transport and error mapper. It never retries, never
//! queues, and never panics on a failed exchange: every failure is converted into the `Err`
//! side of the outcome so callers observe exactly one result per dispatched descriptor.

// crates.io
use ::http::HeaderMap;
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	http::{ControlHttpClient, ResponseMetadata, TransportErrorMapper},
	model,
	obs::{self, RequestOutcome, RequestSpan},
	request::ControlRequest,
};
#[cfg(feature = "reqwest")]
use crate::http::{ReqwestHttpClient, ReqwestTransportErrorMapper};

/// Result of a single dispatch: the raw response or the failure cause.
pub type Outcome = Result<ControlResponse>;

#[cfg(feature = "reqwest")]
/// Dispatcher specialized for the crate's default reqwest transport stack.
pub type ReqwestDispatcher = Dispatcher<ReqwestHttpClient, ReqwestTransportErrorMapper>;

/// Successful Control API response. The body is kept exactly as received.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControlResponse {
	status: u16,
	headers: HeaderMap,
	body: Vec<u8>,
}
impl ControlResponse {
	/// HTTP status code (always in the 2xx range).
	pub fn status(&self) -> u16 {
		self.status
	}

	/// Response headers.
	pub fn headers(&self) -> &HeaderMap {
		&self.headers
	}

	/// Raw response bytes, possibly empty.
	pub fn body(&self) -> &[u8] {
		&self.body
	}

	/// Consumes the response and returns the raw bytes.
	pub fn into_body(self) -> Vec<u8> {
		self.body
	}

	/// Decodes the body as JSON into `T`.
	pub fn decode<T>(&self) -> Result<T>
	where
		T: DeserializeOwned,
	{
		Ok(model::decode_json(&self.body)?)
	}
}

/// Executes request descriptors against an injected HTTP transport.
pub struct Dispatcher<C, M>
where
	C: ?Sized + ControlHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// HTTP client used for every outbound request.
	pub http_client: Arc<C>,
	/// Mapper applied to transport-layer errors before surfacing them to callers.
	pub transport_mapper: Arc<M>,
}
impl<C, M> Dispatcher<C, M>
where
	C: ?Sized + ControlHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Creates a dispatcher that reuses the caller-provided transport + mapper pair.
	pub fn with_http_client(http_client: impl Into<Arc<C>>, mapper: impl Into<Arc<M>>) -> Self {
		Self { http_client: http_client.into(), transport_mapper: mapper.into() }
	}

	/// Performs exactly one HTTP exchange for `request` and returns its outcome.
	///
	/// Success means a 2xx response; its body is returned unmodified. Transport failures,
	/// non-2xx responses, and body encoding failures are returned as `Err`.
	pub async fn perform_request<R>(&self, request: R) -> Outcome
	where
		R: ControlRequest,
	{
		let namespace = request.namespace();
		let span = RequestSpan::new(namespace, request.method());

		obs::record_request_outcome(namespace, RequestOutcome::Attempt);

		span.instrument(async {
			let result = self.exchange(&request).await;

			match &result {
				Ok(response) => {
					obs::trace_success(response.status, response.body.len());
					obs::record_request_outcome(namespace, RequestOutcome::Success);
				},
				Err(e) => {
					obs::trace_failure(e);
					obs::record_request_outcome(namespace, RequestOutcome::Failure);
				},
			}

			result
		})
		.await
	}

	/// Performs `request` and hands the outcome to `on_complete`, which runs exactly once.
	pub async fn perform_request_with<R, F>(&self, request: R, on_complete: F)
	where
		R: ControlRequest,
		F: FnOnce(Outcome),
	{
		on_complete(self.perform_request(request).await);
	}

	async fn exchange<R>(&self, request: &R) -> Outcome
	where
		R: ControlRequest,
	{
		let http_request = request.to_http_request()?;
		let response = self
			.http_client
			.send(http_request)
			.await
			.map_err(|e| self.transport_mapper.map_transport_error(request.namespace(), e))?;
		let metadata = ResponseMetadata::from_response(&response);
		let (parts, body) = response.into_parts();

		if !parts.status.is_success() {
			return Err(Error::Status {
				status: metadata.status,
				retry_after: metadata.retry_after,
				body,
			});
		}

		Ok(ControlResponse { status: metadata.status, headers: parts.headers, body })
	}
}
#[cfg(feature = "reqwest")]
impl Dispatcher<ReqwestHttpClient, ReqwestTransportErrorMapper> {
	/// Creates a dispatcher backed by a default reqwest client.
	pub fn new() -> Self {
		Self::with_http_client(ReqwestHttpClient::default(), ReqwestTransportErrorMapper)
	}
}
#[cfg(feature = "reqwest")]
impl Default for Dispatcher<ReqwestHttpClient, ReqwestTransportErrorMapper> {
	fn default() -> Self {
		Self::new()
	}
}
impl<C, M> Clone for Dispatcher<C, M>
where
	C: ?Sized + ControlHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	fn clone(&self) -> Self {
		Self {
			http_client: Arc::clone(&self.http_client),
			transport_mapper: Arc::clone(&self.transport_mapper),
		}
	}
}
impl<C, M> Debug for Dispatcher<C, M>
where
	C: ?Sized + ControlHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Dispatcher").finish_non_exhaustive()
	}
}
