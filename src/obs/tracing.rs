// self
use crate::{
	_prelude::*,
	request::{HttpMethod, Namespace},
};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedRequest<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedRequest<F> = F;

/// A span wrapping a single dispatch.
#[derive(Clone, Debug)]
pub struct RequestSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl RequestSpan {
	/// Creates a new span tagged with the namespace and verb.
	pub fn new(namespace: Namespace, method: HttpMethod) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"sonos_control.request",
				namespace = namespace.as_str(),
				method = method.as_str()
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (namespace, method);

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedRequest<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Logs a successful exchange at `debug` (when enabled).
pub fn trace_success(status: u16, body_len: usize) {
	#[cfg(feature = "tracing")]
	tracing::debug!(status, body_len, "Control API request succeeded.");

	#[cfg(not(feature = "tracing"))]
	let _ = (status, body_len);
}

/// Logs a failed exchange at `warn` (when enabled).
pub fn trace_failure(error: &Error) {
	#[cfg(feature = "tracing")]
	tracing::warn!(error = %error, status = error.status(), "Control API request failed.");

	#[cfg(not(feature = "tracing"))]
	let _ = error;
}
