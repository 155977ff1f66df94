// self
use crate::{obs::RequestOutcome, request::Namespace};

/// Records a dispatch outcome via the global metrics recorder (when enabled).
pub fn record_request_outcome(namespace: Namespace, outcome: RequestOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"sonos_control_request_total",
			"namespace" => namespace.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (namespace, outcome);
	}
}
