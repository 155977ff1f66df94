//! Optional observability helpers for request dispatch.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `sonos_control.request` with the `namespace`
//!   and `method` fields.
//! - Enable `metrics` to increment the `sonos_control_request_total` counter for every
//!   attempt/success/failure, labeled by `namespace` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestOutcome {
	/// A request is about to leave the process.
	Attempt,
	/// The Control API answered with a success status.
	Success,
	/// Transport failure, error status, or encoding failure.
	Failure,
}
impl RequestOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RequestOutcome::Attempt => "attempt",
			RequestOutcome::Success => "success",
			RequestOutcome::Failure => "failure",
		}
	}
}
impl Display for RequestOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
