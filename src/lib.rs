//! Stateless request shaping and dispatch for the Sonos cloud Control API: typed request
//! descriptors, one outcome per call, and a transport seam that works with any HTTP client.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod config;
pub mod dispatch;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod id;
pub mod model;
pub mod obs;
pub mod request;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
#[doc(hidden)]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests and demos.

	pub use crate::_prelude::*;

	// self
	use crate::{
		auth::AccessToken,
		config::ApiConfig,
		dispatch::{Dispatcher, ReqwestDispatcher},
		http::{
			NetworkErrorMapper, RecordingHttpClient, ReqwestHttpClient, ReqwestTransportErrorMapper,
		},
		id::{FavoriteId, GroupId, HouseholdId, PlayerId, PlaylistId},
	};

	/// Dispatcher type alias used by tests that swap in the in-memory transport.
	pub type RecordingDispatcher = Dispatcher<RecordingHttpClient, NetworkErrorMapper>;

	/// Builds a reqwest HTTP client that accepts the self-signed certificates produced by
	/// `httpmock` during tests.
	pub fn test_reqwest_http_client() -> ReqwestHttpClient {
		let client = ReqwestClient::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()
			.expect("Failed to build insecure Reqwest client for tests.");

		ReqwestHttpClient::with_client(client)
	}

	/// Constructs a reqwest-backed [`Dispatcher`] for integration tests.
	pub fn build_reqwest_test_dispatcher() -> ReqwestDispatcher {
		Dispatcher::with_http_client(test_reqwest_http_client(), ReqwestTransportErrorMapper)
	}

	/// Constructs a [`Dispatcher`] backed by the provided in-memory transport.
	pub fn build_recording_dispatcher(client: &RecordingHttpClient) -> RecordingDispatcher {
		Dispatcher::with_http_client(client.clone(), NetworkErrorMapper)
	}

	/// Points an [`ApiConfig`] at a mock server base URL such as `httpmock::MockServer::base_url`.
	pub fn test_config(base: &str) -> ApiConfig {
		ApiConfig::builder()
			.base_url(format!("{base}/control/api/v1"))
			.build()
			.expect("Mock server base URL should be a valid Control API base.")
	}

	/// Access token shared by tests.
	pub fn test_token() -> AccessToken {
		AccessToken::new("accessToken")
	}

	/// Household identifier shared by tests.
	pub fn test_household() -> HouseholdId {
		HouseholdId::new("HHID_4231").expect("Test household identifier should be valid.")
	}

	/// Group identifier shared by tests.
	pub fn test_group() -> GroupId {
		GroupId::new("XYZ-123abc456:12").expect("Test group identifier should be valid.")
	}

	/// Player identifier shared by tests.
	pub fn test_player() -> PlayerId {
		PlayerId::new("RINCON_000E58A0123401400").expect("Test player identifier should be valid.")
	}

	/// Favorite identifier shared by tests.
	pub fn test_favorite() -> FavoriteId {
		FavoriteId::new("favoriteId").expect("Test favorite identifier should be valid.")
	}

	/// Playlist identifier shared by tests.
	pub fn test_playlist() -> PlaylistId {
		PlaylistId::new("playlistId").expect("Test playlist identifier should be valid.")
	}
}

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	pub use parking_lot::Mutex;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use serde_json::Value as JsonValue;
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use ::http as http_types;
#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _, sonos_control as _, tokio as _};
