//! Demonstrates plugging a custom transport and error mapper into the dispatcher.
//!
//! 1. Implement [`ControlHttpClient`] for a type that returns any HTTP response as `Ok`.
//! 2. Provide a [`TransportErrorMapper`] that turns the transport's own error type into the
//!    crate [`Error`].
//! 3. Hand both to [`Dispatcher::with_http_client`] and dispatch descriptors as usual.

// std
use std::{
	error::Error as StdError,
	fmt::{Display, Formatter, Result as FmtResult},
};
// crates.io
use color_eyre::Result;
// self
use sonos_control::{
	auth::AccessToken,
	config::ApiConfig,
	dispatch::Dispatcher,
	endpoints::group_volume,
	error::{Error, TransportError},
	http::{ControlHttpClient, HttpRequest, HttpResponse, TransportErrorMapper, TransportFuture},
	id::GroupId,
	model::VolumeStatus,
	request::Namespace,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let config = ApiConfig::default();
	let token = AccessToken::new("demo-access-token");
	let group = GroupId::new("XYZ-123abc456:12")?;
	let dispatcher: Dispatcher<CannedHttpClient, CannedErrorMapper> =
		Dispatcher::with_http_client(CannedHttpClient { online: true }, CannedErrorMapper);
	let response =
		dispatcher.perform_request(group_volume::get_volume(&config, &token, &group)?).await?;
	let volume = response.decode::<VolumeStatus>()?;

	println!(
		"Group volume reported by the canned transport: {} (muted: {}).",
		volume.volume, volume.muted
	);

	let offline: Dispatcher<CannedHttpClient, CannedErrorMapper> =
		Dispatcher::with_http_client(CannedHttpClient { online: false }, CannedErrorMapper);

	offline
		.perform_request_with(group_volume::set_mute(&config, &token, &group, true)?, |outcome| {
			match outcome {
				Ok(_) => println!("Offline transport unexpectedly succeeded."),
				Err(e) => println!("Transport error mapped by the dispatcher: {e}."),
			}
		})
		.await;

	Ok(())
}

#[derive(Debug)]
struct OfflineError {
	uri: String,
}
impl Display for OfflineError {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "No route to {}", self.uri)
	}
}
impl StdError for OfflineError {}

struct CannedHttpClient {
	online: bool,
}
impl ControlHttpClient for CannedHttpClient {
	type TransportError = OfflineError;

	fn send(&self, request: HttpRequest) -> TransportFuture<'_, Self::TransportError> {
		let online = self.online;

		Box::pin(async move {
			if !online {
				return Err(OfflineError { uri: request.uri().to_string() });
			}

			Ok(HttpResponse::new(b"{\"volume\":35,\"muted\":false,\"fixed\":false}".to_vec()))
		})
	}
}

struct CannedErrorMapper;
impl TransportErrorMapper<OfflineError> for CannedErrorMapper {
	fn map_transport_error(&self, namespace: Namespace, error: OfflineError) -> Error {
		println!("Mapping a transport failure in the {namespace} namespace.");

		TransportError::network(error).into()
	}
}
