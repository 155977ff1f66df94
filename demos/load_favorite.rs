//! Loads a favorite into a group through the default reqwest transport, then decodes the
//! command envelope. A local mock server stands in for the Control API.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use sonos_control::{
	auth::AccessToken,
	config::ApiConfig,
	dispatch::ReqwestDispatcher,
	endpoints::{LoadOptions, PlayMode, QueueAction, favorites},
	id::{FavoriteId, GroupId},
	model::CommandResponse,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let group = GroupId::new("XYZ-123abc456:12")?;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path(format!("/control/api/v1/groups/{group}/favorites"));
			then.status(200).header("content-type", "application/json").body(
				"{\"namespace\":\"favorites\",\"response\":\"loadFavorite\",\"success\":true}",
			);
		})
		.await;
	let config = ApiConfig::builder().base_url(server.url("/control/api/v1")).build()?;
	let token = AccessToken::new("demo-access-token");
	let options = LoadOptions::default()
		.action(QueueAction::Replace)
		.play_on_completion(true)
		.play_mode(PlayMode::Shuffle);
	let request =
		favorites::load_favorite(&config, &token, &group, &FavoriteId::new("2")?, &options)?;
	let dispatcher = ReqwestDispatcher::new();
	let response = dispatcher.perform_request(request).await?;
	let envelope = response.decode::<CommandResponse>()?;

	println!("Favorite loaded: success={:?}, response={:?}.", envelope.success, envelope.response);

	mock.assert_async().await;

	Ok(())
}
