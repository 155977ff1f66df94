//! `playlists` namespace.

// self
use super::LoadOptions;
use crate::{
	auth::AccessToken,
	config::ApiConfig,
	id::{GroupId, HouseholdId, PlaylistId},
	request::{Namespace, Parameters, Request, RequestError},
};

const NAMESPACE: Namespace = Namespace::Playlists;

/// `GET households/{householdId}/playlists`.
pub fn get_playlists(
	config: &ApiConfig,
	token: &AccessToken,
	household: &HouseholdId,
) -> Result<Request, RequestError> {
	Request::builder(config, token).get().target(household.clone()).namespace(NAMESPACE).build()
}

/// `POST households/{householdId}/playlists/getPlaylist` with `{playlistId}`.
pub fn get_playlist(
	config: &ApiConfig,
	token: &AccessToken,
	household: &HouseholdId,
	playlist: &PlaylistId,
) -> Result<Request, RequestError> {
	Request::builder(config, token)
		.post()
		.target(household.clone())
		.namespace(NAMESPACE)
		.action("getPlaylist")
		.body(Parameters::new().with("playlistId", playlist.to_string()))
		.build()
}

/// `POST groups/{groupId}/playlists`: loads a playlist into the group's queue.
pub fn load_playlist(
	config: &ApiConfig,
	token: &AccessToken,
	group: &GroupId,
	playlist: &PlaylistId,
	options: &LoadOptions,
) -> Result<Request, RequestError> {
	let body = Parameters::new()
		.with("action", options.action.as_str())
		.with("playlistId", playlist.to_string())
		.with("playOnCompletion", options.play_on_completion)
		.with("playModes", options.play_modes_value());

	Request::builder(config, token)
		.post()
		.target(group.clone())
		.namespace(NAMESPACE)
		.body(body)
		.build()
}

/// `POST households/{householdId}/playlists/subscription`.
pub fn subscribe(
	config: &ApiConfig,
	token: &AccessToken,
	household: &HouseholdId,
) -> Result<Request, RequestError> {
	super::subscribe(config, token, household.clone(), NAMESPACE)
}

/// `DELETE households/{householdId}/playlists/subscription`.
pub fn unsubscribe(
	config: &ApiConfig,
	token: &AccessToken,
	household: &HouseholdId,
) -> Result<Request, RequestError> {
	super::unsubscribe(config, token, household.clone(), NAMESPACE)
}

#[cfg(test)]
mod tests {
	// crates.io
	use ::http::header::AUTHORIZATION;
	// self
	use super::*;
	use crate::request::{ControlRequest, HttpMethod};

	fn household() -> HouseholdId {
		HouseholdId::new("householdId").expect("Household fixture should be valid.")
	}

	#[test]
	fn subscribe_matches_vendor_contract() {
		let config = ApiConfig::default();
		let token = AccessToken::new("accessToken");
		let request = subscribe(&config, &token, &household()).expect("Descriptor should build.");

		assert_eq!(request.method(), HttpMethod::Post);
		assert_eq!(
			request.url().as_str(),
			"https://api.ws.sonos.com/control/api/v1/households/householdId/playlists/subscription"
		);
		assert_eq!(
			request.headers().get(AUTHORIZATION).map(|v| v.as_bytes()),
			Some(&b"Bearer accessToken"[..])
		);
		assert!(request.body().is_none());
	}

	#[test]
	fn get_playlist_posts_the_identifier() {
		let config = ApiConfig::default();
		let token = AccessToken::new("accessToken");
		let playlist = PlaylistId::new("playlistId").expect("Playlist fixture should be valid.");
		let request =
			get_playlist(&config, &token, &household(), &playlist).expect("Descriptor should build.");

		assert_eq!(
			request.url().path(),
			"/control/api/v1/households/householdId/playlists/getPlaylist"
		);
		assert_eq!(request.body(), Some(&Parameters::new().with("playlistId", "playlistId")));
	}

	#[test]
	fn load_playlist_mirrors_load_favorite_shape() {
		let config = ApiConfig::default();
		let token = AccessToken::new("accessToken");
		let group = GroupId::new("groupId").expect("Group fixture should be valid.");
		let playlist = PlaylistId::new("playlistId").expect("Playlist fixture should be valid.");
		let request = load_playlist(&config, &token, &group, &playlist, &LoadOptions::default())
			.expect("Descriptor should build.");
		let expected = Parameters::new()
			.with("playModes", serde_json::json!([]))
			.with("playOnCompletion", false)
			.with("playlistId", "playlistId")
			.with("action", "REPLACE");

		assert_eq!(request.url().path(), "/control/api/v1/groups/groupId/playlists");
		assert_eq!(request.body(), Some(&expected));
	}
}
