//! `playback` namespace: transport controls for a group.

// self
use crate::{
	auth::AccessToken,
	config::ApiConfig,
	id::GroupId,
	request::{Namespace, Parameters, Request, RequestError},
};

const NAMESPACE: Namespace = Namespace::Playback;

/// `GET groups/{groupId}/playback`.
pub fn get_playback_status(
	config: &ApiConfig,
	token: &AccessToken,
	group: &GroupId,
) -> Result<Request, RequestError> {
	Request::builder(config, token).get().target(group.clone()).namespace(NAMESPACE).build()
}

/// `POST groups/{groupId}/playback/play`.
pub fn play(
	config: &ApiConfig,
	token: &AccessToken,
	group: &GroupId,
) -> Result<Request, RequestError> {
	command(config, token, group, "play")
}

/// `POST groups/{groupId}/playback/pause`.
pub fn pause(
	config: &ApiConfig,
	token: &AccessToken,
	group: &GroupId,
) -> Result<Request, RequestError> {
	command(config, token, group, "pause")
}

/// `POST groups/{groupId}/playback/togglePlayPause`.
pub fn toggle_play_pause(
	config: &ApiConfig,
	token: &AccessToken,
	group: &GroupId,
) -> Result<Request, RequestError> {
	command(config, token, group, "togglePlayPause")
}

/// `POST groups/{groupId}/playback/skipToNextTrack`.
pub fn skip_to_next_track(
	config: &ApiConfig,
	token: &AccessToken,
	group: &GroupId,
) -> Result<Request, RequestError> {
	command(config, token, group, "skipToNextTrack")
}

/// `POST groups/{groupId}/playback/skipToPreviousTrack`.
pub fn skip_to_previous_track(
	config: &ApiConfig,
	token: &AccessToken,
	group: &GroupId,
) -> Result<Request, RequestError> {
	command(config, token, group, "skipToPreviousTrack")
}

/// `POST groups/{groupId}/playback/seek` with `{positionMillis}`; negative positions are rejected.
pub fn seek(
	config: &ApiConfig,
	token: &AccessToken,
	group: &GroupId,
	position_millis: i64,
) -> Result<Request, RequestError> {
	RequestError::check_range("positionMillis", position_millis, 0, i64::MAX)?;

	Request::builder(config, token)
		.post()
		.target(group.clone())
		.namespace(NAMESPACE)
		.action("seek")
		.body(Parameters::new().with("positionMillis", position_millis))
		.build()
}

/// `POST groups/{groupId}/playback/seekRelative` with `{deltaMillis}`.
pub fn seek_relative(
	config: &ApiConfig,
	token: &AccessToken,
	group: &GroupId,
	delta_millis: i64,
) -> Result<Request, RequestError> {
	Request::builder(config, token)
		.post()
		.target(group.clone())
		.namespace(NAMESPACE)
		.action("seekRelative")
		.body(Parameters::new().with("deltaMillis", delta_millis))
		.build()
}

/// `POST groups/{groupId}/playback/subscription`.
pub fn subscribe(
	config: &ApiConfig,
	token: &AccessToken,
	group: &GroupId,
) -> Result<Request, RequestError> {
	super::subscribe(config, token, group.clone(), NAMESPACE)
}

/// `DELETE groups/{groupId}/playback/subscription`.
pub fn unsubscribe(
	config: &ApiConfig,
	token: &AccessToken,
	group: &GroupId,
) -> Result<Request, RequestError> {
	super::unsubscribe(config, token, group.clone(), NAMESPACE)
}

// Bodyless POST to `groups/{groupId}/playback/{action}`.
fn command(
	config: &ApiConfig,
	token: &AccessToken,
	group: &GroupId,
	action: &str,
) -> Result<Request, RequestError> {
	Request::builder(config, token)
		.post()
		.target(group.clone())
		.namespace(NAMESPACE)
		.action(action)
		.build()
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::request::{ControlRequest, HttpMethod};

	#[test]
	fn transport_commands_are_bodyless_posts() {
		let config = ApiConfig::default();
		let token = AccessToken::new("accessToken");
		let group = GroupId::new("groupId").expect("Group fixture should be valid.");
		let commands = [
			(play(&config, &token, &group), "play"),
			(pause(&config, &token, &group), "pause"),
			(toggle_play_pause(&config, &token, &group), "togglePlayPause"),
			(skip_to_next_track(&config, &token, &group), "skipToNextTrack"),
			(skip_to_previous_track(&config, &token, &group), "skipToPreviousTrack"),
		];

		for (request, action) in commands {
			let request = request.expect("Descriptor should build.");

			assert_eq!(request.method(), HttpMethod::Post);
			assert_eq!(request.url().path(), format!("/control/api/v1/groups/groupId/playback/{action}"));
			assert!(request.body().is_none());
		}
	}

	#[test]
	fn seek_rejects_negative_positions() {
		let config = ApiConfig::default();
		let token = AccessToken::new("accessToken");
		let group = GroupId::new("groupId").expect("Group fixture should be valid.");
		let request = seek(&config, &token, &group, 90_000).expect("Descriptor should build.");

		assert_eq!(request.body().map(|b| b["positionMillis"].clone()), Some(serde_json::json!(90_000)));
		assert!(matches!(
			seek(&config, &token, &group, -1),
			Err(RequestError::OutOfRange { parameter: "positionMillis", .. })
		));

		let relative =
			seek_relative(&config, &token, &group, -5_000).expect("Negative deltas are valid.");

		assert_eq!(relative.url().path(), "/control/api/v1/groups/groupId/playback/seekRelative");
	}

	#[test]
	fn status_read_is_a_get() {
		let config = ApiConfig::default();
		let token = AccessToken::new("accessToken");
		let group = GroupId::new("groupId").expect("Group fixture should be valid.");
		let request =
			get_playback_status(&config, &token, &group).expect("Descriptor should build.");

		assert_eq!(request.method(), HttpMethod::Get);
		assert_eq!(request.url().path(), "/control/api/v1/groups/groupId/playback");
	}
}
