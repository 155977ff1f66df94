//! Catalogue of Control API endpoints.
//!
//! Each submodule maps one vendor namespace to constructor functions that return a validated
//! [`Request`]. Nothing here performs I/O; hand the descriptors to a
//! [`Dispatcher`](crate::dispatch::Dispatcher).

pub mod favorites;
pub mod group_volume;
pub mod groups;
pub mod playback;
pub mod playback_metadata;
pub mod player_volume;
pub mod playlists;

mod volume;

// self
use crate::{
	_prelude::*,
	auth::AccessToken,
	config::ApiConfig,
	request::{Namespace, Request, RequestError, Target},
};

/// How loaded content is merged into a group's queue.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueueAction {
	/// Appends to the end of the queue.
	Append,
	/// Inserts at the current position.
	Insert,
	/// Inserts after the current track.
	InsertNext,
	/// Replaces the queue.
	#[default]
	Replace,
}
impl QueueAction {
	/// Returns the wire value.
	pub const fn as_str(self) -> &'static str {
		match self {
			QueueAction::Append => "APPEND",
			QueueAction::Insert => "INSERT",
			QueueAction::InsertNext => "INSERT_NEXT",
			QueueAction::Replace => "REPLACE",
		}
	}
}
impl Display for QueueAction {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Play modes applied when loading a favorite or playlist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlayMode {
	/// Repeat the queue.
	Repeat,
	/// Repeat the current track.
	RepeatOne,
	/// Shuffle the queue.
	Shuffle,
	/// Crossfade between tracks.
	Crossfade,
}
impl PlayMode {
	/// Returns the wire value.
	pub const fn as_str(self) -> &'static str {
		match self {
			PlayMode::Repeat => "repeat",
			PlayMode::RepeatOne => "repeatOne",
			PlayMode::Shuffle => "shuffle",
			PlayMode::Crossfade => "crossfade",
		}
	}
}

/// Options shared by `loadFavorite` and `loadPlaylist`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadOptions {
	/// Queue merge strategy.
	pub action: QueueAction,
	/// Starts playback once loading completes.
	pub play_on_completion: bool,
	/// Play modes to apply.
	pub play_modes: Vec<PlayMode>,
}
impl LoadOptions {
	/// Sets the queue merge strategy.
	pub fn action(mut self, action: QueueAction) -> Self {
		self.action = action;

		self
	}

	/// Starts playback once loading completes.
	pub fn play_on_completion(mut self, play: bool) -> Self {
		self.play_on_completion = play;

		self
	}

	/// Adds a play mode.
	pub fn play_mode(mut self, mode: PlayMode) -> Self {
		if !self.play_modes.contains(&mode) {
			self.play_modes.push(mode);
		}

		self
	}

	fn play_modes_value(&self) -> JsonValue {
		JsonValue::from(self.play_modes.iter().map(|mode| mode.as_str()).collect::<Vec<_>>())
	}
}

/// Registers for push events of `namespace` on `target`.
///
/// Subscriptions are stateless one-shot calls: the library does not track which are active.
pub fn subscribe(
	config: &ApiConfig,
	token: &AccessToken,
	target: impl Into<Target>,
	namespace: Namespace,
) -> Result<Request, RequestError> {
	Request::builder(config, token).post().target(target).namespace(namespace).subscription().build()
}

/// Removes the push event registration for `namespace` on `target`. Never carries a body.
pub fn unsubscribe(
	config: &ApiConfig,
	token: &AccessToken,
	target: impl Into<Target>,
	namespace: Namespace,
) -> Result<Request, RequestError> {
	Request::builder(config, token)
		.delete()
		.target(target)
		.namespace(namespace)
		.subscription()
		.build()
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{
		id::{GroupId, HouseholdId},
		request::{ControlRequest, HttpMethod},
	};

	#[test]
	fn subscription_pairs_share_a_path() {
		let config = ApiConfig::default();
		let token = AccessToken::new("accessToken");
		let household = HouseholdId::new("householdId").expect("Household fixture should be valid.");
		let subscribe = subscribe(&config, &token, household.clone(), Namespace::Playlists)
			.expect("Subscribe descriptor should build.");
		let unsubscribe = unsubscribe(&config, &token, household, Namespace::Playlists)
			.expect("Unsubscribe descriptor should build.");

		assert_eq!(
			subscribe.url().as_str(),
			"https://api.ws.sonos.com/control/api/v1/households/householdId/playlists/subscription"
		);
		assert_eq!(subscribe.url(), unsubscribe.url());
		assert_eq!(subscribe.method(), HttpMethod::Post);
		assert_eq!(unsubscribe.method(), HttpMethod::Delete);
		assert!(subscribe.body().is_none());
		assert!(unsubscribe.body().is_none());
	}

	#[test]
	fn unsubscribe_never_has_a_body_for_any_namespace() {
		let config = ApiConfig::default();
		let token = AccessToken::new("accessToken");
		let group = GroupId::new("groupId").expect("Group fixture should be valid.");

		for namespace in [
			Namespace::GroupVolume,
			Namespace::Playback,
			Namespace::PlaybackMetadata,
			Namespace::Favorites,
		] {
			let request = unsubscribe(&config, &token, group.clone(), namespace)
				.expect("Unsubscribe descriptor should build.");

			assert_eq!(request.method(), HttpMethod::Delete);
			assert!(request.body().is_none(), "{namespace} unsubscribe must not carry a body.");
			assert_eq!(request.encode_body().expect("Empty bodies encode."), None);
		}
	}

	#[test]
	fn load_options_deduplicate_play_modes() {
		let options = LoadOptions::default()
			.action(QueueAction::InsertNext)
			.play_mode(PlayMode::Shuffle)
			.play_mode(PlayMode::Shuffle)
			.play_mode(PlayMode::RepeatOne);

		assert_eq!(options.play_modes, vec![PlayMode::Shuffle, PlayMode::RepeatOne]);
		assert_eq!(options.play_modes_value(), serde_json::json!(["shuffle", "repeatOne"]));
		assert_eq!(options.action.to_string(), "INSERT_NEXT");
		assert_eq!(
			serde_json::to_value(QueueAction::InsertNext).expect("Queue action should serialize."),
			serde_json::json!("INSERT_NEXT")
		);
	}
}
