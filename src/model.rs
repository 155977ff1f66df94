//! Opt-in response models for common Control API payloads.
//!
//! The dispatcher hands back raw bytes. These types exist for callers that want typed access;
//! decoding goes through [`decode_json`], which reports the JSON path of the first mismatch.

// crates.io
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	id::{FavoriteId, GroupId, HouseholdId, PlayerId, PlaylistId},
};

/// Failures raised while decoding a response body.
#[derive(Debug, ThisError)]
pub enum DecodeError {
	/// The response carried no bytes.
	#[error("Response body is empty.")]
	Empty,
	/// The body is not JSON or does not match the requested model.
	#[error("Response body does not match the requested model at `{path}`.")]
	Json {
		/// JSON path of the first mismatch.
		path: String,
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}

/// Decodes `bytes` as JSON into `T`.
pub fn decode_json<T>(bytes: &[u8]) -> Result<T, DecodeError>
where
	T: DeserializeOwned,
{
	if bytes.is_empty() {
		return Err(DecodeError::Empty);
	}

	let mut deserializer = serde_json::Deserializer::from_slice(bytes);

	serde_path_to_error::deserialize(&mut deserializer)
		.map_err(|source| DecodeError::Json { path: source.path().to_string(), source })
}

/// Envelope returned by command endpoints such as loading a favorite.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommandResponse {
	/// Namespace that handled the command.
	pub namespace: Option<String>,
	/// Command name echoed back by the player.
	pub response: Option<String>,
	/// Whether the command was accepted.
	pub success: Option<bool>,
	/// Response type marker.
	#[serde(rename = "type")]
	pub kind: Option<String>,
	/// Household the command ran in.
	pub household_id: Option<HouseholdId>,
	/// Group the command targeted.
	pub group_id: Option<GroupId>,
}

/// Error body returned alongside non-success statuses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
	/// Vendor error code, for example `ERROR_INVALID_PARAMETER`.
	pub error_code: String,
	/// Human readable reason, if provided.
	#[serde(default)]
	pub reason: Option<String>,
}
impl ErrorBody {
	/// Extracts the vendor error body from an [`Error::Status`], when it decodes.
	pub fn from_error(error: &Error) -> Option<Self> {
		match error {
			Error::Status { body, .. } => decode_json(body).ok(),
			_ => None,
		}
	}
}

/// Volume state shared by the `groupVolume` and `playerVolume` namespaces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VolumeStatus {
	/// Volume level, `0..=100`.
	pub volume: u8,
	/// Whether audio is muted.
	pub muted: bool,
	/// Whether the volume is fixed (line-out or TV input).
	pub fixed: bool,
}

/// Playback state of a group.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlaybackStatus {
	/// Vendor playback state, such as `PLAYBACK_STATE_PLAYING`.
	pub playback_state: String,
	/// Current position inside the track.
	pub position_millis: Option<i64>,
	/// Opaque version token of the group's queue.
	pub queue_version: Option<String>,
}

/// Favorite as listed by `households/{id}/favorites`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
	/// Favorite identifier.
	pub id: FavoriteId,
	/// Display name.
	pub name: String,
	/// Optional description.
	#[serde(default)]
	pub description: Option<String>,
}

/// Response of `households/{id}/favorites`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FavoritesList {
	/// Opaque version of the favorites collection.
	pub version: Option<String>,
	/// Favorites in the household.
	pub items: Vec<Favorite>,
}

/// Playlist as listed by `households/{id}/playlists`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
	/// Playlist identifier.
	pub id: PlaylistId,
	/// Display name.
	pub name: String,
	/// Vendor playlist type.
	#[serde(default, rename = "type")]
	pub kind: Option<String>,
	/// Number of tracks.
	#[serde(default)]
	pub track_count: Option<u32>,
}

/// Response of `households/{id}/playlists`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlaylistsList {
	/// Opaque version of the playlist collection.
	pub version: Option<String>,
	/// Playlists in the household.
	pub playlists: Vec<Playlist>,
}

/// Group entry in the household topology.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
	/// Group identifier.
	pub id: GroupId,
	/// Display name.
	pub name: String,
	/// Player coordinating playback.
	pub coordinator_id: PlayerId,
	/// Vendor playback state.
	#[serde(default)]
	pub playback_state: Option<String>,
	/// Members of the group.
	#[serde(default)]
	pub player_ids: Vec<PlayerId>,
}

/// Player entry in the household topology.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
	/// Player identifier.
	pub id: PlayerId,
	/// Room name.
	pub name: String,
}

/// Response of `households/{id}/groups`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Groups {
	/// Groups in the household.
	pub groups: Vec<Group>,
	/// Players in the household.
	pub players: Vec<Player>,
}
