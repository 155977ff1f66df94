//! `favorites` namespace.

// self
use super::LoadOptions;
use crate::{
	auth::AccessToken,
	config::ApiConfig,
	id::{FavoriteId, GroupId, HouseholdId},
	request::{Namespace, Parameters, Request, RequestError},
};

const NAMESPACE: Namespace = Namespace::Favorites;

/// `GET households/{householdId}/favorites`.
pub fn get_favorites(
	config: &ApiConfig,
	token: &AccessToken,
	household: &HouseholdId,
) -> Result<Request, RequestError> {
	Request::builder(config, token).get().target(household.clone()).namespace(NAMESPACE).build()
}

/// `POST groups/{groupId}/favorites`: loads a favorite into the group's queue.
///
/// The body carries exactly `action`, `favoriteId`, `playOnCompletion` and `playModes`.
pub fn load_favorite(
	config: &ApiConfig,
	token: &AccessToken,
	group: &GroupId,
	favorite: &FavoriteId,
	options: &LoadOptions,
) -> Result<Request, RequestError> {
	let body = Parameters::new()
		.with("action", options.action.as_str())
		.with("favoriteId", favorite.to_string())
		.with("playOnCompletion", options.play_on_completion)
		.with("playModes", options.play_modes_value());

	Request::builder(config, token)
		.post()
		.target(group.clone())
		.namespace(NAMESPACE)
		.body(body)
		.build()
}

/// `POST households/{householdId}/favorites/subscription`.
pub fn subscribe(
	config: &ApiConfig,
	token: &AccessToken,
	household: &HouseholdId,
) -> Result<Request, RequestError> {
	super::subscribe(config, token, household.clone(), NAMESPACE)
}

/// `DELETE households/{householdId}/favorites/subscription`.
pub fn unsubscribe(
	config: &ApiConfig,
	token: &AccessToken,
	household: &HouseholdId,
) -> Result<Request, RequestError> {
	super::unsubscribe(config, token, household.clone(), NAMESPACE)
}

#[cfg(test)]
mod tests {
	// std
	use std::collections::BTreeSet;
	// self
	use super::*;
	use crate::{
		endpoints::{PlayMode, QueueAction},
		request::{ControlRequest, HttpMethod},
	};

	fn load() -> Request {
		let config = ApiConfig::default();
		let token = AccessToken::new("accessToken");
		let group = GroupId::new("groupId").expect("Group fixture should be valid.");
		let favorite = FavoriteId::new("favoriteId").expect("Favorite fixture should be valid.");
		let options = LoadOptions::default()
			.action(QueueAction::Append)
			.play_on_completion(true)
			.play_mode(PlayMode::Shuffle)
			.play_mode(PlayMode::Crossfade);

		load_favorite(&config, &token, &group, &favorite, &options)
			.expect("Load favorite descriptor should build.")
	}

	#[test]
	fn load_targets_the_group_with_post() {
		let request = load();

		assert_eq!(request.method(), HttpMethod::Post);
		assert_eq!(
			request.url().as_str(),
			"https://api.ws.sonos.com/control/api/v1/groups/groupId/favorites"
		);
	}

	#[test]
	fn load_body_carries_exactly_four_keys() {
		let request = load();
		let body = request.body().expect("Load favorite carries a body.");
		let keys = body.keys().collect::<BTreeSet<_>>();

		assert_eq!(
			keys,
			BTreeSet::from(["action", "favoriteId", "playModes", "playOnCompletion"])
		);
		assert_eq!(body["action"], "APPEND");
		assert_eq!(body["favoriteId"], "favoriteId");
		assert_eq!(body["playOnCompletion"], true);
		assert_eq!(body["playModes"], serde_json::json!(["shuffle", "crossfade"]));
	}

	#[test]
	fn accessors_are_pure() {
		let request = load();

		assert_eq!(request.method(), request.method());
		assert_eq!(request.url(), request.url());
		assert_eq!(request.headers(), request.headers());
		assert_eq!(request.body(), request.body());
		assert_eq!(
			request.encode_body().expect("Body should encode."),
			request.encode_body().expect("Body should encode.")
		);
	}

	#[test]
	fn household_scoped_reads_and_subscriptions() {
		let config = ApiConfig::default();
		let token = AccessToken::new("accessToken");
		let household = HouseholdId::new("HHID_4231").expect("Household fixture should be valid.");
		let list = get_favorites(&config, &token, &household).expect("Descriptor should build.");
		let sub = subscribe(&config, &token, &household).expect("Descriptor should build.");

		assert_eq!(list.method(), HttpMethod::Get);
		assert_eq!(list.url().path(), "/control/api/v1/households/HHID_4231/favorites");
		assert_eq!(sub.url().path(), "/control/api/v1/households/HHID_4231/favorites/subscription");
		assert_eq!(
			unsubscribe(&config, &token, &household).expect("Descriptor should build.").method(),
			HttpMethod::Delete
		);
	}
}
