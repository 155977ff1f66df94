//! `groups` namespace: household topology and group membership.

// self
use crate::{
	auth::AccessToken,
	config::ApiConfig,
	id::{GroupId, HouseholdId, PlayerId},
	request::{Namespace, Parameters, Request, RequestError},
};

const NAMESPACE: Namespace = Namespace::Groups;

/// `GET households/{householdId}/groups`.
pub fn get_groups(
	config: &ApiConfig,
	token: &AccessToken,
	household: &HouseholdId,
) -> Result<Request, RequestError> {
	Request::builder(config, token).get().target(household.clone()).namespace(NAMESPACE).build()
}

/// `POST households/{householdId}/groups/createGroup` with `{playerIds}`.
pub fn create_group(
	config: &ApiConfig,
	token: &AccessToken,
	household: &HouseholdId,
	players: &[PlayerId],
) -> Result<Request, RequestError> {
	Request::builder(config, token)
		.post()
		.target(household.clone())
		.namespace(NAMESPACE)
		.action("createGroup")
		.body(Parameters::new().with("playerIds", player_ids(players)))
		.build()
}

/// `POST groups/{groupId}/groups/setGroupMembers` with `{playerIds}`.
pub fn set_group_members(
	config: &ApiConfig,
	token: &AccessToken,
	group: &GroupId,
	players: &[PlayerId],
) -> Result<Request, RequestError> {
	Request::builder(config, token)
		.post()
		.target(group.clone())
		.namespace(NAMESPACE)
		.action("setGroupMembers")
		.body(Parameters::new().with("playerIds", player_ids(players)))
		.build()
}

/// `POST groups/{groupId}/groups/modifyGroupMembers` with `{playerIdsToAdd, playerIdsToRemove}`.
pub fn modify_group_members(
	config: &ApiConfig,
	token: &AccessToken,
	group: &GroupId,
	add: &[PlayerId],
	remove: &[PlayerId],
) -> Result<Request, RequestError> {
	Request::builder(config, token)
		.post()
		.target(group.clone())
		.namespace(NAMESPACE)
		.action("modifyGroupMembers")
		.body(
			Parameters::new()
				.with("playerIdsToAdd", player_ids(add))
				.with("playerIdsToRemove", player_ids(remove)),
		)
		.build()
}

/// `POST households/{householdId}/groups/subscription`.
pub fn subscribe(
	config: &ApiConfig,
	token: &AccessToken,
	household: &HouseholdId,
) -> Result<Request, RequestError> {
	super::subscribe(config, token, household.clone(), NAMESPACE)
}

/// `DELETE households/{householdId}/groups/subscription`.
pub fn unsubscribe(
	config: &ApiConfig,
	token: &AccessToken,
	household: &HouseholdId,
) -> Result<Request, RequestError> {
	super::unsubscribe(config, token, household.clone(), NAMESPACE)
}

fn player_ids(players: &[PlayerId]) -> Vec<&str> {
	players.iter().map(|id| id.as_ref()).collect()
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::request::{ControlRequest, HttpMethod};

	fn players() -> Vec<PlayerId> {
		["RINCON_1", "RINCON_2"]
			.into_iter()
			.map(|id| PlayerId::new(id).expect("Player fixture should be valid."))
			.collect()
	}

	#[test]
	fn topology_read_and_subscription() {
		let config = ApiConfig::default();
		let token = AccessToken::new("accessToken");
		let household = HouseholdId::new("HHID_4231").expect("Household fixture should be valid.");
		let list = get_groups(&config, &token, &household).expect("Descriptor should build.");
		let unsub = unsubscribe(&config, &token, &household).expect("Descriptor should build.");

		assert_eq!(list.method(), HttpMethod::Get);
		assert_eq!(list.url().path(), "/control/api/v1/households/HHID_4231/groups");
		assert_eq!(unsub.method(), HttpMethod::Delete);
		assert_eq!(unsub.url().path(), "/control/api/v1/households/HHID_4231/groups/subscription");
	}

	#[test]
	fn membership_bodies_list_player_ids() {
		let config = ApiConfig::default();
		let token = AccessToken::new("accessToken");
		let household = HouseholdId::new("HHID_4231").expect("Household fixture should be valid.");
		let group = GroupId::new("groupId").expect("Group fixture should be valid.");
		let players = players();
		let create =
			create_group(&config, &token, &household, &players).expect("Descriptor should build.");
		let modify = modify_group_members(&config, &token, &group, &players[..1], &players[1..])
			.expect("Descriptor should build.");

		assert_eq!(create.url().path(), "/control/api/v1/households/HHID_4231/groups/createGroup");
		assert_eq!(
			create.body().map(|b| b["playerIds"].clone()),
			Some(serde_json::json!(["RINCON_1", "RINCON_2"]))
		);
		assert_eq!(
			modify.body(),
			Some(
				&Parameters::new()
					.with("playerIdsToAdd", vec!["RINCON_1"])
					.with("playerIdsToRemove", vec!["RINCON_2"])
			)
		);
		assert_eq!(
			set_group_members(&config, &token, &group, &players)
				.expect("Descriptor should build.")
				.url()
				.path(),
			"/control/api/v1/groups/groupId/groups/setGroupMembers"
		);
	}
}
