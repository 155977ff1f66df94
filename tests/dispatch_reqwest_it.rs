// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use sonos_control::{
	_preludet::*,
	endpoints::{LoadOptions, PlayMode, QueueAction, favorites, group_volume, playlists},
	error::TransportError,
	model::{CommandResponse, ErrorBody},
};

const LOAD_FAVORITE_RESPONSE: &str = concat!(
	r#"{"namespace":"favorites","response":"loadFavorite","success":true,"type":"none","#,
	r#""householdId":"HHID_4231","groupId":"XYZ-123abc456:12"}"#,
);

#[tokio::test]
async fn load_favorite_returns_body_unmodified() {
	let server = MockServer::start_async().await;
	let config = test_config(&server.base_url());
	let group = test_group();
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path(format!("/control/api/v1/groups/{group}/favorites"))
				.header("authorization", "Bearer accessToken")
				.header("content-type", "application/json")
				.json_body(json!({
					"action": "REPLACE",
					"favoriteId": "favoriteId",
					"playOnCompletion": true,
					"playModes": ["shuffle", "repeat"],
				}));
			then.status(200).header("content-type", "application/json").body(LOAD_FAVORITE_RESPONSE);
		})
		.await;
	let options = LoadOptions::default()
		.action(QueueAction::Replace)
		.play_on_completion(true)
		.play_mode(PlayMode::Shuffle)
		.play_mode(PlayMode::Repeat);
	let request =
		favorites::load_favorite(&config, &test_token(), &group, &test_favorite(), &options)
			.expect("Load favorite descriptor should build.");
	let response = build_reqwest_test_dispatcher()
		.perform_request(request)
		.await
		.expect("Mocked 200 should be delivered as success.");

	mock.assert_async().await;

	assert_eq!(response.status(), 200);
	assert_eq!(response.body(), LOAD_FAVORITE_RESPONSE.as_bytes());

	let decoded = response.decode::<CommandResponse>().expect("Command envelope should decode.");

	assert_eq!(decoded.success, Some(true));
	assert_eq!(decoded.household_id, Some(test_household()));
}

#[tokio::test]
async fn unsubscribe_sends_delete_without_body() {
	let server = MockServer::start_async().await;
	let config = test_config(&server.base_url());
	let group = test_group();
	let mock = server
		.mock_async(|when, then| {
			when.method(DELETE)
				.path(format!("/control/api/v1/groups/{group}/groupVolume/subscription"))
				.header("authorization", "Bearer accessToken");
			then.status(200);
		})
		.await;
	let request = group_volume::unsubscribe(&config, &test_token(), &group)
		.expect("Unsubscribe descriptor should build.");
	let response = build_reqwest_test_dispatcher()
		.perform_request(&request)
		.await
		.expect("Unsubscribe should succeed.");

	mock.assert_async().await;

	assert!(response.body().is_empty());
}

#[tokio::test]
async fn error_status_is_reported_as_failure() {
	let server = MockServer::start_async().await;
	let config = test_config(&server.base_url());
	let household = test_household();
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path(format!("/control/api/v1/households/{household}/playlists/subscription"));
			then.status(400)
				.header("content-type", "application/json")
				.body(r#"{"errorCode":"ERROR_INVALID_PARAMETER","reason":"householdId"}"#);
		})
		.await;
	let request = playlists::subscribe(&config, &test_token(), &household)
		.expect("Subscribe descriptor should build.");
	let err = build_reqwest_test_dispatcher()
		.perform_request(request)
		.await
		.expect_err("HTTP 400 should be delivered as failure.");

	mock.assert_async().await;

	assert_eq!(err.status(), Some(400));

	let body = ErrorBody::from_error(&err).expect("Vendor error body should decode.");

	assert_eq!(body.error_code, "ERROR_INVALID_PARAMETER");
}

#[tokio::test]
async fn unreachable_host_yields_transport_failure() {
	let config = test_config("http://127.0.0.1:1");
	let request = group_volume::set_volume(&config, &test_token(), &test_group(), 30)
		.expect("Set volume descriptor should build.");
	let mut outcomes = Vec::new();

	build_reqwest_test_dispatcher()
		.perform_request_with(request, |outcome| outcomes.push(outcome))
		.await;

	assert_eq!(outcomes.len(), 1, "Exactly one outcome should be delivered.");
	assert!(
		matches!(outcomes[0], Err(Error::Transport(TransportError::Network { .. }))),
		"Connection failures should surface as network errors: {:?}.",
		outcomes[0]
	);
}
