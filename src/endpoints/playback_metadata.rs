//! `playbackMetadata` namespace.

// self
use crate::{
	auth::AccessToken,
	config::ApiConfig,
	id::GroupId,
	request::{Namespace, Request, RequestError},
};

const NAMESPACE: Namespace = Namespace::PlaybackMetadata;

/// `GET groups/{groupId}/playbackMetadata`.
pub fn get_metadata_status(
	config: &ApiConfig,
	token: &AccessToken,
	group: &GroupId,
) -> Result<Request, RequestError> {
	Request::builder(config, token).get().target(group.clone()).namespace(NAMESPACE).build()
}

/// `POST groups/{groupId}/playbackMetadata/subscription`.
pub fn subscribe(
	config: &ApiConfig,
	token: &AccessToken,
	group: &GroupId,
) -> Result<Request, RequestError> {
	super::subscribe(config, token, group.clone(), NAMESPACE)
}

/// `DELETE groups/{groupId}/playbackMetadata/subscription`.
pub fn unsubscribe(
	config: &ApiConfig,
	token: &AccessToken,
	group: &GroupId,
) -> Result<Request, RequestError> {
	super::unsubscribe(config, token, group.clone(), NAMESPACE)
}
