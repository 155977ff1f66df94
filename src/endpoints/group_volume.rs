//! `groupVolume` namespace: volume of every player in a group at once.

// self
use super::volume;
use crate::{
	auth::AccessToken,
	config::ApiConfig,
	id::GroupId,
	request::{Namespace, Request, RequestError},
};

const NAMESPACE: Namespace = Namespace::GroupVolume;

/// `GET groups/{groupId}/groupVolume`.
pub fn get_volume(
	config: &ApiConfig,
	token: &AccessToken,
	group: &GroupId,
) -> Result<Request, RequestError> {
	volume::get(config, token, group.clone().into(), NAMESPACE)
}

/// `POST groups/{groupId}/groupVolume` with `{volume}`; `volume` must be within `0..=100`.
pub fn set_volume(
	config: &ApiConfig,
	token: &AccessToken,
	group: &GroupId,
	volume: u8,
) -> Result<Request, RequestError> {
	volume::set(config, token, group.clone().into(), NAMESPACE, volume)
}

/// `POST groups/{groupId}/groupVolume/relative` with `{volumeDelta}` in `-100..=100`.
pub fn set_relative_volume(
	config: &ApiConfig,
	token: &AccessToken,
	group: &GroupId,
	delta: i8,
) -> Result<Request, RequestError> {
	volume::set_relative(config, token, group.clone().into(), NAMESPACE, delta)
}

/// `POST groups/{groupId}/groupVolume/mute` with `{muted}`.
pub fn set_mute(
	config: &ApiConfig,
	token: &AccessToken,
	group: &GroupId,
	muted: bool,
) -> Result<Request, RequestError> {
	volume::set_mute(config, token, group.clone().into(), NAMESPACE, muted)
}

/// `POST groups/{groupId}/groupVolume/subscription`.
pub fn subscribe(
	config: &ApiConfig,
	token: &AccessToken,
	group: &GroupId,
) -> Result<Request, RequestError> {
	super::subscribe(config, token, group.clone(), NAMESPACE)
}

/// `DELETE groups/{groupId}/groupVolume/subscription`.
pub fn unsubscribe(
	config: &ApiConfig,
	token: &AccessToken,
	group: &GroupId,
) -> Result<Request, RequestError> {
	super::unsubscribe(config, token, group.clone(), NAMESPACE)
}
