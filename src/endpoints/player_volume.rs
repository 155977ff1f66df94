//! `playerVolume` namespace: volume of a single player.

// self
use super::volume;
use crate::{
	auth::AccessToken,
	config::ApiConfig,
	id::PlayerId,
	request::{Namespace, Request, RequestError},
};

const NAMESPACE: Namespace = Namespace::PlayerVolume;

/// `GET players/{playerId}/playerVolume`.
pub fn get_volume(
	config: &ApiConfig,
	token: &AccessToken,
	player: &PlayerId,
) -> Result<Request, RequestError> {
	volume::get(config, token, player.clone().into(), NAMESPACE)
}

/// `POST players/{playerId}/playerVolume` with `{volume}` in `0..=100`.
pub fn set_volume(
	config: &ApiConfig,
	token: &AccessToken,
	player: &PlayerId,
	volume: u8,
) -> Result<Request, RequestError> {
	volume::set(config, token, player.clone().into(), NAMESPACE, volume)
}

/// `POST players/{playerId}/playerVolume/relative` with `{volumeDelta}` in `-100..=100`.
pub fn set_relative_volume(
	config: &ApiConfig,
	token: &AccessToken,
	player: &PlayerId,
	delta: i8,
) -> Result<Request, RequestError> {
	volume::set_relative(config, token, player.clone().into(), NAMESPACE, delta)
}

/// `POST players/{playerId}/playerVolume/mute` with `{muted}`.
pub fn set_mute(
	config: &ApiConfig,
	token: &AccessToken,
	player: &PlayerId,
	muted: bool,
) -> Result<Request, RequestError> {
	volume::set_mute(config, token, player.clone().into(), NAMESPACE, muted)
}

/// `POST players/{playerId}/playerVolume/subscription`.
pub fn subscribe(
	config: &ApiConfig,
	token: &AccessToken,
	player: &PlayerId,
) -> Result<Request, RequestError> {
	super::subscribe(config, token, player.clone(), NAMESPACE)
}

/// `DELETE players/{playerId}/playerVolume/subscription`.
pub fn unsubscribe(
	config: &ApiConfig,
	token: &AccessToken,
	player: &PlayerId,
) -> Result<Request, RequestError> {
	super::unsubscribe(config, token, player.clone(), NAMESPACE)
}
