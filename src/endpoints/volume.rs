//! Shared shape of the `groupVolume` and `playerVolume` namespaces.

// self
use crate::{
	auth::AccessToken,
	config::ApiConfig,
	request::{Namespace, Parameters, Request, RequestError, Target},
};

pub(super) const VOLUME_MIN: i64 = 0;
pub(super) const VOLUME_MAX: i64 = 100;
pub(super) const DELTA_MIN: i64 = -100;
pub(super) const DELTA_MAX: i64 = 100;

pub(super) fn get(
	config: &ApiConfig,
	token: &AccessToken,
	target: Target,
	namespace: Namespace,
) -> Result<Request, RequestError> {
	Request::builder(config, token).get().target(target).namespace(namespace).build()
}

pub(super) fn set(
	config: &ApiConfig,
	token: &AccessToken,
	target: Target,
	namespace: Namespace,
	volume: u8,
) -> Result<Request, RequestError> {
	RequestError::check_range("volume", volume.into(), VOLUME_MIN, VOLUME_MAX)?;

	Request::builder(config, token)
		.post()
		.target(target)
		.namespace(namespace)
		.body(Parameters::new().with("volume", volume))
		.build()
}

pub(super) fn set_relative(
	config: &ApiConfig,
	token: &AccessToken,
	target: Target,
	namespace: Namespace,
	delta: i8,
) -> Result<Request, RequestError> {
	RequestError::check_range("volumeDelta", delta.into(), DELTA_MIN, DELTA_MAX)?;

	Request::builder(config, token)
		.post()
		.target(target)
		.namespace(namespace)
		.action("relative")
		.body(Parameters::new().with("volumeDelta", delta))
		.build()
}

pub(super) fn set_mute(
	config: &ApiConfig,
	token: &AccessToken,
	target: Target,
	namespace: Namespace,
	muted: bool,
) -> Result<Request, RequestError> {
	Request::builder(config, token)
		.post()
		.target(target)
		.namespace(namespace)
		.action("mute")
		.body(Parameters::new().with("muted", muted))
		.build()
}
