//! Control API location and the builder that validates it.
//!
//! Every request descriptor resolves its URL against an [`ApiConfig`]. Validation happens once,
//! when the config is built, so URL assembly during request construction cannot fail.

// self
use crate::{_prelude::*, error::ConfigError};

/// Production base URL of the Sonos Control API.
pub const DEFAULT_BASE_URL: &str = "https://api.ws.sonos.com/control/api/v1";

/// Validated Control API location shared by request descriptors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Url", into = "Url")]
pub struct ApiConfig {
	base_url: Url,
}
impl ApiConfig {
	/// Creates a builder seeded with the production base URL.
	pub fn builder() -> ApiConfigBuilder {
		ApiConfigBuilder::default()
	}

	/// Returns the validated base URL.
	pub fn base_url(&self) -> &Url {
		&self.base_url
	}

	/// Resolves the provided path segments against the base URL.
	///
	/// Segments are appended verbatim and percent-encoded, so identifiers containing `/` or `?`
	/// stay inside their own segment.
	pub fn endpoint<I>(&self, segments: I) -> Url
	where
		I: IntoIterator,
		I::Item: AsRef<str>,
	{
		let mut url = self.base_url.clone();

		// Only http and https pass validation, and both always carry a path.
		if let Ok(mut path) = url.path_segments_mut() {
			path.pop_if_empty().extend(segments);
		}

		url
	}
}
impl Default for ApiConfig {
	fn default() -> Self {
		Self {
			base_url: Url::parse(DEFAULT_BASE_URL)
				.expect("Default Control API base URL must always parse."),
		}
	}
}
impl TryFrom<Url> for ApiConfig {
	type Error = ConfigError;

	fn try_from(base_url: Url) -> Result<Self, Self::Error> {
		validate_base_url(&base_url)?;

		Ok(Self { base_url })
	}
}
impl From<ApiConfig> for Url {
	fn from(value: ApiConfig) -> Self {
		value.base_url
	}
}
impl FromStr for ApiConfig {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::builder().base_url(s).build()
	}
}

/// Builder for [`ApiConfig`] values.
#[derive(Clone, Debug, Default)]
pub struct ApiConfigBuilder {
	/// Raw base URL; the production host is used when unset.
	pub base_url: Option<String>,
}
impl ApiConfigBuilder {
	/// Overrides the base URL, for example to target a mock server.
	pub fn base_url(mut self, url: impl Into<String>) -> Self {
		self.base_url = Some(url.into());

		self
	}

	/// Consumes the builder and validates the resulting config.
	pub fn build(self) -> Result<ApiConfig, ConfigError> {
		let Some(raw) = self.base_url else {
			return Ok(ApiConfig::default());
		};
		let base_url =
			Url::parse(raw.trim()).map_err(|source| ConfigError::InvalidBaseUrl { source })?;

		ApiConfig::try_from(base_url)
	}
}

fn validate_base_url(url: &Url) -> Result<(), ConfigError> {
	if !matches!(url.scheme(), "https" | "http") {
		return Err(ConfigError::UnsupportedScheme { scheme: url.scheme().to_owned() });
	}

	Ok(())
}
