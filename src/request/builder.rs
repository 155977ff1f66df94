// self
use crate::{
	_prelude::*,
	auth::AccessToken,
	config::ApiConfig,
	request::{HttpMethod, Namespace, Parameters, Request, RequestError, Target, authorized_headers},
};

const SUBSCRIPTION_SEGMENT: &str = "subscription";

/// Builder for [`Request`] values.
///
/// Paths are assembled as `{target}/{namespace}[/{action}...][/subscription]` relative to the
/// configured base URL.
#[derive(Clone, Debug)]
pub struct RequestBuilder<'a> {
	config: &'a ApiConfig,
	token: &'a AccessToken,
	/// Verb for the request; defaults to `GET`.
	pub method: HttpMethod,
	/// Path scope.
	pub target: Option<Target>,
	/// Resource namespace.
	pub namespace: Option<Namespace>,
	/// Extra path segments appended after the namespace.
	pub actions: Vec<String>,
	/// Appends the `/subscription` suffix when true.
	pub subscription: bool,
	/// Optional JSON body.
	pub body: Option<Parameters>,
}
impl<'a> RequestBuilder<'a> {
	/// Creates a new builder resolving against `config` and authorizing with `token`.
	pub fn new(config: &'a ApiConfig, token: &'a AccessToken) -> Self {
		Self {
			config,
			token,
			method: HttpMethod::Get,
			target: None,
			namespace: None,
			actions: Vec::new(),
			subscription: false,
			body: None,
		}
	}

	/// Sets the verb.
	pub fn method(mut self, method: HttpMethod) -> Self {
		self.method = method;

		self
	}

	/// Shorthand for `method(HttpMethod::Get)`.
	pub fn get(self) -> Self {
		self.method(HttpMethod::Get)
	}

	/// Shorthand for `method(HttpMethod::Post)`.
	pub fn post(self) -> Self {
		self.method(HttpMethod::Post)
	}

	/// Shorthand for `method(HttpMethod::Put)`.
	pub fn put(self) -> Self {
		self.method(HttpMethod::Put)
	}

	/// Shorthand for `method(HttpMethod::Delete)`.
	pub fn delete(self) -> Self {
		self.method(HttpMethod::Delete)
	}

	/// Scopes the request to a household, group, or player.
	pub fn target(mut self, target: impl Into<Target>) -> Self {
		self.target = Some(target.into());

		self
	}

	/// Sets the resource namespace.
	pub fn namespace(mut self, namespace: Namespace) -> Self {
		self.namespace = Some(namespace);

		self
	}

	/// Appends a path segment after the namespace, such as `relative` or `play`.
	pub fn action(mut self, segment: impl Into<String>) -> Self {
		self.actions.push(segment.into());

		self
	}

	/// Targets the namespace's `/subscription` resource.
	pub fn subscription(mut self) -> Self {
		self.subscription = true;

		self
	}

	/// Attaches a JSON body.
	pub fn body(mut self, body: Parameters) -> Self {
		self.body = Some(body);

		self
	}

	/// Consumes the builder and validates the resulting descriptor.
	pub fn build(self) -> Result<Request, RequestError> {
		let target = self.target.ok_or(RequestError::MissingTarget)?;
		let namespace = self.namespace.ok_or(RequestError::MissingNamespace)?;

		if self.body.is_some() && !self.method.allows_body() {
			return Err(RequestError::BodyNotAllowed { method: self.method });
		}

		let headers = authorized_headers(self.token)?;
		let url = self.config.endpoint(
			target
				.segments()
				.into_iter()
				.chain([namespace.as_str()])
				.chain(self.actions.iter().map(String::as_str))
				.chain(self.subscription.then_some(SUBSCRIPTION_SEGMENT)),
		);

		Ok(Request { method: self.method, url, headers, body: self.body, namespace })
	}
}
