//! Request construction.
//!
//! A [`KurlScope`] collects headers, query parameters and the fragment, and a
//! [`KurlBuilder`] seals them together with an [`Api`] and an [`Endpoint`]
//! into a [`KurlRequest`].

use std::collections::HashMap;
use std::fmt::Display;

use serde::Serialize;
use serde_json::Value;

use crate::api::Api;
use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::params::UrlParameters;
use crate::request::KurlRequest;

/// Mutable configuration handed to the `kurl` closures.
#[derive(Debug, Clone, Default)]
pub struct KurlScope {
    pub(crate) headers: HashMap<String, Value>,
    pub(crate) parameters: UrlParameters,
    pub(crate) fragment: String,
}

impl KurlScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a header. Headers travel with the request but never show up in
    /// its URL.
    pub fn header(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sets a query parameter, keeping the position of an existing one.
    pub fn param(&mut self, name: impl Into<String>, value: impl Display) -> &mut Self {
        self.parameters.insert(name, value);
        self
    }

    /// Adds every field of `value` as a query parameter.
    ///
    /// `value` goes through `serde_urlencoded`, so it must serialize as a flat
    /// map or struct; `None` fields are skipped.
    pub fn params_from<T: Serialize>(&mut self, value: &T) -> Result<&mut Self> {
        let encoded = serde_urlencoded::to_string(value)?;
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(&encoded)?;
        self.parameters.extend(pairs);
        Ok(self)
    }

    /// Sets the fragment. It is appended to the URL verbatim, so it should
    /// carry its own `#`.
    pub fn fragment(&mut self, fragment: impl Into<String>) -> &mut Self {
        self.fragment = fragment.into();
        self
    }

    pub fn parameters(&self) -> &UrlParameters {
        &self.parameters
    }

    pub fn headers(&self) -> &HashMap<String, Value> {
        &self.headers
    }
}

/// An api, an endpoint and a configured scope, ready to be sealed.
#[derive(Debug, Clone)]
pub struct KurlBuilder {
    api: Api,
    endpoint: Endpoint,
    scope: KurlScope,
}

impl KurlBuilder {
    pub fn new(api: Api, endpoint: Endpoint, scope: KurlScope) -> Self {
        Self {
            api,
            endpoint,
            scope,
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.scope.header(name, value);
        self
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.scope.param(name, value);
        self
    }

    pub fn with_fragment(mut self, fragment: impl Into<String>) -> Self {
        self.scope.fragment(fragment);
        self
    }

    pub fn build(self) -> KurlRequest {
        let KurlScope {
            headers,
            parameters,
            fragment,
        } = self.scope;

        tracing::trace!(
            api = %self.api,
            endpoint = %self.endpoint,
            parameters = parameters.len(),
            headers = headers.len(),
            "sealing request"
        );

        KurlRequest::new(self.api, self.endpoint, parameters, headers, fragment)
    }
}

impl From<KurlBuilder> for KurlRequest {
    fn from(builder: KurlBuilder) -> Self {
        builder.build()
    }
}
