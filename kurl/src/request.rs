use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};

use http::header::{HeaderMap, HeaderName, HeaderValue};
use regex::Regex;
use serde_json::Value;
use url::Url;

use crate::api::Api;
use crate::compose::compose;
use crate::endpoint::Endpoint;
use crate::error::{KurlError, Result};
use crate::params::UrlParameters;
use crate::pattern::UrlPattern;

/// A fully specified request: the exact URL the caller is referring to plus
/// the headers that go with it.
///
/// Built once by a [`KurlBuilder`](crate::KurlBuilder) and read-only
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct KurlRequest {
    api: Api,
    endpoint: Endpoint,
    parameters: UrlParameters,
    headers: HashMap<String, Value>,
    fragment: String,
}

impl KurlRequest {
    pub(crate) fn new(
        api: Api,
        endpoint: Endpoint,
        parameters: UrlParameters,
        headers: HashMap<String, Value>,
        fragment: String,
    ) -> Self {
        Self {
            api,
            endpoint,
            parameters,
            headers,
            fragment,
        }
    }

    /// Returns the URL representing the built request.
    pub fn url(&self) -> String {
        let mut url = compose(self.api.url(), &self.endpoint);
        url.push_str(&self.parameters.to_string());
        url.push_str(&self.fragment);
        tracing::trace!(%url, "rendered request url");
        url
    }

    pub fn api(&self) -> &Api {
        &self.api
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn parameters(&self) -> &UrlParameters {
        &self.parameters
    }

    pub fn headers(&self) -> &HashMap<String, Value> {
        &self.headers
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Whether the URL contains `needle`.
    pub fn contains(&self, needle: &str, ignore_case: bool) -> bool {
        let url = self.url();
        if ignore_case {
            url.to_lowercase().contains(&needle.to_lowercase())
        } else {
            url.contains(needle)
        }
    }

    /// Whether `regex` matches anywhere in the URL.
    pub fn contains_regex(&self, regex: &Regex) -> bool {
        regex.is_match(&self.url())
    }

    /// Whether `pattern` matches the URL as a whole.
    pub fn matches_regex(&self, pattern: &UrlPattern) -> bool {
        pattern.is_full_match(&self.url())
    }

    /// Compiles `pattern` and searches for it anywhere in the URL.
    pub fn contains_pattern(&self, pattern: &str) -> Result<bool> {
        let regex = Regex::new(pattern)?;
        Ok(self.contains_regex(&regex))
    }

    /// Compiles `pattern` and checks it against the whole URL.
    pub fn matches(&self, pattern: &str) -> Result<bool> {
        let pattern = UrlPattern::new(pattern)?;
        Ok(self.matches_regex(&pattern))
    }

    pub fn ensure_contains(&self, needle: &str, ignore_case: bool) -> Result<()> {
        if self.contains(needle, ignore_case) {
            Ok(())
        } else {
            Err(KurlError::check_failed(
                self.url(),
                format!("contain `{needle}`"),
            ))
        }
    }

    pub fn ensure_matches(&self, pattern: &str) -> Result<()> {
        if self.matches(pattern)? {
            Ok(())
        } else {
            Err(KurlError::check_failed(
                self.url(),
                format!("match `{pattern}`"),
            ))
        }
    }

    /// Parses the rendered URL. Fails for relative roots such as `"api/v1"`.
    pub fn to_url(&self) -> Result<Url> {
        Ok(Url::parse(&self.url())?)
    }

    /// Converts the headers into an [`HeaderMap`]. String values are used as
    /// they are; any other JSON value is written as its JSON text.
    pub fn header_map(&self) -> Result<HeaderMap> {
        let mut map = HeaderMap::with_capacity(self.headers.len());
        for (name, value) in &self.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| KurlError::invalid_header(format!("{name}: {e}")))?;
            let text = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            let header_value = HeaderValue::from_str(&text)
                .map_err(|e| KurlError::invalid_header(format!("{name}: {e}")))?;
            map.insert(header_name, header_value);
        }
        Ok(map)
    }
}

impl Display for KurlRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url())
    }
}
