use std::fmt::{self, Display, Formatter};

use crate::compose::Composable;
use crate::endpoint::Endpoint;
use crate::scope::{KurlBuilder, KurlScope};

/// The root web server address a request is sent to (scheme, host and an
/// optional base path). Endpoints are composed onto it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Api {
    root: String,
}

impl Api {
    pub fn new(root: impl Into<String>) -> Self {
        Self { root: root.into() }
    }

    /// An api whose root already is the full target address.
    pub fn direct(url: impl Into<String>) -> Self {
        Self::new(url)
    }

    pub fn url(&self) -> &str {
        &self.root
    }

    /// Starts a request against `endpoint` on this api.
    ///
    /// `block` configures headers, parameters and fragment; the returned
    /// builder seals them into a [`KurlRequest`](crate::KurlRequest).
    pub fn kurl<F>(&self, endpoint: Endpoint, block: F) -> KurlBuilder
    where
        F: FnOnce(&mut KurlScope),
    {
        let mut scope = KurlScope::new();
        block(&mut scope);
        KurlBuilder::new(self.clone(), endpoint, scope)
    }

    /// Starts a request against `direct_url`, ignoring this api's root.
    pub fn kurl_direct<F>(&self, direct_url: &str, block: F) -> KurlBuilder
    where
        F: FnOnce(&mut KurlScope),
    {
        Api::direct(direct_url).kurl(Endpoint::empty(), block)
    }
}

impl Composable for Api {
    fn url(&self) -> &str {
        &self.root
    }
}

impl Display for Api {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.root)
    }
}

impl From<&str> for Api {
    fn from(root: &str) -> Self {
        Api::new(root)
    }
}

impl From<String> for Api {
    fn from(root: String) -> Self {
        Api::new(root)
    }
}
