use crate::api::Api;
use crate::endpoint::Endpoint;
use crate::scope::{KurlBuilder, KurlScope};

/// A type that owns an [`Api`], such as a per-service client struct.
///
/// Implementors get `kurl` entry points forwarding to the contained api.
pub trait ApiContainer {
    fn api(&self) -> &Api;

    fn kurl<F>(&self, endpoint: Endpoint, block: F) -> KurlBuilder
    where
        F: FnOnce(&mut KurlScope),
    {
        self.api().kurl(endpoint, block)
    }

    fn kurl_direct<F>(&self, direct_url: &str, block: F) -> KurlBuilder
    where
        F: FnOnce(&mut KurlScope),
    {
        self.api().kurl_direct(direct_url, block)
    }
}

