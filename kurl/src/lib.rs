//! # Kurl
//!
//! A small builder for HTTP request URLs. A request is assembled from an
//! [`Api`] root, a chain of [`Endpoint`] segments, ordered query
//! [`UrlParameters`], headers and a fragment, and rendered into a single
//! string by [`KurlRequest::url`]. Nothing here performs network I/O.
//!
//! ```
//! use kurl::{Api, Endpoint};
//!
//! let api = Api::new("https://api.example.com");
//! let request = api
//!     .kurl(Endpoint::new("v1") + "users", |scope| {
//!         scope.param("id", 5);
//!     })
//!     .build();
//!
//! assert_eq!(request.url(), "https://api.example.com/v1/users?id=5");
//! ```

pub mod api;
pub mod compose;
pub mod endpoint;
pub mod error;
pub mod params;
pub mod pattern;
pub mod request;
pub mod scope;

pub use api::{Api, ApiContainer};
pub use compose::{compose, compose_all, sanitize, Composable};
pub use endpoint::Endpoint;
pub use error::{KurlError, Result};
pub use params::UrlParameters;
pub use pattern::{UrlPattern, UrlPatternBuilder};
pub use request::KurlRequest;
pub use scope::{KurlBuilder, KurlScope};
