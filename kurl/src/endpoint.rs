use std::fmt::{self, Display, Formatter};
use std::ops::{Add, AddAssign};

use crate::compose::{compose, sanitize, Composable};

/// A relative path fragment inside a complete API address.
///
/// An endpoint does not know its position in a URL nor its neighbours; it
/// only holds its own sanitized text. Chaining with `+` or [`Endpoint::append`]
/// builds a new endpoint, while `+=` and [`Endpoint::append_in_place`] extend
/// the receiver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Endpoint {
    path: String,
}

impl Endpoint {
    pub fn new(relative_path: impl AsRef<str>) -> Self {
        Self {
            path: sanitize(relative_path.as_ref()).to_string(),
        }
    }

    /// The empty endpoint; composing with it changes nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn url(&self) -> &str {
        &self.path
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Chains `other` onto a copy of this endpoint.
    pub fn append<C: Composable + ?Sized>(&self, other: &C) -> Endpoint {
        Endpoint {
            path: compose(&self.path, other),
        }
    }

    /// Chains `other` onto this endpoint.
    pub fn append_in_place<C: Composable + ?Sized>(&mut self, other: &C) {
        self.path = compose(&self.path, other);
    }
}

impl Composable for Endpoint {
    fn url(&self) -> &str {
        &self.path
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl AsRef<str> for Endpoint {
    fn as_ref(&self) -> &str {
        &self.path
    }
}

impl From<&str> for Endpoint {
    fn from(relative_path: &str) -> Self {
        Endpoint::new(relative_path)
    }
}

impl From<String> for Endpoint {
    fn from(relative_path: String) -> Self {
        Endpoint::new(relative_path)
    }
}

impl<C: Composable> Add<C> for Endpoint {
    type Output = Endpoint;

    fn add(mut self, other: C) -> Endpoint {
        self.append_in_place(&other);
        self
    }
}

impl<C: Composable> Add<C> for &Endpoint {
    type Output = Endpoint;

    fn add(self, other: C) -> Endpoint {
        self.append(&other)
    }
}

impl<C: Composable> AddAssign<C> for Endpoint {
    fn add_assign(&mut self, other: C) {
        self.append_in_place(&other);
    }
}
