//! Path composition.
//!
//! Every URL this crate renders goes through [`compose`]: the API root is
//! composed with the endpoint, and endpoints are chained with the same rule.

/// Anything exposing a string projection usable as a path fragment.
pub trait Composable {
    /// The raw path text, before sanitization.
    fn url(&self) -> &str;
}

impl Composable for str {
    fn url(&self) -> &str {
        self
    }
}

impl Composable for String {
    fn url(&self) -> &str {
        self.as_str()
    }
}

impl<T: Composable + ?Sized> Composable for &T {
    fn url(&self) -> &str {
        (**self).url()
    }
}

/// Removes a single leading `/`, if any.
///
/// Only the first slash goes: `"//a"` becomes `"/a"`. Trailing slashes and
/// everything after the first character are left alone.
pub fn sanitize(raw: &str) -> &str {
    raw.strip_prefix('/').unwrap_or(raw)
}

/// Joins `right` onto `left` with exactly one separating slash.
///
/// No slash is inserted when either side is empty or when `left` already
/// ends with one. Slashes already inside either side are kept as they are.
pub fn compose<C: Composable + ?Sized>(left: &str, right: &C) -> String {
    let right = sanitize(right.url());

    let mut out = String::with_capacity(left.len() + right.len() + 1);
    out.push_str(left);
    if !left.is_empty() && !left.ends_with('/') && !right.is_empty() {
        out.push('/');
    }
    out.push_str(right);
    out
}

/// Folds [`compose`] over `segments`, starting from `root`.
pub fn compose_all<C: Composable>(root: &str, segments: &[C]) -> String {
    segments
        .iter()
        .fold(root.to_string(), |acc, seg| compose(&acc, seg))
}
