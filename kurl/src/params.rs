use std::fmt::{self, Display, Formatter};

use serde::Serialize;

use crate::error::Result;

/// Ordered query parameters.
///
/// Entries keep insertion order. Inserting a name that is already present
/// replaces its value without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UrlParameters {
    entries: Vec<(String, String)>,
}

impl UrlParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces `name`, returning the previous value if any.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Display) -> Option<String> {
        let name = name.into();
        let value = value.to_string();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        let idx = self.entries.iter().position(|(k, _)| k == name)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Renders the entries as `application/x-www-form-urlencoded`, with a
    /// leading `?`. Empty parameters render as an empty string.
    pub fn encoded(&self) -> Result<String> {
        if self.entries.is_empty() {
            return Ok(String::new());
        }
        let query = serde_urlencoded::to_string(self)?;
        Ok(format!("?{query}"))
    }
}

/// `?k=v&k2=v2` with names and values written verbatim, or nothing at all
/// when there are no entries.
impl Display for UrlParameters {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, (k, v)) in self.entries.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{sep}{k}={v}")?;
        }
        Ok(())
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for UrlParameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = UrlParameters::new();
        params.extend(iter);
        params
    }
}

impl<K: Into<String>, V: Display> Extend<(K, V)> for UrlParameters {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}
