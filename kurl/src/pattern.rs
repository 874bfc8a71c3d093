use std::str::FromStr;

use regex::{Regex, RegexBuilder};

use crate::error::{KurlError, Result};

/// A regular expression that can both search a URL and match it whole.
///
/// A [`Regex`] does not expose the options it was built with, so a whole-URL
/// variant cannot be derived from one after the fact. `UrlPattern` compiles
/// the searching and the anchored form together, from the same pattern and
/// the same options.
#[derive(Debug, Clone)]
pub struct UrlPattern {
    search: Regex,
    whole: Regex,
}

impl UrlPattern {
    /// Compiles `pattern` with default options.
    pub fn new(pattern: &str) -> Result<Self> {
        Self::builder(pattern).build()
    }

    pub fn builder(pattern: &str) -> UrlPatternBuilder {
        UrlPatternBuilder::new(pattern)
    }

    pub fn as_str(&self) -> &str {
        self.search.as_str()
    }

    /// The unanchored form, usable wherever a plain [`Regex`] is expected.
    pub fn as_regex(&self) -> &Regex {
        &self.search
    }

    /// Whether the pattern matches anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.search.is_match(text)
    }

    /// Whether the pattern matches all of `text`.
    pub fn is_full_match(&self, text: &str) -> bool {
        self.whole.is_match(text)
    }
}

impl FromStr for UrlPattern {
    type Err = KurlError;

    fn from_str(pattern: &str) -> Result<Self> {
        UrlPattern::new(pattern)
    }
}

impl TryFrom<&str> for UrlPattern {
    type Error = KurlError;

    fn try_from(pattern: &str) -> Result<Self> {
        UrlPattern::new(pattern)
    }
}

/// Options for a [`UrlPattern`], mirroring the ones of [`RegexBuilder`].
///
/// Every option is applied to both compiled forms.
#[derive(Debug, Clone)]
pub struct UrlPatternBuilder {
    pattern: String,
    case_insensitive: bool,
    multi_line: bool,
    dot_matches_new_line: bool,
    ignore_whitespace: bool,
    unicode: bool,
    size_limit: Option<usize>,
    dfa_size_limit: Option<usize>,
}

impl UrlPatternBuilder {
    pub fn new(pattern: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            case_insensitive: false,
            multi_line: false,
            dot_matches_new_line: false,
            ignore_whitespace: false,
            unicode: true,
            size_limit: None,
            dfa_size_limit: None,
        }
    }

    pub fn case_insensitive(mut self, yes: bool) -> Self {
        self.case_insensitive = yes;
        self
    }

    pub fn multi_line(mut self, yes: bool) -> Self {
        self.multi_line = yes;
        self
    }

    pub fn dot_matches_new_line(mut self, yes: bool) -> Self {
        self.dot_matches_new_line = yes;
        self
    }

    pub fn ignore_whitespace(mut self, yes: bool) -> Self {
        self.ignore_whitespace = yes;
        self
    }

    pub fn unicode(mut self, yes: bool) -> Self {
        self.unicode = yes;
        self
    }

    pub fn size_limit(mut self, bytes: usize) -> Self {
        self.size_limit = Some(bytes);
        self
    }

    pub fn dfa_size_limit(mut self, bytes: usize) -> Self {
        self.dfa_size_limit = Some(bytes);
        self
    }

    /// Compiles both forms. A malformed pattern fails here, never at match
    /// time.
    pub fn build(self) -> Result<UrlPattern> {
        let search = self.configure(&self.pattern).build()?;

        // `\A` and `\z` ignore `multi_line`. In verbose mode a trailing
        // `# comment` runs to the end of the line, so the group is closed on
        // a fresh one.
        let close = if self.ignore_whitespace { "\n" } else { "" };
        let anchored = format!(r"\A(?:{}{close})\z", self.pattern);
        let whole = self.configure(&anchored).build()?;

        Ok(UrlPattern { search, whole })
    }

    fn configure(&self, pattern: &str) -> RegexBuilder {
        let mut builder = RegexBuilder::new(pattern);
        builder
            .case_insensitive(self.case_insensitive)
            .multi_line(self.multi_line)
            .dot_matches_new_line(self.dot_matches_new_line)
            .ignore_whitespace(self.ignore_whitespace)
            .unicode(self.unicode);
        if let Some(limit) = self.size_limit {
            builder.size_limit(limit);
        }
        if let Some(limit) = self.dfa_size_limit {
            builder.dfa_size_limit(limit);
        }
        builder
    }
}
