//! The locale tag that threads through every error-constructing path.
//!
//! The parser never renders human-facing text itself — it only ever records
//! which locale was active when a failure occurred, so that a templating
//! layer outside this crate can pick the right message for it. See
//! [`crate::error::ParseError`].

use std::fmt;

/// A BCP-47-ish locale tag (`"en-US"`, `"fr-FR"`, ...). Opaque to the parser:
/// it is carried on every error and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale(Box<str>);

impl Locale {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into().into_boxed_str())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::new("en-US")
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Locale {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Locale {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
