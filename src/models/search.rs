use std::fmt;

use serde::Deserialize;

use super::center::Center;

/// Raw value of the search input. Never trimmed or escaped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchQuery(pub String);

impl SearchQuery {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SearchQuery {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SearchQuery {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// order of `centros` is the render order
#[derive(Debug, Deserialize)]
pub struct SearchResult {
    pub centros: Vec<Center>,
}
