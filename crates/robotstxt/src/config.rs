//! Parser configuration.
//!
//! The whitespace mode and the dialect are fixed when a grammar is built.
//! Nothing here is global, so parses with different settings never interact.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// How linear whitespace (LWS) is matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Whitespace {
    /// LWS needs at least one space or tab after the optional line ending.
    Strict,
    /// LWS may be empty, so a bare line ending also counts.
    #[default]
    Flexible,
}

impl Whitespace {
    /// Minimum length of the space/tab run.
    #[must_use]
    pub const fn min_run(self) -> usize {
        match self {
            Self::Strict => 1,
            Self::Flexible => 0,
        }
    }
}

/// Which directive set the grammar recognizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// User-agent groups, allow, disallow, sitemap and comments.
    #[default]
    Standard,
    /// The standard set plus `crawl-delay` and `host`.
    Nonstandard,
}

/// Settings used when building a [`Grammar`](crate::grammar::Grammar).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Linear whitespace mode.
    pub whitespace: Whitespace,
    /// Directive set.
    pub dialect: Dialect,
}

impl ParserConfig {
    /// Standard dialect with flexible whitespace.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            whitespace: Whitespace::Flexible,
            dialect: Dialect::Standard,
        }
    }

    /// Nonstandard dialect with flexible whitespace.
    #[must_use]
    pub const fn nonstandard() -> Self {
        Self {
            whitespace: Whitespace::Flexible,
            dialect: Dialect::Nonstandard,
        }
    }

    /// Sets the whitespace mode.
    #[must_use]
    pub const fn with_whitespace(mut self, whitespace: Whitespace) -> Self {
        self.whitespace = whitespace;
        self
    }

    /// Sets the dialect.
    #[must_use]
    pub const fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Returns true if the nonstandard lines are recognized.
    #[must_use]
    pub const fn is_nonstandard(self) -> bool {
        matches!(self.dialect, Dialect::Nonstandard)
    }

    /// Reads a configuration from JSON, e.g. `{"whitespace": "strict"}`.
    ///
    /// Missing fields take their default values.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or names an unknown mode.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
