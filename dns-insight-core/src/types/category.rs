//! Record category

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PanelError;

/// One of the tracked DNS record classes.
///
/// Fixed at pipeline construction; decides the query shape and which
/// rendering targets are used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Mx,
    Spf,
    Dkim,
}

impl Category {
    /// All categories, in startup order
    pub const ALL: [Self; 3] = [Self::Mx, Self::Spf, Self::Dkim];

    /// Lowercase name used in URLs and composite identifiers
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mx => "mx",
            Self::Spf => "spf",
            Self::Dkim => "dkim",
        }
    }

    /// Display label for panel headings
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mx => "MX",
            Self::Spf => "SPF",
            Self::Dkim => "DKIM",
        }
    }

    /// Query parameter selecting this category on the search API.
    ///
    /// MX is a DNS record type filter; SPF and DKIM are text-record searches.
    pub const fn query_filter(self) -> (&'static str, &'static str) {
        match self {
            Self::Mx => ("dnsType", "mx"),
            Self::Spf => ("txtSearch", "spf"),
            Self::Dkim => ("txtSearch", "dkim"),
        }
    }

    /// Position in [`Category::ALL`]
    pub const fn index(self) -> usize {
        match self {
            Self::Mx => 0,
            Self::Spf => 1,
            Self::Dkim => 2,
        }
    }

    /// Next category, wrapping around
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Mx => Self::Spf,
            Self::Spf => Self::Dkim,
            Self::Dkim => Self::Mx,
        }
    }

    /// Previous category, wrapping around
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Mx => Self::Dkim,
            Self::Spf => Self::Mx,
            Self::Dkim => Self::Spf,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mx" => Ok(Self::Mx),
            "spf" => Ok(Self::Spf),
            "dkim" => Ok(Self::Dkim),
            other => Err(PanelError::ValidationError(format!(
                "unknown category '{other}', expected one of mx, spf, dkim"
            ))),
        }
    }
}
