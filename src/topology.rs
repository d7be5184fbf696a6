use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The structural family of a generated graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TopologyKind {
    Full,
    KRegular,
    GrowingConnected,
    GrowingUnconnected,
    Ring,
    ClosedRing,
    Star,
    Tree,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error(
    "invalid topology kind `{0}`, expected one of Full, KRegular, GrowingConnected, \
     GrowingUnconnected, Ring, ClosedRing, Star, Tree"
)]
pub struct UnknownTopologyKind(pub String);

impl TopologyKind {
    pub const ALL: [TopologyKind; 8] = [
        TopologyKind::Full,
        TopologyKind::KRegular,
        TopologyKind::GrowingConnected,
        TopologyKind::GrowingUnconnected,
        TopologyKind::Ring,
        TopologyKind::ClosedRing,
        TopologyKind::Star,
        TopologyKind::Tree,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "Full",
            Self::KRegular => "KRegular",
            Self::GrowingConnected => "GrowingConnected",
            Self::GrowingUnconnected => "GrowingUnconnected",
            Self::Ring => "Ring",
            Self::ClosedRing => "ClosedRing",
            Self::Star => "Star",
            Self::Tree => "Tree",
        }
    }

    /// Returns true if the degree parameter influences the generated graph.
    pub fn uses_degree(&self) -> bool {
        matches!(
            self,
            Self::KRegular | Self::GrowingConnected | Self::GrowingUnconnected | Self::Tree
        )
    }

    /// Returns true if the generator draws from a random source.
    pub fn is_randomized(&self) -> bool {
        matches!(
            self,
            Self::KRegular | Self::GrowingConnected | Self::GrowingUnconnected
        )
    }
}

impl fmt::Display for TopologyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TopologyKind {
    type Err = UnknownTopologyKind;

    /// Accepts the canonical names as well as the spellings of older config files.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Full" => Ok(Self::Full),
            "KRegular" | "Kregular" => Ok(Self::KRegular),
            "GrowingConnected" | "GrowingConected" => Ok(Self::GrowingConnected),
            "GrowingUnconnected" | "GrowingUnconected" => Ok(Self::GrowingUnconnected),
            "Ring" => Ok(Self::Ring),
            "ClosedRing" | "CloseRing" => Ok(Self::ClosedRing),
            "Star" => Ok(Self::Star),
            "Tree" => Ok(Self::Tree),
            other => Err(UnknownTopologyKind(other.to_string())),
        }
    }
}

impl TryFrom<String> for TopologyKind {
    type Error = UnknownTopologyKind;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TopologyKind> for String {
    fn from(kind: TopologyKind) -> Self {
        kind.as_str().to_string()
    }
}
