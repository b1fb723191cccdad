use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Keyboard tier a student is enrolled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PianoLevel {
    #[serde(rename = "teclado I")]
    TierI,
    #[serde(rename = "teclado II")]
    TierII,
    #[serde(rename = "teclado III")]
    TierIII,
    #[serde(rename = "teclado IV")]
    TierIV,
}

impl PianoLevel {
    pub const ALL: [PianoLevel; 4] = [
        PianoLevel::TierI,
        PianoLevel::TierII,
        PianoLevel::TierIII,
        PianoLevel::TierIV,
    ];

    /// Wire and storage representation.
    pub fn as_str(self) -> &'static str {
        match self {
            PianoLevel::TierI => "teclado I",
            PianoLevel::TierII => "teclado II",
            PianoLevel::TierIII => "teclado III",
            PianoLevel::TierIV => "teclado IV",
        }
    }
}

impl fmt::Display for PianoLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PianoLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| DomainError::InvalidData("Valid piano level is required".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_tier() {
        for level in PianoLevel::ALL {
            assert_eq!(level.as_str().parse::<PianoLevel>().unwrap(), level);
        }
    }

    #[test]
    fn test_parse_unknown_tier() {
        let err = "beginner".parse::<PianoLevel>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidData(_)));
    }
}
