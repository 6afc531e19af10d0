// ── Entity identity ──
//
// The catalog service assigns integer ids; they are unique and stable
// per entity instance. The newtype keeps them from mixing with
// quantities and other integers in signatures.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Server-assigned identifier for a catalog entity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EntityId(pub i64);

impl EntityId {
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntityId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl From<i64> for EntityId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn display_round_trip() {
        let id = EntityId(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!("42".parse::<EntityId>().unwrap(), id);
    }

    #[test]
    fn rejects_non_numeric() {
        assert!("abc".parse::<EntityId>().is_err());
    }
}
