//! Fantasy football position types and utilities.

use crate::error::DraftError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Fantasy football player positions.
///
/// The six positions in the player pool. Serialization uses the same
/// uppercase strings as the seed data (`"QB"`, `"DST"`, ...), and parsing
/// accepts the common defense aliases.
///
/// # Examples
///
/// ```rust
/// use ffl_draft::Position;
///
/// let dst: Position = "D/ST".parse().unwrap();
/// assert_eq!(dst, Position::DST);
/// assert_eq!(dst.to_string(), "DST");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    K,
    DST,
}

impl Position {
    /// All positions, in the fixed order used for grouping and reports.
    pub const ALL: [Position; 6] = [
        Position::QB,
        Position::RB,
        Position::WR,
        Position::TE,
        Position::K,
        Position::DST,
    ];

    /// The canonical uppercase string for this position.
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::K => "K",
            Position::DST => "DST",
        }
    }

    /// Whether this position can fill a standard flex slot (RB/WR/TE).
    ///
    /// QB is only flex-eligible in superflex formats; see
    /// [`crate::engine::roster::flex_starter_count`].
    pub fn is_flex_eligible(&self) -> bool {
        matches!(self, Position::RB | Position::WR | Position::TE)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Position {
    type Err = DraftError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            "RB" => Ok(Position::RB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            "K" => Ok(Position::K),
            "DST" | "DEF" | "D/ST" => Ok(Position::DST),
            _ => Err(DraftError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_parsing() {
        assert_eq!("QB".parse::<Position>().unwrap(), Position::QB);
        assert_eq!("rb".parse::<Position>().unwrap(), Position::RB);
        assert_eq!("WR".parse::<Position>().unwrap(), Position::WR);
        assert_eq!("te".parse::<Position>().unwrap(), Position::TE);
        assert_eq!("K".parse::<Position>().unwrap(), Position::K);

        // Defense aliases all map to DST
        assert_eq!("DST".parse::<Position>().unwrap(), Position::DST);
        assert_eq!("DEF".parse::<Position>().unwrap(), Position::DST);
        assert_eq!("D/ST".parse::<Position>().unwrap(), Position::DST);

        assert!("LB".parse::<Position>().is_err());
        assert!("".parse::<Position>().is_err());
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::QB.to_string(), "QB");
        assert_eq!(Position::DST.to_string(), "DST");
    }

    #[test]
    fn test_flex_eligibility() {
        assert!(Position::RB.is_flex_eligible());
        assert!(Position::WR.is_flex_eligible());
        assert!(Position::TE.is_flex_eligible());
        assert!(!Position::QB.is_flex_eligible());
        assert!(!Position::K.is_flex_eligible());
        assert!(!Position::DST.is_flex_eligible());
    }

    #[test]
    fn test_position_serde_round_trip() {
        let json = serde_json::to_string(&Position::DST).unwrap();
        assert_eq!(json, "\"DST\"");

        let parsed: Position = serde_json::from_str("\"DEF\"").unwrap();
        assert_eq!(parsed, Position::DST);

        assert!(serde_json::from_str::<Position>("\"P\"").is_err());
    }
}
