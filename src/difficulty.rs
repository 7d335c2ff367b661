use std::fmt;
use std::str::FromStr;

use crate::types::{DifficultyProfile, EngineError};

/// The seven named difficulty tiers, weakest first.
///
/// Each tier maps to a fixed search depth and a randomness probability:
/// lower tiers search shallow and frequently play a uniformly random move,
/// the top three tiers always play the full deterministic search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Beginner,
    Easy,
    Medium,
    Hard,
    Expert,
    Master,
    Grandmaster,
}

impl Difficulty {
    /// All tiers in unlock order.
    pub const ALL: [Difficulty; 7] = [
        Difficulty::Beginner,
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
        Difficulty::Master,
        Difficulty::Grandmaster,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
            Difficulty::Master => "master",
            Difficulty::Grandmaster => "grandmaster",
        }
    }

    /// Position in the unlock ladder: beginner = 0, grandmaster = 6.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Difficulty> {
        Self::ALL.get(index).copied()
    }

    pub fn profile(self) -> DifficultyProfile {
        let (depth, randomness) = match self {
            Difficulty::Beginner => (1, 0.80),
            Difficulty::Easy => (2, 0.40),
            Difficulty::Medium => (3, 0.10),
            Difficulty::Hard => (4, 0.05),
            Difficulty::Expert => (5, 0.0),
            Difficulty::Master => (6, 0.0),
            Difficulty::Grandmaster => (7, 0.0),
        };
        DifficultyProfile { depth, randomness }
    }
}

impl FromStr for Difficulty {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(Difficulty::Beginner),
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "expert" => Ok(Difficulty::Expert),
            "master" => Ok(Difficulty::Master),
            "grandmaster" => Ok(Difficulty::Grandmaster),
            _ => Err(EngineError::InvalidTier(s.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tier lookup by name, for callers that hold tiers as strings.
pub fn profile_for(name: &str) -> Result<DifficultyProfile, EngineError> {
    Ok(name.parse::<Difficulty>()?.profile())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_fidelity() {
        let expected: [(&str, u8, f64); 7] = [
            ("beginner", 1, 0.80),
            ("easy", 2, 0.40),
            ("medium", 3, 0.10),
            ("hard", 4, 0.05),
            ("expert", 5, 0.0),
            ("master", 6, 0.0),
            ("grandmaster", 7, 0.0),
        ];
        for (name, depth, randomness) in expected {
            let profile = profile_for(name).unwrap();
            assert_eq!(profile.depth, depth, "{name} depth");
            assert_eq!(profile.randomness, randomness, "{name} randomness");
        }
    }

    #[test]
    fn test_depths_and_randomness_monotonic() {
        for pair in Difficulty::ALL.windows(2) {
            assert!(pair[0].profile().depth < pair[1].profile().depth);
            assert!(pair[0].profile().randomness >= pair[1].profile().randomness);
        }
    }

    #[test]
    fn test_unknown_tier_is_an_error() {
        assert!(matches!(
            profile_for("impossible"),
            Err(EngineError::InvalidTier(_))
        ));
        // Exact names only, no case folding
        assert!(matches!(
            profile_for("Beginner"),
            Err(EngineError::InvalidTier(_))
        ));
        assert!(matches!(profile_for(""), Err(EngineError::InvalidTier(_))));
    }

    #[test]
    fn test_name_round_trip() {
        for tier in Difficulty::ALL {
            assert_eq!(tier.name().parse::<Difficulty>().unwrap(), tier);
            assert_eq!(tier.to_string(), tier.name());
        }
    }

    #[test]
    fn test_unlock_ladder_indexing() {
        for (i, tier) in Difficulty::ALL.iter().enumerate() {
            assert_eq!(tier.index(), i);
            assert_eq!(Difficulty::from_index(i), Some(*tier));
        }
        assert_eq!(Difficulty::from_index(7), None);
    }
}
