//! Recipe difficulty rating derived from ingredient count.

use std::fmt;

/// A tiered difficulty rating.
///
/// Derived from the number of ingredients in a recipe, never constructed
/// directly by callers. The discriminants double as the numeric rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Difficulty {
    #[default]
    Easy = 1,
    Medium = 2,
    Hard = 3,
}

impl Difficulty {
    /// Map an ingredient count onto a tier: 0–5 Easy, 6–10 Medium,
    /// 11 and up Hard. Total over all counts.
    #[must_use]
    pub const fn from_ingredient_count(count: usize) -> Self {
        match count {
            0..=5 => Self::Easy,
            6..=10 => Self::Medium,
            _ => Self::Hard,
        }
    }

    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_boundaries() {
        assert_eq!(Difficulty::from_ingredient_count(0), Difficulty::Easy);
        assert_eq!(Difficulty::from_ingredient_count(5), Difficulty::Easy);
        assert_eq!(Difficulty::from_ingredient_count(6), Difficulty::Medium);
        assert_eq!(Difficulty::from_ingredient_count(10), Difficulty::Medium);
        assert_eq!(Difficulty::from_ingredient_count(11), Difficulty::Hard);
        assert_eq!(Difficulty::from_ingredient_count(100), Difficulty::Hard);
    }

    #[test]
    fn rank_and_label() {
        assert_eq!(Difficulty::Easy.rank(), 1);
        assert_eq!(Difficulty::Medium.rank(), 2);
        assert_eq!(Difficulty::Hard.rank(), 3);
        assert_eq!(Difficulty::Medium.label(), "Medium");
        assert_eq!(Difficulty::Hard.to_string(), "Hard");
    }

    #[test]
    fn default_is_easy() {
        assert_eq!(Difficulty::default(), Difficulty::Easy);
    }
}
