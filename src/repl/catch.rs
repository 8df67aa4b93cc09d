//! Catch odds.
//!
//! Difficulty scales linearly with base experience between the weakest and
//! strongest Pokémon in the catalog, so a roll in `[0, 1)` above the
//! difficulty is a catch.

/// Lowest base experience in the catalog.
pub const MIN_BASE_EXPERIENCE: f32 = 36.0;

/// Highest base experience in the catalog.
pub const MAX_BASE_EXPERIENCE: f32 = 608.0;

/// Difficulty used when the catalog has no base experience for a Pokémon.
pub const UNKNOWN_DIFFICULTY: f32 = 0.5;

/// Returns the catch difficulty in `[0, 1]`, 0 being the easiest.
pub fn catch_difficulty(base_experience: Option<u32>) -> f32 {
    match base_experience {
        Some(exp) => ((exp as f32 - MIN_BASE_EXPERIENCE)
            / (MAX_BASE_EXPERIENCE - MIN_BASE_EXPERIENCE))
            .clamp(0.0, 1.0),
        None => UNKNOWN_DIFFICULTY,
    }
}

/// Whether `roll` beats `difficulty`.
pub fn is_caught(difficulty: f32, roll: f32) -> bool {
    roll > difficulty
}

/// Chance of success as a percentage.
pub fn catch_rate(difficulty: f32) -> f32 {
    (1.0 - difficulty) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_range() {
        assert_eq!(catch_difficulty(Some(36)), 0.0);
        assert_eq!(catch_difficulty(Some(608)), 1.0);
        assert!((catch_difficulty(Some(322)) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_difficulty_is_clamped() {
        assert_eq!(catch_difficulty(Some(0)), 0.0);
        assert_eq!(catch_difficulty(Some(10_000)), 1.0);
    }

    #[test]
    fn test_unknown_base_experience() {
        assert_eq!(catch_difficulty(None), UNKNOWN_DIFFICULTY);
    }

    #[test]
    fn test_is_caught() {
        assert!(is_caught(0.3, 0.31));
        assert!(!is_caught(0.3, 0.3));
        assert!(!is_caught(1.0, 0.999));
    }

    #[test]
    fn test_catch_rate() {
        assert_eq!(catch_rate(0.0), 100.0);
        assert_eq!(catch_rate(1.0), 0.0);
        assert!((catch_rate(0.25) - 75.0).abs() < 1e-4);
    }
}
