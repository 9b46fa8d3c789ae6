mod factors;
mod letters;
mod verdict;

pub use factors::{blend, common_factor, diff_factor};
pub use letters::{letter_score, letter_set, normalize_name};
pub use verdict::CompatibilityTier;

use serde::Serialize;

/// Scores two names on a `0..=100` scale.
///
/// Both names are lowercased and stripped of spaces. Half of the result comes
/// from how close their letter sums are, the other half from how many distinct
/// characters they share. Every `&str` is valid input, including `""`.
pub fn calculate_compatibility(name1: &str, name2: &str) -> u8 {
    CompatibilityScorer::new().evaluate(name1, name2).compatibility
}

/// Stateless scorer exposing the intermediate values behind a result.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompatibilityScorer;

impl CompatibilityScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(&self, name1: &str, name2: &str) -> CompatibilityBreakdown {
        let first = normalize_name(name1);
        let second = normalize_name(name2);

        let first_score = letter_score(&first);
        let second_score = letter_score(&second);
        let difference = first_score.abs_diff(second_score);
        let diff_factor = diff_factor(difference);

        let first_set = letter_set(&first);
        let second_set = letter_set(&second);
        let common_letters = first_set.intersection(&second_set).count();
        let total_unique_letters = first_set.union(&second_set).count();
        let common_factor = common_factor(common_letters, total_unique_letters);

        let compatibility = blend(diff_factor, common_factor);

        CompatibilityBreakdown {
            letter_scores: (first_score, second_score),
            difference,
            diff_factor,
            common_letters,
            total_unique_letters,
            common_factor,
            compatibility,
            tier: CompatibilityTier::from_score(compatibility),
        }
    }
}

/// Every step of a compatibility calculation, for display or audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompatibilityBreakdown {
    pub letter_scores: (u64, u64),
    pub difference: u64,
    pub diff_factor: u8,
    pub common_letters: usize,
    pub total_unique_letters: usize,
    pub common_factor: u8,
    pub compatibility: u8,
    pub tier: CompatibilityTier,
}
