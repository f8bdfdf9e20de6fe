//! Ranking quality metrics

use crate::eval::dataset::RelevanceLabel;

/// Precision@k over a ranked list of labels: the fraction of the top k with
/// a "Good" label.
///
/// The divisor is always k, even when the list is shorter. This mirrors the
/// metric the tool has historically reported; small groups are penalized
/// rather than normalized by their size.
pub fn precision_at_k(ranked_labels: &[RelevanceLabel], k: usize) -> f32 {
    if k == 0 {
        return 0.0;
    }

    let positives = ranked_labels
        .iter()
        .take(k)
        .filter(|label| label.is_relevant())
        .count();

    positives as f32 / k as f32
}

/// Reciprocal rank of the first relevant item in a ranked binary relevance
/// sequence: 1/position (1-indexed), or 0.0 when nothing is relevant.
pub fn reciprocal_rank(relevance: &[bool]) -> f32 {
    for (index, relevant) in relevance.iter().enumerate() {
        if *relevant {
            return 1.0 / (index + 1) as f32;
        }
    }
    0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::dataset::RelevanceLabel::{Good, Medium, Poor};

    #[test]
    fn test_precision_counts_only_good() {
        let ranked = [Good, Medium, Poor, Good];
        assert!((precision_at_k(&ranked, 3) - 1.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_precision_all_good() {
        let ranked = [Good, Good, Good];
        assert_eq!(precision_at_k(&ranked, 3), 1.0);
    }

    #[test]
    fn test_precision_fixed_denominator_for_short_groups() {
        // Two rows, both Good: the divisor stays 3
        let ranked = [Good, Good];
        assert!((precision_at_k(&ranked, 3) - 2.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_precision_bounds() {
        let ranked = [Good, Poor, Good, Medium, Good];
        let p = precision_at_k(&ranked, 3);
        assert!((0.0..=1.0).contains(&p));
    }

    #[test]
    fn test_reciprocal_rank_third_position() {
        assert!((reciprocal_rank(&[false, false, true, false]) - 1.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_reciprocal_rank_first_position() {
        assert_eq!(reciprocal_rank(&[true, false, false]), 1.0);
    }

    #[test]
    fn test_reciprocal_rank_no_relevant() {
        assert_eq!(reciprocal_rank(&[false, false, false]), 0.0);
        assert_eq!(reciprocal_rank(&[]), 0.0);
    }
}
