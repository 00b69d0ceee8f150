//! Batch ranking by drug-likeness score.

use std::cmp::Reverse;

use druggen_core::Scored;

/// Sort by [`Scored::score`], highest first.
///
/// The sort is stable: equal scores keep their generation order.
pub fn rank_candidates<T: Scored>(candidates: &mut [T]) {
    candidates.sort_by_key(|c| Reverse(c.score()));
}

/// Whether scores are non-increasing.
pub fn is_ranked<T: Scored>(candidates: &[T]) -> bool {
    candidates.windows(2).all(|w| w[0].score() >= w[1].score())
}
