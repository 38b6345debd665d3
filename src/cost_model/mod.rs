use crate::utils::LibData;

pub mod roi;
pub mod spatial;

pub use roi::Roi;
pub use spatial::{great_circle_degrees, Spatial};

/// Similarity between a source and a target fixation, in `[0, 1]`.
/// 1 means the two fixations landed on the same spot, 0 means they are
/// as unrelated as a deletion followed by an insertion.
pub trait CostModel<A: LibData> {
    fn similarity(&self, source: usize, target: usize) -> A;
    /// Number of source fixations the model can score.
    fn source_len(&self) -> usize;
    fn target_len(&self) -> usize;
    fn name() -> String;
}

/// Substitution cost of two fixations given their similarity. Tends to the
/// duration difference for similar fixations and to the duration sum for
/// dissimilar ones.
pub fn substitution_cost<A: LibData>(source_duration: A, target_duration: A, similarity: A) -> A {
    ((target_duration - source_duration) * similarity
        + (target_duration + source_duration) * (A::one() - similarity))
        .abs()
}
