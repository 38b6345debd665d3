use crate::cost_model::CostModel;
use crate::utils::LibData;

/// Fixations are either on the same region of interest or not; the spatial
/// arrangement of the regions is ignored.
#[derive(Copy, Clone, Debug)]
pub struct Roi<'a, R> {
    source: &'a [R],
    target: &'a [R],
}

impl<'a, R> Roi<'a, R> {
    pub fn new(source: &'a [R], target: &'a [R]) -> Self {
        Self { source, target }
    }
}

impl<'a, A: LibData, R: PartialEq> CostModel<A> for Roi<'a, R> {
    fn similarity(&self, source: usize, target: usize) -> A {
        if self.source[source] == self.target[target] {
            A::one()
        } else {
            A::zero()
        }
    }

    fn source_len(&self) -> usize {
        self.source.len()
    }

    fn target_len(&self) -> usize {
        self.target.len()
    }

    fn name() -> String {
        "roi".to_string()
    }
}
