use crate::utils::LibData;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Parameters<A> {
    /// Base of the cortical magnification decay, `similarity = modulator ^ degrees`.
    pub modulator: A,
}

impl<A: LibData> Default for Parameters<A> {
    fn default() -> Self {
        Self {
            modulator: A::from_f64(0.83).unwrap_or_else(A::one),
        }
    }
}
