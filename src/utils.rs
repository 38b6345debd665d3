use num_traits::{Float, FromPrimitive};
use std::fmt::{Debug, Display};
use std::iter::Sum;

pub trait LibData:
    'static
    + Copy
    + Send
    + Sync
    + Debug
    + Display
    + Float
    + FromPrimitive
    + Sum
{
    const NAN: Self;
}

impl LibData for f32 {
    const NAN: Self = Self::NAN;
}

impl LibData for f64 {
    const NAN: Self = Self::NAN;
}

/// Three-way minimum that never lets NaN win a comparison. On ties the
/// earlier argument is kept, which fixes the edit operation chosen per cell.
pub fn min3<A: LibData>(a: A, b: A, c: A) -> A {
    let t = if a <= b || b.is_nan() { a } else { b };
    if t <= c || c.is_nan() {
        t
    } else {
        c
    }
}
