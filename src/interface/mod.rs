#[cfg(test)]
mod tests;

pub use crate::interface::parameters::Parameters;

use crate::alignment::{align_roi, align_spatial};
use crate::scanpath::{RoiScanpath, SpatialScanpath};
use crate::utils::LibData;
use anyhow::Result;

mod parameters;

/// Compares pairs of scanpaths with a fixed set of parameters. Holds no state
/// between comparisons, so one instance can be shared across threads.
#[derive(Copy, Clone, Debug, Default)]
pub struct Scasim<A: LibData> {
    pub parameters: Parameters<A>,
}

impl<A: LibData> Scasim<A> {
    pub fn new(parameters: Parameters<A>) -> Self {
        Self { parameters }
    }

    pub fn with_modulator(modulator: A) -> Self {
        Self::new(Parameters { modulator })
    }

    pub fn compare_spatial(&self, source: &SpatialScanpath<A>, target: &SpatialScanpath<A>) -> Result<A> {
        align_spatial(
            source.durations(),
            source.longitudes(),
            source.latitudes(),
            target.durations(),
            target.longitudes(),
            target.latitudes(),
            self.parameters.modulator,
        )
    }

    pub fn compare_roi<R: PartialEq>(
        &self,
        source: &RoiScanpath<A, R>,
        target: &RoiScanpath<A, R>,
    ) -> Result<A> {
        align_roi(source.durations(), source.rois(), target.durations(), target.rois())
    }
}
