use crate::error::check_shape;
use crate::utils::LibData;
use anyhow::Result;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpatialFixation<A> {
    pub duration: A,
    pub longitude: A,
    pub latitude: A,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RoiFixation<A, R> {
    pub duration: A,
    pub roi: R,
}

/// Fixations located by longitude and latitude in radians.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpatialScanpath<A> {
    durations: Vec<A>,
    longitudes: Vec<A>,
    latitudes: Vec<A>,
}

impl<A: LibData> SpatialScanpath<A> {
    pub fn new(durations: Vec<A>, longitudes: Vec<A>, latitudes: Vec<A>) -> Result<Self> {
        check_shape("spatial", "longitudes", durations.len(), longitudes.len())?;
        check_shape("spatial", "latitudes", durations.len(), latitudes.len())?;
        Ok(Self {
            durations,
            longitudes,
            latitudes,
        })
    }

    /// Same as [`SpatialScanpath::new`] but with coordinates in degrees.
    pub fn from_degrees(durations: Vec<A>, longitudes: Vec<A>, latitudes: Vec<A>) -> Result<Self> {
        Self::new(
            durations,
            longitudes.into_iter().map(A::to_radians).collect(),
            latitudes.into_iter().map(A::to_radians).collect(),
        )
    }

    pub fn from_fixations<I: IntoIterator<Item = SpatialFixation<A>>>(fixations: I) -> Self {
        let mut scanpath = Self {
            durations: vec![],
            longitudes: vec![],
            latitudes: vec![],
        };
        for fixation in fixations {
            scanpath.durations.push(fixation.duration);
            scanpath.longitudes.push(fixation.longitude);
            scanpath.latitudes.push(fixation.latitude);
        }
        scanpath
    }

    pub fn durations(&self) -> &[A] {
        &self.durations
    }

    pub fn longitudes(&self) -> &[A] {
        &self.longitudes
    }

    pub fn latitudes(&self) -> &[A] {
        &self.latitudes
    }

    pub fn len(&self) -> usize {
        self.durations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.durations.is_empty()
    }

    pub fn total_duration(&self) -> A {
        self.durations.iter().copied().sum()
    }
}

/// Fixations labelled with the region of interest they landed on.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoiScanpath<A, R> {
    durations: Vec<A>,
    rois: Vec<R>,
}

impl<A: LibData, R: PartialEq> RoiScanpath<A, R> {
    pub fn new(durations: Vec<A>, rois: Vec<R>) -> Result<Self> {
        check_shape("roi", "rois", durations.len(), rois.len())?;
        Ok(Self { durations, rois })
    }

    pub fn from_fixations<I: IntoIterator<Item = RoiFixation<A, R>>>(fixations: I) -> Self {
        let (durations, rois) = fixations
            .into_iter()
            .map(|fixation| (fixation.duration, fixation.roi))
            .unzip();
        Self { durations, rois }
    }

    pub fn durations(&self) -> &[A] {
        &self.durations
    }

    pub fn rois(&self) -> &[R] {
        &self.rois
    }

    pub fn len(&self) -> usize {
        self.durations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.durations.is_empty()
    }

    pub fn total_duration(&self) -> A {
        self.durations.iter().copied().sum()
    }
}
