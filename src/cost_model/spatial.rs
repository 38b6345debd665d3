use crate::cost_model::CostModel;
use crate::utils::LibData;

/// Angular distance in degrees between two points given as longitude and
/// latitude in radians. Uses the Vincenty form of the great circle distance,
/// which stays accurate for nearly coincident and nearly antipodal points.
pub fn great_circle_degrees<A: LibData>(lon_a: A, lat_a: A, lon_b: A, lat_b: A) -> A {
    let d_lon = lon_a - lon_b;
    let (sin_d_lon, cos_d_lon) = d_lon.sin_cos();
    let (sin_lat_a, cos_lat_a) = lat_a.sin_cos();
    let (sin_lat_b, cos_lat_b) = lat_b.sin_cos();

    let numerator = ((cos_lat_b * sin_d_lon).powi(2)
        + (cos_lat_a * sin_lat_b - sin_lat_a * cos_lat_b * cos_d_lon).powi(2))
    .sqrt();
    let denominator = sin_lat_a * sin_lat_b + cos_lat_a * cos_lat_b * cos_d_lon;

    numerator.atan2(denominator).to_degrees()
}

/// Fixation sites on a sphere, weighted by cortical magnification: the
/// similarity of two fixations is `modulator ^ angular_distance_in_degrees`.
///
/// Coordinates must be in radians. A `modulator` that is not positive, or NaN
/// coordinates, yield NaN similarities; they are not rejected here.
#[derive(Copy, Clone, Debug)]
pub struct Spatial<'a, A: LibData> {
    source_longitudes: &'a [A],
    source_latitudes: &'a [A],
    target_longitudes: &'a [A],
    target_latitudes: &'a [A],
    modulator: A,
}

impl<'a, A: LibData> Spatial<'a, A> {
    pub fn new(
        source_longitudes: &'a [A],
        source_latitudes: &'a [A],
        target_longitudes: &'a [A],
        target_latitudes: &'a [A],
        modulator: A,
    ) -> Self {
        Self {
            source_longitudes,
            source_latitudes,
            target_longitudes,
            target_latitudes,
            modulator,
        }
    }
}

impl<'a, A: LibData> CostModel<A> for Spatial<'a, A> {
    fn similarity(&self, source: usize, target: usize) -> A {
        let distance = great_circle_degrees(
            self.source_longitudes[source],
            self.source_latitudes[source],
            self.target_longitudes[target],
            self.target_latitudes[target],
        );
        self.modulator.powf(distance)
    }

    fn source_len(&self) -> usize {
        self.source_longitudes.len().min(self.source_latitudes.len())
    }

    fn target_len(&self) -> usize {
        self.target_longitudes.len().min(self.target_latitudes.len())
    }

    fn name() -> String {
        "spatial".to_string()
    }
}
