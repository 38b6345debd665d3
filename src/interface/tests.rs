use crate::interface::{Parameters, Scasim};
use crate::scanpath::{RoiScanpath, SpatialScanpath};
use crate::test_utils::{read_roi_scanpath, read_spatial_scanpath};
use rayon::prelude::*;

#[test]
fn test_default_modulator() {
    let parameters = Parameters::<f64>::default();
    assert_eq!(parameters.modulator, 0.83);
    assert_eq!(Scasim::<f32>::default().parameters.modulator, 0.83);
}

#[test]
fn test_recorded_scanpath_against_itself() {
    let _ = env_logger::builder().is_test(true).try_init();
    let scasim = Scasim::<f64>::default();

    let spatial = read_spatial_scanpath("data/scanpath_a.csv");
    assert_eq!(scasim.compare_spatial(&spatial, &spatial).unwrap(), 0.0);

    let roi = read_roi_scanpath("data/scanpath_a.csv");
    assert_eq!(scasim.compare_roi(&roi, &roi).unwrap(), 0.0);
}

#[test]
fn test_recorded_scanpaths_differ() {
    let scasim = Scasim::<f64>::default();
    let a = read_spatial_scanpath("data/scanpath_a.csv");
    let b = read_spatial_scanpath("data/scanpath_b.csv");

    let ab = scasim.compare_spatial(&a, &b).unwrap();
    let ba = scasim.compare_spatial(&b, &a).unwrap();
    for score in [ab, ba].iter() {
        assert!(*score > 0.0);
        assert!(*score < a.total_duration() + b.total_duration());
    }
}

#[test]
fn test_vanishing_modulator_costs_total_duration() {
    let a = read_spatial_scanpath("data/scanpath_a.csv");
    let b = read_spatial_scanpath("data/scanpath_b.csv");

    let score = Scasim::with_modulator(1e-30).compare_spatial(&a, &b).unwrap();
    assert!((score - (a.total_duration() + b.total_duration())).abs() < 1e-6);
}

#[test]
fn test_empty_scanpath_costs_total_duration() {
    let scasim = Scasim::<f64>::default();
    let a = read_roi_scanpath("data/scanpath_a.csv");
    let empty: RoiScanpath<f64, i64> = RoiScanpath::default();

    assert_eq!(scasim.compare_roi(&a, &empty).unwrap(), a.total_duration());
    assert_eq!(scasim.compare_roi(&empty, &a).unwrap(), a.total_duration());

    let spatial = read_spatial_scanpath("data/scanpath_b.csv");
    let no_fixations = SpatialScanpath::default();
    assert_eq!(
        scasim.compare_spatial(&no_fixations, &spatial).unwrap(),
        spatial.total_duration()
    );
}

#[test]
fn test_parallel_comparisons_match_sequential() {
    let scasim = Scasim::<f64>::default();
    let scanpaths = vec![
        read_spatial_scanpath("data/scanpath_a.csv"),
        read_spatial_scanpath("data/scanpath_b.csv"),
        SpatialScanpath::from_degrees(vec![200.0, 300.0], vec![0.0, 5.0], vec![0.0, -2.0]).unwrap(),
    ];
    let pairs: Vec<(usize, usize)> = (0..scanpaths.len())
        .flat_map(|i| (0..scanpaths.len()).map(move |j| (i, j)))
        .collect();

    let sequential: Vec<f64> = pairs
        .iter()
        .map(|&(i, j)| scasim.compare_spatial(&scanpaths[i], &scanpaths[j]).unwrap())
        .collect();
    let parallel: Vec<f64> = pairs
        .par_iter()
        .map(|&(i, j)| scasim.compare_spatial(&scanpaths[i], &scanpaths[j]).unwrap())
        .collect();

    assert_eq!(sequential, parallel);
}
