use crate::scanpath::{RoiFixation, RoiScanpath, SpatialFixation, SpatialScanpath};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::str::FromStr;

fn read_records(file_path: &str) -> Vec<StringRecord> {
    let file = File::open(file_path).unwrap();
    let mut reader = ReaderBuilder::new().has_headers(true).trim(Trim::All).from_reader(file);
    reader.records().map(|rec| rec.unwrap()).collect()
}

/// Columns: duration, longitude and latitude in degrees, roi.
pub fn read_spatial_scanpath(file_path: &str) -> SpatialScanpath<f64> {
    SpatialScanpath::from_fixations(read_records(file_path).iter().map(|rec| SpatialFixation {
        duration: f64::from_str(&rec[0]).unwrap(),
        longitude: f64::from_str(&rec[1]).unwrap().to_radians(),
        latitude: f64::from_str(&rec[2]).unwrap().to_radians(),
    }))
}

pub fn read_roi_scanpath(file_path: &str) -> RoiScanpath<f64, i64> {
    RoiScanpath::from_fixations(read_records(file_path).iter().map(|rec| RoiFixation {
        duration: f64::from_str(&rec[0]).unwrap(),
        roi: i64::from_str(&rec[3]).unwrap(),
    }))
}
