pub mod alignment;
pub mod cost_model;
mod error;
mod interface;
pub mod scanpath;
#[cfg(test)]
mod test_utils;
mod utils;

pub use alignment::{align, align_roi, align_spatial, normalize_by_length};
pub use cost_model::CostModel;
pub use error::ScasimError;
pub use interface::{Parameters, Scasim};
pub use scanpath::{RoiFixation, RoiScanpath, SpatialFixation, SpatialScanpath};
pub use utils::{min3, LibData};
