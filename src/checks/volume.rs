//! Row-count sanity check.

use super::CheckError;
use crate::data::model::Dataset;

/// Exclusive lower bound on the row count.
pub const MIN_ROWS: usize = 15_000;
/// Exclusive upper bound on the row count.
pub const MAX_ROWS: usize = 1_000_000;

/// Fail with [`CheckError::VolumeAnomaly`] unless the row count lies
/// strictly between [`MIN_ROWS`] and [`MAX_ROWS`]. A count at either bound
/// fails; this guards against silent pipeline truncation or duplication.
pub fn check_row_count(data: &Dataset) -> Result<(), CheckError> {
    let rows = data.len();
    if rows <= MIN_ROWS || rows >= MAX_ROWS {
        return Err(CheckError::VolumeAnomaly {
            rows,
            min: MIN_ROWS,
            max: MAX_ROWS,
        });
    }
    Ok(())
}
