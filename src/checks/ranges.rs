//! Per-row numeric range checks: geographic boundaries and price.

use super::CheckError;
use crate::data::model::Dataset;

/// Closed longitude interval covering NYC and its surroundings.
pub const LONGITUDE_BOUNDS: (f64, f64) = (-74.25, -73.50);
/// Closed latitude interval covering NYC and its surroundings.
pub const LATITUDE_BOUNDS: (f64, f64) = (40.5, 41.2);

/// Fail with [`CheckError::BoundaryViolation`] if any row falls outside the
/// NYC bounding box on either coordinate. Zero tolerance: a single outlier
/// fails the dataset.
pub fn check_geographic_bounds(data: &Dataset) -> Result<(), CheckError> {
    let longitude = data.numeric("longitude")?;
    let latitude = data.numeric("latitude")?;

    let (lon_min, lon_max) = LONGITUDE_BOUNDS;
    let (lat_min, lat_max) = LATITUDE_BOUNDS;

    let violations = longitude
        .iter()
        .zip(&latitude)
        .filter(|(&lon, &lat)| {
            !((lon_min..=lon_max).contains(&lon) && (lat_min..=lat_max).contains(&lat))
        })
        .count();

    if violations > 0 {
        return Err(CheckError::BoundaryViolation {
            violations,
            lon_min,
            lon_max,
            lat_min,
            lat_max,
        });
    }
    Ok(())
}

/// Fail with [`CheckError::RangeViolation`] unless every price lies in
/// `[min_price, max_price]` inclusive. All-or-nothing, not a tolerance.
pub fn check_price_range(data: &Dataset, min_price: f64, max_price: f64) -> Result<(), CheckError> {
    let price = data.numeric("price")?;

    let violations = price
        .iter()
        .filter(|p| !(min_price..=max_price).contains(*p))
        .count();

    if violations > 0 {
        return Err(CheckError::RangeViolation {
            violations,
            min_price,
            max_price,
        });
    }
    Ok(())
}
