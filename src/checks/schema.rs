//! Structural checks: column layout and the neighbourhood-group domain.

use std::collections::BTreeSet;

use super::CheckError;
use crate::data::model::Dataset;

/// The column layout the downstream pipeline was built against.
/// Order matters: a reordered-but-complete dataset is still a mismatch.
pub const EXPECTED_COLUMNS: [&str; 16] = [
    "id",
    "name",
    "host_id",
    "host_name",
    "neighbourhood_group",
    "neighbourhood",
    "latitude",
    "longitude",
    "room_type",
    "price",
    "minimum_nights",
    "number_of_reviews",
    "last_review",
    "reviews_per_month",
    "calculated_host_listings_count",
    "availability_365",
];

/// The five boroughs in and around NYC.
pub const KNOWN_GROUPS: [&str; 5] = ["Bronx", "Brooklyn", "Manhattan", "Queens", "Staten Island"];

/// Fail with [`CheckError::SchemaMismatch`] unless the dataset's column
/// names equal [`EXPECTED_COLUMNS`] exactly, in order.
pub fn check_column_names(data: &Dataset) -> Result<(), CheckError> {
    let found = data.column_names();
    if found != EXPECTED_COLUMNS {
        return Err(CheckError::SchemaMismatch {
            expected: EXPECTED_COLUMNS.to_vec(),
            found: found.into_iter().map(str::to_string).collect(),
        });
    }
    Ok(())
}

/// Fail with [`CheckError::DomainViolation`] unless the distinct
/// `neighbourhood_group` values equal exactly [`KNOWN_GROUPS`]. Unordered
/// set comparison; extra and missing categories both fail.
pub fn check_neighbourhood_groups(data: &Dataset) -> Result<(), CheckError> {
    let found = data.unique("neighbourhood_group")?;
    let known: BTreeSet<&str> = KNOWN_GROUPS.into_iter().collect();

    if found != known {
        let unexpected: Vec<String> = found.difference(&known).map(|s| s.to_string()).collect();
        let missing: Vec<String> = known.difference(&found).map(|s| s.to_string()).collect();
        return Err(CheckError::DomainViolation { unexpected, missing });
    }
    Ok(())
}
