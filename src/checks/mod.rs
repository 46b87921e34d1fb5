//! The validation suite: six independent, read-only predicates over one or
//! two [`Dataset`]s.
//!
//! Each check is a pure function returning `Result<(), CheckError>`: `Ok`
//! means the dataset passed, `Err` carries the violated invariant with
//! enough context to diagnose it. Checks share no state and may run in any
//! order; [`run_all`] is a convenience for harnesses that want all six
//! outcomes at once, but callers are free to invoke checks individually.

pub mod drift;
pub mod ranges;
pub mod schema;
pub mod volume;

use thiserror::Error;

use crate::config::CheckParams;
use crate::data::model::{DataError, Dataset};

// ---------------------------------------------------------------------------
// CheckError – one variant per validation invariant
// ---------------------------------------------------------------------------

/// A failed validation check.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("schema mismatch: expected columns {expected:?}, found {found:?}")]
    SchemaMismatch {
        expected: Vec<&'static str>,
        found: Vec<String>,
    },

    #[error("neighbourhood group domain violation: unexpected {unexpected:?}, missing {missing:?}")]
    DomainViolation {
        unexpected: Vec<String>,
        missing: Vec<String>,
    },

    #[error("{violations} row(s) outside the NYC bounding box (lon [{lon_min}, {lon_max}], lat [{lat_min}, {lat_max}])")]
    BoundaryViolation {
        violations: usize,
        lon_min: f64,
        lon_max: f64,
        lat_min: f64,
        lat_max: f64,
    },

    #[error("neighbourhood distribution drift: KL divergence {divergence} >= threshold {threshold}")]
    DistributionDrift { divergence: f64, threshold: f64 },

    #[error("row count {rows} outside the expected volume ({min}, {max}) exclusive")]
    VolumeAnomaly { rows: usize, min: usize, max: usize },

    #[error("{violations} row(s) with price outside [{min_price}, {max_price}]")]
    RangeViolation {
        violations: usize,
        min_price: f64,
        max_price: f64,
    },

    /// A required column is missing or mistyped. The duck-typed original
    /// would surface this as a KeyError inside a check; the typed table
    /// keeps it distinct from the six validation conditions.
    #[error(transparent)]
    Data(#[from] DataError),
}

// ---------------------------------------------------------------------------
// Suite runner
// ---------------------------------------------------------------------------

/// The named outcome of a single check.
#[derive(Debug)]
pub struct CheckReport {
    pub name: &'static str,
    pub outcome: Result<(), CheckError>,
}

impl CheckReport {
    pub fn passed(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Run all six checks against `data` (with `reference` for the drift check)
/// and collect their outcomes. No check short-circuits another.
pub fn run_all(data: &Dataset, reference: &Dataset, params: &CheckParams) -> Vec<CheckReport> {
    vec![
        CheckReport {
            name: "column_names",
            outcome: schema::check_column_names(data),
        },
        CheckReport {
            name: "neighbourhood_groups",
            outcome: schema::check_neighbourhood_groups(data),
        },
        CheckReport {
            name: "geographic_bounds",
            outcome: ranges::check_geographic_bounds(data),
        },
        CheckReport {
            name: "neighbourhood_distribution",
            outcome: drift::check_neighbourhood_distribution(data, reference, params.kl_threshold),
        },
        CheckReport {
            name: "row_count",
            outcome: volume::check_row_count(data),
        },
        CheckReport {
            name: "price_range",
            outcome: ranges::check_price_range(data, params.min_price, params.max_price),
        },
    ]
}
