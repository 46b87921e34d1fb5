//! Invocation-layer parameters for the threshold-carrying checks.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// The scalar parameters an invocation supplies alongside the datasets.
/// The fixed constants (schema, boroughs, bounding box, volume bounds) live
/// with their checks; only these three vary per pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CheckParams {
    /// Strict upper bound on the base-2 KL divergence of the new data's
    /// neighbourhood distribution from the reference's.
    pub kl_threshold: f64,
    /// Inclusive lower bound on the `price` column.
    pub min_price: f64,
    /// Inclusive upper bound on the `price` column.
    pub max_price: f64,
}

impl Default for CheckParams {
    /// The upstream pipeline's configuration values.
    fn default() -> Self {
        CheckParams {
            kl_threshold: 0.2,
            min_price: 10.0,
            max_price: 350.0,
        }
    }
}

impl CheckParams {
    /// Load parameters from a JSON file:
    /// `{ "kl_threshold": 0.2, "min_price": 10, "max_price": 350 }`
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).context("reading params file")?;
        serde_json::from_str(&text).context("parsing params JSON")
    }
}
