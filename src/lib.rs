//! listing-check – validation suite for NYC short-term-rental listing
//! datasets.
//!
//! A dataset is accepted by the downstream pipeline iff all six checks pass:
//! column layout, neighbourhood-group domain, geographic boundaries,
//! distribution similarity to a reference dataset, row-count sanity, and
//! price range. Loading and reporting are thin replaceable collaborators;
//! the checks themselves are pure functions over an immutable
//! [`data::model::Dataset`].
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use listing_check::{checks, config::CheckParams, data::loader};
//!
//! let data = loader::load_file(Path::new("listings.csv"))?;
//! let reference = loader::load_file(Path::new("reference.csv"))?;
//! for report in checks::run_all(&data, &reference, &CheckParams::default()) {
//!     println!("{}: {}", report.name, if report.passed() { "ok" } else { "FAILED" });
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod checks;
pub mod config;
pub mod data;
pub mod stats;

pub use checks::{run_all, CheckError, CheckReport};
pub use config::CheckParams;
pub use data::model::{Column, DataError, Dataset};
