//! Distribution drift detection against a reference dataset.

use std::collections::BTreeSet;

use super::CheckError;
use crate::data::model::Dataset;
use crate::stats::kl_divergence_base2;

/// Fail with [`CheckError::DistributionDrift`] unless the base-2 KL
/// divergence of `data`'s neighbourhood-group count distribution from
/// `reference`'s is strictly below `kl_threshold`.
///
/// Count vectors are aligned over the union of both category sets, sorted by
/// category name; a category absent from one side enters the divergence as a
/// zero count. A category present in `data` but not in `reference` therefore
/// drives the divergence to infinity, failing any finite threshold.
///
/// Deliberately asymmetric: the direction is new-data-relative-to-reference,
/// measuring how surprising the new distribution is given the reference.
pub fn check_neighbourhood_distribution(
    data: &Dataset,
    reference: &Dataset,
    kl_threshold: f64,
) -> Result<(), CheckError> {
    let data_counts = data.value_counts("neighbourhood_group")?;
    let ref_counts = reference.value_counts("neighbourhood_group")?;

    // Union of category names; BTreeSet keeps them sorted.
    let categories: BTreeSet<&str> = data_counts.keys().chain(ref_counts.keys()).copied().collect();

    let p: Vec<f64> = categories
        .iter()
        .map(|c| data_counts.get(c).copied().unwrap_or(0) as f64)
        .collect();
    let q: Vec<f64> = categories
        .iter()
        .map(|c| ref_counts.get(c).copied().unwrap_or(0) as f64)
        .collect();

    let divergence = kl_divergence_base2(&p, &q);
    // Written so that NaN (empty input) and infinity both fail.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    if !(divergence < kl_threshold) {
        return Err(CheckError::DistributionDrift {
            divergence,
            threshold: kl_threshold,
        });
    }
    Ok(())
}
