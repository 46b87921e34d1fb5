//! Divergence arithmetic for the distribution drift check.

/// Base-2 Kullback–Leibler divergence of `p_counts` from `q_counts`.
///
/// Inputs are raw (unnormalized) count vectors aligned index-by-index to the
/// same category ordering; each is normalized to a probability distribution
/// here. Zero-count conventions follow `scipy.stats.entropy`:
/// * p = 0 contributes nothing (0 · log2(0/q) = 0)
/// * p > 0 with q = 0 yields `f64::INFINITY`
///
/// Asymmetric: `kl_divergence_base2(p, q) != kl_divergence_base2(q, p)` in
/// general. Identical vectors (up to scale) yield exactly 0.0.
pub fn kl_divergence_base2(p_counts: &[f64], q_counts: &[f64]) -> f64 {
    debug_assert_eq!(p_counts.len(), q_counts.len());

    let p_total: f64 = p_counts.iter().sum();
    let q_total: f64 = q_counts.iter().sum();
    if p_total <= 0.0 || q_total <= 0.0 {
        return f64::NAN;
    }

    let mut divergence = 0.0;
    for (&p_count, &q_count) in p_counts.iter().zip(q_counts) {
        let p = p_count / p_total;
        if p == 0.0 {
            continue;
        }
        let q = q_count / q_total;
        if q == 0.0 {
            return f64::INFINITY;
        }
        divergence += p * (p / q).log2();
    }
    divergence
}
