/// Computes the design effect for cluster randomization,
/// 1 + (cluster_size - 1) * icc
/// Callers are responsible for passing cluster_size >= 1 and icc in [0, 1];
/// values outside those ranges are arithmetically fine but not meaningful as
/// an inflation factor. Trials without clustering should pass a design effect
/// of 1.0 to the sample size computation rather than calling this.
pub fn design_effect(cluster_size: f64, icc: f64) -> f64 {
    1.0 + (cluster_size - 1.0) * icc
}
