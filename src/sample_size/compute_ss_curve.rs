use crate::error::SscomputeErr;
use crate::sample_size::compute_ss::compute_sample_size;
use crate::sample_size::error::SampleSizeErr;
use crate::sample_size::types::{EffectSizeMethod, SampleSizeCurve};

/// Largest effect size worth plotting on a sample size curve
const MAX_SWEEP_EFFECT_SIZE: f64 = 5.0;
/// Effect size increment between swept points
const SWEEP_STEP_SIZE: f64 = 0.1;

/// Evaluates the sample size computation over a range of effect sizes with
/// all other parameters held fixed, producing one curve point per step.
/// The sweep starts at min_effect_size and accumulates step_size while the
/// running value stays <= max_effect_size.
pub fn compute_ss_curve(
    min_effect_size: f64,
    max_effect_size: f64,
    step_size: f64,
    sigma: f64,
    alpha: f64,
    power: f64,
    dropout_rate: f64,
    design_effect: f64,
) -> Result<SampleSizeCurve, SscomputeErr> {
    //----------------------------------------
    // Check sweep arguments; the per-point arguments are checked by
    // compute_sample_size itself
    if !(step_size > 0.0) {
        return Err(SampleSizeErr::BadStep(step_size).into());
    }
    if !(min_effect_size > 0.0 && min_effect_size <= max_effect_size) {
        return Err(SampleSizeErr::BadEffectRange {
            min: min_effect_size,
            max: max_effect_size,
        }
        .into());
    }

    //----------------------------------------
    // Sweep
    let mut effect_sizes: Vec<f64> = Vec::new();
    let mut sample_sizes: Vec<u64> = Vec::new();
    let mut delta = min_effect_size;
    while delta <= max_effect_size {
        let n = compute_sample_size(delta, sigma, alpha, power, dropout_rate, design_effect)?;
        effect_sizes.push(delta);
        sample_sizes.push(n);
        delta += step_size;
    }

    Ok(SampleSizeCurve {
        effect_sizes,
        sample_sizes,
    })
}

/// Sweeps from the method's minimum effect size to 5.0 in steps of 0.1, the
/// range used for visualizing a sample size curve
pub fn compute_ss_curve_for_method(
    method: EffectSizeMethod,
    sigma: f64,
    alpha: f64,
    power: f64,
    dropout_rate: f64,
    design_effect: f64,
) -> Result<SampleSizeCurve, SscomputeErr> {
    compute_ss_curve(
        method.min_effect_size(),
        MAX_SWEEP_EFFECT_SIZE,
        SWEEP_STEP_SIZE,
        sigma,
        alpha,
        power,
        dropout_rate,
        design_effect,
    )
}

#[cfg(test)]
mod tests {

    use super::*;
    use itertools::izip;

    #[test]
    fn curve_matches_pointwise_computation() {
        let curve = compute_ss_curve(1.0, 5.0, 0.5, 4.0, 0.05, 0.8, 0.2, 1.0)
            .expect("failed to compute curve");
        assert_eq!(curve.effect_sizes.len(), curve.sample_sizes.len());
        assert!(!curve.effect_sizes.is_empty());
        for (&delta, &n) in izip!(&curve.effect_sizes, &curve.sample_sizes) {
            let expected = compute_sample_size(delta, 4.0, 0.05, 0.8, 0.2, 1.0)
                .expect("failed to compute point on curve");
            assert_eq!(n, expected);
        }
    }

    #[test]
    fn curve_is_nonincreasing_in_effect_size() {
        let curve = compute_ss_curve(1.0, 5.0, 0.1, 4.0, 0.05, 0.8, 0.2, 1.0)
            .expect("failed to compute curve");
        for pair in curve.sample_sizes.windows(2) {
            assert!(pair[1] <= pair[0]);
        }
    }

    #[test]
    fn curve_single_point_range() {
        let curve = compute_ss_curve(3.0, 3.0, 0.1, 4.0, 0.05, 0.8, 0.2, 1.0)
            .expect("failed to compute single-point curve");
        assert_eq!(curve.effect_sizes.len(), 1);
        assert_eq!(curve.sample_sizes, vec![48]);
    }

    #[test]
    fn curve_for_andrews_starts_at_one() {
        let curve =
            compute_ss_curve_for_method(EffectSizeMethod::Andrews, 4.0, 0.05, 0.8, 0.2, 1.0)
                .expect("failed to compute Andrews curve");
        assert_eq!(curve.effect_sizes[0], 1.0);
        // 1.0 to 5.0 in steps of 0.1; endpoint inclusion depends on float
        // accumulation, so only bound the count from below
        assert!(curve.effect_sizes.len() >= 40);
    }

    #[test]
    fn curve_for_doi_starts_at_method_minimum() {
        let curve = compute_ss_curve_for_method(EffectSizeMethod::Doi, 4.0, 0.05, 0.8, 0.2, 1.0)
            .expect("failed to compute Doi curve");
        assert_eq!(curve.effect_sizes[0], 0.1);
        assert!(curve.effect_sizes.len() > 40);
    }

    #[test]
    fn curve_err_bad_step() {
        assert!(compute_ss_curve(1.0, 5.0, 0.0, 4.0, 0.05, 0.8, 0.2, 1.0).is_err());
        assert!(compute_ss_curve(1.0, 5.0, -0.1, 4.0, 0.05, 0.8, 0.2, 1.0).is_err());
    }

    #[test]
    fn curve_err_bad_range() {
        if let Err(e) = compute_ss_curve(5.0, 1.0, 0.1, 4.0, 0.05, 0.8, 0.2, 1.0) {
            assert_eq!(
                String::from(
                    "while computing sample size: effect size range should be \
                    positive and increasing (got min 5, max 1)"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
        assert!(compute_ss_curve(0.0, 5.0, 0.1, 4.0, 0.05, 0.8, 0.2, 1.0).is_err());
    }

    #[test]
    fn curve_err_propagates_point_errors() {
        // Bad sigma surfaces from the underlying computation
        assert!(compute_ss_curve(1.0, 5.0, 0.1, 0.0, 0.05, 0.8, 0.2, 1.0).is_err());
    }
}
