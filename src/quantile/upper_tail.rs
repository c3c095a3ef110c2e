use crate::error::SscomputeErr;
use crate::quantile::error::QuantileErr;

/// Closed-form approximation to the standard normal upper-tail quantile,
/// z(p) = -0.862 + sqrt(0.743 - 2.404 * ln(p))
/// The constants bake in the two-sided halving, i.e. z(p) approximates
/// Phi^-1(1 - p/2), good to roughly two to three significant digits over the
/// alpha/power ranges used for sample size planning. Not a substitute for an
/// exact inverse CDF.
pub fn z_upper_tail(p: f64) -> Result<f64, SscomputeErr> {
    if !(p > 0.0 && p < 1.0) {
        return Err(QuantileErr::OutOfBounds(p).into());
    }
    Ok(-0.862 + (0.743 - 2.404 * p.ln()).sqrt())
}
