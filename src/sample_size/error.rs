//----------------------------------------
// sample_size errors
//----------------------------------------
use crate::error::SscomputeErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SampleSizeErr {
    #[error("effect size must be nonzero")]
    ZeroEffectSize,
    #[error("standard deviation should be > 0; got {0}")]
    BadSigma(f64),
    #[error("alpha should be in (0, 1); got {0}")]
    BadAlpha(f64),
    #[error("power should be in (0, 1); got {0}")]
    BadPower(f64),
    #[error("dropout rate should be in [0, 1); got {0}")]
    BadDropoutRate(f64),
    #[error("design effect should be >= 1; got {0}")]
    BadDesignEffect(f64),
    #[error("effect size step should be > 0; got {0}")]
    BadStep(f64),
    #[error(
        "effect size range should be positive and increasing \
        (got min {min}, max {max})"
    )]
    BadEffectRange { min: f64, max: f64 },
    #[error("sample size computation did not produce a finite positive count")]
    NonFinite,
}

impl Into<SscomputeErr> for SampleSizeErr {
    fn into(self) -> SscomputeErr {
        SscomputeErr::SampleSize(self)
    }
}
