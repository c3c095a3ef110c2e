//----------------------------------------
// Crate error type
//----------------------------------------
use crate::quantile::error::*;
use crate::sample_size::error::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SscomputeErr {
    #[error("while evaluating normal quantile: {0}")]
    Quantile(QuantileErr),
    #[error("while computing sample size: {0}")]
    SampleSize(SampleSizeErr),
}
