//----------------------------------------
// quantile errors
//----------------------------------------
use crate::error::SscomputeErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuantileErr {
    #[error("tail probability should be in (0, 1); got {0}")]
    OutOfBounds(f64),
}

impl Into<SscomputeErr> for QuantileErr {
    fn into(self) -> SscomputeErr {
        SscomputeErr::Quantile(self)
    }
}
