//----------------------------------------
// Root lib
//----------------------------------------
//! The purpose of this library is to provide utility functions for computing
//! per-group sample sizes for two-arm comparison studies with a continuous
//! endpoint. The core computation converts alpha and power into standard
//! normal quantiles via a closed-form approximation, combines them with a
//! standardized effect size, and applies dropout and clustering corrections.

/// This module houses the public API for computing sample sizes, sample size
/// curves, quantiles, and design effects
pub mod compute;
mod design_effect;
/// This module contains error types
pub mod error;
mod quantile;
mod sample_size;
