//----------------------------------------
// sample_size mod
//----------------------------------------
pub mod compute_ss;
pub mod compute_ss_curve;
pub mod error;
pub mod types;
