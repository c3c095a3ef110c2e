//----------------------------------------
// compute mod
//----------------------------------------
pub mod types;

pub use crate::design_effect::design_effect;
pub use crate::quantile::upper_tail::z_upper_tail;
pub use crate::sample_size::compute_ss::compute_sample_size;
pub use crate::sample_size::compute_ss_curve::{compute_ss_curve, compute_ss_curve_for_method};
