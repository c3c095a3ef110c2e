//----------------------------------------
// compute mod types
//----------------------------------------

pub use crate::sample_size::types::{EffectSizeMethod, SampleSizeCurve};
