//----------------------------------------
// quantile mod
//----------------------------------------
pub mod error;
pub mod upper_tail;
