//----------------------------------------
// sample_size mod types
//----------------------------------------

/// Sample sizes evaluated over a swept range of effect sizes, one entry per
/// swept value. `effect_sizes` and `sample_sizes` always have equal length.
#[derive(Debug, Clone)]
pub struct SampleSizeCurve {
    pub effect_sizes: Vec<f64>,
    pub sample_sizes: Vec<u64>,
}

/// Named conventions for choosing a default effect size. These only supply
/// default and minimum effect size values; the computation itself is
/// identical across methods.
#[derive(Default, Debug, PartialEq, Copy, Clone)]
pub enum EffectSizeMethod {
    /// Observed MMSE change (Doi et al.)
    Doi,
    /// Standardized mean difference (Ito et al. meta-analysis)
    Ito,
    /// Minimal clinically important MMSE difference (Andrews et al.)
    #[default]
    Andrews,
}

impl EffectSizeMethod {
    pub fn default_effect_size(&self) -> f64 {
        match self {
            EffectSizeMethod::Doi => 0.82,
            EffectSizeMethod::Ito => 0.4,
            EffectSizeMethod::Andrews => 3.0,
        }
    }

    /// Smallest effect size worth sweeping for this method
    pub fn min_effect_size(&self) -> f64 {
        match self {
            EffectSizeMethod::Andrews => 1.0,
            _ => 0.1,
        }
    }
}
