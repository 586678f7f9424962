// src/models/algal_bloom.rs - Harmful algal bloom risk

use crate::constants::*;
use crate::derived::DerivedState;
use crate::math_utils::clamp_indicator;

/// Bloom risk in percent, `[0, 100]`.
///
/// The individual factors are not bounded; warm, nutrient-rich, lit and
/// turbid water can push the raw product well past 100 before the final
/// clamp.
pub fn algal_bloom_risk(state: &DerivedState) -> f64 {
    let nutrient_factor = state.nutrient_product().powf(BLOOM_NUTRIENT_EXPONENT);
    let light_factor =
        state.sunlight_intensity * (1.0 - (-state.turbidity / BLOOM_TURBIDITY_SCALE).exp());

    let mut risk = BLOOM_RISK_SCALE
        * warming_factor(state.ocean_temp)
        * (nutrient_factor / BLOOM_NUTRIENT_NORMALIZER)
        * light_factor;

    if state.oxygen > BLOOM_OXYGENATED_LEVEL {
        risk *= BLOOM_OXYGENATED_PENALTY;
    }
    if state.depth > BLOOM_DEEP_WATER_M {
        risk *= BLOOM_DEEP_WATER_PENALTY;
    }

    clamp_indicator(risk, 0.0, PERCENT)
}

/// Grows by a factor of e for every 12 °C above 20 °C. Shared with the
/// dead zone model.
pub fn warming_factor(ocean_temp: f64) -> f64 {
    ((ocean_temp - REFERENCE_WATER_TEMP_C) / WARMING_E_FOLD_C).exp()
}
