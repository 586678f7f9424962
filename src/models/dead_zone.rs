// src/models/dead_zone.rs - Hypoxic dead zone extent

use crate::constants::*;
use crate::derived::DerivedState;
use crate::math_utils::clamp_indicator;
use crate::models::algal_bloom::warming_factor;

/// Dead zone area in percent, `[0, 100]`.
///
/// Oxygen depletion below 2 and eutrophication add up; warming multiplies
/// them. Rough seas mix oxygen back in and shallow water limits the extent.
pub fn dead_zone_area(state: &DerivedState) -> f64 {
    let oxygen_depletion =
        (DEAD_ZONE_HYPOXIA_OXYGEN - state.oxygen).max(0.0) * DEAD_ZONE_DEPLETION_SCALE;
    let eutrophication = state.nutrient_product().powf(DEAD_ZONE_NUTRIENT_EXPONENT);

    let mut area = (oxygen_depletion + eutrophication) * warming_factor(state.ocean_temp);

    if state.wave_height > DEAD_ZONE_ROUGH_SEA_M {
        area *= DEAD_ZONE_ROUGH_SEA_PENALTY;
    }
    if state.is_shallow() {
        area *= DEAD_ZONE_SHALLOW_PENALTY;
    }

    clamp_indicator(area, 0.0, PERCENT)
}
