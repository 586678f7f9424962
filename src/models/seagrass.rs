// src/models/seagrass.rs - Seagrass meadow coverage

use crate::constants::*;
use crate::derived::DerivedState;
use crate::math_utils::{clamp_indicator, gaussian, sigmoid};

/// Seagrass coverage in percent, `[0, 100]`.
pub fn seagrass_coverage(state: &DerivedState) -> f64 {
    let nutrient_factor = gaussian(
        state.total_nutrients(),
        SEAGRASS_OPTIMAL_NUTRIENTS,
        SEAGRASS_NUTRIENT_SPREAD,
    );

    let mut coverage = PERCENT
        * sigmoid(
            light_at_depth(state.sunlight_intensity, state.depth),
            SEAGRASS_LIGHT_MIDPOINT,
            SEAGRASS_LIGHT_STEEPNESS,
        )
        * nutrient_factor
        * (-SEAGRASS_DISTURBANCE_DECAY * disturbance(state)).exp();

    if state.ph < SEAGRASS_ACID_PH {
        coverage *= SEAGRASS_ACID_PENALTY;
    }
    if state.heavy_metal_pollution > SEAGRASS_HEAVY_METAL_LIMIT {
        coverage *= SEAGRASS_HEAVY_METAL_PENALTY;
    }

    clamp_indicator(coverage, 0.0, PERCENT)
}

/// Beer-Lambert attenuation of surface light down to the bed.
pub fn light_at_depth(sunlight: f64, depth: f64) -> f64 {
    sunlight * (-SEAGRASS_LIGHT_ATTENUATION * depth).exp()
}

/// Physical disturbance from waves and boat traffic.
pub fn disturbance(state: &DerivedState) -> f64 {
    state.wave_energy() / SEAGRASS_WAVE_DISTURBANCE_SCALE
        + state.boats / SEAGRASS_BOAT_DISTURBANCE_SCALE
}
