// src/models/fish.rs - Fish population supported by plankton production

use crate::constants::*;
use crate::derived::DerivedState;
use crate::math_utils::{floor_population, gaussian, sigmoid};

/// Fish head count given the current plankton growth rate (0-100).
///
/// Carrying capacity scales with plankton; fishing and pollution pressure
/// is not capped at 1, so heavy pressure drives the estimate negative
/// before it is floored at zero.
pub fn fish_population(state: &DerivedState, plankton_growth: f64) -> u64 {
    let carrying_capacity = FISH_MAX_CARRYING_CAPACITY * plankton_growth / PERCENT;
    let temp_tolerance = gaussian(state.ocean_temp, FISH_OPTIMAL_TEMP_C, FISH_TEMP_SPREAD_C);
    let oxygen_factor = sigmoid(state.oxygen, FISH_OXYGEN_MIDPOINT, FISH_OXYGEN_STEEPNESS);

    let mut population =
        carrying_capacity * (1.0 - population_pressure(state)) * temp_tolerance * oxygen_factor;

    if state.oxygen < FISH_ANOXIA_OXYGEN {
        population *= FISH_ANOXIA_PENALTY;
    }
    if state.ph < FISH_PH_MIN || state.ph > FISH_PH_MAX {
        population *= FISH_PH_PENALTY;
    }

    floor_population(population)
}

/// Combined fishing and pollution pressure as a fraction of capacity lost.
pub fn population_pressure(state: &DerivedState) -> f64 {
    state.fishing_density / FISHING_PRESSURE_SCALE
        + state.plastic_pollution / PLASTIC_PRESSURE_SCALE
        + state.heavy_metal_pollution * HEAVY_METAL_PRESSURE_GAIN
}
