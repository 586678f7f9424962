// src/models/coral.rs - Coral reef health: 100 minus accumulated stress

use crate::constants::*;
use crate::derived::DerivedState;
use crate::math_utils::clamp_indicator;

/// Coral health in `[0, 100]`.
pub fn coral_health(state: &DerivedState) -> f64 {
    let mut health = CORAL_MAX_HEALTH
        - thermal_stress(state.ocean_temp)
        - acidification_stress(state.ph)
        - pollution_stress(state)
        - turbidity_stress(state);

    if state.oxygen < CORAL_HYPOXIA_OXYGEN {
        health -= (CORAL_HYPOXIA_OXYGEN - state.oxygen).powi(2) * CORAL_HYPOXIA_SCALE;
    }

    if state.is_shallow() {
        health -= state.boat_density_factor()
            * (-state.depth / CORAL_BOAT_DEPTH_M).exp()
            * CORAL_BOAT_SCALE;
    }

    clamp_indicator(health, 0.0, PERCENT)
}

/// Asymmetric: bleaching above 29 °C grows faster than cold stress below
/// 23 °C. Zero in between.
pub fn thermal_stress(ocean_temp: f64) -> f64 {
    if ocean_temp > CORAL_BLEACHING_TEMP_C {
        CORAL_BLEACHING_BASE.powf(ocean_temp - CORAL_BLEACHING_TEMP_C) * CORAL_BLEACHING_SCALE
    } else if ocean_temp < CORAL_COLD_TEMP_C {
        CORAL_COLD_BASE.powf(CORAL_COLD_TEMP_C - ocean_temp) * CORAL_COLD_SCALE
    } else {
        0.0
    }
}

pub fn acidification_stress(ph: f64) -> f64 {
    if ph < CORAL_ACIDIFICATION_PH {
        CORAL_ACIDIFICATION_BASE.powf(CORAL_ACIDIFICATION_PH - ph) * CORAL_ACIDIFICATION_SCALE
    } else {
        0.0
    }
}

pub fn pollution_stress(state: &DerivedState) -> f64 {
    (state.plastic_pollution + state.heavy_metal_pollution * CORAL_HEAVY_METAL_WEIGHT)
        .powf(CORAL_POLLUTION_EXPONENT)
}

/// Suspended sediment shades the reef; weighted toward shallow water.
pub fn turbidity_stress(state: &DerivedState) -> f64 {
    (state.turbidity / PERCENT) * (-state.depth / CORAL_TURBIDITY_DEPTH_M).exp() * CORAL_TURBIDITY_SCALE
}
