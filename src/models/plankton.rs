// src/models/plankton.rs - Phytoplankton growth as a product of limiting factors

use crate::constants::*;
use crate::derived::DerivedState;
use crate::math_utils::{clamp_indicator, gaussian, michaelis_menten, sigmoid};

/// Plankton growth rate in percent of the maximum, `[0, 100]`.
///
/// `65 * temperature * nutrients * light * pH * turbidity`, each factor a
/// suitability in roughly `[0, 1]`, with a logistic penalty when oxygen
/// drops below 2.
pub fn plankton_growth_rate(state: &DerivedState) -> f64 {
    let mut growth = PLANKTON_MAX_GROWTH
        * temperature_factor(state.ocean_temp)
        * nutrient_factor(state.nitrogen, state.phosphorus)
        * light_factor(state.sunlight_intensity)
        * ph_factor(state.ph)
        * turbidity_factor(state.turbidity);

    if state.oxygen < PLANKTON_HYPOXIA_OXYGEN {
        growth *= sigmoid(state.oxygen, PLANKTON_HYPOXIA_MIDPOINT, PLANKTON_HYPOXIA_STEEPNESS);
    }

    clamp_indicator(growth, 0.0, PERCENT)
}

pub fn temperature_factor(ocean_temp: f64) -> f64 {
    gaussian(ocean_temp, PLANKTON_OPTIMAL_TEMP_C, PLANKTON_TEMP_SPREAD_C)
}

/// Liebig's law of the minimum over nitrogen and phosphorus limitation.
pub fn nutrient_factor(nitrogen: f64, phosphorus: f64) -> f64 {
    michaelis_menten(nitrogen, NITROGEN_HALF_SATURATION)
        .min(michaelis_menten(phosphorus, PHOSPHORUS_HALF_SATURATION))
}

/// Rises with light, then falls off from photoinhibition; peaks at 25.
pub fn light_factor(sunlight: f64) -> f64 {
    (sunlight / PLANKTON_LIGHT_SCALE) * (-sunlight / PLANKTON_PHOTOINHIBITION).exp()
}

pub fn ph_factor(ph: f64) -> f64 {
    (-(ph - PREINDUSTRIAL_PH).powi(2) / PLANKTON_PH_VARIANCE).exp()
}

pub fn turbidity_factor(turbidity: f64) -> f64 {
    (-PLANKTON_TURBIDITY_DECAY * turbidity).exp()
}
