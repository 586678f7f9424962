// src/derived.rs - Derived environmental conditions
//
// Human activity, wave mixing, pollution and eutrophication feed back onto
// turbidity, oxygen, temperature and pH before any indicator is computed.

use crate::constants::*;
use crate::parameters::ParameterVector;
use serde::Serialize;
use std::ops::Deref;

/// A copy of the raw parameters with the feedback adjustments applied.
///
/// Built by [`derive_conditions`], so a model that takes a `&DerivedState`
/// is not handed unadjusted parameters by accident. Read the adjusted values
/// through `Deref` as if it were a [`ParameterVector`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DerivedState(ParameterVector);

impl Deref for DerivedState {
    type Target = ParameterVector;

    fn deref(&self) -> &ParameterVector {
        &self.0
    }
}

impl DerivedState {
    /// Wrap conditions that already carry the feedback adjustments, e.g. a
    /// state recorded from an earlier run. Does not adjust them again.
    pub fn from_conditions(conditions: ParameterVector) -> Self {
        DerivedState(conditions)
    }
}

/// Apply the feedback adjustments to a copy of `params`.
///
/// The steps run in order and later steps see earlier adjustments: oxygen
/// loss to pollution uses the pollution already raised by boat traffic.
/// Nothing is clamped here.
pub fn derive_conditions(params: &ParameterVector) -> DerivedState {
    let mut derived = *params;

    // boat traffic
    let boat_density = params.boat_density_factor();
    derived.turbidity += boat_density * BOAT_TURBIDITY_GAIN;
    derived.heavy_metal_pollution += boat_density * BOAT_HEAVY_METAL_GAIN;
    derived.plastic_pollution += boat_density * BOAT_PLASTIC_GAIN;

    if params.is_shallow() {
        derived.ocean_temp += boat_density * BOAT_SHALLOW_WARMING_C;
    }

    // wave mixing stirs sediment and aerates
    let wave_energy = params.wave_energy();
    derived.turbidity += wave_energy * WAVE_TURBIDITY_GAIN;
    derived.oxygen += wave_energy * WAVE_AERATION_GAIN;

    derived.oxygen -= derived.total_pollution();

    let excess_nutrients = excess_nutrients(params);
    derived.oxygen -= excess_nutrients * EUTROPHICATION_OXYGEN_LOSS;
    derived.turbidity += excess_nutrients * EUTROPHICATION_TURBIDITY_GAIN;

    derived.ph = acidified_ph(params.co2);

    DerivedState(derived)
}

/// Nutrient load above the eutrophication baselines, never negative.
pub fn excess_nutrients(params: &ParameterVector) -> f64 {
    ((params.nitrogen - NITROGEN_BASELINE) + (params.phosphorus - PHOSPHORUS_BASELINE)).max(0.0)
}

/// Seawater pH for a CO2 concentration, relative to the 400 ppm baseline.
///
/// Any positive reading follows the formula exactly. Zero, negative and NaN
/// readings are replaced by the smallest positive `f64` so the logarithm
/// stays finite.
///
/// # Examples
/// ```
/// use marine_eco_rust::derived::acidified_ph;
///
/// assert_eq!(acidified_ph(400.0), 8.2);
/// assert!((acidified_ph(800.0) - 7.8).abs() < 1e-12);
/// assert!(acidified_ph(0.0).is_finite());
/// ```
pub fn acidified_ph(co2_ppm: f64) -> f64 {
    let co2_ppm = if co2_ppm > 0.0 { co2_ppm } else { MIN_CO2_PPM };
    let ratio = co2_ppm / BASELINE_CO2_PPM;
    PREINDUSTRIAL_PH - ratio.log2() * PH_PER_CO2_DOUBLING
}
