// src/parameters.rs - Raw environmental state read by the ecosystem models

use crate::constants::*;
use serde::{Deserialize, Serialize};

/// The raw environmental parameters of one stretch of ocean.
///
/// Owned by whoever edits it; the models only ever borrow it. No range checks
/// are applied: physically implausible values still produce bounded
/// indicators.
///
/// Serialised with the camelCase keys used by parameter files. Keys that are
/// missing from a document take their default value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ParameterVector {
    pub ocean_temp: f64, // °C
    pub salinity: f64,   // ppt
    pub wave_height: f64, // m
    pub wave_speed: f64,
    pub depth: f64, // m
    pub nitrogen: f64,
    pub phosphorus: f64,
    #[serde(rename = "pH")]
    pub ph: f64,
    pub oxygen: f64,
    pub turbidity: f64,
    pub sunlight_intensity: f64,
    pub co2: f64, // ppm
    pub plastic_pollution: f64,
    pub heavy_metal_pollution: f64,
    pub month: f64,
    pub time_of_day: f64,
    pub fishing_density: f64,
    pub boats: f64,
}

impl Default for ParameterVector {
    fn default() -> Self {
        Self {
            ocean_temp: DEFAULT_OCEAN_TEMP_C,
            salinity: DEFAULT_SALINITY_PPT,
            wave_height: DEFAULT_WAVE_HEIGHT_M,
            wave_speed: DEFAULT_WAVE_SPEED,
            depth: DEFAULT_DEPTH_M,
            nitrogen: DEFAULT_NITROGEN,
            phosphorus: DEFAULT_PHOSPHORUS,
            ph: DEFAULT_PH,
            oxygen: DEFAULT_OXYGEN,
            turbidity: DEFAULT_TURBIDITY,
            sunlight_intensity: DEFAULT_SUNLIGHT_INTENSITY,
            co2: DEFAULT_CO2_PPM,
            plastic_pollution: DEFAULT_PLASTIC_POLLUTION,
            heavy_metal_pollution: DEFAULT_HEAVY_METAL_POLLUTION,
            month: DEFAULT_MONTH,
            time_of_day: DEFAULT_TIME_OF_DAY,
            fishing_density: DEFAULT_FISHING_DENSITY,
            boats: DEFAULT_BOATS,
        }
    }
}

impl ParameterVector {
    pub const FIELD_COUNT: usize = 18;

    /// Every field paired with its serialised key, in declaration order.
    pub fn fields(&self) -> [(&'static str, f64); Self::FIELD_COUNT] {
        [
            ("oceanTemp", self.ocean_temp),
            ("salinity", self.salinity),
            ("waveHeight", self.wave_height),
            ("waveSpeed", self.wave_speed),
            ("depth", self.depth),
            ("nitrogen", self.nitrogen),
            ("phosphorus", self.phosphorus),
            ("pH", self.ph),
            ("oxygen", self.oxygen),
            ("turbidity", self.turbidity),
            ("sunlightIntensity", self.sunlight_intensity),
            ("co2", self.co2),
            ("plasticPollution", self.plastic_pollution),
            ("heavyMetalPollution", self.heavy_metal_pollution),
            ("month", self.month),
            ("timeOfDay", self.time_of_day),
            ("fishingDensity", self.fishing_density),
            ("boats", self.boats),
        ]
    }

    /// Fails on the first field that is NaN or infinite.
    ///
    /// The models do not call this; it is for callers that accept parameters
    /// from outside the program.
    pub fn check_finite(&self) -> Result<(), String> {
        match self.fields().iter().find(|(_, value)| !value.is_finite()) {
            Some((name, value)) => Err(format!("parameter {} is not finite: {}", name, value)),
            None => Ok(()),
        }
    }

    /// Boat traffic expressed in units of 50 boats.
    pub fn boat_density_factor(&self) -> f64 {
        self.boats / BOATS_PER_DENSITY_UNIT
    }

    pub fn wave_energy(&self) -> f64 {
        self.wave_height * self.wave_speed
    }

    pub fn total_nutrients(&self) -> f64 {
        self.nitrogen + self.phosphorus
    }

    /// Product of nitrogen and phosphorus, the co-limitation term used by the
    /// bloom and dead zone models.
    pub fn nutrient_product(&self) -> f64 {
        self.nitrogen * self.phosphorus
    }

    pub fn total_pollution(&self) -> f64 {
        self.plastic_pollution + self.heavy_metal_pollution
    }

    pub fn is_shallow(&self) -> bool {
        self.depth < SHALLOW_WATER_DEPTH_M
    }
}
