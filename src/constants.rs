// Default parameter vector (the reference baseline used by tests and the report binary)
pub const DEFAULT_OCEAN_TEMP_C: f64 = 20.0;
pub const DEFAULT_SALINITY_PPT: f64 = 35.0;
pub const DEFAULT_WAVE_HEIGHT_M: f64 = 1.0;
pub const DEFAULT_WAVE_SPEED: f64 = 5.0;
pub const DEFAULT_DEPTH_M: f64 = 1000.0;
pub const DEFAULT_NITROGEN: f64 = 10.0;
pub const DEFAULT_PHOSPHORUS: f64 = 1.0;
pub const DEFAULT_PH: f64 = 7.0;
pub const DEFAULT_OXYGEN: f64 = 1.0;
pub const DEFAULT_TURBIDITY: f64 = 1.0;
pub const DEFAULT_SUNLIGHT_INTENSITY: f64 = 1.0;
pub const DEFAULT_CO2_PPM: f64 = 400.0;
pub const DEFAULT_PLASTIC_POLLUTION: f64 = 0.5;
pub const DEFAULT_HEAVY_METAL_POLLUTION: f64 = 0.01;
pub const DEFAULT_MONTH: f64 = 6.0;
pub const DEFAULT_TIME_OF_DAY: f64 = 12.0;
pub const DEFAULT_FISHING_DENSITY: f64 = 20.0;
pub const DEFAULT_BOATS: f64 = 10.0;

// === Derived conditions ===

pub const BOATS_PER_DENSITY_UNIT: f64 = 50.0;
pub const BOAT_TURBIDITY_GAIN: f64 = 8.0;
pub const BOAT_HEAVY_METAL_GAIN: f64 = 0.05;
pub const BOAT_PLASTIC_GAIN: f64 = 0.1;
pub const SHALLOW_WATER_DEPTH_M: f64 = 50.0;
pub const BOAT_SHALLOW_WARMING_C: f64 = 0.5;

pub const WAVE_TURBIDITY_GAIN: f64 = 0.3;
pub const WAVE_AERATION_GAIN: f64 = 0.4;

// nutrient levels above these drive eutrophication
pub const NITROGEN_BASELINE: f64 = 5.0;
pub const PHOSPHORUS_BASELINE: f64 = 0.5;
pub const EUTROPHICATION_OXYGEN_LOSS: f64 = 0.3;
pub const EUTROPHICATION_TURBIDITY_GAIN: f64 = 0.2;

// doubling CO2 over the baseline lowers pH by PH_PER_CO2_DOUBLING
pub const PREINDUSTRIAL_PH: f64 = 8.2;
pub const BASELINE_CO2_PPM: f64 = 400.0;
pub const PH_PER_CO2_DOUBLING: f64 = 0.4;
pub const MIN_CO2_PPM: f64 = f64::MIN_POSITIVE; // stands in for co2 <= 0 and NaN

// === Plankton ===

pub const PLANKTON_MAX_GROWTH: f64 = 65.0;
pub const PLANKTON_OPTIMAL_TEMP_C: f64 = 18.0;
pub const PLANKTON_TEMP_SPREAD_C: f64 = 12.0;
pub const NITROGEN_HALF_SATURATION: f64 = 5.0;
pub const PHOSPHORUS_HALF_SATURATION: f64 = 0.5;
pub const PLANKTON_LIGHT_SCALE: f64 = 5.0;
pub const PLANKTON_PHOTOINHIBITION: f64 = 25.0;
pub const PLANKTON_PH_VARIANCE: f64 = 3.0;
pub const PLANKTON_TURBIDITY_DECAY: f64 = 0.05;
pub const PLANKTON_HYPOXIA_OXYGEN: f64 = 2.0;
pub const PLANKTON_HYPOXIA_MIDPOINT: f64 = 1.0;
pub const PLANKTON_HYPOXIA_STEEPNESS: f64 = 2.0;

// === Fish ===

pub const FISH_MAX_CARRYING_CAPACITY: f64 = 15000.0;
pub const FISHING_PRESSURE_SCALE: f64 = 150.0;
pub const PLASTIC_PRESSURE_SCALE: f64 = 8.0;
pub const HEAVY_METAL_PRESSURE_GAIN: f64 = 10.0;
pub const FISH_OPTIMAL_TEMP_C: f64 = 15.0;
pub const FISH_TEMP_SPREAD_C: f64 = 12.0;
pub const FISH_OXYGEN_MIDPOINT: f64 = 3.0;
pub const FISH_OXYGEN_STEEPNESS: f64 = 1.5;
pub const FISH_ANOXIA_OXYGEN: f64 = 1.0;
pub const FISH_ANOXIA_PENALTY: f64 = 0.1;
pub const FISH_PH_MIN: f64 = 6.0;
pub const FISH_PH_MAX: f64 = 9.0;
pub const FISH_PH_PENALTY: f64 = 0.2;

// === Coral ===

pub const CORAL_MAX_HEALTH: f64 = 100.0;
pub const CORAL_BLEACHING_TEMP_C: f64 = 29.0;
pub const CORAL_BLEACHING_BASE: f64 = 1.3;
pub const CORAL_BLEACHING_SCALE: f64 = 12.0;
pub const CORAL_COLD_TEMP_C: f64 = 23.0;
pub const CORAL_COLD_BASE: f64 = 1.2;
pub const CORAL_COLD_SCALE: f64 = 6.0;
pub const CORAL_ACIDIFICATION_PH: f64 = 7.8;
pub const CORAL_ACIDIFICATION_BASE: f64 = 1.5;
pub const CORAL_ACIDIFICATION_SCALE: f64 = 20.0;
pub const CORAL_HEAVY_METAL_WEIGHT: f64 = 8.0;
pub const CORAL_POLLUTION_EXPONENT: f64 = 1.3;
pub const CORAL_TURBIDITY_SCALE: f64 = 40.0;
pub const CORAL_TURBIDITY_DEPTH_M: f64 = 1000.0;
pub const CORAL_HYPOXIA_OXYGEN: f64 = 4.0;
pub const CORAL_HYPOXIA_SCALE: f64 = 3.0;
pub const CORAL_BOAT_DEPTH_M: f64 = 10.0;
pub const CORAL_BOAT_SCALE: f64 = 20.0;

// === Seagrass ===

pub const SEAGRASS_LIGHT_ATTENUATION: f64 = 0.15; // per m, Beer-Lambert
pub const SEAGRASS_LIGHT_MIDPOINT: f64 = 0.5;
pub const SEAGRASS_LIGHT_STEEPNESS: f64 = 3.0;
pub const SEAGRASS_OPTIMAL_NUTRIENTS: f64 = 12.0;
pub const SEAGRASS_NUTRIENT_SPREAD: f64 = 8.0;
pub const SEAGRASS_WAVE_DISTURBANCE_SCALE: f64 = 40.0;
pub const SEAGRASS_BOAT_DISTURBANCE_SCALE: f64 = 25.0;
pub const SEAGRASS_DISTURBANCE_DECAY: f64 = 0.15;
pub const SEAGRASS_ACID_PH: f64 = 7.0;
pub const SEAGRASS_ACID_PENALTY: f64 = 0.5;
pub const SEAGRASS_HEAVY_METAL_LIMIT: f64 = 0.5;
pub const SEAGRASS_HEAVY_METAL_PENALTY: f64 = 0.4;

// === Algal bloom & dead zone ===

pub const REFERENCE_WATER_TEMP_C: f64 = 20.0;
pub const WARMING_E_FOLD_C: f64 = 12.0;
pub const BLOOM_RISK_SCALE: f64 = 30.0;
pub const BLOOM_NUTRIENT_EXPONENT: f64 = 0.4;
pub const BLOOM_NUTRIENT_NORMALIZER: f64 = 12.0;
pub const BLOOM_TURBIDITY_SCALE: f64 = 15.0;
pub const BLOOM_OXYGENATED_LEVEL: f64 = 8.0;
pub const BLOOM_OXYGENATED_PENALTY: f64 = 0.7;
pub const BLOOM_DEEP_WATER_M: f64 = 100.0;
pub const BLOOM_DEEP_WATER_PENALTY: f64 = 0.5;

pub const DEAD_ZONE_HYPOXIA_OXYGEN: f64 = 2.0;
pub const DEAD_ZONE_DEPLETION_SCALE: f64 = 15.0;
pub const DEAD_ZONE_NUTRIENT_EXPONENT: f64 = 0.6;
pub const DEAD_ZONE_ROUGH_SEA_M: f64 = 2.0;
pub const DEAD_ZONE_ROUGH_SEA_PENALTY: f64 = 0.6;
pub const DEAD_ZONE_SHALLOW_PENALTY: f64 = 0.4;

// === Marine mammals ===

pub const FISH_PER_MAMMAL: f64 = 75.0;
pub const MAMMAL_NOISE_DECAY: f64 = 0.03; // per boat
pub const MAMMAL_HEAVY_METAL_WEIGHT: f64 = 15.0;
pub const MAMMAL_HYPOXIA_OXYGEN: f64 = 2.0;
pub const MAMMAL_HYPOXIA_PENALTY: f64 = 0.2;

// === Standalone proxies ===

pub const OIL_IMPACT_EXPONENT: f64 = 1.2;
pub const RUNOFF_NUTRIENT_SCALE: f64 = 60.0;
pub const RUNOFF_IMPACT_EXPONENT: f64 = 1.1;

pub const PERCENT: f64 = 100.0;
