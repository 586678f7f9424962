// Properties of the full parameters -> indicators pipeline that must hold for
// any finite input, plus directional checks on the main stressors.

use approx::assert_abs_diff_eq;
use marine_eco_rust::constants::*;
use marine_eco_rust::indicators::IndicatorKind;
use marine_eco_rust::math_utils::{gaussian, sigmoid};
use marine_eco_rust::models::coral::thermal_stress;
use marine_eco_rust::models::seagrass::{disturbance, light_at_depth};
use marine_eco_rust::simulation::{oil_impact, runoff_impact};
use marine_eco_rust::{IndicatorSet, ParameterVector, compute_indicators, derive_conditions};
use more_asserts::{assert_ge, assert_gt, assert_le, assert_lt};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const BOUNDED: [IndicatorKind; 5] = [
    IndicatorKind::PlanktonGrowthRate,
    IndicatorKind::CoralHealth,
    IndicatorKind::SeaGrassCoverage,
    IndicatorKind::AlgalBloomRisk,
    IndicatorKind::DeadzoneArea,
];

fn assert_reportable(set: &IndicatorSet, params: &ParameterVector) {
    for (kind, value) in set.iter() {
        assert!(value.is_finite(), "{} not finite for {:?}", kind.as_str(), params);
    }
    for kind in BOUNDED {
        let value = set.get(kind);
        assert_ge!(value, 0.0, "{} for {:?}", kind.as_str(), params);
        assert_le!(value, 100.0, "{} for {:?}", kind.as_str(), params);
    }
    assert_ge!(set.oil_impact, 0.0);
    assert_ge!(set.runoff_impact, 0.0);
    assert!(set.out_of_bounds().is_empty(), "{:?}", set.out_of_bounds());
}

fn random_params(rng: &mut StdRng, spread: f64) -> ParameterVector {
    let mut draw = || rng.random_range(-spread..spread);
    ParameterVector {
        ocean_temp: draw(),
        salinity: draw(),
        wave_height: draw(),
        wave_speed: draw(),
        depth: draw(),
        nitrogen: draw(),
        phosphorus: draw(),
        ph: draw(),
        oxygen: draw(),
        turbidity: draw(),
        sunlight_intensity: draw(),
        co2: draw(),
        plastic_pollution: draw(),
        heavy_metal_pollution: draw(),
        month: draw(),
        time_of_day: draw(),
        fishing_density: draw(),
        boats: draw(),
    }
}

#[test]
fn test_random_inputs_stay_reportable() {
    println!("🎲 Sweeping random parameter vectors");
    let mut rng = StdRng::seed_from_u64(0x5EA);

    for spread in [10.0, 1_000.0, 1.0e6, 1.0e150] {
        for _ in 0..500 {
            let params = random_params(&mut rng, spread);
            assert_reportable(&compute_indicators(&params), &params);
        }
    }
}

#[test]
fn test_realistic_inputs_stay_reportable() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..2_000 {
        let params = ParameterVector {
            ocean_temp: rng.random_range(-2.0..40.0),
            wave_height: rng.random_range(0.0..10.0),
            wave_speed: rng.random_range(0.0..20.0),
            depth: rng.random_range(0.0..5_000.0),
            nitrogen: rng.random_range(0.0..60.0),
            phosphorus: rng.random_range(0.0..6.0),
            oxygen: rng.random_range(0.0..12.0),
            turbidity: rng.random_range(0.0..100.0),
            sunlight_intensity: rng.random_range(0.0..100.0),
            co2: rng.random_range(200.0..2_000.0),
            plastic_pollution: rng.random_range(0.0..5.0),
            heavy_metal_pollution: rng.random_range(0.0..2.0),
            fishing_density: rng.random_range(0.0..100.0),
            boats: rng.random_range(0.0..500.0),
            ..ParameterVector::default()
        };
        let set = compute_indicators(&params);
        assert_reportable(&set, &params);
        assert_le!(set.fish_population, 15_000);
    }
}

#[test]
fn test_same_input_same_output() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..100 {
        let params = random_params(&mut rng, 100.0);
        let before = params;
        let first = compute_indicators(&params);
        let second = compute_indicators(&params);

        assert_eq!(params, before);
        for ((kind, a), (_, b)) in first.iter().zip(second.iter()) {
            assert_eq!(a.to_bits(), b.to_bits(), "{}", kind.as_str());
        }
    }
}

#[test]
fn test_default_scenario() {
    let set = compute_indicators(&ParameterVector::default());
    println!("📊 Default scenario: {:?}", set);

    assert_abs_diff_eq!(set.coral_health, 57.732805, epsilon = 1e-5);
    assert_abs_diff_eq!(set.deadzone_area, 21.831072, epsilon = 1e-5);
    assert_eq!(set.ocean_acidification, 8.2);
    // low oxygen starves the fish stock, and the mammals with it
    assert_eq!(set.fish_population, 0);
    assert_eq!(set.marine_mammals, 0);
}

#[test]
fn test_healthy_water_supports_fish_and_mammals() {
    let params = ParameterVector {
        ocean_temp: 18.0,
        oxygen: 6.0,
        nitrogen: 5.0,
        phosphorus: 0.5,
        sunlight_intensity: 25.0,
        boats: 5.0,
        fishing_density: 10.0,
        plastic_pollution: 0.1,
        heavy_metal_pollution: 0.0,
        ..ParameterVector::default()
    };
    let set = compute_indicators(&params);

    assert_abs_diff_eq!(set.plankton_growth_rate, 50.687, epsilon = 1e-2);
    assert_gt!(set.fish_population, 6_000);
    assert_lt!(set.fish_population, 7_000);
    assert_gt!(set.marine_mammals, 50);
    assert_lt!(set.marine_mammals, 75);
}

#[test]
fn test_clean_shallow_water_is_near_maximum() {
    let params = ParameterVector {
        ocean_temp: 26.0,
        oxygen: 8.0,
        nitrogen: 11.0,
        phosphorus: 1.0,
        plastic_pollution: 0.0,
        heavy_metal_pollution: 0.0,
        boats: 0.0,
        wave_height: 0.0,
        depth: 1.0,
        sunlight_intensity: 10.0,
        ..ParameterVector::default()
    };
    let set = compute_indicators(&params);

    assert_gt!(set.coral_health, 95.0);
    assert_gt!(set.sea_grass_coverage, 99.0);
    assert_eq!(set.oil_impact, 0.0);
}

#[test]
fn test_clean_water_reaches_the_default_site_ceiling() {
    let clean = ParameterVector {
        oxygen: 8.0,
        plastic_pollution: 0.0,
        heavy_metal_pollution: 0.0,
        ..ParameterVector::default()
    };
    let state = derive_conditions(&clean);
    let set = compute_indicators(&clean);
    assert_eq!(state.ph, 8.2);

    // cold stress at 20 °C caps coral; the default boats add a little sediment
    let coral_ceiling = CORAL_MAX_HEALTH - thermal_stress(clean.ocean_temp);
    assert_le!(set.coral_health, coral_ceiling);
    assert_lt!(coral_ceiling - set.coral_health, 1.0);

    // at 1000 m the meadow is light limited; no acid or heavy metal penalty applies
    let seagrass_ceiling = PERCENT
        * sigmoid(
            light_at_depth(clean.sunlight_intensity, clean.depth),
            SEAGRASS_LIGHT_MIDPOINT,
            SEAGRASS_LIGHT_STEEPNESS,
        )
        * gaussian(clean.nitrogen + clean.phosphorus, SEAGRASS_OPTIMAL_NUTRIENTS, SEAGRASS_NUTRIENT_SPREAD)
        * (-SEAGRASS_DISTURBANCE_DECAY * disturbance(&state)).exp();
    assert_abs_diff_eq!(set.sea_grass_coverage, seagrass_ceiling, epsilon = 1e-9);

    let polluted = compute_indicators(&ParameterVector::default());
    assert_gt!(set.coral_health, polluted.coral_health);
    assert_ge!(set.sea_grass_coverage, polluted.sea_grass_coverage);
}

#[test]
fn test_more_boats_more_damage() {
    let mut previous: Option<IndicatorSet> = None;

    for boats in (0..=500).step_by(25) {
        let params = ParameterVector {
            boats: boats as f64,
            oxygen: 6.0,
            ..ParameterVector::default()
        };
        let set = compute_indicators(&params);

        if let Some(prev) = previous {
            assert_gt!(set.oil_impact, prev.oil_impact);
            assert_le!(set.sea_grass_coverage, prev.sea_grass_coverage);
            assert_le!(set.coral_health, prev.coral_health);
            assert_le!(set.fish_population, prev.fish_population);
            assert_le!(set.marine_mammals, prev.marine_mammals);
        }
        previous = Some(set);
    }
}

#[test]
fn test_more_nutrients_more_eutrophication() {
    let mut previous: Option<IndicatorSet> = None;

    for step in 0..20 {
        let params = ParameterVector {
            nitrogen: 5.0 * step as f64,
            phosphorus: 1.0,
            ..ParameterVector::default()
        };
        let set = compute_indicators(&params);

        if let Some(prev) = previous {
            assert_gt!(set.runoff_impact, prev.runoff_impact);
            assert_ge!(set.algal_bloom_risk, prev.algal_bloom_risk);
            assert_ge!(set.deadzone_area, prev.deadzone_area);
        }
        previous = Some(set);
    }
}

#[test]
fn test_more_co2_lowers_ph() {
    let low = compute_indicators(&ParameterVector { co2: 280.0, ..ParameterVector::default() });
    let high = compute_indicators(&ParameterVector { co2: 1_000.0, ..ParameterVector::default() });

    assert_gt!(low.ocean_acidification, high.ocean_acidification);
    assert_ge!(low.coral_health, high.coral_health);
}

#[test]
fn test_zero_co2_is_finite() {
    let params = ParameterVector { co2: 0.0, ..ParameterVector::default() };
    let set = compute_indicators(&params);
    // zero stands in as the smallest positive f64
    let expected = 8.2 - (f64::MIN_POSITIVE / 400.0).log2() * 0.4;
    assert_abs_diff_eq!(set.ocean_acidification, expected, epsilon = 1e-9);
    assert_reportable(&set, &params);

    let negative = compute_indicators(&ParameterVector { co2: -50.0, ..ParameterVector::default() });
    assert_eq!(negative.ocean_acidification, set.ocean_acidification);
}

#[test]
fn test_sub_ppm_co2_follows_the_ph_formula() {
    let set = compute_indicators(&ParameterVector { co2: 0.5, ..ParameterVector::default() });
    let expected = 8.2 - (0.5f64 / 400.0).log2() * 0.4;
    assert_abs_diff_eq!(set.ocean_acidification, expected, epsilon = 1e-12);

    let one_ppm = compute_indicators(&ParameterVector { co2: 1.0, ..ParameterVector::default() });
    assert_gt!(set.ocean_acidification, one_ppm.ocean_acidification);
}

#[test]
fn test_extreme_pollution_saturates() {
    let params = ParameterVector {
        plastic_pollution: 1.0e300,
        heavy_metal_pollution: 1.0e300,
        ..ParameterVector::default()
    };
    let set = compute_indicators(&params);
    assert_reportable(&set, &params);

    assert_eq!(set.coral_health, 0.0);
    assert_eq!(set.deadzone_area, 100.0);
    assert_eq!(set.fish_population, 0);
    assert_eq!(set.marine_mammals, 0);
}

#[test]
fn test_proxies_follow_their_inputs() {
    let state = derive_conditions(&ParameterVector {
        boats: 50.0,
        nitrogen: 50.0,
        phosphorus: 10.0,
        ..ParameterVector::default()
    });
    assert_abs_diff_eq!(oil_impact(&state), 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(runoff_impact(&state), 100.0, epsilon = 1e-9);

    let set = compute_indicators(&ParameterVector { boats: 1.0e308, ..ParameterVector::default() });
    assert!(set.oil_impact.is_finite());
    assert_eq!(set.oil_impact, f64::MAX);
}

#[test]
fn test_boats_raise_derived_pollution() {
    let quiet = derive_conditions(&ParameterVector { boats: 10.0, ..ParameterVector::default() });
    let busy = derive_conditions(&ParameterVector { boats: 60.0, ..ParameterVector::default() });

    assert_gt!(busy.turbidity, quiet.turbidity);
    assert_gt!(busy.plastic_pollution, quiet.plastic_pollution);
    assert_gt!(busy.heavy_metal_pollution, quiet.heavy_metal_pollution);
}

#[test]
fn test_nitrogen_and_phosphorus_together_raise_bloom_and_dead_zone() {
    let mut previous: Option<IndicatorSet> = None;

    for step in 0..6 {
        let params = ParameterVector {
            nitrogen: 10.0 + 2.0 * step as f64,
            phosphorus: 1.0 + 0.2 * step as f64,
            ..ParameterVector::default()
        };
        let set = compute_indicators(&params);

        if let Some(prev) = previous {
            assert_gt!(set.algal_bloom_risk, prev.algal_bloom_risk);
            assert_gt!(set.deadzone_area, prev.deadzone_area);
        }
        previous = Some(set);
    }
}
