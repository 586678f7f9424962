use crate::constants::*;
use crate::derived::{DerivedState, derive_conditions};
use crate::indicators::IndicatorSet;
use crate::math_utils::finite_signal;
use crate::models::{
    algal_bloom_risk, coral_health, dead_zone_area, fish_population, marine_mammal_population,
    plankton_growth_rate, seagrass_coverage,
};
use crate::parameters::ParameterVector;
use crate::sink::{OutputSink, SinkHandle};

/// Run the full pipeline on one parameter vector.
///
/// Pure: the same parameters always give bit-identical indicators, and
/// `params` is only read.
pub fn compute_indicators(params: &ParameterVector) -> IndicatorSet {
    indicators_from_derived(&derive_conditions(params))
}

/// Every indicator for an already derived state.
///
/// Fish depend on plankton and marine mammals on fish, so those three run in
/// that order; the rest are independent.
pub fn indicators_from_derived(state: &DerivedState) -> IndicatorSet {
    let plankton = plankton_growth_rate(state);
    let fish = fish_population(state, plankton);
    let coral = coral_health(state);
    let sea_grass = seagrass_coverage(state);
    let algal_bloom = algal_bloom_risk(state);
    let oil = oil_impact(state);
    let runoff = runoff_impact(state);
    let mammals = marine_mammal_population(state, fish);
    let dead_zone = dead_zone_area(state);

    IndicatorSet {
        plankton_growth_rate: plankton,
        fish_population: fish,
        coral_health: coral,
        sea_grass_coverage: sea_grass,
        algal_bloom_risk: algal_bloom,
        oil_impact: oil,
        runoff_impact: runoff,
        ocean_acidification: reported_ph(state.ph),
        marine_mammals: mammals,
        deadzone_area: dead_zone,
    }
}

/// Oil spill impact proxy from boat traffic. Not capped at 100.
pub fn oil_impact(state: &DerivedState) -> f64 {
    finite_signal(state.boat_density_factor().powf(OIL_IMPACT_EXPONENT) * PERCENT)
}

/// Nutrient runoff impact proxy. Not capped at 100.
pub fn runoff_impact(state: &DerivedState) -> f64 {
    finite_signal(
        (state.total_nutrients() / RUNOFF_NUTRIENT_SCALE).powf(RUNOFF_IMPACT_EXPONENT) * PERCENT,
    )
}

/// Derived pH is finite for any finite CO2; a non-finite CO2 reading is
/// reported at the nearest finite value, or the pre-industrial pH for NaN.
fn reported_ph(ph: f64) -> f64 {
    if ph.is_finite() {
        return ph;
    }
    tracing::warn!(target: "marine_eco::simulation", ph, "simulation.non_finite_ph");
    if ph.is_nan() {
        PREINDUSTRIAL_PH
    } else {
        ph.clamp(f64::MIN, f64::MAX)
    }
}

/// Owns the output sinks and feeds them on every tick.
///
/// Holds no ecosystem state: each tick reads the caller's parameter vector
/// and computes everything afresh.
pub struct Simulation {
    pub name: String,
    sinks: Vec<SinkHandle>,
    ticks: u64,
}

pub struct SimProps {
    pub name: &'static str,
    pub sinks: Vec<SinkHandle>,
}

impl Simulation {
    pub fn new(props: SimProps) -> Simulation {
        Simulation {
            name: props.name.to_string(),
            sinks: props.sinks,
            ticks: 0,
        }
    }

    pub fn add_sink(&mut self, handle: SinkHandle) {
        self.sinks.push(handle);
    }

    pub fn sink_names(&self) -> Vec<&str> {
        self.sinks.iter().map(|handle| handle.sink.name()).collect()
    }

    /// Number of indicator sets produced so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Compute indicators for `params` and report them to every sink.
    pub fn tick(&mut self, params: &ParameterVector) -> IndicatorSet {
        let indicators = self.compute(params);
        for handle in &mut self.sinks {
            handle.report(&indicators);
        }
        indicators
    }

    /// Compute indicators and report them to `sinks` instead of the owned ones.
    pub fn tick_with_sinks(
        &mut self,
        params: &ParameterVector,
        sinks: &mut [&mut dyn OutputSink],
    ) -> IndicatorSet {
        let indicators = self.compute(params);
        for sink in sinks {
            sink.report(&indicators);
        }
        indicators
    }

    fn compute(&mut self, params: &ParameterVector) -> IndicatorSet {
        let derived = derive_conditions(params);
        let indicators = indicators_from_derived(&derived);
        self.ticks += 1;

        tracing::debug!(
            target: "marine_eco::simulation",
            simulation = %self.name,
            tick = self.ticks,
            oxygen = derived.oxygen,
            turbidity = derived.turbidity,
            ph = derived.ph,
            plankton = indicators.plankton_growth_rate,
            fish = indicators.fish_population,
            coral = indicators.coral_health,
            "simulation.tick"
        );

        let out_of_bounds = indicators.out_of_bounds();
        if !out_of_bounds.is_empty() {
            tracing::warn!(
                target: "marine_eco::simulation",
                simulation = %self.name,
                indicators = ?out_of_bounds,
                "simulation.indicator_out_of_bounds"
            );
        }

        indicators
    }
}
