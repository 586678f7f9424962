// src/models/marine_mammals.rs - Marine mammal population, fed by the fish stock

use crate::constants::*;
use crate::derived::DerivedState;
use crate::math_utils::floor_population;

/// Marine mammal head count for a given fish population.
///
/// One mammal per 75 fish, reduced by boat noise and bioaccumulated
/// pollution, and cut to a fifth in hypoxic water.
pub fn marine_mammal_population(state: &DerivedState, fish_population: u64) -> u64 {
    let carrying_capacity = fish_population as f64 / FISH_PER_MAMMAL;
    let noise_factor = (-MAMMAL_NOISE_DECAY * state.boats).exp();
    let pollution_factor = (-(state.plastic_pollution
        + state.heavy_metal_pollution * MAMMAL_HEAVY_METAL_WEIGHT))
        .exp();

    let mut population = carrying_capacity * noise_factor * pollution_factor;

    if state.oxygen < MAMMAL_HYPOXIA_OXYGEN {
        population *= MAMMAL_HYPOXIA_PENALTY;
    }

    floor_population(population)
}
