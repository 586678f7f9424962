// Ecological indicator models. Each reads a DerivedState; fish and marine
// mammals also take the upstream population they feed on.
pub mod algal_bloom;
pub mod coral;
pub mod dead_zone;
pub mod fish;
pub mod marine_mammals;
pub mod plankton;
pub mod seagrass;

pub use algal_bloom::algal_bloom_risk;
pub use coral::coral_health;
pub use dead_zone::dead_zone_area;
pub use fish::fish_population;
pub use marine_mammals::marine_mammal_population;
pub use plankton::plankton_growth_rate;
pub use seagrass::seagrass_coverage;
