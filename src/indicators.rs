// src/indicators.rs - Indicator set produced by each simulation tick

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IndicatorKind {
    PlanktonGrowthRate,
    FishPopulation,
    CoralHealth,
    SeaGrassCoverage,
    AlgalBloomRisk,
    OilImpact,
    RunoffImpact,
    OceanAcidification,
    MarineMammals,
    DeadzoneArea,
}

impl IndicatorKind {
    pub const COUNT: usize = 10;

    /// Report order.
    pub const ALL: [IndicatorKind; Self::COUNT] = [
        IndicatorKind::PlanktonGrowthRate,
        IndicatorKind::FishPopulation,
        IndicatorKind::CoralHealth,
        IndicatorKind::SeaGrassCoverage,
        IndicatorKind::AlgalBloomRisk,
        IndicatorKind::OilImpact,
        IndicatorKind::RunoffImpact,
        IndicatorKind::OceanAcidification,
        IndicatorKind::MarineMammals,
        IndicatorKind::DeadzoneArea,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorKind::PlanktonGrowthRate => "planktonGrowthRate",
            IndicatorKind::FishPopulation => "fishPopulation",
            IndicatorKind::CoralHealth => "coralHealth",
            IndicatorKind::SeaGrassCoverage => "seaGrassCoverage",
            IndicatorKind::AlgalBloomRisk => "algalBloomRisk",
            IndicatorKind::OilImpact => "oilImpact",
            IndicatorKind::RunoffImpact => "runoffImpact",
            IndicatorKind::OceanAcidification => "oceanAcidification",
            IndicatorKind::MarineMammals => "marineMammals",
            IndicatorKind::DeadzoneArea => "deadzoneArea",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == key)
    }

    pub fn spec(&self) -> &'static IndicatorSpec {
        // every kind is inserted below
        &INDICATOR_CATALOGUE[self]
    }
}

/// How a sink should render an indicator value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayFormat {
    /// `12.3%`
    Percent { decimals: usize },
    /// `12,345 individuals`
    Count,
    /// `8.20`
    Scalar { decimals: usize },
}

/// Whether a larger value means a healthier ecosystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    HigherIsHealthier,
    LowerIsHealthier,
    /// pH: healthy inside a band, judged by the sink.
    Banded,
}

#[derive(Debug, Clone)]
pub struct IndicatorSpec {
    pub kind: IndicatorKind,
    pub label: &'static str,
    pub unit: &'static str,
    pub min: f64,
    /// `None` for indicators with no upper clamp.
    pub max: Option<f64>,
    pub format: DisplayFormat,
    pub polarity: Polarity,
}

impl IndicatorSpec {
    /// True when `value` is finite and inside the documented bounds.
    pub fn in_bounds(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && self.max.is_none_or(|max| value <= max)
    }
}

pub static INDICATOR_CATALOGUE: Lazy<HashMap<IndicatorKind, IndicatorSpec>> = Lazy::new(|| {
    use IndicatorKind::*;
    let percent = DisplayFormat::Percent { decimals: 1 };
    let bounded = (0.0, Some(100.0));
    let non_negative = (0.0, None);
    let mut m = HashMap::new();

    let mut insert = |kind: IndicatorKind,
                      label: &'static str,
                      unit: &'static str,
                      (min, max): (f64, Option<f64>),
                      format: DisplayFormat,
                      polarity: Polarity| {
        m.insert(kind, IndicatorSpec { kind, label, unit, min, max, format, polarity });
    };

    insert(PlanktonGrowthRate, "Plankton growth rate", "%", bounded, percent, Polarity::HigherIsHealthier);
    insert(FishPopulation, "Fish population", "individuals", non_negative, DisplayFormat::Count, Polarity::HigherIsHealthier);
    insert(CoralHealth, "Coral health", "%", bounded, percent, Polarity::HigherIsHealthier);
    insert(SeaGrassCoverage, "Seagrass coverage", "%", bounded, percent, Polarity::HigherIsHealthier);
    insert(AlgalBloomRisk, "Algal bloom risk", "%", bounded, percent, Polarity::LowerIsHealthier);
    insert(OilImpact, "Oil spill impact", "%", non_negative, percent, Polarity::LowerIsHealthier);
    insert(RunoffImpact, "Nutrient runoff impact", "%", non_negative, percent, Polarity::LowerIsHealthier);
    insert(OceanAcidification, "Ocean pH", "pH", (f64::MIN, None), DisplayFormat::Scalar { decimals: 2 }, Polarity::Banded);
    insert(MarineMammals, "Marine mammals", "individuals", non_negative, DisplayFormat::Count, Polarity::HigherIsHealthier);
    insert(DeadzoneArea, "Dead zone area", "%", bounded, percent, Polarity::LowerIsHealthier);

    m
});

/// Every indicator computed for one parameter vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSet {
    pub plankton_growth_rate: f64,
    pub fish_population: u64,
    pub coral_health: f64,
    pub sea_grass_coverage: f64,
    pub algal_bloom_risk: f64,
    pub oil_impact: f64,
    pub runoff_impact: f64,
    pub ocean_acidification: f64,
    pub marine_mammals: u64,
    pub deadzone_area: f64,
}

impl IndicatorSet {
    /// Value of one indicator; population counts are widened to `f64`.
    pub fn get(&self, kind: IndicatorKind) -> f64 {
        match kind {
            IndicatorKind::PlanktonGrowthRate => self.plankton_growth_rate,
            IndicatorKind::FishPopulation => self.fish_population as f64,
            IndicatorKind::CoralHealth => self.coral_health,
            IndicatorKind::SeaGrassCoverage => self.sea_grass_coverage,
            IndicatorKind::AlgalBloomRisk => self.algal_bloom_risk,
            IndicatorKind::OilImpact => self.oil_impact,
            IndicatorKind::RunoffImpact => self.runoff_impact,
            IndicatorKind::OceanAcidification => self.ocean_acidification,
            IndicatorKind::MarineMammals => self.marine_mammals as f64,
            IndicatorKind::DeadzoneArea => self.deadzone_area,
        }
    }

    pub fn get_by_key(&self, key: &str) -> Option<f64> {
        IndicatorKind::from_key(key).map(|kind| self.get(kind))
    }

    /// All indicators in report order.
    pub fn iter(&self) -> impl Iterator<Item = (IndicatorKind, f64)> + '_ {
        IndicatorKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }

    /// Name to value mapping keyed by the camelCase indicator names.
    pub fn to_map(&self) -> HashMap<&'static str, f64> {
        self.iter().map(|(kind, value)| (kind.as_str(), value)).collect()
    }

    /// Kinds whose value is non-finite or outside its documented bounds.
    pub fn out_of_bounds(&self) -> Vec<IndicatorKind> {
        self.iter()
            .filter(|(kind, value)| !kind.spec().in_bounds(*value))
            .map(|(kind, _)| kind)
            .collect()
    }
}
