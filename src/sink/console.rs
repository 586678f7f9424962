// src/sink/console.rs - Console output sink
// Prints every indicator with its label, coloured by health band.

use crate::indicators::{IndicatorKind, IndicatorSet, Polarity};
use crate::sink::{OutputSink, format_value};
use colored::{ColoredString, Colorize};

// percentage bands
const GOOD_PERCENT: f64 = 66.0;
const FAIR_PERCENT: f64 = 33.0;

// head-count bands; fish capacity tops out at 15,000
const GOOD_FISH: f64 = 5000.0;
const FAIR_FISH: f64 = 1000.0;
const GOOD_MAMMALS: f64 = 50.0;
const FAIR_MAMMALS: f64 = 10.0;

// pH bands around the pre-industrial 8.2
const GOOD_PH: (f64, f64) = (7.9, 8.4);
const FAIR_PH: (f64, f64) = (7.6, 8.7);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthBand {
    Good,
    Fair,
    Poor,
}

/// Classify an indicator value for display.
pub fn health_band(kind: IndicatorKind, value: f64) -> HealthBand {
    let (good, fair) = match kind {
        IndicatorKind::FishPopulation => (GOOD_FISH, FAIR_FISH),
        IndicatorKind::MarineMammals => (GOOD_MAMMALS, FAIR_MAMMALS),
        _ => (GOOD_PERCENT, FAIR_PERCENT),
    };

    match kind.spec().polarity {
        Polarity::HigherIsHealthier if value >= good => HealthBand::Good,
        Polarity::HigherIsHealthier if value >= fair => HealthBand::Fair,
        Polarity::HigherIsHealthier => HealthBand::Poor,
        // mirrored: a third of the way up is still good
        Polarity::LowerIsHealthier if value <= 100.0 - good => HealthBand::Good,
        Polarity::LowerIsHealthier if value <= 100.0 - fair => HealthBand::Fair,
        Polarity::LowerIsHealthier => HealthBand::Poor,
        Polarity::Banded if value >= GOOD_PH.0 && value <= GOOD_PH.1 => HealthBand::Good,
        Polarity::Banded if value >= FAIR_PH.0 && value <= FAIR_PH.1 => HealthBand::Fair,
        Polarity::Banded => HealthBand::Poor,
    }
}

pub struct ConsoleSink {
    pub title: String,
    pub use_color: bool,
    reports: usize,
}

impl ConsoleSink {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            use_color: true,
            reports: 0,
        }
    }

    pub fn plain(title: &str) -> Self {
        Self {
            use_color: false,
            ..Self::new(title)
        }
    }

    pub fn reports(&self) -> usize {
        self.reports
    }

    /// The lines `report` prints, without the trailing newline.
    pub fn render(&self, indicators: &IndicatorSet) -> Vec<String> {
        let mut lines = Vec::with_capacity(IndicatorKind::COUNT + 2);
        lines.push(format!("🌊 === {} ===", self.title));

        for (kind, value) in indicators.iter() {
            let text = format_value(kind, value);
            let shown = if self.use_color {
                paint(text, health_band(kind, value)).to_string()
            } else {
                text
            };
            lines.push(format!("  {:<24} {:>20}", kind.spec().label, shown));
        }

        lines.push(format!("🌊 === END {} ===", self.title));
        lines
    }
}

fn paint(text: String, band: HealthBand) -> ColoredString {
    match band {
        HealthBand::Good => text.green(),
        HealthBand::Fair => text.yellow(),
        HealthBand::Poor => text.red().bold(),
    }
}

impl OutputSink for ConsoleSink {
    fn name(&self) -> &str {
        "console"
    }

    fn report(&mut self, indicators: &IndicatorSet) {
        for line in self.render(indicators) {
            println!("{}", line);
        }
        self.reports += 1;
    }
}
