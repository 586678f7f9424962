// Output sinks receive every computed indicator set; rendering and display
// live here, never in the models.
pub mod console;
pub mod json;

pub use console::ConsoleSink;
pub use json::JsonSink;

use crate::indicators::{DisplayFormat, IndicatorKind, IndicatorSet};

pub trait OutputSink {
    /// The name of this sink (for identification in logs)
    fn name(&self) -> &str;

    /// Called with each freshly computed indicator set
    fn report(&mut self, indicators: &IndicatorSet);
}

pub struct SinkHandle {
    pub sink: Box<dyn OutputSink>,
}

impl SinkHandle {
    /// Create a new SinkHandle with the given sink
    pub fn new(sink: Box<dyn OutputSink>) -> Self {
        SinkHandle { sink }
    }

    /// Deliver an indicator set to the sink
    pub fn report(&mut self, indicators: &IndicatorSet) {
        self.sink.report(indicators);
    }
}

/// Render a value the way the indicator's catalogue entry asks for:
/// `16.7%`, `6,403 individuals`, `8.20`.
///
/// # Examples
/// ```
/// use marine_eco_rust::indicators::IndicatorKind;
/// use marine_eco_rust::sink::format_value;
///
/// assert_eq!(format_value(IndicatorKind::CoralHealth, 57.7328), "57.7%");
/// assert_eq!(format_value(IndicatorKind::FishPopulation, 6403.0), "6,403 individuals");
/// assert_eq!(format_value(IndicatorKind::OceanAcidification, 8.2), "8.20");
/// ```
pub fn format_value(kind: IndicatorKind, value: f64) -> String {
    let spec = kind.spec();
    match spec.format {
        DisplayFormat::Percent { decimals } => format!("{:.*}%", decimals, value),
        DisplayFormat::Count => format!("{} {}", group_thousands(value as u64), spec.unit),
        DisplayFormat::Scalar { decimals } => format!("{:.*}", decimals, value),
    }
}

/// `1234567` -> `"1,234,567"`
pub fn group_thousands(count: u64) -> String {
    let digits = count.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Every indicator as `(label, formatted value)` in report order.
pub fn formatted_rows(indicators: &IndicatorSet) -> Vec<(&'static str, String)> {
    indicators
        .iter()
        .map(|(kind, value)| (kind.spec().label, format_value(kind, value)))
        .collect()
}
