// src/math_utils.rs - Response curves shared by the ecosystem models
//
// Every curve here is total over finite inputs: nothing panics, and the
// logistic helper never overflows for extreme arguments.

/// Logistic curve centred on `midpoint`
///
/// `1 / (1 + exp(-steepness * (x - midpoint)))`, evaluated so that the
/// exponential is never taken of a large positive number. Saturates to
/// exactly 0.0 or 1.0 for extreme arguments.
///
/// # Examples
/// ```
/// use marine_eco_rust::math_utils::sigmoid;
///
/// assert_eq!(sigmoid(1.0, 1.0, 2.0), 0.5);
/// assert_eq!(sigmoid(-1.0e308, 0.0, 10.0), 0.0);
/// assert_eq!(sigmoid(1.0e308, 0.0, 10.0), 1.0);
/// ```
pub fn sigmoid(x: f64, midpoint: f64, steepness: f64) -> f64 {
    let z = steepness * (x - midpoint);
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

/// Gaussian suitability curve, 1.0 at `optimum`
///
/// # Arguments
/// * `x` - Observed value
/// * `optimum` - Value with full suitability
/// * `spread` - Standard deviation of the curve
pub fn gaussian(x: f64, optimum: f64, spread: f64) -> f64 {
    (-(x - optimum).powi(2) / (2.0 * spread.powi(2))).exp()
}

/// Michaelis-Menten limitation: approaches 1.0 as `concentration` grows,
/// 0.5 at the half-saturation constant.
///
/// # Examples
/// ```
/// use marine_eco_rust::math_utils::michaelis_menten;
///
/// assert_eq!(michaelis_menten(5.0, 5.0), 0.5);
/// ```
pub fn michaelis_menten(concentration: f64, half_saturation: f64) -> f64 {
    concentration / (concentration + half_saturation)
}

/// Clamp an indicator into `[min, max]`, reporting NaN as `min`.
///
/// `f64::clamp` passes NaN through; indicators must always be finite.
///
/// # Examples
/// ```
/// use marine_eco_rust::math_utils::clamp_indicator;
///
/// assert_eq!(clamp_indicator(150.0, 0.0, 100.0), 100.0);
/// assert_eq!(clamp_indicator(f64::NEG_INFINITY, 0.0, 100.0), 0.0);
/// assert_eq!(clamp_indicator(f64::NAN, 0.0, 100.0), 0.0);
/// ```
pub fn clamp_indicator(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

/// Floor a population estimate to a non-negative head count.
///
/// Negative and NaN estimates become 0; the float-to-integer cast saturates
/// at `u64::MAX` for infinite estimates.
pub fn floor_population(estimate: f64) -> u64 {
    estimate.max(0.0).floor() as u64
}

/// Keep an unbounded, non-negative stress signal finite.
///
/// NaN (e.g. a fractional power of a negative ratio) reads as no signal.
pub fn finite_signal(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, f64::MAX)
    }
}
