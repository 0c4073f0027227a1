use crate::core::data::complex::Complex;

/// Magnitude `|z|` must exceed before a point counts as escaped. Far above the
/// usual radius of 2 so that the step counts spread into smoother bands.
pub const ESCAPE_RADIUS: f64 = 20_000.0;

pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

const ESCAPE_RADIUS_SQUARED: f64 = ESCAPE_RADIUS * ESCAPE_RADIUS;

/// Escape-time score of `x + yi`.
///
/// Returns the zero-based step at which `|z|` first exceeds
/// [`ESCAPE_RADIUS`], or `0.0` if it stays bounded for `max_iterations`
/// steps. A point escaping on the very first step also scores `0.0`, so it
/// is indistinguishable from an interior point.
#[must_use]
pub fn escape_score(x: f64, y: f64, max_iterations: u32) -> f64 {
    let c = Complex::new(x, y);
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        z = z.square() + c;
        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return f64::from(iteration);
        }
    }

    0.0
}
