//! Float helpers shared by the pipeline stages.
//!
//! Transcendental functions go to `f64` methods with `std` and to `libm` without.

#[cfg(not(feature = "std"))]
use libm;

macro_rules! float_fn {
    ($($(#[$doc:meta])* $name:ident => $libm:ident;)*) => {$(
        $(#[$doc])*
        #[inline]
        pub fn $name(x: f64) -> f64 {
            #[cfg(feature = "std")]
            return x.$name();

            #[cfg(not(feature = "std"))]
            return libm::$libm(x);
        }
    )*};
}

float_fn! {
    /// Sine of an angle in radians.
    sin => sin;
    /// Cosine of an angle in radians.
    cos => cos;
    /// Tangent of an angle in radians.
    tan => tan;
    /// Arcsine in radians; NaN outside [-1, 1].
    asin => asin;
    /// Arccosine in radians; NaN outside [-1, 1].
    acos => acos;
    /// Largest integer value not above `x`.
    floor => floor;
    /// Nearest integer value, halfway cases away from zero.
    round => round;
}

/// Four-quadrant arctangent of `y / x`, in radians.
#[inline]
pub fn atan2(y: f64, x: f64) -> f64 {
    #[cfg(feature = "std")]
    return y.atan2(x);

    #[cfg(not(feature = "std"))]
    return libm::atan2(y, x);
}

/// `x * a + b` rounded once.
#[inline]
pub fn mul_add(x: f64, a: f64, b: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.mul_add(a, b);

    #[cfg(not(feature = "std"))]
    return libm::fma(x, a, b);
}

/// `x` to an integer power.
#[inline]
pub fn powi(x: f64, n: i32) -> f64 {
    #[cfg(feature = "std")]
    return x.powi(n);

    #[cfg(not(feature = "std"))]
    return libm::pow(x, f64::from(n));
}

/// Degrees to radians.
#[inline]
pub const fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Radians to degrees.
#[inline]
pub const fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Wraps a value into the half-open range [0, period).
pub fn normalize_to_period(value: f64, period: f64) -> f64 {
    let normalized = value % period;
    if normalized < 0.0 {
        // -1e-17 % 360 + 360 rounds to exactly 360
        let wrapped = normalized + period;
        if wrapped >= period { 0.0 } else { wrapped }
    } else {
        normalized
    }
}

/// Wraps an angle in degrees into [0, 360).
pub fn normalize_degrees_0_to_360(degrees: f64) -> f64 {
    normalize_to_period(degrees, 360.0)
}

/// Clamps an inverse-trigonometric argument into [-1, 1].
///
/// A NaN argument only arises from a 0/0 at degenerate geometry and is mapped to 1.
#[inline]
pub fn clamp_unit(x: f64) -> f64 {
    if x.is_nan() { 1.0 } else { x.clamp(-1.0, 1.0) }
}

/// `acos` of an argument that may overshoot [-1, 1] through rounding.
#[inline]
pub fn acos_clamped(x: f64) -> f64 {
    acos(clamp_unit(x))
}

/// `asin` of an argument that may overshoot [-1, 1] through rounding.
#[inline]
pub fn asin_clamped(x: f64) -> f64 {
    asin(clamp_unit(x))
}

/// Evaluates `c[0] + c[1]·x + c[2]·x² + …` by Horner's rule.
pub fn polynomial(coefficients: &[f64], x: f64) -> f64 {
    coefficients
        .iter()
        .rev()
        .copied()
        .reduce(|acc, c| mul_add(acc, x, c))
        .unwrap_or(0.0)
}
