use crate::error::{ClampError, ClampResult};

/// Restrict `x` to `[minimum, maximum]`.
///
/// Evaluated as `max(minimum, min(maximum, x))`. Unlike [`f64::clamp`] this never panics:
/// reversed bounds collapse to `minimum` and a NaN candidate collapses to `maximum`.
pub fn clamp(x: f64, minimum: f64, maximum: f64) -> f64 {
    minimum.max(maximum.min(x))
}

/// `base.powf(exponent)` with the real-exponent domain checks.
///
/// Only finite operands are checked; non-finite ones follow IEEE `powf`.
pub fn checked_pow(base: f64, exponent: f64) -> ClampResult<f64> {
    if base.is_finite() && exponent.is_finite() {
        if base < 0.0 && exponent.fract() != 0.0 {
            return Err(ClampError::domain(format!(
                "negative base {base} with non-integer exponent {exponent}"
            )));
        }
        if base == 0.0 && exponent < 0.0 {
            return Err(ClampError::domain(format!(
                "zero base with negative exponent {exponent}"
            )));
        }
    }
    Ok(base.powf(exponent))
}

/// The fixed parameters shared by every step.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Params {
    pub minimum: f64,
    pub maximum: f64,
    pub coefficient: f64,
}

impl Params {
    pub fn new(minimum: f64, maximum: f64, coefficient: f64) -> Self {
        Self {
            minimum,
            maximum,
            coefficient,
        }
    }

    pub fn clamp(&self, x: f64) -> f64 {
        let out = clamp(x, self.minimum, self.maximum);
        if out != x && !x.is_nan() {
            tracing::debug!(candidate = x, clamped = out, "clipped to bounds");
        }
        out
    }

    /// Strict check for callers that want well-formed bounds. The transformer itself never
    /// calls this.
    pub fn validate(&self) -> ClampResult<()> {
        if self.minimum.is_nan() || self.maximum.is_nan() || self.coefficient.is_nan() {
            return Err(ClampError::validation("parameters must not be NaN"));
        }
        if self.minimum > self.maximum {
            return Err(ClampError::validation(format!(
                "minimum {} is greater than maximum {}",
                self.minimum, self.maximum
            )));
        }
        Ok(())
    }
}
