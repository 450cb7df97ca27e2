use crate::{core::Params, error::ClampResult, step::Step};

/// A value that is transformed in place and kept within fixed bounds.
///
/// The transformer owns its value: steps are always applied in a pipeline against one
/// logical quantity, so the intermediate state stays encapsulated. Callers that need to
/// run the same steps over many independent values, or branch on intermediate results,
/// can use [`Params::apply`] directly instead.
#[derive(Clone, Debug, PartialEq)]
pub struct Transformer {
    value: f64,
    params: Params,
}

impl Transformer {
    /// No validation is performed on bound ordering or on the coefficient.
    pub fn new(starting_value: f64, minimum: f64, maximum: f64, coefficient: f64) -> Self {
        Self::from_params(starting_value, Params::new(minimum, maximum, coefficient))
    }

    pub fn from_params(starting_value: f64, params: Params) -> Self {
        Self {
            value: starting_value,
            params,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn params(&self) -> Params {
        self.params
    }

    pub fn into_value(self) -> f64 {
        self.value
    }

    pub fn add_step(&mut self) {
        self.value = self.params.add(self.value);
    }

    pub fn multiply_step(&mut self) {
        self.value = self.params.multiply(self.value);
    }

    /// Raise the value to `-coefficient`. The value is unchanged on error.
    pub fn power_step(&mut self) -> ClampResult<()> {
        self.value = self.params.power(self.value)?;
        Ok(())
    }

    pub fn compound_step(&mut self) {
        self.multiply_step();
        self.add_step();
    }

    pub fn apply(&mut self, step: Step) -> ClampResult<()> {
        match step {
            Step::Add => self.add_step(),
            Step::Multiply => self.multiply_step(),
            Step::Power => self.power_step()?,
            Step::Compound => self.compound_step(),
        }
        tracing::trace!(%step, value = self.value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClampError;

    fn in_bounds(t: &Transformer) -> bool {
        let p = t.params();
        p.minimum <= t.value() && t.value() <= p.maximum
    }

    #[test]
    fn multiply_then_add() {
        let mut t = Transformer::new(2.0, 0.0, 100.0, 3.0);
        t.multiply_step();
        assert_eq!(t.value(), 6.0);
        t.add_step();
        assert_eq!(t.value(), 9.0);
    }

    #[test]
    fn multiply_clips_to_maximum() {
        let mut t = Transformer::new(2.0, 0.0, 5.0, 3.0);
        t.multiply_step();
        assert_eq!(t.value(), 5.0);
    }

    #[test]
    fn add_is_absorbed_at_bound() {
        let mut t = Transformer::new(5.0, 0.0, 5.0, 3.0);
        t.add_step();
        assert_eq!(t.value(), 5.0);

        let mut t = Transformer::new(2.0, 0.0, 5.0, 0.0);
        t.add_step();
        assert_eq!(t.value(), 2.0);

        let mut t = Transformer::new(2.0, 0.0, 5.0, 1.0);
        t.add_step();
        assert_ne!(t.value(), 2.0);
    }

    #[test]
    fn power_with_negative_coefficient() {
        let mut t = Transformer::new(4.0, 0.0, 100.0, -2.0);
        t.power_step().unwrap();
        assert_eq!(t.value(), 16.0);
    }

    #[test]
    fn power_error_leaves_value_untouched() {
        let mut t = Transformer::new(-4.0, -10.0, 10.0, 0.5);
        assert!(matches!(t.power_step(), Err(ClampError::Domain(_))));
        assert_eq!(t.value(), -4.0);

        let mut t = Transformer::new(0.0, -10.0, 10.0, 2.0);
        assert!(t.power_step().is_err());
        assert_eq!(t.value(), 0.0);
    }

    #[test]
    fn compound_matches_sequential_steps() {
        for v in [-3.0, 0.0, 0.5, 2.0, 9.0] {
            let mut a = Transformer::new(v, -10.0, 10.0, 1.5);
            let mut b = a.clone();
            a.compound_step();
            b.multiply_step();
            b.add_step();
            assert_eq!(a.value(), b.value());
        }
    }

    #[test]
    fn every_step_stays_in_bounds() {
        for coefficient in [-3.0, -0.5, 0.0, 0.5, 2.0, 7.0] {
            for step in Step::ALL {
                let mut t = Transformer::new(1.5, 0.25, 4.0, coefficient);
                t.apply(step).unwrap();
                assert!(in_bounds(&t), "{step} with {coefficient} -> {}", t.value());
            }
        }
    }

    #[test]
    fn apply_matches_stateless_params() {
        let params = Params::new(-5.0, 5.0, 2.0);
        for step in Step::ALL {
            let mut t = Transformer::from_params(1.25, params);
            t.apply(step).unwrap();
            assert_eq!(t.value(), params.apply(step, 1.25).unwrap());
        }
    }

    #[test]
    fn infinite_bounds_let_overflow_through() {
        let mut t = Transformer::new(f64::MAX, f64::NEG_INFINITY, f64::INFINITY, 2.0);
        t.multiply_step();
        assert_eq!(t.into_value(), f64::INFINITY);
    }
}
