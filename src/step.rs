use crate::{
    core::{Params, checked_pow},
    error::ClampResult,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Add,
    Multiply,
    Power,
    Compound,
}

impl Step {
    pub const ALL: [Step; 4] = [Step::Add, Step::Multiply, Step::Power, Step::Compound];

    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Multiply => "multiply",
            Self::Power => "power",
            Self::Compound => "compound",
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Params {
    pub fn add(&self, value: f64) -> f64 {
        self.clamp(value + self.coefficient)
    }

    pub fn multiply(&self, value: f64) -> f64 {
        self.clamp(value * self.coefficient)
    }

    pub fn power(&self, value: f64) -> ClampResult<f64> {
        Ok(self.clamp(checked_pow(value, -self.coefficient)?))
    }

    pub fn compound(&self, value: f64) -> f64 {
        self.add(self.multiply(value))
    }

    /// Compute one step on an explicit value, without any state.
    pub fn apply(&self, step: Step, value: f64) -> ClampResult<f64> {
        match step {
            Step::Add => Ok(self.add(value)),
            Step::Multiply => Ok(self.multiply(value)),
            Step::Power => self.power(value),
            Step::Compound => Ok(self.compound(value)),
        }
    }
}
