use std::path::Path;

use anyhow::Context as _;

use crate::{
    core::Params,
    error::{ClampError, ClampResult},
    step::Step,
    transformer::Transformer,
};

/// The fixed order the full sequence runs in. `Compound` performs another multiply and add.
pub const FULL_SEQUENCE: [Step; 4] = [Step::Multiply, Step::Add, Step::Power, Step::Compound];

/// On-disk input for one run of the full sequence.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SequenceInput {
    pub start: f64,
    pub minimum: f64,
    pub maximum: f64,
    pub coefficient: f64,
}

impl SequenceInput {
    pub fn params(&self) -> Params {
        Params::new(self.minimum, self.maximum, self.coefficient)
    }

    pub fn from_json_str(s: &str) -> ClampResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_path(path: &Path) -> ClampResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read sequence input '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    pub fn run(&self) -> ClampResult<f64> {
        run_full_sequence(self.start, self.minimum, self.maximum, self.coefficient)
    }

    pub fn run_traced(&self) -> ClampResult<SequenceTrace> {
        run_full_sequence_traced(self.start, self.minimum, self.maximum, self.coefficient)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct StepRecord {
    pub step: Step,
    pub value: f64, // value after the step
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SequenceTrace {
    pub start: f64,
    pub params: Params,
    pub steps: Vec<StepRecord>,
    pub value: f64,
}

/// Run [`FULL_SEQUENCE`] from `starting_value` and return the final value.
#[tracing::instrument]
pub fn run_full_sequence(
    starting_value: f64,
    minimum: f64,
    maximum: f64,
    coefficient: f64,
) -> ClampResult<f64> {
    let mut t = Transformer::new(starting_value, minimum, maximum, coefficient);
    for step in FULL_SEQUENCE {
        t.apply(step).map_err(|e| with_step(e, step))?;
    }
    Ok(t.into_value())
}

/// Same as [`run_full_sequence`], recording the value after each step.
#[tracing::instrument]
pub fn run_full_sequence_traced(
    starting_value: f64,
    minimum: f64,
    maximum: f64,
    coefficient: f64,
) -> ClampResult<SequenceTrace> {
    let params = Params::new(minimum, maximum, coefficient);
    let mut t = Transformer::from_params(starting_value, params);
    let mut steps = Vec::with_capacity(FULL_SEQUENCE.len());

    for step in FULL_SEQUENCE {
        t.apply(step).map_err(|e| with_step(e, step))?;
        steps.push(StepRecord {
            step,
            value: t.value(),
        });
    }

    Ok(SequenceTrace {
        start: starting_value,
        params,
        steps,
        value: t.into_value(),
    })
}

fn with_step(err: ClampError, step: Step) -> ClampError {
    match err {
        ClampError::Domain(msg) => ClampError::domain(format!("{step} step: {msg}")),
        other => other,
    }
}
