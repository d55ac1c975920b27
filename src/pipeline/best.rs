use serde::Serialize;

use crate::model::params::{Parameter, parameter_order};
use crate::model::sample::ScoredSample;
use crate::pipeline::score::round2;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterAverage {
    pub parameter: Parameter,
    pub average: Option<f64>,
    pub n: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestParameter {
    pub parameter: Option<Parameter>,
    pub score: f64,
}

impl BestParameter {
    pub fn label(&self) -> &'static str {
        self.parameter.map(|p| p.label()).unwrap_or("")
    }
}

pub fn parameter_averages(samples: &[ScoredSample]) -> Vec<ParameterAverage> {
    let mut out = Vec::with_capacity(parameter_order().len());
    for &parameter in parameter_order() {
        let mut sum = 0.0f64;
        let mut n = 0usize;
        for sample in samples {
            if let Some(v) = sample.params().get(parameter) {
                sum += v as f64;
                n += 1;
            }
        }
        let average = if n > 0 { Some(sum / n as f64) } else { None };
        out.push(ParameterAverage {
            parameter,
            average,
            n,
        });
    }
    out
}

pub fn find_best_parameter(samples: &[ScoredSample]) -> BestParameter {
    let mut best: Option<(Parameter, f64)> = None;
    for avg in parameter_averages(samples) {
        let Some(value) = avg.average else {
            continue;
        };
        match best {
            Some((_, current)) if value <= current => {}
            _ => best = Some((avg.parameter, value)),
        }
    }
    match best {
        Some((parameter, value)) => BestParameter {
            parameter: Some(parameter),
            score: round2(value),
        },
        None => BestParameter {
            parameter: None,
            score: 0.0,
        },
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/best.rs"]
mod tests;
