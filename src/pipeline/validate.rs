use thiserror::Error;

use crate::model::params::{Parameter, ParameterRecord};
use crate::model::sample::ScoredSample;
use crate::model::thresholds::{EXCLUDED_RATING, RATING_MAX, RATING_MIN};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{} rating {value} is outside 1-9", .parameter.label())]
    OutOfRange { parameter: Parameter, value: i32 },
    #[error("{} rating 4 is not used by the grading standard", .parameter.label())]
    ExcludedValue { parameter: Parameter },
}

pub fn validate_record(params: &ParameterRecord) -> Result<(), ValidationError> {
    for (parameter, value) in params.present() {
        if !(RATING_MIN..=RATING_MAX).contains(&value) {
            return Err(ValidationError::OutOfRange { parameter, value });
        }
        if value == EXCLUDED_RATING {
            return Err(ValidationError::ExcludedValue { parameter });
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExcludedValues {
    pub parameters: Vec<Parameter>,
}

impl ExcludedValues {
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    pub fn message(&self) -> Option<String> {
        if self.parameters.is_empty() {
            return None;
        }
        let names = self
            .parameters
            .iter()
            .map(|p| p.label())
            .collect::<Vec<_>>()
            .join(", ");
        Some(format!(
            "Nilai {EXCLUDED_RATING} tidak digunakan dalam standar penilaian: {names}"
        ))
    }
}

pub fn find_excluded_values(sample: &ScoredSample) -> ExcludedValues {
    let parameters = sample
        .params()
        .present()
        .into_iter()
        .filter(|&(_, v)| v == EXCLUDED_RATING)
        .map(|(p, _)| p)
        .collect();
    ExcludedValues { parameters }
}

pub fn has_excluded_values(sample: &ScoredSample) -> bool {
    !find_excluded_values(sample).is_empty()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/validate.rs"]
mod tests;
