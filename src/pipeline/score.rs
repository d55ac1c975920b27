use std::collections::BTreeMap;

use crate::model::category::Category;
use crate::model::identity::{Clock, IdSource, RandomIds, SystemClock};
use crate::model::params::ParameterRecord;
use crate::model::sample::ScoredSample;
use crate::model::thresholds::{CategoryThresholds, ValidationPolicy};
use crate::pipeline::validate::{ValidationError, validate_record};

pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

pub fn compute_score(params: &ParameterRecord, thresholds: &CategoryThresholds) -> (f64, Category) {
    let present = params.present();
    if present.is_empty() {
        return (0.0, Category::Invalid);
    }
    let sum: f64 = present.iter().map(|&(_, v)| v as f64).sum();
    let score = round2(sum / present.len() as f64);
    (score, Category::from_score(score, thresholds))
}

#[derive(Debug, Clone, Default)]
pub struct SampleNotes {
    pub fish_name: Option<String>,
    pub ai_response: Option<String>,
    pub extra: BTreeMap<String, String>,
}

pub struct Scorer<'a> {
    clock: &'a dyn Clock,
    ids: &'a dyn IdSource,
    thresholds: CategoryThresholds,
}

static SYSTEM_CLOCK: SystemClock = SystemClock;
static RANDOM_IDS: RandomIds = RandomIds;

impl Scorer<'static> {
    pub fn system() -> Self {
        Scorer::new(&SYSTEM_CLOCK, &RANDOM_IDS, CategoryThresholds::standard_v1())
    }
}

impl<'a> Scorer<'a> {
    pub fn new(clock: &'a dyn Clock, ids: &'a dyn IdSource, thresholds: CategoryThresholds) -> Self {
        Self {
            clock,
            ids,
            thresholds,
        }
    }

    pub fn thresholds(&self) -> &CategoryThresholds {
        &self.thresholds
    }

    pub fn score(&self, params: ParameterRecord) -> ScoredSample {
        self.score_named(params, SampleNotes::default())
    }

    pub fn score_named(&self, params: ParameterRecord, notes: SampleNotes) -> ScoredSample {
        let (score, category) = compute_score(&params, &self.thresholds);
        let timestamp = self.clock.now();
        let id = self.ids.next_id(timestamp);
        tracing::debug!(%id, score, %category, "scored sample");
        ScoredSample {
            id,
            params,
            score,
            category,
            timestamp,
            fish_name: notes.fish_name.filter(|s| !s.is_empty()),
            ai_response: notes.ai_response.filter(|s| !s.is_empty()),
            extra: notes.extra,
        }
    }

    pub fn score_checked(
        &self,
        params: ParameterRecord,
        notes: SampleNotes,
        policy: ValidationPolicy,
    ) -> Result<ScoredSample, ValidationError> {
        if policy == ValidationPolicy::Strict {
            validate_record(&params)?;
        }
        Ok(self.score_named(params, notes))
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/score.rs"]
mod tests;
