use serde::Serialize;

use crate::model::category::{Category, category_order};
use crate::model::sample::ScoredSample;
use crate::pipeline::best::{BestParameter, ParameterAverage, find_best_parameter, parameter_averages};
use crate::pipeline::score::round2;
use crate::pipeline::validate::has_excluded_values;

#[derive(Debug, Clone, Serialize)]
pub struct CategoryStat {
    pub category: Category,
    pub count: usize,
    pub fraction: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SampleSummary {
    pub n_samples: usize,
    pub n_valid: usize,
    pub categories: Vec<CategoryStat>,
    pub score_mean: Option<f64>,
    pub score_min: Option<f64>,
    pub score_max: Option<f64>,
    pub parameters: Vec<ParameterAverage>,
    pub best_parameter: BestParameter,
    pub excluded_value_samples: usize,
}

impl SampleSummary {
    pub fn count(&self, category: Category) -> usize {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.count)
            .unwrap_or(0)
    }

    pub fn dominant_category(&self) -> Option<Category> {
        let mut best: Option<&CategoryStat> = None;
        for stat in &self.categories {
            if stat.category == Category::Invalid || stat.count == 0 {
                continue;
            }
            if best.is_none_or(|b| stat.count > b.count) {
                best = Some(stat);
            }
        }
        best.map(|s| s.category)
    }
}

pub fn summarize(samples: &[ScoredSample]) -> SampleSummary {
    let n = samples.len();
    let categories = category_order()
        .iter()
        .map(|&category| {
            let count = samples.iter().filter(|s| s.category() == category).count();
            let fraction = if n > 0 { count as f64 / n as f64 } else { 0.0 };
            CategoryStat {
                category,
                count,
                fraction,
            }
        })
        .collect::<Vec<_>>();

    let valid_scores = samples
        .iter()
        .filter(|s| s.is_valid())
        .map(|s| s.score())
        .collect::<Vec<_>>();
    let (score_mean, score_min, score_max) = if valid_scores.is_empty() {
        (None, None, None)
    } else {
        let sum: f64 = valid_scores.iter().sum();
        let min = valid_scores.iter().copied().fold(f64::INFINITY, f64::min);
        let max = valid_scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        (
            Some(round2(sum / valid_scores.len() as f64)),
            Some(min),
            Some(max),
        )
    };

    SampleSummary {
        n_samples: n,
        n_valid: valid_scores.len(),
        categories,
        score_mean,
        score_min,
        score_max,
        parameters: parameter_averages(samples),
        best_parameter: find_best_parameter(samples),
        excluded_value_samples: samples.iter().filter(|s| has_excluded_values(s)).count(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/summary.rs"]
mod tests;
