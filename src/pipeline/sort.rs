use std::cmp::Ordering;

use crate::model::sample::{FieldValue, SampleField, ScoredSample};

pub fn sort_samples(
    samples: &[ScoredSample],
    field: &SampleField,
    ascending: bool,
) -> Vec<ScoredSample> {
    let mut keyed = samples
        .iter()
        .map(|s| (s.field(field), s))
        .collect::<Vec<_>>();
    keyed.sort_by(|(a, _), (b, _)| compare_values(a, b, ascending));
    keyed.into_iter().map(|(_, s)| s.clone()).collect()
}

// nulls first ascending, last descending; mismatched types compare equal
pub fn compare_values(a: &FieldValue, b: &FieldValue, ascending: bool) -> Ordering {
    let ord = match (a, b) {
        (FieldValue::Null, FieldValue::Null) => return Ordering::Equal,
        (FieldValue::Null, _) => {
            return if ascending {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }
        (_, FieldValue::Null) => {
            return if ascending {
                Ordering::Greater
            } else {
                Ordering::Less
            };
        }
        (FieldValue::Text(x), FieldValue::Text(y)) => x.cmp(y),
        (FieldValue::Number(x), FieldValue::Number(y)) => {
            x.partial_cmp(y).unwrap_or(Ordering::Equal)
        }
        _ => Ordering::Equal,
    };
    if ascending { ord } else { ord.reverse() }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/sort.rs"]
mod tests;
