use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::model::sample::ScoredSample;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("cannot encode an empty sample collection")]
    EmptyInput,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub fn to_csv(samples: &[ScoredSample]) -> Result<String, EncodeError> {
    let first = samples.first().ok_or(EncodeError::EmptyInput)?;
    let columns = first.fields();

    let mut out = String::new();
    let header = columns
        .iter()
        .map(|c| escape_field(c.key()))
        .collect::<Vec<_>>()
        .join(",");
    out.push_str(&header);
    out.push('\n');

    for sample in samples {
        let row = columns
            .iter()
            .map(|c| escape_field(&sample.field(c).render()))
            .collect::<Vec<_>>()
            .join(",");
        out.push_str(&row);
        out.push('\n');
    }
    Ok(out)
}

pub fn write_csv(path: &Path, samples: &[ScoredSample]) -> Result<(), EncodeError> {
    let text = to_csv(samples)?;
    fs::write(path, text)?;
    Ok(())
}

pub fn escape_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/csv.rs"]
mod tests;
