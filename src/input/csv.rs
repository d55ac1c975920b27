use std::io::Read;
use std::path::Path;

use crate::input::{InputError, open_maybe_gz};
use crate::model::params::ParameterRecord;
use crate::model::sample::{SampleField, ScoredSample};
use crate::model::thresholds::ValidationPolicy;
use crate::pipeline::score::{SampleNotes, Scorer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IncompleteRowPolicy {
    #[default]
    Drop,
    Reject,
    FillDefault(i32),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CsvImportOptions {
    pub on_incomplete: IncompleteRowPolicy,
    pub validation: ValidationPolicy,
}

#[derive(Debug, Clone, Default)]
pub struct CsvImport {
    pub samples: Vec<ScoredSample>,
    pub dropped_rows: usize,
    pub filled_rows: usize,
}

pub fn from_csv(
    text: &str,
    options: &CsvImportOptions,
    scorer: &Scorer<'_>,
) -> Result<CsvImport, InputError> {
    let mut records = split_records(text)?.into_iter();
    let Some((_, header)) = records.next() else {
        return Ok(CsvImport::default());
    };
    let columns = header
        .iter()
        .map(|h| SampleField::from_column(h.trim_start_matches('\u{feff}').trim()))
        .collect::<Vec<_>>();

    let mut out = CsvImport::default();
    for (line, fields) in records {
        let mut params = ParameterRecord::default();
        let mut notes = SampleNotes::default();
        let mut stored_score = None;

        for (idx, column) in columns.iter().enumerate() {
            let value = fields.get(idx).map(|s| s.as_str()).unwrap_or("");
            match column {
                SampleField::Param(p) => params.set(*p, parse_int_prefix(value)),
                SampleField::Score => stored_score = value.trim().parse::<f64>().ok(),
                SampleField::Id | SampleField::Category | SampleField::Timestamp => {}
                SampleField::FishName => notes.fish_name = non_empty(value),
                SampleField::AiResponse => notes.ai_response = non_empty(value),
                SampleField::Extra(name) => {
                    notes.extra.insert(name.clone(), value.to_string());
                }
            }
        }

        let missing = params.missing();
        if !missing.is_empty() {
            match options.on_incomplete {
                IncompleteRowPolicy::Drop => {
                    tracing::warn!(line, missing = missing.len(), "dropping incomplete row");
                    out.dropped_rows += 1;
                    continue;
                }
                IncompleteRowPolicy::Reject => {
                    return Err(InputError::IncompleteRow {
                        line,
                        missing: missing
                            .iter()
                            .map(|p| p.key())
                            .collect::<Vec<_>>()
                            .join(","),
                    });
                }
                IncompleteRowPolicy::FillDefault(value) => {
                    for p in missing {
                        params.set(p, Some(value));
                    }
                    out.filled_rows += 1;
                }
            }
        }

        let sample = scorer
            .score_checked(params, notes, options.validation)
            .map_err(|source| InputError::InvalidRow { line, source })?;
        if let Some(stored) = stored_score
            && stored != sample.score()
        {
            tracing::debug!(line, stored, recomputed = sample.score(), "stored score replaced");
        }
        out.samples.push(sample);
    }

    Ok(out)
}

pub fn read_csv(
    path: &Path,
    options: &CsvImportOptions,
    scorer: &Scorer<'_>,
) -> Result<CsvImport, InputError> {
    let mut reader = open_maybe_gz(path)?;
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let import = from_csv(&text, options, scorer)?;
    tracing::info!(
        path = %path.display(),
        samples = import.samples.len(),
        dropped = import.dropped_rows,
        filled = import.filled_rows,
        "imported samples"
    );
    Ok(import)
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

pub fn parse_int_prefix(value: &str) -> Option<i32> {
    let s = value.trim_start();
    let mut end = 0usize;
    for (i, c) in s.char_indices() {
        if c.is_ascii_digit() || (i == 0 && (c == '+' || c == '-')) {
            end = i + c.len_utf8();
        } else {
            break;
        }
    }
    s[..end].parse::<i32>().ok()
}

pub fn split_records(text: &str) -> Result<Vec<(usize, Vec<String>)>, InputError> {
    let mut records = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut line = 1usize;
    let mut record_line = 1usize;
    let mut in_quotes = false;
    let mut field_started = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push(c);
                }
                _ => field.push(c),
            }
            continue;
        }
        match c {
            '"' if !field_started => {
                in_quotes = true;
                field_started = true;
            }
            ',' => {
                fields.push(std::mem::take(&mut field));
                field_started = false;
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                fields.push(std::mem::take(&mut field));
                field_started = false;
                if !(fields.len() == 1 && fields[0].is_empty()) {
                    records.push((record_line, std::mem::take(&mut fields)));
                }
                fields.clear();
                line += 1;
                record_line = line;
            }
            _ => {
                field.push(c);
                field_started = true;
            }
        }
    }

    if in_quotes {
        return Err(InputError::Parse(format!(
            "unterminated quoted field starting on line {record_line}"
        )));
    }
    if field_started || !fields.is_empty() {
        fields.push(field);
        records.push((record_line, fields));
    }
    Ok(records)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/csv.rs"]
mod tests;
