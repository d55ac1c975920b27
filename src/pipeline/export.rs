use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::model::sample::ScoredSample;
use crate::model::thresholds::CategoryThresholds;
use crate::report::csv::{EncodeError, write_csv};
use crate::report::json::{ImportInfo, ToolInfo, render_samples_json, render_summary_json};
use crate::report::summary::summarize;
use crate::report::text::render_report_text;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ExportOptions {
    pub json_samples: bool,
}

pub fn write_reports(
    samples: &[ScoredSample],
    input: Option<&ImportInfo>,
    out_dir: &Path,
    thresholds: &CategoryThresholds,
    options: ExportOptions,
) -> Result<(), ReportError> {
    fs::create_dir_all(out_dir)?;

    if samples.is_empty() {
        tracing::warn!("no samples survived import; samples.csv not written");
    } else {
        write_csv(&out_dir.join("samples.csv"), samples)?;
    }

    let summary = summarize(samples);
    let json = render_summary_json(&ToolInfo::current(), input, &summary)?;
    write_text(&out_dir.join("summary.json"), &json)?;

    let report = render_report_text(&summary, input, thresholds);
    write_text(&out_dir.join("report.txt"), &report)?;

    if options.json_samples {
        let json = render_samples_json(samples)?;
        write_text(&out_dir.join("samples.json"), &json)?;
    }

    tracing::info!(out = %out_dir.display(), samples = samples.len(), "reports written");
    Ok(())
}

fn write_text(path: &Path, text: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(text.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/export.rs"]
mod tests;
