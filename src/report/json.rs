use serde::Serialize;

use crate::model::sample::ScoredSample;
use crate::report::summary::SampleSummary;

#[derive(Debug, Clone, Serialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

impl ToolInfo {
    pub fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ImportInfo {
    pub source: String,
    pub dropped_rows: usize,
    pub filled_rows: usize,
    pub incomplete_policy: String,
    pub validation: String,
}

#[derive(Debug, Serialize)]
struct SummaryDocument<'a> {
    tool: &'a ToolInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    input: Option<&'a ImportInfo>,
    summary: &'a SampleSummary,
}

pub fn render_summary_json(
    tool: &ToolInfo,
    input: Option<&ImportInfo>,
    summary: &SampleSummary,
) -> serde_json::Result<String> {
    let doc = SummaryDocument {
        tool,
        input,
        summary,
    };
    let mut out = serde_json::to_string_pretty(&doc)?;
    out.push('\n');
    Ok(out)
}

pub fn render_samples_json(samples: &[ScoredSample]) -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(samples)?;
    out.push('\n');
    Ok(out)
}
