use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::input::csv::{CsvImportOptions, IncompleteRowPolicy};
use crate::model::params::ParameterRecord;
use crate::model::sample::SampleField;
use crate::model::thresholds::{CategoryThresholds, ValidationPolicy};
use crate::pipeline::export::ExportOptions;

#[derive(Debug, Parser)]
#[command(name = "fishqc", version, about = "Fish freshness scoring from organoleptic ratings")]
pub struct Cli {
    /// Log filter used when RUST_LOG is unset.
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score a single set of ratings.
    Score(ScoreArgs),
    /// Import a CSV file, re-score it and write reports.
    Run(RunArgs),
    /// Print the parameter with the highest average rating in a CSV file.
    Best(BestArgs),
}

#[derive(Debug, Args)]
pub struct ScoreArgs {
    #[arg(long, allow_negative_numbers = true)]
    pub eye: Option<i32>,
    #[arg(long, allow_negative_numbers = true)]
    pub gills: Option<i32>,
    #[arg(long, allow_negative_numbers = true)]
    pub slime: Option<i32>,
    #[arg(long, allow_negative_numbers = true)]
    pub flesh: Option<i32>,
    #[arg(long, allow_negative_numbers = true)]
    pub odor: Option<i32>,
    #[arg(long, allow_negative_numbers = true)]
    pub texture: Option<i32>,
    #[arg(long)]
    pub fish_name: Option<String>,
    /// Reject ratings outside 1-9 and the unused rating 4.
    #[arg(long)]
    pub strict: bool,
    /// Print the scored sample as JSON.
    #[arg(long)]
    pub json: bool,
}

impl ScoreArgs {
    pub fn record(&self) -> ParameterRecord {
        ParameterRecord {
            eye: self.eye,
            gills: self.gills,
            slime: self.slime,
            flesh: self.flesh,
            odor: self.odor,
            texture: self.texture,
        }
    }

    pub fn validation(&self) -> ValidationPolicy {
        validation_policy(self.strict)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IncompleteArg {
    Drop,
    Reject,
    Fill,
}

#[derive(Debug, Clone, Args)]
pub struct ImportArgs {
    #[arg(long)]
    pub input: PathBuf,
    #[arg(long, value_enum, default_value_t = IncompleteArg::Drop)]
    pub on_incomplete: IncompleteArg,
    /// Rating used for missing parameters with `--on-incomplete fill`.
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub fill_value: i32,
    #[arg(long)]
    pub strict: bool,
    /// Lowest mean score graded "Sangat Baik".
    #[arg(long, default_value_t = 8.0)]
    pub min_sangat_baik: f64,
    /// Lowest mean score graded "Baik".
    #[arg(long, default_value_t = 6.0)]
    pub min_baik: f64,
    /// Lowest mean score graded "Sedang".
    #[arg(long, default_value_t = 4.0)]
    pub min_sedang: f64,
}

impl ImportArgs {
    pub fn thresholds(&self) -> Result<CategoryThresholds, String> {
        if !(self.min_sedang <= self.min_baik && self.min_baik <= self.min_sangat_baik) {
            return Err(format!(
                "category thresholds must be ordered: sedang {} <= baik {} <= sangat baik {}",
                self.min_sedang, self.min_baik, self.min_sangat_baik
            ));
        }
        Ok(CategoryThresholds {
            sangat_baik_min: self.min_sangat_baik,
            baik_min: self.min_baik,
            sedang_min: self.min_sedang,
        })
    }

    pub fn options(&self) -> CsvImportOptions {
        let on_incomplete = match self.on_incomplete {
            IncompleteArg::Drop => IncompleteRowPolicy::Drop,
            IncompleteArg::Reject => IncompleteRowPolicy::Reject,
            IncompleteArg::Fill => IncompleteRowPolicy::FillDefault(self.fill_value),
        };
        CsvImportOptions {
            on_incomplete,
            validation: validation_policy(self.strict),
        }
    }
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub import: ImportArgs,
    #[arg(long)]
    pub out: PathBuf,
    /// Field to order `samples.csv` by (e.g. score, flesh, fishName).
    #[arg(long)]
    pub sort_by: Option<SampleField>,
    #[arg(long)]
    pub descending: bool,
    /// Also write `samples.json`.
    #[arg(long)]
    pub json_samples: bool,
}

#[derive(Debug, Args)]
pub struct BestArgs {
    #[command(flatten)]
    pub import: ImportArgs,
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub out_dir: PathBuf,
    pub import: CsvImportOptions,
    pub thresholds: CategoryThresholds,
    pub sort: Option<(SampleField, bool)>,
    pub export: ExportOptions,
}

impl RunArgs {
    pub fn into_config(self) -> Result<RunConfig, String> {
        let import = self.import.options();
        let thresholds = self.import.thresholds()?;
        let ascending = !self.descending;
        Ok(RunConfig {
            input: self.import.input,
            out_dir: self.out,
            import,
            thresholds,
            sort: self.sort_by.map(|f| (f, ascending)),
            export: ExportOptions {
                json_samples: self.json_samples,
            },
        })
    }
}

pub fn validation_policy(strict: bool) -> ValidationPolicy {
    if strict {
        ValidationPolicy::Strict
    } else {
        ValidationPolicy::Permissive
    }
}

pub fn policy_name(policy: IncompleteRowPolicy) -> String {
    match policy {
        IncompleteRowPolicy::Drop => "drop".to_string(),
        IncompleteRowPolicy::Reject => "reject".to_string(),
        IncompleteRowPolicy::FillDefault(v) => format!("fill({v})"),
    }
}

pub fn validation_name(policy: ValidationPolicy) -> &'static str {
    match policy {
        ValidationPolicy::Permissive => "permissive",
        ValidationPolicy::Strict => "strict",
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/config.rs"]
mod tests;
