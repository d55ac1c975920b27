pub mod config;
pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;

pub use input::InputError;
pub use input::csv::{CsvImport, CsvImportOptions, IncompleteRowPolicy, from_csv, read_csv};
pub use model::category::Category;
pub use model::identity::{Clock, FixedClock, IdSource, RandomIds, SequentialIds, SystemClock};
pub use model::params::{Parameter, ParameterRecord};
pub use model::sample::{FieldValue, SampleField, ScoredSample};
pub use model::thresholds::{CategoryThresholds, ValidationPolicy};
pub use pipeline::best::{BestParameter, find_best_parameter};
pub use pipeline::score::{SampleNotes, Scorer, compute_score};
pub use pipeline::sort::sort_samples;
pub use pipeline::validate::{ExcludedValues, ValidationError, find_excluded_values};
pub use report::csv::{EncodeError, to_csv};
pub use report::summary::{SampleSummary, summarize};

#[cfg(test)]
#[path = "../tests/src_inline/support.rs"]
pub(crate) mod test_support;
