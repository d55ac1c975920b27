use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::category::Category;
use crate::model::params::{Parameter, ParameterRecord, parameter_order};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredSample {
    pub(crate) id: String,
    #[serde(flatten)]
    pub(crate) params: ParameterRecord,
    pub(crate) score: f64,
    pub(crate) category: Category,
    pub(crate) timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) fish_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) ai_response: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub(crate) extra: BTreeMap<String, String>,
}

impl ScoredSample {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn params(&self) -> &ParameterRecord {
        &self.params
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn fish_name(&self) -> Option<&str> {
        self.fish_name.as_deref()
    }

    pub fn ai_response(&self) -> Option<&str> {
        self.ai_response.as_deref()
    }

    pub fn extra(&self) -> &BTreeMap<String, String> {
        &self.extra
    }

    pub fn is_valid(&self) -> bool {
        self.category != Category::Invalid
    }

    pub fn field(&self, field: &SampleField) -> FieldValue {
        match field {
            SampleField::Id => FieldValue::Text(self.id.clone()),
            SampleField::Param(p) => match self.params.get(*p) {
                Some(v) => FieldValue::Number(v as f64),
                None => FieldValue::Null,
            },
            SampleField::Score => FieldValue::Number(self.score),
            SampleField::Category => FieldValue::Text(self.category.name().to_string()),
            SampleField::Timestamp => FieldValue::Text(format_timestamp(self.timestamp)),
            SampleField::FishName => text_or_null(self.fish_name.as_deref()),
            SampleField::AiResponse => text_or_null(self.ai_response.as_deref()),
            SampleField::Extra(name) => text_or_null(self.extra.get(name).map(|s| s.as_str())),
        }
    }

    pub fn fields(&self) -> Vec<SampleField> {
        let mut out = Vec::with_capacity(12 + self.extra.len());
        out.push(SampleField::Id);
        for &p in parameter_order() {
            out.push(SampleField::Param(p));
        }
        out.push(SampleField::Score);
        out.push(SampleField::Category);
        out.push(SampleField::Timestamp);
        out.push(SampleField::FishName);
        out.push(SampleField::AiResponse);
        for key in self.extra.keys() {
            out.push(SampleField::Extra(key.clone()));
        }
        out
    }
}

fn text_or_null(value: Option<&str>) -> FieldValue {
    match value {
        Some(s) => FieldValue::Text(s.to_string()),
        None => FieldValue::Null,
    }
}

pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SampleField {
    Id,
    Param(Parameter),
    Score,
    Category,
    Timestamp,
    FishName,
    AiResponse,
    Extra(String),
}

impl SampleField {
    pub fn key(&self) -> &str {
        match self {
            SampleField::Id => "id",
            SampleField::Param(p) => p.key(),
            SampleField::Score => "score",
            SampleField::Category => "category",
            SampleField::Timestamp => "timestamp",
            SampleField::FishName => "fishName",
            SampleField::AiResponse => "aiResponse",
            SampleField::Extra(name) => name,
        }
    }

    pub fn from_column(name: &str) -> SampleField {
        match name {
            "id" => SampleField::Id,
            "score" => SampleField::Score,
            "category" => SampleField::Category,
            "timestamp" => SampleField::Timestamp,
            "fishName" => SampleField::FishName,
            "aiResponse" => SampleField::AiResponse,
            other => match Parameter::from_key(other) {
                Some(p) => SampleField::Param(p),
                None => SampleField::Extra(other.to_string()),
            },
        }
    }
}

impl fmt::Display for SampleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown sample field: {0:?}")]
pub struct FieldParseError(pub String);

impl FromStr for SampleField {
    type Err = FieldParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match SampleField::from_column(s.trim()) {
            SampleField::Extra(name) => Err(FieldParseError(name)),
            field => Ok(field),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Number(f64),
    Text(String),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    pub fn render(&self) -> String {
        match self {
            FieldValue::Null => String::new(),
            FieldValue::Number(v) => v.to_string(),
            FieldValue::Text(s) => s.clone(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/sample.rs"]
mod tests;
