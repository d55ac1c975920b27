use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::thresholds::CategoryThresholds;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Sangat Baik")]
    SangatBaik,
    #[serde(rename = "Baik")]
    Baik,
    #[serde(rename = "Sedang")]
    Sedang,
    #[serde(rename = "Busuk")]
    Busuk,
    #[serde(rename = "Invalid")]
    Invalid,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::SangatBaik => "Sangat Baik",
            Category::Baik => "Baik",
            Category::Sedang => "Sedang",
            Category::Busuk => "Busuk",
            Category::Invalid => "Invalid",
        }
    }

    pub fn from_name(name: &str) -> Option<Category> {
        category_order().iter().copied().find(|c| c.name() == name)
    }

    pub fn from_score(score: f64, thresholds: &CategoryThresholds) -> Category {
        if score >= thresholds.sangat_baik_min {
            Category::SangatBaik
        } else if score >= thresholds.baik_min {
            Category::Baik
        } else if score >= thresholds.sedang_min {
            Category::Sedang
        } else {
            Category::Busuk
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn category_order() -> &'static [Category] {
    &[
        Category::SangatBaik,
        Category::Baik,
        Category::Sedang,
        Category::Busuk,
        Category::Invalid,
    ]
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/category.rs"]
mod tests;
