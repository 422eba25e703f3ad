use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Domain category an item is weighted by (task priority).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    High,
    Medium,
    Low,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::High, Category::Medium, Category::Low];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::High => "high",
            Category::Medium => "medium",
            Category::Low => "low",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category '{0}' (expected high, medium or low)")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Category::High),
            "medium" => Ok(Category::Medium),
            "low" => Ok(Category::Low),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}

/// Category → weight mapping, owned and supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightTable {
    pub high: f64,
    pub medium: f64,
    pub low: f64,
}

impl Default for WeightTable {
    fn default() -> Self {
        Self {
            high: 3.0,
            medium: 2.0,
            low: 1.0,
        }
    }
}

impl WeightTable {
    pub fn weight(&self, category: Category) -> f64 {
        match category {
            Category::High => self.high,
            Category::Medium => self.medium,
            Category::Low => self.low,
        }
    }
}

/// Weight used by the layout for an item of the given category.
pub fn weight_from_category(category: Category, table: &WeightTable) -> f64 {
    table.weight(category)
}
