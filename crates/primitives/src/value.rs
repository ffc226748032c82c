//! Table cell value type.

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// A single table cell: numeric or categorical.
#[derive(Debug, Clone, PartialEq, Display, From, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Numeric cell.
    #[display("{_0}")]
    Num(f64),
    /// Categorical cell.
    #[display("{_0}")]
    Str(String),
}

impl Value {
    /// Get the numeric value, if this cell is numeric.
    #[must_use]
    pub const fn as_num(&self) -> Option<f64> {
        match self {
            Self::Num(v) => Some(*v),
            Self::Str(_) => None,
        }
    }

    /// Get the categorical value, if this cell is categorical.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Num(_) => None,
            Self::Str(s) => Some(s),
        }
    }

    /// Returns whether this cell is numeric.
    #[must_use]
    pub const fn is_num(&self) -> bool {
        matches!(self, Self::Num(_))
    }

    /// Returns whether this cell is categorical.
    #[must_use]
    pub const fn is_str(&self) -> bool {
        matches!(self, Self::Str(_))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Num(v as f64)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Num(f64::from(v))
    }
}
