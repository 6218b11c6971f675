use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use ordered_float::OrderedFloat;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

#[must_use]
pub fn datetime_to_unix_millis(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64
}

/// A value in data space: a number (linear and time scales) or a category.
///
/// Numbers compare through a total order so values can key hash maps and
/// band-scale lookups. The empty text value is never mapped to geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DomainValue {
    Number(f64),
    Text(String),
}

impl DomainValue {
    /// Builds a time-domain value (unix milliseconds).
    #[must_use]
    pub fn from_time(time: DateTime<Utc>) -> Self {
        DomainValue::Number(datetime_to_unix_millis(time))
    }

    pub fn from_decimal(value: Decimal) -> ChartResult<Self> {
        Ok(DomainValue::Number(decimal_to_f64(value, "domain value")?))
    }

    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            DomainValue::Number(value) => Some(*value),
            DomainValue::Text(_) => None,
        }
    }

    #[must_use]
    pub fn is_empty_text(&self) -> bool {
        matches!(self, DomainValue::Text(text) if text.is_empty())
    }
}

impl PartialEq for DomainValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (DomainValue::Number(lhs), DomainValue::Number(rhs)) => {
                OrderedFloat(*lhs) == OrderedFloat(*rhs)
            }
            (DomainValue::Text(lhs), DomainValue::Text(rhs)) => lhs == rhs,
            _ => false,
        }
    }
}

impl Eq for DomainValue {}

impl Hash for DomainValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            DomainValue::Number(value) => {
                0u8.hash(state);
                OrderedFloat(*value).hash(state);
            }
            DomainValue::Text(text) => {
                1u8.hash(state);
                text.hash(state);
            }
        }
    }
}

impl fmt::Display for DomainValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // `f64` display already drops a trailing `.0`.
            DomainValue::Number(value) => write!(f, "{value}"),
            DomainValue::Text(text) => f.write_str(text),
        }
    }
}

impl From<f64> for DomainValue {
    fn from(value: f64) -> Self {
        DomainValue::Number(value)
    }
}

impl From<i32> for DomainValue {
    fn from(value: i32) -> Self {
        DomainValue::Number(f64::from(value))
    }
}

impl From<&str> for DomainValue {
    fn from(value: &str) -> Self {
        DomainValue::Text(value.to_owned())
    }
}

impl From<String> for DomainValue {
    fn from(value: String) -> Self {
        DomainValue::Text(value)
    }
}

impl From<DateTime<Utc>> for DomainValue {
    fn from(time: DateTime<Utc>) -> Self {
        DomainValue::from_time(time)
    }
}
