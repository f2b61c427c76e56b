// src/domain/price.rs

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// A loosely typed cell as it comes off the page or out of the price cache.
/// Strict integer coercion happens only when rows are combined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
    #[default]
    Null,
    /// Booleans, arrays, objects: kept so a bad cell fails coercion loudly.
    Other(Value),
}

impl Scalar {
    /// Integer value, truncating floats toward zero. `None` for null,
    /// non-finite or non-numeric values.
    pub fn to_i64(&self) -> Option<i64> {
        match self {
            Scalar::Int(i) => Some(*i),
            Scalar::Float(f) => float_to_i64(*f),
            Scalar::Text(s) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().and_then(float_to_i64))
            }
            Scalar::Null | Scalar::Other(_) => None,
        }
    }
}

fn float_to_i64(f: f64) -> Option<i64> {
    if f.is_finite() && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Some(f.trunc() as i64)
    } else {
        None
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(i) => write!(f, "{i}"),
            Scalar::Float(x) => write!(f, "{x}"),
            Scalar::Text(s) => write!(f, "{s:?}"),
            Scalar::Null => write!(f, "null"),
            Scalar::Other(v) => write!(f, "{v}"),
        }
    }
}

/// One building's price statistics, one row of the price table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub buildingname: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub buildingaddress: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub region: String,
    #[serde(default)]
    pub medianpredprice: Scalar,
    #[serde(default)]
    pub transactionscount: Scalar,
    #[serde(default)]
    pub built: Scalar,
    #[serde(default)]
    pub numberofunits: Scalar,
    #[serde(default)]
    pub numberoffloors: Scalar,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub colour: Option<String>,
}

/// Text cells sometimes arrive as numbers; keep them as their JSON text.
fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_opt_string(deserializer)?.unwrap_or_default())
}
