// crates/eurostat-core/src/model/value.rs
use serde::Serialize;
use std::fmt;

/// A present observation. Missing observations are `None` at the cell level.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Text(String),
}

impl Value {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Type a column the way a delimited-text reader would: numeric when every
/// present value parses as a number, text otherwise.
pub(crate) fn infer_column(raw: Vec<Option<String>>) -> Vec<Option<Value>> {
    let numbers: Option<Vec<Option<f64>>> = raw
        .iter()
        .map(|cell| match cell {
            Some(s) => s.trim().parse::<f64>().ok().map(Some),
            None => Some(None),
        })
        .collect();

    match numbers {
        Some(numbers) => numbers.into_iter().map(|n| n.map(Value::Number)).collect(),
        None => raw.into_iter().map(|c| c.map(Value::Text)).collect(),
    }
}
