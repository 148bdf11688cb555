use std::{collections::HashMap, fmt, str::FromStr};

use anyhow::{anyhow, Context, Result};
use feast_stub::types::value::Val;
use serde::{Deserialize, Serialize};

/// A single feature value. Exactly one primitive payload is held at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    String(String),
    Int32(i32),
    Int64(i64),
    Double(f64),
    Bool(bool),
    Bytes(Vec<u8>),
}

/// One record destined for the feature store, keyed by feature name.
pub type Row = HashMap<String, Value>;

pub fn str_val(val: impl Into<String>) -> Value {
    Value::String(val.into())
}

pub fn int32_val(val: i32) -> Value {
    Value::Int32(val)
}

pub fn int64_val(val: i64) -> Value {
    Value::Int64(val)
}

pub fn double_val(val: f64) -> Value {
    Value::Double(val)
}

pub fn bool_val(val: bool) -> Value {
    Value::Bool(val)
}

pub fn bytes_val(val: impl Into<Vec<u8>>) -> Value {
    Value::Bytes(val.into())
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::String(_) => ValueType::STRING,
            Value::Int32(_) => ValueType::INT32,
            Value::Int64(_) => ValueType::INT64,
            Value::Double(_) => ValueType::DOUBLE,
            Value::Bool(_) => ValueType::BOOL,
            Value::Bytes(_) => ValueType::BYTES,
        }
    }
}

impl From<String> for Value {
    fn from(val: String) -> Self {
        str_val(val)
    }
}

impl From<&str> for Value {
    fn from(val: &str) -> Self {
        str_val(val)
    }
}

impl From<i32> for Value {
    fn from(val: i32) -> Self {
        int32_val(val)
    }
}

impl From<i64> for Value {
    fn from(val: i64) -> Self {
        int64_val(val)
    }
}

impl From<f64> for Value {
    fn from(val: f64) -> Self {
        double_val(val)
    }
}

impl From<bool> for Value {
    fn from(val: bool) -> Self {
        bool_val(val)
    }
}

impl From<Vec<u8>> for Value {
    fn from(val: Vec<u8>) -> Self {
        bytes_val(val)
    }
}

impl From<Value> for Val {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Val::StringVal(s),
            Value::Int32(i) => Val::Int32Val(i),
            Value::Int64(i) => Val::Int64Val(i),
            Value::Double(d) => Val::DoubleVal(d),
            Value::Bool(b) => Val::BoolVal(b),
            Value::Bytes(b) => Val::BytesVal(b),
        }
    }
}

impl From<Value> for feast_stub::types::Value {
    fn from(value: Value) -> Self {
        Self {
            val: Some(value.into()),
        }
    }
}

impl From<Val> for Value {
    fn from(val: Val) -> Self {
        match val {
            Val::StringVal(s) => Value::String(s),
            Val::Int32Val(i) => Value::Int32(i),
            Val::Int64Val(i) => Value::Int64(i),
            Val::DoubleVal(d) => Value::Double(d),
            Val::BoolVal(b) => Value::Bool(b),
            Val::BytesVal(b) => Value::Bytes(b),
        }
    }
}

impl TryFrom<feast_stub::types::Value> for Value {
    type Error = anyhow::Error;

    fn try_from(value: feast_stub::types::Value) -> Result<Self> {
        let val = value.val.ok_or_else(|| anyhow!("value has no variant set"))?;
        Ok(val.into())
    }
}

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ValueType {
    STRING,
    INT32,
    INT64,
    DOUBLE,
    BOOL,
    BYTES,
}

impl ValueType {
    pub fn matches(&self, value: &Val) -> bool {
        matches!(
            (self, value),
            (ValueType::STRING, Val::StringVal(_))
                | (ValueType::INT32, Val::Int32Val(_))
                | (ValueType::INT64, Val::Int64Val(_))
                | (ValueType::DOUBLE, Val::DoubleVal(_))
                | (ValueType::BOOL, Val::BoolVal(_))
                | (ValueType::BYTES, Val::BytesVal(_))
        )
    }

    /// Parses `raw` as a value of this type. Bytes are taken verbatim from the text.
    pub fn parse_value(&self, raw: &str) -> Result<Value> {
        let value = match self {
            ValueType::STRING => str_val(raw),
            ValueType::INT32 => int32_val(raw.parse().with_context(|| format!("{raw} as int32"))?),
            ValueType::INT64 => int64_val(raw.parse().with_context(|| format!("{raw} as int64"))?),
            ValueType::DOUBLE => {
                double_val(raw.parse().with_context(|| format!("{raw} as double"))?)
            }
            ValueType::BOOL => bool_val(raw.parse().with_context(|| format!("{raw} as bool"))?),
            ValueType::BYTES => bytes_val(raw.as_bytes()),
        };
        Ok(value)
    }
}

impl FromStr for ValueType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "string" => Ok(ValueType::STRING),
            "int32" => Ok(ValueType::INT32),
            "int64" => Ok(ValueType::INT64),
            "double" => Ok(ValueType::DOUBLE),
            "bool" => Ok(ValueType::BOOL),
            "bytes" => Ok(ValueType::BYTES),
            _ => Err(anyhow!("unknown value type: {}", s)),
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::STRING => "string",
            ValueType::INT32 => "int32",
            ValueType::INT64 => "int64",
            ValueType::DOUBLE => "double",
            ValueType::BOOL => "bool",
            ValueType::BYTES => "bytes",
        };
        f.write_str(name)
    }
}
