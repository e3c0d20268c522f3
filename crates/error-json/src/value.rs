//! Dynamic value model for error properties.
//!
//! `HostValue` carries everything a dynamically typed host can attach to an
//! error, including values JSON cannot represent (`undefined`, `NaN`,
//! functions). The copier decides what to do with those.

use crate::object::DynError;
use serde_json::Value;
use std::fmt;

#[derive(Clone, Debug)]
pub enum HostValue {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<HostValue>),
    /// Plain object; members keep insertion order.
    Object(Vec<(String, HostValue)>),
    Function(Function),
    Error(Box<DynError>),
}

/// Opaque callable handle. Only its name is observable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Function {
    pub name: String,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl HostValue {
    pub fn object<K, I>(members: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, HostValue)>,
    {
        HostValue::Object(
            members
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }

    pub fn function(name: impl Into<String>) -> Self {
        HostValue::Function(Function::new(name))
    }

    /// Truthiness as a JS host evaluates it in a boolean context.
    pub fn is_truthy(&self) -> bool {
        match self {
            HostValue::Undefined | HostValue::Null => false,
            HostValue::Bool(value) => *value,
            HostValue::Number(value) => *value != 0.0 && !value.is_nan(),
            HostValue::String(value) => !value.is_empty(),
            HostValue::Array(_)
            | HostValue::Object(_)
            | HostValue::Function(_)
            | HostValue::Error(_) => true,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, HostValue::Error(_))
    }

    pub fn as_error(&self) -> Option<&DynError> {
        match self {
            HostValue::Error(err) => Some(err),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            HostValue::String(value) => Some(value),
            _ => None,
        }
    }

    /// Member lookup on a plain object. Returns `None` for any other variant.
    pub fn get(&self, key: &str) -> Option<&HostValue> {
        match self {
            HostValue::Object(members) => members
                .iter()
                .find(|(member, _)| member == key)
                .map(|(_, value)| value),
            _ => None,
        }
    }

    pub fn type_of(&self) -> &'static str {
        match self {
            HostValue::Undefined => "undefined",
            HostValue::Bool(_) => "boolean",
            HostValue::Number(_) => "number",
            HostValue::String(_) => "string",
            HostValue::Function(_) => "function",
            HostValue::Null | HostValue::Array(_) | HostValue::Object(_) | HostValue::Error(_) => {
                "object"
            }
        }
    }
}

fn format_number(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        f.write_str("NaN")
    } else if value.is_infinite() {
        f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" })
    } else if value == 0.0 {
        f.write_str("0")
    } else if value.abs() >= 1e21 || value.abs() < 1e-6 {
        let exponent = format!("{value:e}");
        match exponent.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                write!(f, "{mantissa}e+{power}")
            }
            _ => f.write_str(&exponent),
        }
    } else {
        write!(f, "{value}")
    }
}

/// Renders the value the way a JS host stringifies it for messages.
impl fmt::Display for HostValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostValue::Undefined => f.write_str("undefined"),
            HostValue::Null => f.write_str("null"),
            HostValue::Bool(value) => write!(f, "{value}"),
            HostValue::Number(value) => format_number(f, *value),
            HostValue::String(value) => f.write_str(value),
            HostValue::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(",")?;
                    }
                    if !matches!(item, HostValue::Undefined | HostValue::Null) {
                        write!(f, "{item}")?;
                    }
                }
                Ok(())
            }
            HostValue::Object(_) => f.write_str("[object Object]"),
            HostValue::Function(function) => write!(f, "function {}() {{}}", function.name),
            HostValue::Error(err) => write!(f, "{err}"),
        }
    }
}

impl From<bool> for HostValue {
    fn from(value: bool) -> Self {
        HostValue::Bool(value)
    }
}

impl From<f64> for HostValue {
    fn from(value: f64) -> Self {
        HostValue::Number(value)
    }
}

impl From<i32> for HostValue {
    fn from(value: i32) -> Self {
        HostValue::Number(f64::from(value))
    }
}

impl From<i64> for HostValue {
    fn from(value: i64) -> Self {
        HostValue::Number(value as f64)
    }
}

impl From<u32> for HostValue {
    fn from(value: u32) -> Self {
        HostValue::Number(f64::from(value))
    }
}

impl From<&str> for HostValue {
    fn from(value: &str) -> Self {
        HostValue::String(value.to_string())
    }
}

impl From<String> for HostValue {
    fn from(value: String) -> Self {
        HostValue::String(value)
    }
}

impl<T: Into<HostValue>> From<Vec<T>> for HostValue {
    fn from(items: Vec<T>) -> Self {
        HostValue::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<HostValue>> From<Option<T>> for HostValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(HostValue::Undefined)
    }
}

impl From<DynError> for HostValue {
    fn from(err: DynError) -> Self {
        HostValue::Error(Box::new(err))
    }
}

impl From<Function> for HostValue {
    fn from(function: Function) -> Self {
        HostValue::Function(function)
    }
}

impl From<Value> for HostValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => HostValue::Null,
            Value::Bool(value) => HostValue::Bool(value),
            Value::Number(number) => HostValue::Number(number.as_f64().unwrap_or(f64::NAN)),
            Value::String(value) => HostValue::String(value),
            Value::Array(items) => HostValue::Array(items.into_iter().map(Into::into).collect()),
            Value::Object(members) => HostValue::Object(
                members
                    .into_iter()
                    .map(|(key, value)| (key, value.into()))
                    .collect(),
            ),
        }
    }
}
