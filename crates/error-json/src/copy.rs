//! Deep copy of property values into owned JSON.
//!
//! Policy for values JSON cannot carry follows `JSON.stringify`:
//! `undefined` and functions are dropped from objects and become `null` in
//! arrays; non-finite numbers become `null`. Nested errors are serialized with
//! the same rules as the top-level error. Containers nested deeper than the
//! configured limit are replaced with `null`.

use crate::config::SerializerConfig;
use crate::serializer::serialize_at;
use crate::value::HostValue;
use serde_json::{Map, Number, Value};

const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Copies `value` with the default configuration. `None` means the value
/// has no JSON representation and should be omitted.
pub fn deep_copy(value: &HostValue) -> Option<Value> {
    deep_copy_with(value, &SerializerConfig::default())
}

pub fn deep_copy_with(value: &HostValue, config: &SerializerConfig) -> Option<Value> {
    copy_at(value, 0, config)
}

pub(crate) fn copy_at(value: &HostValue, depth: usize, config: &SerializerConfig) -> Option<Value> {
    let is_container = matches!(
        value,
        HostValue::Array(_) | HostValue::Object(_) | HostValue::Error(_)
    );
    if is_container && depth >= config.max_depth {
        tracing::warn!(
            depth,
            max_depth = config.max_depth,
            "property value nested too deeply; replaced with null"
        );
        return Some(Value::Null);
    }

    match value {
        HostValue::Undefined | HostValue::Function(_) => None,
        HostValue::Null => Some(Value::Null),
        HostValue::Bool(value) => Some(Value::Bool(*value)),
        HostValue::Number(value) => Some(number_to_json(*value)),
        HostValue::String(value) => Some(Value::String(value.clone())),
        HostValue::Array(items) => Some(Value::Array(
            items
                .iter()
                .map(|item| copy_at(item, depth + 1, config).unwrap_or(Value::Null))
                .collect(),
        )),
        HostValue::Object(members) => {
            let mut out = Map::new();
            for (key, member) in members {
                if let Some(copied) = copy_at(member, depth + 1, config) {
                    out.insert(key.clone(), copied);
                }
            }
            Some(Value::Object(out))
        }
        HostValue::Error(err) => Some(serialize_at(&**err, depth + 1, config).to_value()),
    }
}

pub(crate) fn number_to_json(value: f64) -> Value {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < I64_BOUND {
        return Value::from(value as i64);
    }
    Number::from_f64(value)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}
