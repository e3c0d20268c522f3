use crate::capability::ErrorValue;
use crate::classify::classify;
use crate::config::SerializerConfig;
use crate::copy::copy_at;
use crate::kind::ErrorKind;
use crate::value::HostValue;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// Keys whose presence is decided by the serializer itself. Residual
/// properties with these names are never copied.
pub const RESERVED_KEYS: [&str; 7] = [
    "type", "message", "name", "stack", "code", "errno", "syscall",
];

#[derive(Debug, thiserror::Error)]
pub enum SerializeError {
    #[error("invalid input argument. Must provide an error object. Value: `{0}`.")]
    InvalidArgument(String),

    #[error("JSON encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type SerializeResult<T> = Result<T, SerializeError>;

/// Plain-data form of an error.
///
/// Serializes as a JSON object with `type` and `message` first, then the
/// conditional fields that are present, then `extra` members in enumeration
/// order. `extra` members named like a reserved key are never emitted.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SerializedError {
    #[serde(rename = "type")]
    pub kind: ErrorKind,
    pub message: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub stack: Option<String>,
    #[serde(default)]
    pub code: Option<Value>,
    #[serde(default)]
    pub errno: Option<Value>,
    #[serde(default)]
    pub syscall: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SerializedError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            name: None,
            stack: None,
            code: None,
            errno: None,
            syscall: None,
            extra: Map::new(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.kind.as_str()
    }

    pub fn into_map(self) -> Map<String, Value> {
        let mut out = Map::new();
        out.insert("type".to_string(), Value::from(self.kind.as_str()));
        out.insert("message".to_string(), Value::String(self.message));
        if let Some(name) = self.name {
            out.insert("name".to_string(), Value::String(name));
        }
        if let Some(stack) = self.stack {
            out.insert("stack".to_string(), Value::String(stack));
        }
        if let Some(code) = self.code {
            out.insert("code".to_string(), code);
        }
        if let Some(errno) = self.errno {
            out.insert("errno".to_string(), errno);
        }
        if let Some(syscall) = self.syscall {
            out.insert("syscall".to_string(), Value::String(syscall));
        }
        for (key, value) in self.extra {
            if !is_reserved(&key) {
                out.insert(key, value);
            }
        }
        out
    }

    /// `extra` members that are emitted, in order.
    pub fn residual_fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.extra.iter().filter(|(key, _)| !is_reserved(key))
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.clone().into_map())
    }

    pub fn to_json_string(&self) -> SerializeResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_string_pretty(&self) -> SerializeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Serialize for SerializedError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", &self.kind)?;
        map.serialize_entry("message", &self.message)?;
        if let Some(name) = &self.name {
            map.serialize_entry("name", name)?;
        }
        if let Some(stack) = &self.stack {
            map.serialize_entry("stack", stack)?;
        }
        if let Some(code) = &self.code {
            map.serialize_entry("code", code)?;
        }
        if let Some(errno) = &self.errno {
            map.serialize_entry("errno", errno)?;
        }
        if let Some(syscall) = &self.syscall {
            map.serialize_entry("syscall", syscall)?;
        }
        for (key, value) in self.residual_fields() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

fn is_reserved(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}

impl From<SerializedError> for Value {
    fn from(serialized: SerializedError) -> Self {
        Value::Object(serialized.into_map())
    }
}

#[derive(Clone, Debug, Default)]
pub struct ErrorSerializer {
    config: SerializerConfig,
}

impl ErrorSerializer {
    pub fn new(config: SerializerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SerializerConfig {
        &self.config
    }

    pub fn serialize<E: ErrorValue + ?Sized>(&self, err: &E) -> SerializedError {
        serialize_at(err, 0, &self.config)
    }

    /// Dynamic entry point. Anything other than an error value is rejected.
    pub fn serialize_value(&self, value: &HostValue) -> SerializeResult<SerializedError> {
        match value {
            HostValue::Error(err) => Ok(self.serialize(&**err)),
            other => {
                tracing::debug!(
                    value_type = other.type_of(),
                    "rejected non-error value for serialization"
                );
                Err(SerializeError::InvalidArgument(other.to_string()))
            }
        }
    }
}

/// Serializes an error with the default configuration.
pub fn serialize<E: ErrorValue + ?Sized>(err: &E) -> SerializedError {
    ErrorSerializer::default().serialize(err)
}

/// Serializes a dynamic value, failing with
/// [`SerializeError::InvalidArgument`] when it is not an error.
pub fn serialize_value(value: &HostValue) -> SerializeResult<SerializedError> {
    ErrorSerializer::default().serialize_value(value)
}

pub(crate) fn serialize_at<E: ErrorValue + ?Sized>(
    err: &E,
    depth: usize,
    config: &SerializerConfig,
) -> SerializedError {
    let kind = classify(err);
    let mut out = SerializedError::new(kind, err.message());

    out.name = text_field(err.name());
    out.stack = text_field(err.stack());
    out.code = value_field(err.code(), depth, config);
    out.errno = value_field(err.errno(), depth, config);
    out.syscall = text_field(err.syscall());

    for (key, value) in err.own_enumerable_properties() {
        if is_reserved(&key) {
            continue;
        }
        if let Some(copied) = copy_at(&value, depth, config) {
            out.extra.insert(key, copied);
        }
    }

    tracing::trace!(
        error_type = kind.as_str(),
        extra_fields = out.extra.len(),
        depth,
        "serialized error"
    );
    out
}

fn text_field(value: HostValue) -> Option<String> {
    if !value.is_truthy() {
        return None;
    }
    match value {
        HostValue::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

fn value_field(value: HostValue, depth: usize, config: &SerializerConfig) -> Option<Value> {
    if !value.is_truthy() {
        return None;
    }
    copy_at(&value, depth, config)
}
