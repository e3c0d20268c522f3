//! Dynamic error objects.
//!
//! `DynError` behaves like an error instance of a dynamically typed host: it
//! has a class chain, an own-property table holding data and accessor
//! properties, and an inherited `name`. `message` and `stack` live in the
//! table as non-enumerable own properties.

use crate::kind::{ErrorClass, ErrorKind};
use crate::value::HostValue;
use std::backtrace::Backtrace;
use std::fmt;
use std::sync::Arc;

pub type Getter = Arc<dyn Fn() -> HostValue + Send + Sync>;

#[derive(Clone)]
pub enum Property {
    Data(HostValue),
    /// Computed on every read.
    Accessor(Getter),
}

impl Property {
    pub fn get(&self) -> HostValue {
        match self {
            Property::Data(value) => value.clone(),
            Property::Accessor(getter) => getter(),
        }
    }
}

impl fmt::Debug for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Property::Data(value) => f.debug_tuple("Data").field(value).finish(),
            Property::Accessor(_) => f.write_str("Accessor(<getter>)"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct PropertyDescriptor {
    pub property: Property,
    pub enumerable: bool,
}

impl PropertyDescriptor {
    pub fn data(value: impl Into<HostValue>) -> Self {
        Self {
            property: Property::Data(value.into()),
            enumerable: true,
        }
    }

    pub fn hidden(value: impl Into<HostValue>) -> Self {
        Self {
            property: Property::Data(value.into()),
            enumerable: false,
        }
    }

    pub fn getter<F>(getter: F) -> Self
    where
        F: Fn() -> HostValue + Send + Sync + 'static,
    {
        Self {
            property: Property::Accessor(Arc::new(getter)),
            enumerable: true,
        }
    }

    pub fn enumerable(mut self, enumerable: bool) -> Self {
        self.enumerable = enumerable;
        self
    }
}

#[derive(Clone, Debug)]
pub struct DynError {
    chain: Vec<ErrorClass>,
    inherited_name: String,
    properties: Vec<(String, PropertyDescriptor)>,
}

impl DynError {
    /// Creates an error of a built-in kind and captures a stack trace.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        let mut err = Self::bare(kind, message);
        let stack = format!("{err}\n{}", Backtrace::force_capture());
        err.set("stack", stack);
        err
    }

    /// Creates an error of a built-in kind without a stack trace.
    pub fn bare(kind: ErrorKind, message: impl Into<String>) -> Self {
        let mut chain = vec![ErrorClass::BuiltIn(kind)];
        if kind != ErrorKind::Error {
            chain.push(ErrorClass::BuiltIn(ErrorKind::Error));
        }
        Self {
            chain,
            inherited_name: kind.as_str().to_string(),
            properties: vec![(
                "message".to_string(),
                PropertyDescriptor::hidden(message.into()),
            )],
        }
    }

    /// An error whose class chain reaches no built-in kind.
    pub fn detached(class_name: impl Into<String>, message: impl Into<String>) -> Self {
        let class_name = class_name.into();
        Self {
            chain: vec![ErrorClass::Custom(class_name.clone())],
            inherited_name: class_name,
            properties: vec![(
                "message".to_string(),
                PropertyDescriptor::hidden(message.into()),
            )],
        }
    }

    /// Builds an error from a Rust error, recording its `source()` chain as
    /// nested `cause` properties. I/O errors contribute `code` and `errno`.
    pub fn from_std(err: &(dyn std::error::Error + 'static)) -> Self {
        let mut out = Self::bare(ErrorKind::Error, err.to_string());
        if let Some(io_err) = err.downcast_ref::<std::io::Error>() {
            if let Some(code) = crate::capability::io_error_code(io_err) {
                out.set("code", code);
            }
            if let Some(errno) = io_err.raw_os_error() {
                out.set("errno", errno);
            }
        }
        if let Some(source) = err.source() {
            out.set("cause", Self::from_std(source));
        }
        out
    }

    /// Wraps the current class in a custom subclass. The inherited `name` is
    /// unchanged, as a subclass that does not override it would behave.
    pub fn extend(mut self, class_name: impl Into<String>) -> Self {
        self.chain.insert(0, ErrorClass::Custom(class_name.into()));
        self
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<HostValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn class_chain(&self) -> &[ErrorClass] {
        &self.chain
    }

    /// Assignment semantics: an existing own property keeps its
    /// enumerability, a new one is created enumerable.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<HostValue>) {
        let key = key.into();
        let value = value.into();
        match self.properties.iter_mut().find(|(name, _)| *name == key) {
            Some((_, descriptor)) => descriptor.property = Property::Data(value),
            None => self.properties.push((key, PropertyDescriptor::data(value))),
        }
    }

    /// Defines or replaces an own property with an explicit descriptor.
    pub fn define(&mut self, key: impl Into<String>, descriptor: PropertyDescriptor) {
        let key = key.into();
        match self.properties.iter_mut().find(|(name, _)| *name == key) {
            Some((_, existing)) => *existing = descriptor,
            None => self.properties.push((key, descriptor)),
        }
    }

    pub fn delete(&mut self, key: &str) -> bool {
        let before = self.properties.len();
        self.properties.retain(|(name, _)| name != key);
        before != self.properties.len()
    }

    pub fn has_own(&self, key: &str) -> bool {
        self.properties.iter().any(|(name, _)| name == key)
    }

    /// Property read: own properties first, then the inherited `name`.
    pub fn get(&self, key: &str) -> HostValue {
        if let Some((_, descriptor)) = self.properties.iter().find(|(name, _)| name == key) {
            return descriptor.property.get();
        }
        if key == "name" {
            return HostValue::String(self.inherited_name.clone());
        }
        HostValue::Undefined
    }

    pub fn own_enumerable_keys(&self) -> impl Iterator<Item = &str> {
        self.properties
            .iter()
            .filter(|(_, descriptor)| descriptor.enumerable)
            .map(|(name, _)| name.as_str())
    }

    /// Own enumerable properties in insertion order, with getters evaluated.
    pub fn own_enumerable_entries(&self) -> Vec<(String, HostValue)> {
        self.properties
            .iter()
            .filter(|(_, descriptor)| descriptor.enumerable)
            .map(|(name, descriptor)| (name.clone(), descriptor.property.get()))
            .collect()
    }
}

impl fmt::Display for DynError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.get("name") {
            HostValue::Undefined => "Error".to_string(),
            other => other.to_string(),
        };
        let message = match self.get("message") {
            HostValue::Undefined => String::new(),
            other => other.to_string(),
        };
        match (name.is_empty(), message.is_empty()) {
            (true, _) => f.write_str(&message),
            (false, true) => f.write_str(&name),
            (false, false) => write!(f, "{name}: {message}"),
        }
    }
}
