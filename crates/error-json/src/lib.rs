//! Converts error values into plain, JSON-serializable data.
//!
//! The output always carries `type` (the nearest built-in error kind on the
//! class chain) and `message`. `name`, `stack`, `code`, `errno` and `syscall`
//! follow when truthy, then every own enumerable property, deep-copied.

pub mod capability;
pub mod classify;
pub mod config;
pub mod copy;
pub mod kind;
pub mod object;
pub mod serializer;
pub mod system;
pub mod value;

pub use capability::{ErrorValue, io_error_code};
pub use classify::{classify, classify_chain, type_name};
pub use config::{DEFAULT_MAX_DEPTH, SerializerConfig};
pub use copy::{deep_copy, deep_copy_with};
pub use kind::{ErrorClass, ErrorKind, UnknownErrorKind};
pub use object::{DynError, Getter, Property, PropertyDescriptor};
pub use serializer::{
    ErrorSerializer, RESERVED_KEYS, SerializeError, SerializeResult, SerializedError, serialize,
    serialize_value,
};
pub use system::SystemError;
pub use value::{Function, HostValue};
