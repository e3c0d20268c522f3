use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Built-in error taxonomy used as the stable `type` tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    #[default]
    Error,
    TypeError,
    SyntaxError,
    ReferenceError,
    RangeError,
    #[serde(rename = "URIError")]
    UriError,
    EvalError,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 7] = [
        ErrorKind::Error,
        ErrorKind::TypeError,
        ErrorKind::SyntaxError,
        ErrorKind::ReferenceError,
        ErrorKind::RangeError,
        ErrorKind::UriError,
        ErrorKind::EvalError,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Error => "Error",
            ErrorKind::TypeError => "TypeError",
            ErrorKind::SyntaxError => "SyntaxError",
            ErrorKind::ReferenceError => "ReferenceError",
            ErrorKind::RangeError => "RangeError",
            ErrorKind::UriError => "URIError",
            ErrorKind::EvalError => "EvalError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown built-in error kind: {0}")]
pub struct UnknownErrorKind(pub String);

impl FromStr for ErrorKind {
    type Err = UnknownErrorKind;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ErrorKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| UnknownErrorKind(value.to_string()))
    }
}

/// One link of an error's class chain.
///
/// A custom class is identified by whatever name it was declared (or minified)
/// with. It never compares equal to a built-in, even when the names collide.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    BuiltIn(ErrorKind),
    Custom(String),
}

impl ErrorClass {
    pub fn custom(name: impl Into<String>) -> Self {
        ErrorClass::Custom(name.into())
    }

    pub fn name(&self) -> &str {
        match self {
            ErrorClass::BuiltIn(kind) => kind.as_str(),
            ErrorClass::Custom(name) => name,
        }
    }

    pub fn built_in(&self) -> Option<ErrorKind> {
        match self {
            ErrorClass::BuiltIn(kind) => Some(*kind),
            ErrorClass::Custom(_) => None,
        }
    }
}

impl From<ErrorKind> for ErrorClass {
    fn from(kind: ErrorKind) -> Self {
        ErrorClass::BuiltIn(kind)
    }
}
