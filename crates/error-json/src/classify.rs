//! Resolves the stable `type` tag of an error.
//!
//! Custom subclasses are classified by their nearest built-in ancestor, not by
//! their own (possibly minified) name.

use crate::capability::ErrorValue;
use crate::kind::{ErrorClass, ErrorKind};

/// Returns the first built-in kind on the error's class chain, or
/// [`ErrorKind::Error`] when the chain contains none.
pub fn classify<E: ErrorValue + ?Sized>(err: &E) -> ErrorKind {
    classify_chain(&err.class_chain())
}

pub fn classify_chain(chain: &[ErrorClass]) -> ErrorKind {
    chain
        .iter()
        .find_map(ErrorClass::built_in)
        .unwrap_or(ErrorKind::Error)
}

pub fn type_name<E: ErrorValue + ?Sized>(err: &E) -> &'static str {
    classify(err).as_str()
}
