use crate::kind::{ErrorClass, ErrorKind};
use crate::object::DynError;
use crate::value::HostValue;
use std::io;

/// The error capability: anything that can be serialized as an error.
///
/// Conditional fields return [`HostValue`] so that presence is decided by
/// truthiness, the same way for every implementor.
pub trait ErrorValue {
    /// Classes from most derived to root.
    fn class_chain(&self) -> Vec<ErrorClass> {
        vec![ErrorClass::BuiltIn(ErrorKind::Error)]
    }

    fn message(&self) -> String;

    fn name(&self) -> HostValue {
        HostValue::Undefined
    }

    fn stack(&self) -> HostValue {
        HostValue::Undefined
    }

    fn code(&self) -> HostValue {
        HostValue::Undefined
    }

    fn errno(&self) -> HostValue {
        HostValue::Undefined
    }

    fn syscall(&self) -> HostValue {
        HostValue::Undefined
    }

    /// Own enumerable properties in enumeration order. Computed properties
    /// must be evaluated, not skipped.
    fn own_enumerable_properties(&self) -> Vec<(String, HostValue)> {
        Vec::new()
    }
}

impl ErrorValue for DynError {
    fn class_chain(&self) -> Vec<ErrorClass> {
        DynError::class_chain(self).to_vec()
    }

    fn message(&self) -> String {
        match self.get("message") {
            HostValue::Undefined => String::new(),
            HostValue::String(message) => message,
            other => other.to_string(),
        }
    }

    fn name(&self) -> HostValue {
        self.get("name")
    }

    fn stack(&self) -> HostValue {
        self.get("stack")
    }

    fn code(&self) -> HostValue {
        self.get("code")
    }

    fn errno(&self) -> HostValue {
        self.get("errno")
    }

    fn syscall(&self) -> HostValue {
        self.get("syscall")
    }

    fn own_enumerable_properties(&self) -> Vec<(String, HostValue)> {
        self.own_enumerable_entries()
    }
}

/// `code` is the POSIX name for the error kind (`ENOENT`). `errno` is the raw
/// OS error as the OS reports it, so it is positive on Unix (`2`), not negated
/// the way Node reports it (`-2`).
impl ErrorValue for io::Error {
    fn message(&self) -> String {
        self.to_string()
    }

    fn name(&self) -> HostValue {
        HostValue::from(ErrorKind::Error.as_str())
    }

    fn code(&self) -> HostValue {
        io_error_code(self).into()
    }

    fn errno(&self) -> HostValue {
        self.raw_os_error().into()
    }
}

/// POSIX-style symbolic code for an I/O error, when one corresponds.
pub fn io_error_code(err: &io::Error) -> Option<&'static str> {
    let code = match err.kind() {
        io::ErrorKind::NotFound => "ENOENT",
        io::ErrorKind::PermissionDenied => "EACCES",
        io::ErrorKind::ConnectionRefused => "ECONNREFUSED",
        io::ErrorKind::ConnectionReset => "ECONNRESET",
        io::ErrorKind::ConnectionAborted => "ECONNABORTED",
        io::ErrorKind::HostUnreachable => "EHOSTUNREACH",
        io::ErrorKind::NetworkUnreachable => "ENETUNREACH",
        io::ErrorKind::NetworkDown => "ENETDOWN",
        io::ErrorKind::NotConnected => "ENOTCONN",
        io::ErrorKind::AddrInUse => "EADDRINUSE",
        io::ErrorKind::AddrNotAvailable => "EADDRNOTAVAIL",
        io::ErrorKind::BrokenPipe => "EPIPE",
        io::ErrorKind::AlreadyExists => "EEXIST",
        io::ErrorKind::WouldBlock => "EAGAIN",
        io::ErrorKind::NotADirectory => "ENOTDIR",
        io::ErrorKind::IsADirectory => "EISDIR",
        io::ErrorKind::DirectoryNotEmpty => "ENOTEMPTY",
        io::ErrorKind::ReadOnlyFilesystem => "EROFS",
        io::ErrorKind::StaleNetworkFileHandle => "ESTALE",
        io::ErrorKind::InvalidInput => "EINVAL",
        io::ErrorKind::TimedOut => "ETIMEDOUT",
        io::ErrorKind::StorageFull => "ENOSPC",
        io::ErrorKind::FileTooLarge => "EFBIG",
        io::ErrorKind::ResourceBusy => "EBUSY",
        io::ErrorKind::Deadlock => "EDEADLK",
        io::ErrorKind::CrossesDevices => "EXDEV",
        io::ErrorKind::TooManyLinks => "EMLINK",
        io::ErrorKind::ArgumentListTooLong => "E2BIG",
        io::ErrorKind::Interrupted => "EINTR",
        io::ErrorKind::Unsupported => "ENOTSUP",
        io::ErrorKind::OutOfMemory => "ENOMEM",
        _ => return None,
    };
    Some(code)
}
