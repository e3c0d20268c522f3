use crate::capability::{ErrorValue, io_error_code};
use crate::value::HostValue;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// A failed system call, carrying the `code`/`errno`/`syscall` triple.
///
/// `errno` is the raw OS error of `source` (positive on Unix).
#[derive(Debug)]
pub struct SystemError {
    pub syscall: String,
    pub path: Option<PathBuf>,
    pub source: io::Error,
}

impl SystemError {
    pub fn new(syscall: impl Into<String>, source: io::Error) -> Self {
        Self {
            syscall: syscall.into(),
            path: None,
            source,
        }
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl fmt::Display for SystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(code) = io_error_code(&self.source) {
            write!(f, "{code}: ")?;
        }
        write!(f, "{}, {}", self.source, self.syscall)?;
        if let Some(path) = &self.path {
            write!(f, " '{}'", path.display())?;
        }
        Ok(())
    }
}

impl std::error::Error for SystemError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

impl ErrorValue for SystemError {
    fn message(&self) -> String {
        self.to_string()
    }

    fn name(&self) -> HostValue {
        HostValue::from("Error")
    }

    fn code(&self) -> HostValue {
        io_error_code(&self.source).into()
    }

    fn errno(&self) -> HostValue {
        self.source.raw_os_error().into()
    }

    fn syscall(&self) -> HostValue {
        HostValue::from(self.syscall.as_str())
    }

    fn own_enumerable_properties(&self) -> Vec<(String, HostValue)> {
        self.path
            .iter()
            .map(|path| ("path".to_string(), path.display().to_string().into()))
            .collect()
    }
}
