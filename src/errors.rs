//! Drawing and command-stream errors

use std::fmt;

/// Rejected drawing parameters. Raised before anything is drawn.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawError {
    InvalidArgument(String),
}

impl DrawError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        DrawError::InvalidArgument(msg.into())
    }
}

impl fmt::Display for DrawError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DrawError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for DrawError {}

/// Simple error message from bottom level
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleError(pub String);

impl SimpleError {
    /// Accompany `SimpleError` with line number
    pub fn at_line(self, line: u64) -> LineError {
        LineError {
            error: self,
            line: Some(line),
        }
    }

    /// Accompany `SimpleError` with no line number
    pub fn no_line(self) -> LineError {
        LineError {
            error: self,
            line: None,
        }
    }
}

impl From<DrawError> for SimpleError {
    fn from(e: DrawError) -> Self {
        SimpleError(e.to_string())
    }
}

impl fmt::Display for SimpleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error: {}", self.0)
    }
}

/// Error message with line number
#[derive(Debug, Clone, PartialEq)]
pub struct LineError {
    error: SimpleError,
    line: Option<u64>,
}

impl LineError {
    pub fn line(&self) -> Option<u64> {
        self.line
    }
}

impl From<DrawError> for LineError {
    fn from(e: DrawError) -> Self {
        SimpleError::from(e).no_line()
    }
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(line) = self.line {
            writeln!(f, "At line {line}:")?;
        }
        self.error.fmt(f)
    }
}

impl std::error::Error for LineError {}
