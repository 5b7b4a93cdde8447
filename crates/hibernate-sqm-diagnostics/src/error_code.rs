//! SQM error codes following a structured numbering system
//!
//! Error code ranges:
//! - SQM0001-SQM0099: Parse errors (literal text, function patterns)
//! - SQM0100-SQM0199: Semantic errors (type and function resolution)
//! - SQM0300-SQM0399: Bootstrap errors (dialect contribution, registries)
//! - SQM0400-SQM0499: System errors (configuration, I/O, internal consistency)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get the numeric code
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SQM{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Parse errors (0001-0099)
    map.insert(4, ErrorInfo::new("Invalid literal"));
    map.insert(7, ErrorInfo::new("Invalid number format"));
    map.insert(8, ErrorInfo::new("Invalid date/time format")
        .with_help("Temporal literals use ISO forms (2023-05-01, 10:15:30, 2023-05-01T10:15:30) or JDBC escapes ({d '...'}, {t '...'}, {ts '...'})"));

    // Semantic errors (0100-0199)
    map.insert(101, ErrorInfo::new("Undefined function")
        .with_help("Check the function name, or that the dialect contributing it is configured"));
    map.insert(102, ErrorInfo::new("Undefined type"));
    map.insert(111, ErrorInfo::new("Invalid argument count"));

    // Bootstrap errors (0300-0399)
    map.insert(300, ErrorInfo::new("Duplicate function registration"));
    map.insert(301, ErrorInfo::new("Alternate key refers to an unregistered function"));
    map.insert(302, ErrorInfo::new("Invalid function pattern"));

    // System errors (0400-0499)
    map.insert(401, ErrorInfo::new("I/O error"));
    map.insert(402, ErrorInfo::new("Configuration inconsistency")
        .with_help("A non-null type could not be resolved by the type configuration; the engine is misconfigured"));
    map.insert(406, ErrorInfo::new("Invalid format"));

    map
});

// Parse errors
pub const SQM0004: ErrorCode = ErrorCode::new(4);
pub const SQM0007: ErrorCode = ErrorCode::new(7);
pub const SQM0008: ErrorCode = ErrorCode::new(8);

// Semantic errors
pub const SQM0101: ErrorCode = ErrorCode::new(101);
pub const SQM0102: ErrorCode = ErrorCode::new(102);
pub const SQM0111: ErrorCode = ErrorCode::new(111);

// Bootstrap errors
pub const SQM0300: ErrorCode = ErrorCode::new(300);
pub const SQM0301: ErrorCode = ErrorCode::new(301);
pub const SQM0302: ErrorCode = ErrorCode::new(302);

// System errors
pub const SQM0401: ErrorCode = ErrorCode::new(401);
pub const SQM0402: ErrorCode = ErrorCode::new(402);
pub const SQM0406: ErrorCode = ErrorCode::new(406);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(SQM0008.to_string(), "SQM0008");
        assert_eq!(SQM0101.to_string(), "SQM0101");
    }

    #[test]
    fn test_error_info() {
        assert_eq!(SQM0101.info().description, "Undefined function");
        assert!(SQM0402.info().help.is_some());
        assert_eq!(ErrorCode::new(999).info().description, "Unknown error");
    }
}
