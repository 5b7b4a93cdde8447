//! SQM error types

use crate::{
    ErrorCode, SourceLocation, Span, SQM0101, SQM0111, SQM0300, SQM0301, SQM0402,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Compilation cannot proceed
    Error,
    /// Potential issue but compilation can continue
    Warning,
    /// Informational message
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A diagnostic message with location and context
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: ErrorCode,
    pub message: String,
    pub location: Option<SourceLocation>,
    /// Additional context or help
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
            location: None,
            help: None,
        }
    }

    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Render with terminal colors, including the help line if any
    #[cfg(feature = "colored")]
    pub fn render_colored(&self) -> String {
        use colored::Colorize;

        let severity = match self.severity {
            Severity::Error => self.severity.to_string().red().bold(),
            Severity::Warning => self.severity.to_string().yellow().bold(),
            Severity::Info => self.severity.to_string().blue().bold(),
        };
        let mut out = format!("{}[{}]: {}", severity, self.code, self.message);
        if let Some(loc) = &self.location {
            out.push_str(&format!(" {}", format!("at {}", loc).cyan()));
        }
        if let Some(help) = &self.help {
            out.push_str(&format!("\n  {} {}", "help:".green(), help));
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} - {}", self.severity, self.code, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " at {}", loc)?;
        }
        Ok(())
    }
}

/// Main SQM error type
#[derive(Debug, Clone, Error)]
pub enum SqmError {
    /// Literal or pattern text that does not match its grammar
    #[error("{code}: {message}")]
    Parse {
        code: ErrorCode,
        message: String,
        /// The offending text
        expression: String,
        location: Option<SourceLocation>,
        context: Option<String>,
    },

    /// Type or function resolution failure during query translation
    #[error("{code}: {message}")]
    Semantic {
        code: ErrorCode,
        message: String,
        location: Option<SourceLocation>,
        context: Option<String>,
    },

    /// Registry failure raised while dialects contribute types and functions
    #[error("{code}: {message}")]
    Bootstrap {
        code: ErrorCode,
        message: String,
        /// Name of the contributor (or registry key) involved
        contributor: Option<String>,
        context: Option<String>,
    },

    /// Configuration, I/O or internal consistency failure
    #[error("{code}: {message}")]
    System {
        code: ErrorCode,
        message: String,
        context: Option<String>,
    },
}

impl SqmError {
    /// Create a semantic error
    pub fn semantic(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Semantic {
            code,
            message: message.into(),
            location: None,
            context: None,
        }
    }

    /// A query referenced a function that is neither a canonical name nor an
    /// alternate key in the function registry
    pub fn unknown_function(name: &str) -> Self {
        Self::Semantic {
            code: SQM0101,
            message: format!("Unknown function '{}'", name),
            location: None,
            context: Some(SQM0101.info().help.unwrap_or_default().to_string()),
        }
    }

    /// A function was called with an unsupported number of arguments
    pub fn argument_count(name: &str, expected: impl fmt::Display, found: usize) -> Self {
        Self::semantic(
            SQM0111,
            format!("Function '{}' expects {} argument(s), but got {}", name, expected, found),
        )
    }

    /// Two registrations claimed the same function registry key
    pub fn duplicate_registration(name: &str) -> Self {
        Self::Bootstrap {
            code: SQM0300,
            message: format!("Function '{}' is already registered", name),
            contributor: Some(name.to_string()),
            context: None,
        }
    }

    /// An alternate key was registered before the canonical name it points at
    pub fn dangling_alternate_key(alternate: &str, canonical: &str) -> Self {
        Self::Bootstrap {
            code: SQM0301,
            message: format!(
                "Alternate key '{}' refers to unregistered function '{}'",
                alternate, canonical
            ),
            contributor: Some(canonical.to_string()),
            context: None,
        }
    }

    /// A non-null nominal type resolved to nothing
    pub fn configuration_inconsistency(message: impl Into<String>) -> Self {
        Self::System {
            code: SQM0402,
            message: message.into(),
            context: None,
        }
    }

    /// Attach the contributor name to a bootstrap error
    pub fn with_contributor(self, name: impl Into<String>) -> Self {
        match self {
            Self::Bootstrap { code, message, context, .. } => Self::Bootstrap {
                code,
                message,
                contributor: Some(name.into()),
                context,
            },
            other => other,
        }
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Parse { code, .. }
            | Self::Semantic { code, .. }
            | Self::Bootstrap { code, .. }
            | Self::System { code, .. } => *code,
        }
    }

    /// Get the location if available
    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            Self::Parse { location, .. } | Self::Semantic { location, .. } => location.as_ref(),
            _ => None,
        }
    }

    /// The offending text of a parse error
    pub fn expression(&self) -> Option<&str> {
        match self {
            Self::Parse { expression, .. } => Some(expression),
            _ => None,
        }
    }

    /// Convert to a diagnostic
    pub fn to_diagnostic(&self) -> Diagnostic {
        let (code, message, location, context) = match self {
            Self::Parse { code, message, location, context, .. }
            | Self::Semantic { code, message, location, context } => {
                (*code, message, location.as_ref(), context.as_ref())
            }
            Self::Bootstrap { code, message, context, .. }
            | Self::System { code, message, context } => (*code, message, None, context.as_ref()),
        };

        let mut diag = Diagnostic::error(code, message.clone());
        if let Some(loc) = location {
            diag = diag.with_location(loc.clone());
        }
        if let Some(ctx) = context {
            diag = diag.with_help(ctx.clone());
        }
        diag
    }
}

/// Builder for creating SQM errors with fluent API
pub struct ErrorBuilder {
    code: ErrorCode,
    message: String,
    location: Option<SourceLocation>,
    context: Option<String>,
}

impl ErrorBuilder {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            location: None,
            context: None,
        }
    }

    /// Set the span (converts to location)
    pub fn span(mut self, span: Span, source: &str) -> Self {
        self.location = Some(SourceLocation::from_span(span, source));
        self
    }

    /// Add context information
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Build a parse error
    pub fn parse(self, expression: impl Into<String>) -> SqmError {
        SqmError::Parse {
            code: self.code,
            message: self.message,
            expression: expression.into(),
            location: self.location,
            context: self.context,
        }
    }

    /// Build a bootstrap error
    pub fn bootstrap(self) -> SqmError {
        SqmError::Bootstrap {
            code: self.code,
            message: self.message,
            contributor: None,
            context: self.context,
        }
    }

    /// Build a system error
    pub fn system(self) -> SqmError {
        SqmError::System {
            code: self.code,
            message: self.message,
            context: self.context,
        }
    }
}
