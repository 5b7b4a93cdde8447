//! Function descriptors: argument validation, return typing and SQL rendering

use hibernate_sqm_diagnostics::{ErrorBuilder, Result, SQM0302, SqmError};
use hibernate_sqm_types::SemanticType;
use std::fmt;
use std::sync::Arc;
use winnow::ascii::digit1;
use winnow::combinator::{alt, cut_err, preceded, repeat};
use winnow::error::StrContext;
use winnow::token::take_till;
use winnow::{ModalResult, Parser};

/// Accepted argument counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentsValidator {
    NoArgs,
    Exactly(usize),
    /// Inclusive bounds
    Between(usize, usize),
    AtLeast(usize),
}

impl ArgumentsValidator {
    pub fn accepts(&self, count: usize) -> bool {
        match *self {
            Self::NoArgs => count == 0,
            Self::Exactly(n) => count == n,
            Self::Between(min, max) => (min..=max).contains(&count),
            Self::AtLeast(min) => count >= min,
        }
    }

    /// Fail with an argument count error naming `function`
    pub fn validate(&self, function: &str, count: usize) -> Result<()> {
        if self.accepts(count) {
            Ok(())
        } else {
            Err(SqmError::argument_count(function, self, count))
        }
    }
}

impl fmt::Display for ArgumentsValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoArgs => f.write_str("0"),
            Self::Exactly(n) => write!(f, "{}", n),
            Self::Between(min, max) => write!(f, "{}..={}", min, max),
            Self::AtLeast(min) => write!(f, "{}+", min),
        }
    }
}

/// How a call's result type is derived
#[derive(Debug, Clone, PartialEq)]
pub enum ReturnTypeResolver {
    Fixed(Arc<SemanticType>),
    /// Same type as the argument at this zero-based position
    ArgumentType(usize),
}

impl ReturnTypeResolver {
    pub fn resolve(&self, argument_types: &[Option<Arc<SemanticType>>]) -> Option<Arc<SemanticType>> {
        match self {
            Self::Fixed(semantic_type) => Some(Arc::clone(semantic_type)),
            Self::ArgumentType(index) => argument_types.get(*index).cloned().flatten(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PatternChunk {
    Text(String),
    /// One-based argument reference, `?1`
    Argument(usize),
}

fn pattern_chunk(input: &mut &str) -> ModalResult<PatternChunk> {
    alt((
        take_till(1.., '?').map(|text: &str| PatternChunk::Text(text.to_string())),
        preceded(
            '?',
            cut_err(
                digit1
                    .try_map(str::parse::<usize>)
                    .verify(|index: &usize| *index > 0)
                    .context(StrContext::Label("argument index")),
            ),
        )
        .map(PatternChunk::Argument),
    ))
    .parse_next(input)
}

/// SQL template with `?N` argument placeholders, e.g. `mod(?1, ?2)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternRenderer {
    pattern: String,
    chunks: Vec<PatternChunk>,
}

impl PatternRenderer {
    pub fn parse(pattern: &str) -> Result<Self> {
        let chunks: Vec<PatternChunk> = repeat(0.., pattern_chunk)
            .parse(pattern)
            .map_err(|e| {
                ErrorBuilder::new(SQM0302, format!("Invalid function pattern '{}'", pattern))
                    .context(e.inner().to_string())
                    .bootstrap()
            })?;

        Ok(Self {
            pattern: pattern.to_string(),
            chunks,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Highest argument index referenced
    pub fn arity(&self) -> usize {
        self.chunks
            .iter()
            .filter_map(|chunk| match chunk {
                PatternChunk::Argument(index) => Some(*index),
                PatternChunk::Text(_) => None,
            })
            .max()
            .unwrap_or(0)
    }

    /// Substitute rendered arguments; a placeholder without an argument is
    /// left as written
    pub fn render(&self, arguments: &[String]) -> String {
        let mut out = String::with_capacity(self.pattern.len());
        for chunk in &self.chunks {
            match chunk {
                PatternChunk::Text(text) => out.push_str(text),
                PatternChunk::Argument(index) => match arguments.get(index - 1) {
                    Some(argument) => out.push_str(argument),
                    None => {
                        out.push('?');
                        out.push_str(&index.to_string());
                    }
                },
            }
        }
        out
    }
}

/// SQL rendering form of a function call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionRenderer {
    /// `name(a, b)`
    Named,
    /// `name` without parentheses, e.g. `current_date`
    NoParen,
    Pattern(PatternRenderer),
}

/// One dialect-specific SQL function implementation
#[derive(Debug, Clone, PartialEq)]
pub struct SqmFunctionDescriptor {
    name: String,
    arguments: ArgumentsValidator,
    return_type: ReturnTypeResolver,
    renderer: FunctionRenderer,
}

impl SqmFunctionDescriptor {
    /// Function rendered as `name(args...)`
    pub fn named(name: impl Into<String>, arguments: ArgumentsValidator, return_type: ReturnTypeResolver) -> Self {
        Self {
            name: name.into(),
            arguments,
            return_type,
            renderer: FunctionRenderer::Named,
        }
    }

    /// Zero-argument function rendered without parentheses
    pub fn no_paren(name: impl Into<String>, return_type: Arc<SemanticType>) -> Self {
        Self {
            name: name.into(),
            arguments: ArgumentsValidator::NoArgs,
            return_type: ReturnTypeResolver::Fixed(return_type),
            renderer: FunctionRenderer::NoParen,
        }
    }

    /// Function rendered from a `?N` template; the argument count is the
    /// highest placeholder index
    pub fn pattern(name: impl Into<String>, pattern: &str, return_type: ReturnTypeResolver) -> Result<Self> {
        let renderer = PatternRenderer::parse(pattern)?;
        let arguments = match renderer.arity() {
            0 => ArgumentsValidator::NoArgs,
            n => ArgumentsValidator::Exactly(n),
        };
        Ok(Self {
            name: name.into(),
            arguments,
            return_type,
            renderer: FunctionRenderer::Pattern(renderer),
        })
    }

    /// SQL name the call renders with
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arguments(&self) -> ArgumentsValidator {
        self.arguments
    }

    pub fn return_type_resolver(&self) -> &ReturnTypeResolver {
        &self.return_type
    }

    pub fn renderer(&self) -> &FunctionRenderer {
        &self.renderer
    }

    pub fn validate_argument_count(&self, count: usize) -> Result<()> {
        self.arguments.validate(&self.name, count)
    }

    pub fn resolve_return_type(&self, argument_types: &[Option<Arc<SemanticType>>]) -> Option<Arc<SemanticType>> {
        self.return_type.resolve(argument_types)
    }

    /// Render a call from already rendered argument SQL
    pub fn render(&self, arguments: &[String]) -> String {
        match &self.renderer {
            FunctionRenderer::Named => format!("{}({})", self.name, arguments.join(", ")),
            FunctionRenderer::NoParen => self.name.clone(),
            FunctionRenderer::Pattern(pattern) => pattern.render(arguments),
        }
    }

    /// Short human-readable signature, e.g. `ST_Distance(2) -> double`
    pub fn signature(&self) -> String {
        let returns = match &self.return_type {
            ReturnTypeResolver::Fixed(semantic_type) => semantic_type.name().to_string(),
            ReturnTypeResolver::ArgumentType(index) => format!("typeof(?{})", index + 1),
        };
        format!("{}({}) -> {}", self.name, self.arguments, returns)
    }
}
