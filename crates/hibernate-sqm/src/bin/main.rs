//! SQM command-line interface

use clap::{Parser, Subcommand};
use hibernate_sqm::DialectName;
use hibernate_sqm::cli::output::{self, OutputFormat};
use hibernate_sqm::cli::{EngineOptions, call, functions, literal, resolve};
use hibernate_sqm::types::LiteralKind;
use std::path::PathBuf;

/// SQM expression tool
#[derive(Parser)]
#[command(name = "sqm")]
#[command(author, version, about = "Typed SQM expression tools", long_about = None)]
struct Cli {
    /// Print contributor activity during bootstrap
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Pretty, global = true)]
    format: OutputFormat,

    /// Dialect, overriding the configuration file
    #[arg(short, long, value_enum, global = true)]
    dialect: Option<DialectName>,

    /// Engine configuration file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse and type a literal
    Literal {
        /// Literal kind (integer, long, timestamp, date, time)
        kind: LiteralKind,

        /// Literal text, e.g. 2023-05-01 or "{ts '2023-05-01 10:15:30'}"
        #[arg(allow_hyphen_values = true)]
        text: String,
    },

    /// List registered functions
    Functions {
        /// Only show functions whose name or alternate key contains this text
        #[arg(long)]
        filter: Option<String>,
    },

    /// Resolve a type name or Java class name to its semantic type
    Resolve {
        name: String,
    },

    /// Compile a function call
    Call {
        /// Canonical name or alternate key
        function: String,

        /// Arguments: 42, -5, ?1, ?1:geometry, :name, date=2023-05-01
        #[arg(allow_negative_numbers = true)]
        arguments: Vec<String>,
    },
}

fn main() {
    human_panic::setup_panic!();

    let cli = Cli::parse();
    let engine = EngineOptions {
        dialect: cli.dialect,
        config: cli.config,
        verbose: cli.verbose,
    };

    let result = match cli.command {
        Commands::Literal { kind, text } => literal::literal(literal::LiteralConfig {
            engine,
            kind,
            text,
            format: cli.format,
        }),
        Commands::Functions { filter } => functions::functions(functions::FunctionsConfig {
            engine,
            filter,
            format: cli.format,
        }),
        Commands::Resolve { name } => resolve::resolve(resolve::ResolveConfig {
            engine,
            name,
            format: cli.format,
        }),
        Commands::Call { function, arguments } => call::call(call::CallConfig {
            engine,
            function,
            arguments,
            format: cli.format,
        }),
    };

    if let Err(e) = result {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_call_accepts_negative_arguments() {
        let cli = Cli::try_parse_from(["sqm", "call", "mod", "-5", "3"]).unwrap();
        match cli.command {
            Commands::Call { function, arguments } => {
                assert_eq!(function, "mod");
                assert_eq!(arguments, vec!["-5".to_string(), "3".to_string()]);
            }
            _ => panic!("expected call"),
        }
    }

    #[test]
    fn test_literal_accepts_signed_text() {
        let cli = Cli::try_parse_from(["sqm", "literal", "date", "-0001-01-01", "--format", "json"]).unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
        match cli.command {
            Commands::Literal { text, .. } => assert_eq!(text, "-0001-01-01"),
            _ => panic!("expected literal"),
        }
    }

    #[test]
    fn test_unknown_flags_are_still_rejected() {
        assert!(Cli::try_parse_from(["sqm", "call", "abs", "--bogus"]).is_err());
    }
}
