//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - serve: run the stdio protocol server (default)
//! - create: generate a tool from a description
//! - search: look for similar known tools
//! - validate / implement / tests: work from a definition file
//! - operations: list the protocol operations

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use ctpgen::domain::ExecutionMode;

/// ctpgen - scaffold CTP tools from plain-language descriptions
#[derive(Parser, Debug)]
#[command(name = "ctpgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Execution mode as accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    Client,
    Server,
    Both,
}

impl From<ModeArg> for ExecutionMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Client => ExecutionMode::Client,
            ModeArg::Server => ExecutionMode::Server,
            ModeArg::Both => ExecutionMode::Both,
        }
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve requests as newline-delimited JSON on stdin/stdout
    Serve,

    /// Generate a tool definition, implementation and tests
    Create {
        /// What the tool should do
        description: String,

        /// Tool name (derived from the description if omitted)
        #[arg(short, long)]
        name: Option<String>,

        /// Tool category (inferred if omitted)
        #[arg(short = 'k', long)]
        category: Option<String>,

        /// Where the tool runs
        #[arg(short, long, value_enum)]
        mode: Option<ModeArg>,

        /// Write the generated files beneath this directory
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Search the known-tools catalog for similar tools
    Search {
        /// Description of the tool to search for
        description: String,

        /// Only consider tools in this category
        #[arg(short = 'k', long)]
        category: Option<String>,
    },

    /// Validate a tool definition JSON file
    Validate {
        /// Path to the definition
        file: PathBuf,
    },

    /// Generate the implementation for a tool definition JSON file
    Implement {
        /// Path to the definition
        file: PathBuf,

        /// Where the tool runs
        #[arg(short, long, value_enum)]
        mode: Option<ModeArg>,
    },

    /// Generate a test suite for a tool definition JSON file
    Tests {
        /// Path to the definition
        file: PathBuf,
    },

    /// List the protocol operations and their input schemas
    Operations,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse_no_args() {
        // No args should result in None command (serve mode)
        let cli = Cli::try_parse_from(["ctpgen"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::try_parse_from(["ctpgen", "-v"]).unwrap();
        assert!(cli.is_verbose());
    }

    #[test]
    fn test_cli_config_option() {
        let cli = Cli::try_parse_from(["ctpgen", "-c", "/path/to/ctpgen.yml"]).unwrap();
        assert_eq!(cli.config.as_ref(), Some(&PathBuf::from("/path/to/ctpgen.yml")));
    }

    #[test]
    fn test_serve() {
        let cli = Cli::try_parse_from(["ctpgen", "serve"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Serve)));
    }

    #[test]
    fn test_create_with_options() {
        let cli = Cli::try_parse_from([
            "ctpgen",
            "create",
            "Convert hexadecimal color codes to RGB values",
            "--name",
            "Hex To RGB",
            "--category",
            "converters",
            "--mode",
            "both",
            "--out",
            "generated",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Create {
                description,
                name,
                category,
                mode,
                out,
            }) => {
                assert_eq!(description, "Convert hexadecimal color codes to RGB values");
                assert_eq!(name.as_deref(), Some("Hex To RGB"));
                assert_eq!(category.as_deref(), Some("converters"));
                assert_eq!(mode, Some(ModeArg::Both));
                assert_eq!(out, Some(PathBuf::from("generated")));
            }
            _ => panic!("Expected create command"),
        }
    }

    #[test]
    fn test_create_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["ctpgen", "create", "x", "--mode", "edge"]).is_err());
    }

    #[test]
    fn test_create_requires_description() {
        assert!(Cli::try_parse_from(["ctpgen", "create"]).is_err());
    }

    #[test]
    fn test_search_with_category() {
        let cli = Cli::try_parse_from(["ctpgen", "search", "encode text to base64", "-k", "encoders"]).unwrap();
        match cli.command {
            Some(Commands::Search { description, category }) => {
                assert_eq!(description, "encode text to base64");
                assert_eq!(category.as_deref(), Some("encoders"));
            }
            _ => panic!("Expected search command"),
        }
    }

    #[test]
    fn test_definition_commands() {
        let cli = Cli::try_parse_from(["ctpgen", "validate", "tool.json"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Validate { file }) if file == PathBuf::from("tool.json")));

        let cli = Cli::try_parse_from(["ctpgen", "implement", "tool.json", "-m", "server"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Implement { mode: Some(ModeArg::Server), .. })));

        let cli = Cli::try_parse_from(["ctpgen", "tests", "tool.json"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Tests { .. })));
    }

    #[test]
    fn test_mode_conversion() {
        assert_eq!(ExecutionMode::from(ModeArg::Client), ExecutionMode::Client);
        assert_eq!(ExecutionMode::from(ModeArg::Both), ExecutionMode::Both);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["ctpgen", "operations", "-v", "-c", "x.yml"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::Operations)));
    }

    #[test]
    fn test_cli_debug_assert() {
        Cli::command().debug_assert();
    }
}
