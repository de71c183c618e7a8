//! CLI module for ctpgen - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for serving the protocol
//! and for running each operation once from the shell.

pub mod commands;

pub use commands::Cli;
