// codebuild-rs: CodeBuild CI integration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for codebuild-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! codebuild [global options] <command>
//! version
//! options
//! inis
//! env [--spec SPEC] [--json]
//! check [--workspace DIR]
//! request
//! ```

pub mod env;
pub mod global;


use crate::cli::env::{CheckArgs, EnvArgs};
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// CodeBuild CI integration
///
/// Validates build settings and prepares start-build requests.
#[derive(Debug, Parser)]
#[command(
    name = "codebuild",
    author,
    version,
    about = "CodeBuild CI integration",
    long_about = "codebuild-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Validates CI configuration for a remote build project and\n\
                  prepares the parameters of a start-build request.\n\n\
                  `codebuild check` validates everything, `codebuild request`\n\
                  prints the request that would be sent. See\n\
                  `codebuild <command> --help` for more information.",
    after_help = "CONFIGURATION:\n\n\
                  By default, codebuild loads `codebuild.toml` from the current\n\
                  directory if it exists. Additional files can be given with --ini;\n\
                  later files override earlier ones. CODEBUILD_RS_<SECTION>__<KEY>\n\
                  environment variables and --set section/key=value override files.\n\
                  Use --no-default-inis to only use --ini."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values.
    Options,

    /// Lists the configuration files used.
    Inis,

    /// Parses and prints the environment variable specification.
    Env(EnvArgs),

    /// Validates the configuration.
    Check(CheckArgs),

    /// Prints the start-build request as JSON.
    Request,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
