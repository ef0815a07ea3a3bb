// codebuild-rs: CodeBuild CI integration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the `env` and `check` commands.

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `env` command.
#[derive(Debug, Clone, Default, Args)]
pub struct EnvArgs {
    /// Specification to parse instead of `project.env_variables`,
    /// e.g. '[{STAGE, beta}, {REGION, us-east-1}]'.
    #[arg(long, value_name = "SPEC")]
    pub spec: Option<String>,

    /// Prints the pairs as a JSON array.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, Args)]
pub struct CheckArgs {
    /// Workspace directory to check, overrides `project.workspace`.
    #[arg(short = 'w', long, value_name = "DIR")]
    pub workspace: Option<PathBuf>,
}
