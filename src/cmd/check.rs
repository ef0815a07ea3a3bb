// codebuild-rs: CodeBuild CI integration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Check command implementation for codebuild-rs.
//!
//! ```text
//! project      check_project_name
//! credentials  check_credentials (keys | role)
//! region       check_region
//! proxy        check_proxy
//! env          parse_env_variables
//! source       S3: check_workspace, otherwise check_source_url
//! ```

use std::path::Path;

use anyhow::bail;

use crate::cli::env::CheckArgs;
use crate::config::Config;
use crate::error::{Result, ValidationError};
use crate::validation;

/// Result of a single configuration check.
#[derive(Debug)]
pub struct CheckOutcome {
    pub name: &'static str,
    pub result: std::result::Result<String, ValidationError>,
}

impl CheckOutcome {
    fn new(name: &'static str, result: std::result::Result<String, ValidationError>) -> Self {
        Self { name, result }
    }

    #[must_use]
    pub const fn passed(&self) -> bool {
        self.result.is_ok()
    }

    /// One report line: `ok   name: detail` or `FAIL name: message`.
    #[must_use]
    pub fn format(&self) -> String {
        match &self.result {
            Ok(detail) => format!("ok   {}: {detail}", self.name),
            Err(e) => format!("FAIL {}: {e}", self.name),
        }
    }
}

/// Main handler for check command.
///
/// # Errors
///
/// Returns an error if any check fails.
pub fn run_check_command(args: &CheckArgs, config: &Config) -> Result<()> {
    let outcomes = run_checks(config, args.workspace.as_deref());

    for outcome in &outcomes {
        match &outcome.result {
            Ok(_) => tracing::debug!(check = outcome.name, "passed"),
            Err(e) => tracing::warn!(check = outcome.name, error = %e, "failed"),
        }
        println!("{}", outcome.format());
    }

    let failed = outcomes.iter().filter(|o| !o.passed()).count();
    if failed > 0 {
        bail!("{failed} configuration check(s) failed");
    }
    Ok(())
}

/// Runs every configuration check. `workspace` overrides `project.workspace`.
#[must_use]
pub fn run_checks(config: &Config, workspace: Option<&Path>) -> Vec<CheckOutcome> {
    let aws = &config.aws;
    let project = &config.project;

    let project_check = if validation::check_project_name(project.name.as_deref()) {
        Ok(project.name.clone().unwrap_or_default())
    } else {
        Err(ValidationError::MissingProjectName)
    };

    let credentials = validation::check_credentials(
        &aws.credentials_type,
        aws.access_key.as_deref(),
        aws.secret_key.as_deref(),
        aws.iam_role_arn.as_deref(),
    )
    .map(|kind| kind.to_string());

    let region = validation::check_region(aws.region.as_deref()).map(|r| r.to_string());

    let proxy = validation::check_proxy(aws.proxy_host.as_deref(), aws.proxy_port.as_deref())
        .map(|()| {
            let host = aws.proxy_host.as_deref().filter(|h| !h.is_empty());
            let port = aws.proxy_port.as_deref().filter(|p| !p.is_empty());
            match (host, port) {
                (Some(host), Some(port)) => format!("{host}:{port}"),
                (Some(host), None) => host.to_string(),
                (None, _) => "not set".to_string(),
            }
        });

    let env = validation::parse_env_variables(project.env_variables.as_deref())
        .map(|spec| format!("{} variable(s)", spec.len()));

    let source = if validation::is_source_type_s3(project.source_type.as_deref()) {
        let workspace = workspace.or(project.workspace.as_deref());
        validation::check_workspace(workspace)
            .map(|()| format!("S3 upload from {}", workspace.unwrap_or(Path::new("")).display()))
    } else if let Some(location) = project.source_location.as_deref() {
        validation::check_source_url(location).map(|()| location.to_string())
    } else {
        Ok("not set".to_string())
    };

    vec![
        CheckOutcome::new("project", project_check),
        CheckOutcome::new("credentials", credentials),
        CheckOutcome::new("region", region),
        CheckOutcome::new("proxy", proxy),
        CheckOutcome::new("env", env),
        CheckOutcome::new("source", source),
    ]
}
