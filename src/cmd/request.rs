// codebuild-rs: CodeBuild CI integration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Request command implementation for codebuild-rs.

use crate::config::Config;
use crate::error::{PluginError, Result};
use crate::request::{StartBuildRequest, s3_artifact_url};

/// Main handler for request command.
///
/// Prints the request JSON on stdout. The S3 artifact link, when one can be
/// formed, is logged rather than printed.
///
/// # Errors
///
/// Returns an error if the project configuration cannot produce a request.
pub fn run_request_command(config: &Config) -> Result<()> {
    let project = &config.project;
    let request = StartBuildRequest::from_config(project).map_err(PluginError::from)?;

    let artifact_url = s3_artifact_url(
        project.artifact_base_url.as_deref(),
        project.artifact_location.as_deref(),
        project.artifact_type.as_deref(),
    );
    if !artifact_url.is_empty() {
        tracing::info!(url = %artifact_url, "artifacts will be uploaded to S3");
    }

    println!("{}", request.to_json()?);
    Ok(())
}
