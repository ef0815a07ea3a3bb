// codebuild-rs: CodeBuild CI integration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            PluginError (~24 bytes)
//!                   |
//!   +-------+-------+-------+-------+-------+
//!   |       |       |       |       |       |
//!   v       v       v       v       v       v
//! EnvSpec Valid.  Cfg   Request    Io    Other
//!   Box    Box    Box     Box     Box   Box<str>
//!
//! Sub-errors (unboxed internally):
//!   EnvSpec     InvalidSpecification
//!   Validation  InvalidRegion, InvalidProxy, InvalidKeys, ...
//!   Config      InvalidValue, InvalidOverride
//!   Request     MissingProjectName, Validation
//!
//! All variants boxed => PluginError fits in 24 bytes.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`PluginError`].
pub type PluginResult<T> = std::result::Result<T, PluginError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum PluginError {
    /// Environment variable specification could not be parsed.
    #[error("environment error: {0}")]
    EnvSpec(#[from] Box<EnvSpecError>),

    /// Configuration value failed validation.
    #[error("validation error: {0}")]
    Validation(#[from] Box<ValidationError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Build request could not be constructed.
    #[error("request error: {0}")]
    Request(#[from] Box<RequestError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

// --- From implementations for boxing ---

macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for PluginError {
                fn from(err: $error) -> Self {
                    PluginError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    EnvSpecError => EnvSpec,
    ValidationError => Validation,
    ConfigError => Config,
    RequestError => Request,
    std::io::Error => Io,
}

// --- Environment Specification Errors ---

/// Error returned by the environment variable specification parser.
///
/// Every malformed input maps to the same variant; no position is retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EnvSpecError {
    #[error(
        "invalid environment variable specification: expected the form \
         [{{name, value}}, {{name2, value2}}, ...]"
    )]
    InvalidSpecification,
}

// --- Validation Errors ---

/// Configuration validation errors.
///
/// Messages are user-facing and shown verbatim by the `check` command.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Enter a valid IAM Role ARN")]
    InvalidIamRole,

    #[error("Enter valid AWS access and secret keys")]
    InvalidKeys,

    #[error("Enter a valid AWS region")]
    InvalidRegion,

    #[error("Enter a valid proxy host and port (greater than zero)")]
    InvalidProxy,

    #[error("Invalid credentialsType option")]
    InvalidCredentialsType,

    #[error("Null workspace for project.")]
    NullWorkspace,

    /// Workspace path was given but does not exist on disk.
    #[error("workspace not found: {0}")]
    WorkspaceNotFound(String),

    #[error("project name must not be empty")]
    MissingProjectName,

    #[error("source location must start with '{prefix}': {url}")]
    InvalidSourceUrl { url: String, prefix: &'static str },

    #[error("not a valid integer: '{0}'")]
    InvalidInteger(String),

    #[error(transparent)]
    EnvVariables(#[from] EnvSpecError),

    #[error("environment variable names and values must not be empty")]
    EmptyEnvVariable,

    #[error("environment variable names must not start with '{prefix}': {name}")]
    RestrictedPrefix { name: String, prefix: &'static str },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Malformed `--set` override.
    #[error("invalid override '{0}', expected 'section/key=value'")]
    InvalidOverride(String),
}

// --- Request Errors ---

/// Build request construction errors.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("project name must be set to start a build")]
    MissingProjectName,

    #[error("invalid build configuration: {0}")]
    Validation(#[from] ValidationError),
}
