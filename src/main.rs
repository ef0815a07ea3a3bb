// codebuild-rs: CodeBuild CI integration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Version | Options | Inis | Env | Check | Request
//! ```

use std::process::ExitCode;

use codebuild_rs::cli::global::GlobalOptions;
use codebuild_rs::cli::{self, Command};
use codebuild_rs::cmd::check::run_check_command;
use codebuild_rs::cmd::config::{run_inis_command, run_options_command};
use codebuild_rs::cmd::env::run_env_command;
use codebuild_rs::cmd::request::run_request_command;
use codebuild_rs::config::loader::ConfigLoader;
use codebuild_rs::config::{Config, DEFAULT_CONFIG_FILE, ENV_PREFIX};
use codebuild_rs::error::PluginError;
use codebuild_rs::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    if matches!(cli.command, Some(Command::Version)) {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&config);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config)
}

/// Log levels come from the merged config, which already contains the
/// `--log-level` / `--file-log-level` / `--log-file` overrides.
fn build_log_config(config: &Config) -> LogConfig {
    let log_file = &config.global.log_file;
    LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(
            (!log_file.as_os_str().is_empty()).then(|| log_file.display().to_string()),
        )
        .build()
}

fn dispatch_command(cli: &cli::Cli, config: &Config) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => Ok(()),
        Some(Command::Options) => {
            run_options_command(config);
            Ok(())
        }
        Some(Command::Inis) => {
            let loader = build_config_loader(&cli.global);
            run_inis_command(&loader.format_loaded_files());
            Ok(())
        }
        Some(Command::Env(args)) => run_env_command(args, config),
        Some(Command::Check(args)) => run_check_command(args, config),
        Some(Command::Request) => run_request_command(config),
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(PluginError::Other("no command specified".into()).into())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new();
    if !global.no_default_inis {
        loader = loader.add_toml_file_optional(DEFAULT_CONFIG_FILE);
    }
    for ini_path in &global.inis {
        loader = loader.add_toml_file(ini_path);
    }
    loader.with_env_prefix(ENV_PREFIX)
}

fn load_config(global: &GlobalOptions) -> codebuild_rs::error::Result<Config> {
    let mut loader = build_config_loader(global);
    for option in global.to_config_overrides() {
        loader = loader.apply_override(&option)?;
    }
    loader.build()
}
