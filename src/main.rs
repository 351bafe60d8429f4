// dotload: Dotenv Parser and Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Version | Show | Check | Run
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use dotload::cli::global::GlobalOptions;
use dotload::cli::{self, Command};
use dotload::cmd::dotenv_files;
use dotload::cmd::run::run_run_command;
use dotload::cmd::show::{run_check_command, run_show_command};
use dotload::config::loader::ConfigLoader;
use dotload::config::{CONFIG_FILE_NAME, Config, ENV_PREFIX};
use dotload::logging::init_logging;
use dotload::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&cli.global, &config);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config).await
}

fn build_log_config(global: &GlobalOptions, config: &Config) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(config.global.log_level);

    let log_file = global
        .log_file
        .clone()
        .or_else(|| config.global.log_file.clone());

    LogConfig::builder()
        .with_console_level(console_level)
        .maybe_with_log_file(log_file)
        .build()
}

async fn dispatch_command(cli: &cli::Cli, config: &Config) -> ExitCode {
    let base_dir = match base_dir(&cli.global) {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    let override_existing = config.load.override_existing;

    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Show(args)) => {
            let files = dotenv_files(&args.files, config, &base_dir);
            run_show_command(args, &files, override_existing).map(|()| ExitCode::SUCCESS)
        }
        Some(Command::Check(args)) => {
            let files = dotenv_files(&args.files, config, &base_dir);
            run_check_command(&files).map(|()| ExitCode::SUCCESS)
        }
        Some(Command::Run(args)) => {
            let files = dotenv_files(&args.files, config, &base_dir);
            run_run_command(args, &files, override_existing, &base_dir).await
        }
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn base_dir(global: &GlobalOptions) -> dotload::error::Result<PathBuf> {
    match &global.dir {
        Some(dir) => Ok(dir.clone()),
        None => Ok(std::env::current_dir()?),
    }
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = Config::builder();
    if !global.no_default_config {
        loader = loader.add_toml_file_optional(Path::new(CONFIG_FILE_NAME));
    }
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader.with_env_prefix(ENV_PREFIX)
}

fn load_config(global: &GlobalOptions) -> dotload::error::Result<Config> {
    build_config_loader(global).build()
}
