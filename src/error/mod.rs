// dotload: Dotenv Parser and Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!        DotloadError (~24 bytes)
//!                |
//!   +-------+----+----+-------+
//!   v       v         v       v
//! Bail     Cfg       Fs     Proc
//! Box<str> Box       Box     Box
//!
//! Sub-errors (unboxed internally):
//!   Config  ParseError, InvalidValue
//!   Fs      ReadFailed
//!   Process ExecutableNotFound, SpawnFailed, Terminated
//! ```
//!
//! Malformed dotenv input never reaches this module: bad lines and missing
//! files are reported through `dotenv::Diagnostic` instead.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum small on the stack.
#[derive(Debug, Error)]
pub enum DotloadError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// Child process error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),
}

/// Create a fatal [`DotloadError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> DotloadError {
    DotloadError::Bailed(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for DotloadError {
                fn from(err: $error) -> Self {
                    DotloadError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    FsError => Fs,
    ProcessError => Process,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// A dotenv file exists but could not be read.
    #[error("failed to read '{path}': {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Process Errors ---

/// Child process errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process was terminated by a signal and has no exit code.
    #[error("process '{command}' was terminated by a signal")]
    Terminated { command: String },
}

#[cfg(test)]
mod tests;
