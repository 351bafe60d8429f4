// dotload: Dotenv Parser and Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable management.
//!
//! # Architecture
//!
//! ```text
//!        EnvLookup (get)
//!            |
//!        EnvStore (set/contains)
//!        /           \
//!      Env         ProcessEnv
//!   in-memory      std::env
//! ```
//!
//! - **Injected**: the loader writes through `EnvStore`, never `std::env` directly
//! - **Case-insensitive on Windows** only

pub mod container;
pub mod types;


/// Captures the current process environment.
///
/// Variables whose name or value is not valid unicode are skipped.
#[must_use]
pub fn current_env() -> container::Env {
    let vars = std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect();
    container::Env::from_map(vars)
}
