// dotload: Dotenv Parser and Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules shared by the loader and the CLI.
//!
//! ```text
//!        core
//!         |
//!        env
//!         |
//!   Env / ProcessEnv
//!   EnvLookup / EnvStore
//! ```

pub mod env;
