// dotload: Dotenv Parser and Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! In-memory and process-backed environment stores.
//!
//! # Architecture
//!
//! ```text
//! Env         BTreeMap<EnvKey, String>, isolated, handed to child processes
//! ProcessEnv  std::env::var / set_var, unsafe to construct
//! ```

use super::types::{EnvKey, EnvLookup, EnvStore};
use std::collections::BTreeMap;

/// A set of environment variables held in memory.
///
/// Loading into an `Env` never touches the process environment, which makes
/// it the store of choice for tests and for spawning child processes.
#[derive(Debug, Clone, Default)]
pub struct Env {
    vars: BTreeMap<EnvKey, String>,
}

impl Env {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
        }
    }

    /// Creates an environment from a map of variables.
    #[must_use]
    pub fn from_map(vars: BTreeMap<String, String>) -> Self {
        Self {
            vars: vars.into_iter().map(|(k, v)| (EnvKey::new(k), v)).collect(),
        }
    }

    /// Sets an environment variable.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.vars.insert(EnvKey::new(key), value.into());
        self
    }

    /// Gets an environment variable value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(&EnvKey::new(key)).map(String::as_str)
    }

    /// Removes an environment variable.
    pub fn remove(&mut self, key: &str) -> &mut Self {
        self.vars.remove(&EnvKey::new(key));
        self
    }

    /// Returns all environment variables as a map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.vars
            .iter()
            .map(|(k, v)| (k.as_str().to_owned(), v.clone()))
            .collect()
    }

    /// Returns an iterator over environment variables.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns true if no variables are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }
}

impl EnvLookup for Env {
    fn get(&self, key: &str) -> Option<String> {
        Self::get(self, key).map(str::to_owned)
    }
}

impl EnvStore for Env {
    fn set(&mut self, key: &str, value: &str) {
        Self::set(self, key, value);
    }

    fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(&EnvKey::new(key))
    }
}

/// The real process environment.
///
/// Values that are not valid unicode are treated as unset.
#[derive(Debug)]
pub struct ProcessEnv {
    _private: (),
}

impl ProcessEnv {
    /// Binds a store to the process environment.
    ///
    /// # Safety
    ///
    /// Writing through the returned store calls [`std::env::set_var`]. The
    /// caller must ensure no other thread reads or writes the process
    /// environment while the store is alive.
    #[must_use]
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }
}

impl EnvLookup for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvStore for ProcessEnv {
    fn set(&mut self, key: &str, value: &str) {
        // SAFETY: guaranteed by the contract of `ProcessEnv::new`.
        unsafe {
            std::env::set_var(key, value);
        }
    }

    fn contains(&self, key: &str) -> bool {
        std::env::var_os(key).is_some()
    }
}

/// Read-only view of the process environment.
///
/// Used by [`crate::dotenv::parse`], which never writes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessLookup;

impl EnvLookup for ProcessLookup {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}
