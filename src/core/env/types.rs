// dotload: Dotenv Parser and Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Store traits and key type for environment variable management.
//!
//! # Architecture
//!
//! ```text
//! EnvLookup: get            (parser substitution fallback)
//! EnvStore:  + set/contains (loader install, override-skip)
//! EnvKey:    case-insensitive on Windows only (PATH == Path)
//! ```

/// Read access to a set of environment variables.
pub trait EnvLookup {
    /// Returns the value of `key`, if set.
    fn get(&self, key: &str) -> Option<String>;
}

/// Read/write access to a set of environment variables.
pub trait EnvStore: EnvLookup {
    /// Sets `key` to `value`, replacing any existing value.
    ///
    /// The loader never passes a value containing a NUL byte.
    fn set(&mut self, key: &str, value: &str);

    /// Returns true if `key` is present, even with an empty value.
    fn contains(&self, key: &str) -> bool;
}

/// An environment variable key, compared case-insensitively on Windows.
#[derive(Debug, Clone, Eq)]
pub(super) struct EnvKey(String);

impl EnvKey {
    pub(super) fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub(super) fn as_str(&self) -> &str {
        &self.0
    }

    fn folded(&self) -> std::borrow::Cow<'_, str> {
        if cfg!(windows) {
            std::borrow::Cow::Owned(self.0.to_ascii_lowercase())
        } else {
            std::borrow::Cow::Borrowed(&self.0)
        }
    }
}

impl PartialEq for EnvKey {
    fn eq(&self, other: &Self) -> bool {
        self.folded() == other.folded()
    }
}

impl std::hash::Hash for EnvKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.folded().hash(state);
    }
}

impl PartialOrd for EnvKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EnvKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.folded().cmp(&other.folded())
    }
}
