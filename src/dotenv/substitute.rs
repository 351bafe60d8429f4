// dotload: Dotenv Parser and Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Variable substitution.
//!
//! ```text
//! [\]  $  [{]  NAME  [}]        NAME = [A-Za-z0-9_]+
//!  |
//!  +-- escaped: emit "$" + rest verbatim, no lookup
//!  +-- plain:   env (non-empty) --> file vars --> ""
//! ```
//!
//! Braces are matched independently, so `${NAME` and `$NAME}` both count as
//! references and consume the brace they carry.

use std::collections::BTreeMap;

use crate::core::env::types::EnvLookup;

/// A `$NAME` reference found at the start of a slice.
struct Reference<'a> {
    /// `$`, optional braces and the name, without any escaping backslash.
    text: &'a str,
    name: &'a str,
}

/// Matches `$` + optional `{` + name + optional `}` at the start of `s`.
fn match_reference(s: &str) -> Option<Reference<'_>> {
    let rest = s.strip_prefix('$')?;
    let (open, rest) = match rest.strip_prefix('{') {
        Some(after) => (1, after),
        None => (0, rest),
    };
    let name_len = rest
        .find(|c: char| !is_name_char(c))
        .unwrap_or(rest.len());
    if name_len == 0 {
        return None;
    }
    let close = usize::from(rest[name_len..].starts_with('}'));
    let end = 1 + open + name_len + close;
    Some(Reference {
        text: &s[..end],
        name: &rest[..name_len],
    })
}

const fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Resolves `name` against the environment, then against the variables
/// assigned earlier in the same file.
fn resolve(name: &str, env: &impl EnvLookup, vars: &BTreeMap<String, String>) -> String {
    match env.get(name) {
        Some(value) if !value.is_empty() => value,
        _ => vars.get(name).cloned().unwrap_or_default(),
    }
}

/// Replaces every variable reference in `value` in a single pass.
///
/// Substituted text is not scanned again.
#[must_use]
pub fn substitute(value: &str, env: &impl EnvLookup, vars: &BTreeMap<String, String>) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(pos) = rest.find(['\\', '$']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if let Some(after_slash) = tail.strip_prefix('\\') {
            if let Some(reference) = match_reference(after_slash) {
                out.push_str(reference.text);
                rest = &after_slash[reference.text.len()..];
            } else {
                out.push('\\');
                rest = after_slash;
            }
            continue;
        }

        if let Some(reference) = match_reference(tail) {
            out.push_str(&resolve(reference.name, env, vars));
            rest = &tail[reference.text.len()..];
        } else {
            out.push('$');
            rest = &tail[1..];
        }
    }

    out.push_str(rest);
    out
}

/// Removes backslash escapes from a double-quoted value.
///
/// `\X` becomes `X` for any `X` except `$`; `\$` is kept so substitution can
/// recognise it as an escaped reference. A trailing lone backslash is kept.
#[must_use]
pub fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some(&next) if next != '$' => {
                out.push(next);
                chars.next();
            }
            _ => out.push('\\'),
        }
    }

    out
}

/// Expands a leading `~` to the home directory found in `env`.
///
/// Only `~` and `~/...` (or `~\...` on Windows) are expanded; anything else,
/// or a missing home variable, leaves the path unchanged.
#[must_use]
pub fn expand_home(path: &str, env: &impl EnvLookup) -> String {
    let Some(rest) = path.strip_prefix('~') else {
        return path.to_string();
    };
    let is_separator = |c: char| c == '/' || (cfg!(windows) && c == '\\');
    if !rest.is_empty() && !rest.starts_with(is_separator) {
        return path.to_string();
    }
    let home_var = if cfg!(windows) { "USERPROFILE" } else { "HOME" };
    match env.get(home_var) {
        Some(home) if !home.is_empty() => format!("{}{rest}", home.trim_end_matches(is_separator)),
        _ => path.to_string(),
    }
}
