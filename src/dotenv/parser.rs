// dotload: Dotenv Parser and Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Line parser.
//!
//! ```text
//! line --> blank/comment?  --> skip
//!      --> assignment?     --> trim --> strip quotes --> unescape ("..")
//!      |                          --> substitute (not '..') --> var / include
//!      --> contains directive? --> path after name --> substitute --> ~ --> include
//!      --> else                --> Diagnostic::MalformedLine
//!
//! assignment = [export\s+] KEY (\s*=\s* | :\s) [VALUE] [\s*#...]
//! KEY        = [alnum _ .]+
//! VALUE      = '...' | "..." | [^#]+    (first alternative that fits wins)
//! ```

use tracing::trace;

use super::substitute::{expand_home, substitute, unescape};
use super::types::{Diagnostic, DiagnosticSink, Directive, ParsedEnv, TracingSink};
use crate::core::env::container::ProcessLookup;
use crate::core::env::types::EnvLookup;

/// How a value was quoted in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quote {
    None,
    Single,
    Double,
}

/// Parses dotenv text, resolving references against the process environment.
///
/// Malformed lines are reported through `tracing`. The environment is only
/// read, never written.
#[must_use]
pub fn parse(content: &str) -> ParsedEnv {
    parse_with(content, &ProcessLookup, &mut TracingSink)
}

/// Parses dotenv text with an injected environment and diagnostic sink.
pub fn parse_with(
    content: &str,
    env: &impl EnvLookup,
    sink: &mut impl DiagnosticSink,
) -> ParsedEnv {
    let mut parsed = ParsedEnv::new();

    for (index, line) in content.lines().enumerate() {
        if is_blank_or_comment(line) {
            continue;
        }

        if let Some((key, raw_value)) = split_assignment(line) {
            let value = finish_value(raw_value, env, &parsed);
            if let Some(directive) = Directive::from_key(key) {
                let path = expand_home(&value, env);
                trace!(directive = %directive, path = %path, "include");
                parsed.push_include(directive, path);
            } else {
                trace!(key, "assignment");
                parsed.insert_var(key, value);
            }
            continue;
        }

        match parse_directive_line(line, env, &parsed) {
            Some((directive, path)) => {
                trace!(directive = %directive, path = %path, "include");
                parsed.push_include(directive, path);
            }
            None => sink.report(Diagnostic::MalformedLine {
                source: None,
                line_number: index + 1,
                line: line.to_string(),
            }),
        }
    }

    parsed
}

/// Blank, whitespace-only, or `#` comment lines. Indented comments count.
fn is_blank_or_comment(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// Splits an assignment line into its key and raw (untrimmed) value.
///
/// Returns `None` when the whole line does not match the assignment grammar.
fn split_assignment(line: &str) -> Option<(&str, &str)> {
    if let Some(rest) = line.strip_prefix("export")
        && rest.starts_with(char::is_whitespace)
        && let Some(found) = split_key_value(rest.trim_start())
    {
        return Some(found);
    }
    // `export=1` and friends assign the key `export`.
    split_key_value(line)
}

fn split_key_value(s: &str) -> Option<(&str, &str)> {
    let key_len = s.find(|c: char| !is_key_char(c)).unwrap_or(s.len());
    if key_len == 0 {
        return None;
    }
    let (key, after_key) = s.split_at(key_len);

    let rest = if let Some(after_colon) = after_key.strip_prefix(':') {
        let mut chars = after_colon.chars();
        match chars.next() {
            Some(c) if c.is_whitespace() => chars.as_str(),
            _ => return None,
        }
    } else {
        after_key.trim_start().strip_prefix('=')?
    };

    split_value(rest.trim_start()).map(|value| (key, value))
}

fn is_key_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '.'
}

/// Picks the value out of whatever follows the separator.
///
/// Quoted candidates are tried longest first and must be followed only by an
/// optional comment. An unquoted value runs up to the first `#`.
fn split_value(rest: &str) -> Option<&str> {
    for quote in ['\'', '"'] {
        if !rest.starts_with(quote) {
            continue;
        }
        let candidate = rest[1..]
            .rmatch_indices(quote)
            .map(|(i, _)| i + 2)
            .find(|&end| is_trailer(&rest[end..]));
        if let Some(end) = candidate {
            return Some(&rest[..end]);
        }
    }

    match rest.find('#') {
        Some(0) => Some(""),
        Some(i) => Some(&rest[..i]),
        None => Some(rest),
    }
}

/// Nothing at all, or optional whitespace and a `#` comment. Bare trailing
/// whitespace does not count.
fn is_trailer(s: &str) -> bool {
    s.is_empty() || s.trim_start().starts_with('#')
}

/// Applies trimming, quote stripping, unescaping and substitution.
fn finish_value(raw: &str, env: &impl EnvLookup, parsed: &ParsedEnv) -> String {
    let trimmed = raw.trim();
    let (quote, inner) = strip_quotes(trimmed);

    match quote {
        Quote::Single => inner.to_string(),
        Quote::Double => substitute(&unescape(inner), env, parsed.vars()),
        Quote::None => substitute(inner, env, parsed.vars()),
    }
}

/// Strips one matching pair of surrounding quotes.
fn strip_quotes(value: &str) -> (Quote, &str) {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 && bytes[0] == bytes[bytes.len() - 1] {
        match bytes[0] {
            b'\'' => return (Quote::Single, &value[1..value.len() - 1]),
            b'"' => return (Quote::Double, &value[1..value.len() - 1]),
            _ => {}
        }
    }
    (Quote::None, value)
}

/// Recognises a non-assignment line that names an include directive anywhere.
///
/// The path is whatever follows the last occurrence of the first directive
/// name found on the line. An empty path is not a directive.
fn parse_directive_line(
    line: &str,
    env: &impl EnvLookup,
    parsed: &ParsedEnv,
) -> Option<(Directive, String)> {
    let directive = Directive::ALL
        .into_iter()
        .find(|d| line.contains(d.as_str()))?;
    let (_, tail) = line.rsplit_once(directive.as_str())?;
    let path = substitute(tail.trim(), env, parsed.vars());
    let path = expand_home(&path, env);
    (!path.is_empty()).then_some((directive, path))
}
