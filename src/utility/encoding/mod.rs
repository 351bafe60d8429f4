// dotload: Dotenv Parser and Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Text decoding for dotenv files.
//!
//! ```text
//! bytes --(BOM?)--> UTF-8 / UTF-16LE / UTF-16BE --(decode)--> String
//!       --(none)--> UTF-8
//! ```
//!
//! Uses `encoding_rs`. Invalid sequences → U+FFFD.

use encoding_rs::UTF_8;
use std::borrow::Cow;

/// Encoding detected for a dotenv file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// UTF-8, with or without BOM
    Utf8,
    /// UTF-16 Little Endian (BOM required)
    Utf16Le,
    /// UTF-16 Big Endian (BOM required)
    Utf16Be,
}

/// Detects the encoding of `bytes` from its byte order mark.
#[must_use]
pub fn sniff_encoding(bytes: &[u8]) -> Encoding {
    match encoding_rs::Encoding::for_bom(bytes) {
        Some((enc, _)) if enc == encoding_rs::UTF_16LE => Encoding::Utf16Le,
        Some((enc, _)) if enc == encoding_rs::UTF_16BE => Encoding::Utf16Be,
        _ => Encoding::Utf8,
    }
}

/// Decodes file content to UTF-8, stripping any byte order mark.
///
/// # Example
/// ```
/// use dotload::utility::encoding::decode_text;
///
/// let text = decode_text(b"\xEF\xBB\xBFKEY=value");
/// assert_eq!(text, "KEY=value");
/// ```
#[must_use]
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    // `decode` sniffs the BOM itself and falls back to the given encoding.
    let (text, used, had_errors) = UTF_8.decode(bytes);
    if had_errors {
        tracing::debug!(encoding = used.name(), "replaced invalid sequences while decoding");
    }
    text
}
