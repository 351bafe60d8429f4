// dotload: Dotenv Parser and Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, DotloadError, FsError, ProcessError, bail_out};

#[test]
fn test_fs_error_display() {
    let err = FsError::ReadFailed {
        path: "/srv/app/.env".to_string(),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied"),
    };
    insta::assert_snapshot!(err.to_string(), @"failed to read '/srv/app/.env': permission denied");
}

#[test]
fn test_boxed_conversion() {
    let err: DotloadError = ProcessError::ExecutableNotFound {
        name: "nope".to_string(),
    }
    .into();
    insta::assert_snapshot!(err.to_string(), @"process error: executable not found: 'nope' (not in PATH)");
}

#[test]
fn test_bail_out() {
    let err = bail_out("no command given");
    assert!(matches!(err, DotloadError::Bailed(_)));
    assert_eq!(err.to_string(), "fatal error: no command given");
}

#[test]
fn test_config_error_converts_to_anyhow() {
    let err: anyhow::Error = DotloadError::from(ConfigError::ParseError {
        path: "dotload.toml".to_string(),
        message: "expected `]`".to_string(),
    })
    .into();
    insta::assert_snapshot!(
        err.to_string(),
        @"config error: failed to parse config file 'dotload.toml': expected `]`"
    );
}

#[test]
fn test_dotload_error_size() {
    // Every variant holds one Box (a fat pointer for Box<str>).
    let size = std::mem::size_of::<DotloadError>();
    assert!(size <= 24, "DotloadError is {size} bytes, expected <= 24");
}
