// Copyright 2026 kube-ident Contributors
// SPDX-License-Identifier: Apache-2.0

//! Global flag extraction.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::config::LogFormat;

use super::commands::CliError;

/// Flags accepted anywhere on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalFlags {
    pub json: bool,
    pub verbose: bool,
    pub config: Option<PathBuf>,
    pub log_format: Option<LogFormat>,
}

/// Pull global flags out of `args`, returning them with the remaining
/// positional arguments in order. Everything after `--` is positional.
pub fn extract_global_flags(
    args: impl IntoIterator<Item = OsString>,
) -> Result<(GlobalFlags, Vec<OsString>), CliError> {
    let mut flags = GlobalFlags::default();
    let mut positional = Vec::new();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.to_str() {
            Some("--") => {
                positional.extend(args.by_ref());
                break;
            }
            Some("--json") => flags.json = true,
            Some("-v") | Some("--verbose") => flags.verbose = true,
            Some("--config") => {
                let path = args
                    .next()
                    .ok_or_else(|| CliError::MissingValue("--config".to_string()))?;
                flags.config = Some(PathBuf::from(path));
            }
            Some("--log-format") => {
                let value = args
                    .next()
                    .ok_or_else(|| CliError::MissingValue("--log-format".to_string()))?;
                let text = value.to_string_lossy();
                flags.log_format = Some(text.parse().map_err(|()| CliError::InvalidFlag {
                    flag: "--log-format",
                    value: text.to_string(),
                })?);
            }
            _ => positional.push(arg),
        }
    }

    Ok((flags, positional))
}

#[cfg(test)]
#[path = "args_tests.rs"]
mod tests;
