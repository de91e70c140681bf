// Copyright 2026 kube-ident Contributors
// SPDX-License-Identifier: Apache-2.0

//! Command implementations for `kube-ident-cli`.
//!
//! Every `run_*` function prints its report to stdout and returns the process
//! exit code.

pub mod args;
pub mod commands;
pub mod report;

pub use args::{extract_global_flags, GlobalFlags};
pub use commands::{
    check_annotations, check_labels, check_value, field_for_command, load_fields,
    run_annotations, run_check, run_fields, run_labels, CliError,
};
pub use report::{format_human, format_json, render, Report};

/// All checked values passed.
pub const EXIT_VALID: i32 = 0;
/// At least one value failed validation.
pub const EXIT_INVALID: i32 = 1;
/// Usage, input, or configuration error.
pub const EXIT_USAGE: i32 = 2;
