//! kube-ident CLI entry point.
//!
//! Loads configuration, installs logging, and dispatches to the validation
//! commands in `kube_ident::cli`.

mod cli_init;
mod cli_parser;

use std::ffi::OsString;
use std::path::Path;
use std::process::ExitCode;

use kube_ident::cli::{self, EXIT_USAGE};
use kube_ident::config::OutputFormat;

fn main() -> ExitCode {
    let (flags, args) = match cli::extract_global_flags(std::env::args_os().skip(1)) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("Error: {}", e);
            cli_parser::print_usage();
            return exit(EXIT_USAGE);
        }
    };

    let config = match cli_init::load_config(&flags) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return exit(EXIT_USAGE);
        }
    };
    cli_init::init_tracing(&config);

    let command = args.first().and_then(|a| a.to_str()).unwrap_or("help");
    let rest = args.get(1..).unwrap_or_default();

    match command {
        "help" | "--help" | "-h" => {
            match rest.first().and_then(|a| a.to_str()) {
                Some(sub) => cli_parser::print_command_help(sub),
                None => cli_parser::print_usage(),
            }
            ExitCode::SUCCESS
        }
        "version" | "--version" | "-V" => {
            println!("kube-ident {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        "labels" => exit(cli::run_labels(rest, config.output)),
        "annotations" => exit(cli::run_annotations(rest, config.output)),
        "fields" => run_fields_cmd(rest, config.output),
        other => match cli::field_for_command(other) {
            Some(field) => match rest.first() {
                Some(value) => exit(cli::run_check(field, value.as_encoded_bytes(), config.output)),
                None => {
                    eprintln!("Missing value for '{}'", other);
                    cli_parser::print_command_help(other);
                    exit(EXIT_USAGE)
                }
            },
            None => {
                eprintln!("Unknown command: {}", other);
                cli_parser::print_usage();
                exit(EXIT_USAGE)
            }
        },
    }
}

fn run_fields_cmd(rest: &[OsString], output: OutputFormat) -> ExitCode {
    match rest.first() {
        Some(path) => exit(cli::run_fields(Path::new(path), output)),
        None => {
            eprintln!("Missing field set file");
            cli_parser::print_command_help("fields");
            exit(EXIT_USAGE)
        }
    }
}

fn exit(code: i32) -> ExitCode {
    ExitCode::from(code as u8)
}
