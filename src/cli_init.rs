//! Configuration and logging setup for the CLI.

use tracing_subscriber::EnvFilter;

use kube_ident::cli::GlobalFlags;
use kube_ident::config::{self, CliConfig, ConfigError, LogFormat, OutputFormat};

/// Load configuration and apply command-line overrides on top of it.
pub fn load_config(flags: &GlobalFlags) -> Result<CliConfig, ConfigError> {
    let mut config = config::load(flags.config.as_deref())?;

    if flags.json {
        config.output = OutputFormat::Json;
    }
    if let Some(format) = flags.log_format {
        config.log_format = format;
    }
    if flags.verbose {
        config.log_level = "debug".to_string();
    }

    Ok(config)
}

/// Install the stderr subscriber. `RUST_LOG` wins over the configured level.
pub fn init_tracing(config: &CliConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = match config.log_format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };
    if let Err(e) = installed {
        eprintln!("Failed to install log subscriber: {}", e);
    }
}
