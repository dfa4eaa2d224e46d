//! CLI command implementations

use std::path::Path;

use tracing::info;

use crate::http_server::{HttpServer, ServerConfig};
use crate::logging::init_logging;

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Overrides supplied on the `serve` command line
#[derive(Debug, Default, Clone)]
pub struct ServeOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub log_level: Option<String>,
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config } => init(&config),
        Command::Serve {
            config,
            host,
            port,
            log_level,
        } => serve(
            config.as_deref(),
            ServeOverrides {
                host,
                port,
                log_level,
            },
        ),
    }
}

/// Write a default config file. Refuses to overwrite an existing one.
pub fn init(config_path: &Path) -> CliResult<()> {
    if config_path.exists() {
        return Err(CliError::already_initialized(config_path.display()));
    }

    ServerConfig::default().save(config_path)?;
    println!("Wrote default configuration to {}", config_path.display());

    Ok(())
}

/// Resolve the effective config: defaults, then file, then flags
pub fn resolve_config(
    config_path: Option<&Path>,
    overrides: ServeOverrides,
) -> CliResult<ServerConfig> {
    let mut config = match config_path {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };

    if let Some(host) = overrides.host {
        config.host = host;
    }
    if let Some(port) = overrides.port {
        config.port = port;
    }
    if let Some(level) = overrides.log_level {
        config.log_level = level;
    }

    Ok(config)
}

/// Start the HTTP server and block until it shuts down
pub fn serve(config_path: Option<&Path>, overrides: ServeOverrides) -> CliResult<()> {
    let config = resolve_config(config_path, overrides)?;

    init_logging(&config.log_level)?;
    info!(addr = %config.socket_addr(), "starting userdb");

    let server = HttpServer::with_config(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::errors::CliErrorCode;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_default_config() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("userdb.json");

        init(&path).unwrap();
        assert_eq!(ServerConfig::load(&path).unwrap(), ServerConfig::default());
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("userdb.json");

        init(&path).unwrap();
        let err = init(&path).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::AlreadyInitialized);
    }

    #[test]
    fn test_flags_override_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("userdb.json");
        ServerConfig {
            host: "0.0.0.0".to_string(),
            ..ServerConfig::with_port(9100)
        }
        .save(&path)
        .unwrap();

        let config = resolve_config(
            Some(path.as_path()),
            ServeOverrides {
                port: Some(9200),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9200);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_missing_config_file_is_config_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nope.json");
        let err = resolve_config(Some(path.as_path()), ServeOverrides::default()).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
    }
}
