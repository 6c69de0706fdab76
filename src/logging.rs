use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogConfig;

/// Environment variable naming a log file; takes precedence over the config.
pub const LOG_ENV: &str = "GOMOKU_LOG";

/// Pick the log file base path: the CLI flag, then `GOMOKU_LOG`, then the
/// config file. `None` disables logging.
pub fn resolve_log_path(config: &LogConfig, cli_override: Option<&Path>) -> Option<PathBuf> {
    cli_override
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(LOG_ENV).map(PathBuf::from))
        .or_else(|| config.file.clone())
}

/// `{base}.{timestamp}.{pid}`, so concurrent games never share a file.
pub fn unique_log_path(base: &Path, timestamp: u64, pid: u32) -> PathBuf {
    let mut name = base.as_os_str().to_owned();
    name.push(format!(".{timestamp}.{pid}"));
    PathBuf::from(name)
}

/// Initialize tracing with file output.
///
/// Logging stays off unless a path is configured: stdout and stderr belong
/// to the TUI. `RUST_LOG` overrides the configured level.
pub fn init_tracing(config: &LogConfig, cli_override: Option<&Path>) -> Option<PathBuf> {
    let base = resolve_log_path(config, cli_override)?;

    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let path = unique_log_path(&base, timestamp, std::process::id());

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let file = match std::fs::File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: failed to create log file {}: {err}", path.display());
            return None;
        }
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_log_path_appends_suffix() {
        let path = unique_log_path(Path::new("/tmp/gomoku.log"), 1700000000, 42);
        assert_eq!(path, PathBuf::from("/tmp/gomoku.log.1700000000.42"));
    }

    #[test]
    fn test_resolve_prefers_cli() {
        let config = LogConfig {
            file: Some(PathBuf::from("from-config.log")),
            ..LogConfig::default()
        };
        assert_eq!(
            resolve_log_path(&config, Some(Path::new("from-cli.log"))),
            Some(PathBuf::from("from-cli.log"))
        );
    }

    #[test]
    fn test_resolve_falls_back_to_config() {
        // Only meaningful when GOMOKU_LOG is unset.
        if std::env::var_os(LOG_ENV).is_some() {
            return;
        }
        let config = LogConfig {
            file: Some(PathBuf::from("from-config.log")),
            ..LogConfig::default()
        };
        assert_eq!(
            resolve_log_path(&config, None),
            Some(PathBuf::from("from-config.log"))
        );
        assert_eq!(resolve_log_path(&LogConfig::default(), None), None);
    }
}
