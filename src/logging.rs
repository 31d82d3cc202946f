//! File logging for the TUI. The terminal belongs to ratatui, so nothing is
//! ever written to stdout or stderr once the UI is up.

use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file.
pub const LOG_ENV_VAR: &str = "REPO_VIEWER_LOG";

/// Filter used when `RUST_LOG` is unset: this crate at `info`, dependencies
/// (reqwest, hyper) only when they warn.
const DEFAULT_FILTER: &str = "warn,repo_viewer=info";

/// `{base}.{timestamp}.{pid}`, so concurrent instances never share a file.
pub fn log_file_path(base: &Path, timestamp: u64, pid: u32) -> PathBuf {
    let mut name = base.as_os_str().to_owned();
    name.push(format!(".{timestamp}.{pid}"));
    PathBuf::from(name)
}

/// Install the global subscriber if `REPO_VIEWER_LOG` is set.
///
/// Returns the file actually written to. Called before the terminal is
/// taken over, so a failure to open the file is still reported on stderr.
pub fn init_tracing() -> Option<PathBuf> {
    let base = PathBuf::from(std::env::var_os(LOG_ENV_VAR)?);
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let path = log_file_path(&base, timestamp, std::process::id());

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(err) = std::fs::create_dir_all(parent) {
            eprintln!("Warning: cannot create log directory {}: {err}", parent.display());
            return None;
        }
    }
    let file = match std::fs::File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: cannot create log file {}: {err}", path.display());
            return None;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

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
    fn log_file_gets_timestamp_and_pid_suffix() {
        let path = log_file_path(Path::new("/tmp/logs/viewer.log"), 1_700_000_000, 42);
        assert_eq!(path, PathBuf::from("/tmp/logs/viewer.log.1700000000.42"));
    }

    #[test]
    fn bare_file_name_stays_relative() {
        let path = log_file_path(Path::new("viewer.log"), 1, 2);
        assert_eq!(path, PathBuf::from("viewer.log.1.2"));
        assert_eq!(path.parent(), Some(Path::new("")));
    }

    #[test]
    fn default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }
}
