//! Tracing subscriber setup

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogConfig;

/// Build the filter: RUST_LOG wins over the configured level.
fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Install the global subscriber.
///
/// Logs go to stderr, or to `config.file` through a non-blocking writer.
/// The returned guard flushes the file writer on drop and must be held
/// until the program exits.
pub fn init_logging(config: &LogConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = env_filter(&config.level);

    match &config.file {
        Some(path) => {
            let (dir, file_name) = split_log_path(path)?;
            std::fs::create_dir_all(dir)?;

            let appender = tracing_appender::rolling::never(dir, file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);

            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(non_blocking)
                        .with_ansi(false)
                        .with_target(true),
                )
                .with(filter)
                .try_init()?;

            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .without_time()
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .try_init()?;

            Ok(None)
        }
    }
}

fn split_log_path(path: &Path) -> anyhow::Result<(&Path, &std::ffi::OsStr)> {
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("Log file path has no file name: {:?}", path))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    Ok((dir, file_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/var/log/vercmp.log", "/var/log", "vercmp.log")]
    #[case("vercmp.log", ".", "vercmp.log")]
    #[case("logs/vercmp.log", "logs", "vercmp.log")]
    fn split_log_path_returns_dir_and_file(
        #[case] input: &str,
        #[case] dir: &str,
        #[case] file: &str,
    ) {
        let (d, f) = split_log_path(Path::new(input)).unwrap();
        assert_eq!(d, Path::new(dir));
        assert_eq!(f, file);
    }

    #[test]
    fn split_log_path_rejects_paths_without_file_name() {
        assert!(split_log_path(Path::new("/")).is_err());
    }
}
