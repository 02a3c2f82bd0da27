use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Default, Parser)]
#[command(
    name = "cryptodesk",
    version,
    about = "Look up cryptocurrency market data and keep a saved list on a tracker backend",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Base URL of the tracker backend.
    #[arg(short, long, value_name = "URL", env = "CRYPTODESK_BACKEND_URL")]
    pub backend_url: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, value_name = "SECONDS")]
    pub timeout_secs: Option<u64>,

    /// Timestamp format for the saved list (chrono format).
    #[arg(long, value_name = "FORMAT")]
    pub timestamp_format: Option<String>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::parse_from([
            "cryptodesk",
            "--backend-url",
            "http://tracker.local:9000",
            "--timeout-secs",
            "5",
            "--log-level",
            "debug",
        ]);

        assert_eq!(args.backend_url.as_deref(), Some("http://tracker.local:9000"));
        assert_eq!(args.timeout_secs, Some(5));
        assert_eq!(args.log_level, Some(LogLevel::Debug));
        assert!(args.accent_color.is_none());
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let result = CliArgs::try_parse_from(["cryptodesk", "--log-level", "loud"]);
        assert!(result.is_err());
    }
}
