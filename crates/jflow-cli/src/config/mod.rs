//! CLI configuration management.
//!
//! ```text
//! Cli
//! ├── s3: S3Config      # Endpoint, bucket, credentials, presign lifetime
//! └── command: Command  # put | get | stat | delete | check
//! ```
//!
//! All connection options can be provided via CLI arguments or environment
//! variables. Use `--help` to see all available options.
//!
//! # Example
//!
//! ```bash
//! jflow --s3-endpoint localhost:9000 --s3-protocol http --s3-bucket documents \
//!     --s3-access-key minioadmin --s3-secret-key minioadmin put report.pdf
//!
//! # Or via environment variables
//! S3_ENDPOINT=localhost:9000 S3_PROTOCOL=http S3_BUCKET=documents jflow check
//! ```

use std::process;

use clap::Parser;
use jflow_s3::S3Config;

use crate::command::Command;
use crate::{TRACING_TARGET_CONFIG, TRACING_TARGET_STARTUP};

/// Complete CLI configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "jflow")]
#[command(about = "Upload, fetch and delete objects on S3-compatible storage")]
#[command(version)]
pub struct Cli {
    /// Connection configuration.
    #[command(flatten)]
    pub s3: S3Config,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Loads environment variables from .env file (if enabled) and parses CLI arguments.
    ///
    /// The .env file is loaded before clap parses arguments, so its values
    /// act as defaults for the `S3_*` variables.
    pub fn init() -> Self {
        Self::load_dotenv();
        Self::parse()
    }

    #[cfg(feature = "dotenv")]
    fn load_dotenv() {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            eprintln!("Warning: failed to load .env file: {err}");
        }
    }

    #[cfg(not(feature = "dotenv"))]
    fn load_dotenv() {}

    /// Logs configuration (no sensitive information).
    pub fn log(&self) {
        tracing::debug!(
            target: TRACING_TARGET_STARTUP,
            version = env!("CARGO_PKG_VERSION"),
            pid = process::id(),
            features = ?Self::enabled_features(),
            "Build information"
        );

        tracing::debug!(
            target: TRACING_TARGET_CONFIG,
            endpoint = %self.s3.endpoint_masked(),
            bucket = %self.s3.bucket,
            region = %self.s3.region(),
            addressing_style = %self.s3.addressing_style,
            access_key = %self.s3.credentials.access_key_masked(),
            presign_lifetime_secs = self.s3.presign_lifetime_secs,
            request_timeout_secs = self.s3.request_timeout_secs,
            max_retries = self.s3.max_retries,
            "S3 configuration"
        );
    }

    /// Returns a list of enabled compile-time features.
    fn enabled_features() -> Vec<&'static str> {
        [cfg!(feature = "dotenv").then_some("dotenv")]
            .into_iter()
            .flatten()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use jflow_s3::AddressingStyle;

    use super::*;

    const CONNECTION: [&str; 9] = [
        "jflow",
        "--s3-endpoint",
        "localhost:9000",
        "--s3-bucket",
        "documents",
        "--s3-access-key",
        "minioadmin",
        "--s3-secret-key",
        "minioadmin",
    ];

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(CONNECTION.iter().chain(args)).unwrap()
    }

    #[test]
    fn test_parse_put() {
        let cli = parse(&["put", "report.pdf", "--content-type", "application/pdf", "--presign"]);

        let Command::Put(args) = cli.command else {
            panic!("expected put command");
        };
        assert_eq!(args.file, PathBuf::from("report.pdf"));
        assert_eq!(args.content_type.as_deref(), Some("application/pdf"));
        assert!(args.presign);
        assert!(args.name.is_none());
    }

    #[test]
    fn test_parse_connection_options() {
        let cli = parse(&["--s3-addressing-style", "virtual-host", "check"]);

        assert_eq!(cli.s3.bucket, "documents");
        assert_eq!(cli.s3.addressing_style, AddressingStyle::VirtualHost);
        assert!(matches!(cli.command, Command::Check));
    }

    #[test]
    fn test_parse_get_requires_url() {
        let args = CONNECTION.iter().chain(&["get", "not a url"]);
        assert!(Cli::try_parse_from(args).is_err());

        let cli = parse(&["get", "http://localhost:9000/documents/a.dat", "-o", "out.bin"]);
        let Command::Get(args) = cli.command else {
            panic!("expected get command");
        };
        assert_eq!(args.url.path(), "/documents/a.dat");
        assert_eq!(args.output, Some(PathBuf::from("out.bin")));
    }
}
