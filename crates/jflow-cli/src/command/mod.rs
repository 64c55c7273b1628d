//! Subcommands and their handlers.

mod delete;
mod get;
mod put;
mod stat;

use anyhow::Context;
use clap::Subcommand;
use jflow_s3::S3Client;

pub use self::delete::DeleteArgs;
pub use self::get::GetArgs;
pub use self::put::PutArgs;
pub use self::stat::StatArgs;
use crate::TRACING_TARGET_COMMAND;

/// Available subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Upload a file as a new object and print its URL.
    Put(PutArgs),
    /// Download the object at a URL.
    Get(GetArgs),
    /// Print the metadata of the object at a URL as JSON.
    Stat(StatArgs),
    /// Delete the object at a URL.
    Delete(DeleteArgs),
    /// Check that the configured bucket is reachable.
    Check,
}

impl Command {
    /// Runs the command against `client`.
    pub async fn execute(self, client: &S3Client) -> anyhow::Result<()> {
        match self {
            Self::Put(args) => args.execute(client).await,
            Self::Get(args) => args.execute(client).await,
            Self::Stat(args) => args.execute(client).await,
            Self::Delete(args) => args.execute(client).await,
            Self::Check => {
                client
                    .test_connection()
                    .await
                    .with_context(|| format!("bucket '{}' is not reachable", client.config().bucket))?;

                tracing::info!(
                    target: TRACING_TARGET_COMMAND,
                    bucket = %client.config().bucket,
                    "Connection check passed"
                );
                println!("ok");
                Ok(())
            }
        }
    }
}
