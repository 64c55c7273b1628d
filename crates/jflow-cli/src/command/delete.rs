//! `jflow delete`: remove an object.

use anyhow::Context;
use clap::Args;
use jflow_s3::S3Client;
use url::Url;

use crate::TRACING_TARGET_COMMAND;

/// Arguments of `jflow delete`.
#[derive(Debug, Clone, Args)]
pub struct DeleteArgs {
    /// Object URL, plain or pre-signed.
    pub url: Url,
}

impl DeleteArgs {
    pub async fn execute(self, client: &S3Client) -> anyhow::Result<()> {
        client
            .object_operations()
            .delete_object(&self.url)
            .await
            .with_context(|| format!("failed to delete '{}'", self.url))?;

        tracing::info!(target: TRACING_TARGET_COMMAND, url = %self.url, "Object deleted");
        Ok(())
    }
}
