//! `jflow stat`: print object metadata.

use anyhow::Context;
use clap::Args;
use jflow_s3::S3Client;
use url::Url;

/// Arguments of `jflow stat`.
#[derive(Debug, Clone, Args)]
pub struct StatArgs {
    /// Object URL, plain or pre-signed.
    pub url: Url,
}

impl StatArgs {
    pub async fn execute(self, client: &S3Client) -> anyhow::Result<()> {
        let info = client
            .object_operations()
            .get_object_info(&self.url)
            .await
            .with_context(|| format!("failed to stat '{}'", self.url))?;

        let json = serde_json::to_string_pretty(&info).context("failed to serialize metadata")?;
        println!("{json}");
        Ok(())
    }
}
