//! `jflow get`: download an object.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use jflow_s3::{ObjectStream, S3Client};
use tokio::io::{self, AsyncWrite, AsyncWriteExt};
use url::Url;

use crate::TRACING_TARGET_COMMAND;

/// Arguments of `jflow get`.
#[derive(Debug, Clone, Args)]
pub struct GetArgs {
    /// Object URL, plain or pre-signed.
    pub url: Url,

    /// Write the body to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl GetArgs {
    pub async fn execute(self, client: &S3Client) -> anyhow::Result<()> {
        let object = client
            .object_operations()
            .get_object_stream(&self.url)
            .await
            .with_context(|| format!("failed to fetch '{}'", self.url))?;

        let written = match &self.output {
            Some(path) => write_to_file(object, path).await?,
            None => copy_body(object, &mut io::stdout()).await?,
        };

        tracing::info!(
            target: TRACING_TARGET_COMMAND,
            url = %self.url,
            size = written,
            "Download complete"
        );
        Ok(())
    }
}

async fn write_to_file(object: ObjectStream, path: &Path) -> anyhow::Result<u64> {
    let mut file = tokio::fs::File::create(path)
        .await
        .with_context(|| format!("failed to create '{}'", path.display()))?;

    copy_body(object, &mut file)
        .await
        .with_context(|| format!("failed to write '{}'", path.display()))
}

async fn copy_body<W>(object: ObjectStream, writer: &mut W) -> anyhow::Result<u64>
where
    W: AsyncWrite + Unpin,
{
    let mut reader = object.into_reader();
    let written = io::copy(&mut reader, writer)
        .await
        .context("failed to copy object body")?;
    writer.flush().await?;
    Ok(written)
}
