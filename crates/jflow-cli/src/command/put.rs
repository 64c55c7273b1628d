//! `jflow put`: upload a local file.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use jflow_s3::{S3Client, UploadRequest};
use tokio::fs::File;

use crate::TRACING_TARGET_COMMAND;

/// Arguments of `jflow put`.
#[derive(Debug, Clone, Args)]
pub struct PutArgs {
    /// File to upload.
    pub file: PathBuf,

    /// Content type stored with the object.
    #[arg(long)]
    pub content_type: Option<String>,

    /// Filename embedded in the object key (defaults to the file's name).
    #[arg(long)]
    pub name: Option<String>,

    /// Print a pre-signed URL instead of the plain object URL.
    #[arg(long)]
    pub presign: bool,
}

impl PutArgs {
    pub async fn execute(self, client: &S3Client) -> anyhow::Result<()> {
        let filename = match self.name {
            Some(name) => name,
            None => file_name(&self.file)?,
        };

        let file = File::open(&self.file)
            .await
            .with_context(|| format!("failed to open '{}'", self.file.display()))?;
        let length = file
            .metadata()
            .await
            .with_context(|| format!("failed to read metadata of '{}'", self.file.display()))?
            .len();

        let mut request = UploadRequest::new(filename).with_content_length(length);
        if let Some(content_type) = self.content_type {
            request = request.with_content_type(content_type);
        }

        let objects = client.object_operations();
        let upload = if self.presign {
            objects.put_object_stream_presigned(file, request).await
        } else {
            objects.put_object_stream(file, request).await
        }
        .with_context(|| format!("failed to upload '{}'", self.file.display()))?;

        tracing::info!(
            target: TRACING_TARGET_COMMAND,
            key = %upload.key,
            size = upload.size,
            expires_at = ?upload.expires_at,
            "Upload complete"
        );
        println!("{}", upload.url);
        Ok(())
    }
}

fn file_name(path: &Path) -> anyhow::Result<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .with_context(|| format!("'{}' does not name a file", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name() {
        assert_eq!(file_name(Path::new("/tmp/report.pdf")).unwrap(), "report.pdf");
        assert_eq!(file_name(Path::new("notes.txt")).unwrap(), "notes.txt");
        assert!(file_name(Path::new("/")).is_err());
        assert!(file_name(Path::new("dir/..")).is_err());
    }
}
