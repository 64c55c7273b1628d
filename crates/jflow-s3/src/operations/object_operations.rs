//! Object operations for S3 storage.
//!
//! This module provides upload, download, metadata and deletion of objects.
//! Uploads go to the configured bucket under a freshly generated
//! [`ObjectKey`]; every other operation addresses the object by URL, so
//! plain and pre-signed URLs handed out earlier can be passed back as is.

use std::time::{Duration, Instant};

use bytes::Bytes;
use futures::StreamExt;
use jiff::Timestamp;
use opendal::Writer;
use serde::Serialize;
use tokio::io::AsyncRead;
use tokio_util::io::ReaderStream;
use tracing::{debug, error, info, instrument, warn};
use url::Url;

use crate::types::{Object, ObjectInfo, ObjectKey, ObjectLocation, ObjectStream, UploadRequest};
use crate::{Error, Result, S3Client, TRACING_TARGET_OBJECTS};

/// Part size used for streaming uploads.
const UPLOAD_CHUNK_SIZE: usize = 8 * 1024 * 1024;

/// Read buffer size used when draining an upload source.
const READ_BUFFER_SIZE: usize = 64 * 1024;

/// Returns the instant a URL issued now with `lifetime` stops being valid.
///
/// Saturates at [`Timestamp::MAX`] for lifetimes beyond the representable
/// range.
pub fn expiration_from_now(lifetime: Duration) -> Timestamp {
    Timestamp::now()
        .checked_add(lifetime)
        .unwrap_or(Timestamp::MAX)
}

/// Result of an upload operation.
#[derive(Debug, Clone, Serialize)]
pub struct UploadResult {
    /// Bucket and key the object was stored under.
    pub location: ObjectLocation,
    /// Generated object key.
    pub key: ObjectKey,
    /// URL of the object, pre-signed when `expires_at` is set.
    pub url: Url,
    /// Size of the uploaded object in bytes.
    pub size: u64,
    /// Content type stored with the object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Expiration of a pre-signed URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<Timestamp>,
    /// Upload duration.
    #[serde(skip)]
    pub duration: Duration,
}

impl UploadResult {
    /// Returns whether `url` is a pre-signed URL.
    #[inline]
    pub fn is_presigned(&self) -> bool {
        self.expires_at.is_some()
    }
}

/// Object operations with a required S3 client.
#[derive(Debug, Clone)]
pub struct ObjectOperations {
    client: S3Client,
}

impl ObjectOperations {
    /// Creates new ObjectOperations with an S3 client.
    pub fn new(client: S3Client) -> Self {
        Self { client }
    }

    /// Uploads a buffered body and returns its plain URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the filename is empty, the body does not match
    /// the declared content length, or the upload fails.
    #[instrument(skip(self, data, request), target = TRACING_TARGET_OBJECTS, fields(filename = %request.filename))]
    pub async fn put_object(
        &self,
        data: impl Into<Bytes>,
        request: UploadRequest,
    ) -> Result<UploadResult> {
        self.upload_bytes(data.into(), request, false).await
    }

    /// Uploads a buffered body and returns a pre-signed GET URL.
    ///
    /// The URL is valid for the configured presign lifetime.
    ///
    /// # Errors
    ///
    /// Returns an error if the upload or URL signing fails.
    #[instrument(skip(self, data, request), target = TRACING_TARGET_OBJECTS, fields(filename = %request.filename))]
    pub async fn put_object_presigned(
        &self,
        data: impl Into<Bytes>,
        request: UploadRequest,
    ) -> Result<UploadResult> {
        self.upload_bytes(data.into(), request, true).await
    }

    /// Streams `reader` into a new object and returns its plain URL.
    ///
    /// The body is sent in parts as it is read, so the source never has to
    /// fit in memory. A partially written object is aborted on failure.
    ///
    /// # Errors
    ///
    /// Returns an error if reading the source fails, the byte count does not
    /// match the declared content length, or the upload fails.
    #[instrument(skip(self, reader, request), target = TRACING_TARGET_OBJECTS, fields(filename = %request.filename))]
    pub async fn put_object_stream<R>(&self, reader: R, request: UploadRequest) -> Result<UploadResult>
    where
        R: AsyncRead + Unpin + Send,
    {
        self.upload_stream(reader, request, false).await
    }

    /// Streams `reader` into a new object and returns a pre-signed GET URL.
    ///
    /// # Errors
    ///
    /// See [`put_object_stream`](Self::put_object_stream).
    #[instrument(skip(self, reader, request), target = TRACING_TARGET_OBJECTS, fields(filename = %request.filename))]
    pub async fn put_object_stream_presigned<R>(
        &self,
        reader: R,
        request: UploadRequest,
    ) -> Result<UploadResult>
    where
        R: AsyncRead + Unpin + Send,
    {
        self.upload_stream(reader, request, true).await
    }

    /// Downloads the object addressed by `url` into memory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if the URL does not address an object
    /// and [`Error::NotFound`] if the object does not exist.
    #[instrument(skip(self), target = TRACING_TARGET_OBJECTS, fields(url = %url))]
    pub async fn get_object(&self, url: &Url) -> Result<Object> {
        let location = self.locate(url)?;
        let operator = self.client.operator(&location.bucket)?;

        debug!(
            target: TRACING_TARGET_OBJECTS,
            bucket = %location.bucket,
            key = %location.key,
            "Downloading object"
        );

        let start = Instant::now();
        let result = async {
            let meta = operator.stat(&location.key).await?;
            let data = operator.read(&location.key).await?.to_bytes();
            Ok::<_, opendal::Error>((meta, data))
        }
        .await;
        let elapsed = start.elapsed();

        match result {
            Ok((meta, data)) => {
                info!(
                    target: TRACING_TARGET_OBJECTS,
                    bucket = %location.bucket,
                    key = %location.key,
                    size = data.len(),
                    elapsed = ?elapsed,
                    "Object downloaded successfully"
                );

                let info = ObjectInfo::from_metadata(&location, &meta);
                Ok(Object {
                    location,
                    info,
                    data,
                })
            }
            Err(e) => {
                error!(
                    target: TRACING_TARGET_OBJECTS,
                    bucket = %location.bucket,
                    key = %location.key,
                    error = %e,
                    elapsed = ?elapsed,
                    "Failed to download object"
                );
                Err(e.into())
            }
        }
    }

    /// Opens the object addressed by `url` for streaming.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if the URL does not address an object
    /// and [`Error::NotFound`] if the object does not exist.
    #[instrument(skip(self), target = TRACING_TARGET_OBJECTS, fields(url = %url))]
    pub async fn get_object_stream(&self, url: &Url) -> Result<ObjectStream> {
        let location = self.locate(url)?;
        let operator = self.client.operator(&location.bucket)?;

        debug!(
            target: TRACING_TARGET_OBJECTS,
            bucket = %location.bucket,
            key = %location.key,
            "Opening object stream"
        );

        let meta = operator.stat(&location.key).await.inspect_err(|e| {
            error!(target: TRACING_TARGET_OBJECTS, key = %location.key, error = %e, "Failed to stat object");
        })?;
        let stream = operator
            .reader(&location.key)
            .await?
            .into_bytes_stream(..)
            .await?;

        let info = ObjectInfo::from_metadata(&location, &meta);
        info!(
            target: TRACING_TARGET_OBJECTS,
            bucket = %location.bucket,
            key = %location.key,
            size = info.size,
            "Object stream opened"
        );

        Ok(ObjectStream::new(location, info, stream))
    }

    /// Fetches the metadata of the object addressed by `url`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if the URL does not address an object
    /// and [`Error::NotFound`] if the object does not exist.
    #[instrument(skip(self), target = TRACING_TARGET_OBJECTS, fields(url = %url))]
    pub async fn get_object_info(&self, url: &Url) -> Result<ObjectInfo> {
        let location = self.locate(url)?;
        let operator = self.client.operator(&location.bucket)?;

        debug!(
            target: TRACING_TARGET_OBJECTS,
            bucket = %location.bucket,
            key = %location.key,
            "Getting object info"
        );

        let meta = operator.stat(&location.key).await.inspect_err(|e| {
            error!(
                target: TRACING_TARGET_OBJECTS,
                bucket = %location.bucket,
                key = %location.key,
                error = %e,
                "Failed to get object info"
            );
        })?;

        let info = ObjectInfo::from_metadata(&location, &meta);
        debug!(
            target: TRACING_TARGET_OBJECTS,
            bucket = %location.bucket,
            key = %location.key,
            size = info.size,
            "Object info retrieved"
        );

        Ok(info)
    }

    /// Deletes the object addressed by `url`.
    ///
    /// Deleting an object that does not exist succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if the URL does not address an object,
    /// or an error if the deletion fails.
    #[instrument(skip(self), target = TRACING_TARGET_OBJECTS, fields(url = %url))]
    pub async fn delete_object(&self, url: &Url) -> Result<()> {
        let location = self.locate(url)?;
        let operator = self.client.operator(&location.bucket)?;

        debug!(
            target: TRACING_TARGET_OBJECTS,
            bucket = %location.bucket,
            key = %location.key,
            "Deleting object"
        );

        let start = Instant::now();
        match operator.delete(&location.key).await {
            Ok(()) => {
                info!(
                    target: TRACING_TARGET_OBJECTS,
                    bucket = %location.bucket,
                    key = %location.key,
                    elapsed = ?start.elapsed(),
                    "Object deleted successfully"
                );
                Ok(())
            }
            Err(e) => {
                error!(
                    target: TRACING_TARGET_OBJECTS,
                    bucket = %location.bucket,
                    key = %location.key,
                    error = %e,
                    "Failed to delete object"
                );
                Err(e.into())
            }
        }
    }

    /// Creates a pre-signed GET URL for `location`.
    ///
    /// Signing happens locally; the object is not contacted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] if the location is not addressable,
    /// or an error if the SDK cannot sign the request.
    #[instrument(skip(self), target = TRACING_TARGET_OBJECTS, fields(location = %location))]
    pub async fn presign_get(&self, location: &ObjectLocation, lifetime: Duration) -> Result<Url> {
        location.validate()?;
        let operator = self.client.operator(&location.bucket)?;
        let presigned = operator.presign_read(&location.key, lifetime).await?;

        let uri = presigned.uri().to_string();
        Url::parse(&uri)
            .map_err(|e| Error::InvalidUrl(format!("SDK returned an unusable URL '{uri}': {e}")))
    }

    /// Resolves the bucket and key addressed by `url`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if the URL does not address an object.
    pub fn locate(&self, url: &Url) -> Result<ObjectLocation> {
        ObjectLocation::from_url(url, self.client.config())
    }

    /// Returns the plain (unsigned) URL of `location`.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint cannot be turned into a URL.
    pub fn object_url(&self, location: &ObjectLocation) -> Result<Url> {
        location.to_url(self.client.config())
    }

    async fn upload_bytes(
        &self,
        data: Bytes,
        request: UploadRequest,
        presign: bool,
    ) -> Result<UploadResult> {
        let (key, location) = self.new_location(&request)?;
        let size = data.len() as u64;
        check_content_length(request.content_length, size)?;

        let operator = self.client.operator(&location.bucket)?;

        debug!(
            target: TRACING_TARGET_OBJECTS,
            bucket = %location.bucket,
            key = %location.key,
            size = size,
            "Uploading object"
        );

        let start = Instant::now();
        let mut write = operator.write_with(&location.key, data);
        if let Some(content_type) = &request.content_type {
            write = write.content_type(content_type);
        }

        if let Err(e) = write.await {
            error!(
                target: TRACING_TARGET_OBJECTS,
                bucket = %location.bucket,
                key = %location.key,
                error = %e,
                elapsed = ?start.elapsed(),
                "Failed to upload object"
            );
            return Err(e.into());
        }

        self.finish_upload(key, location, size, request.content_type, presign, start)
            .await
    }

    async fn upload_stream<R>(
        &self,
        reader: R,
        request: UploadRequest,
        presign: bool,
    ) -> Result<UploadResult>
    where
        R: AsyncRead + Unpin + Send,
    {
        let (key, location) = self.new_location(&request)?;
        let operator = self.client.operator(&location.bucket)?;

        debug!(
            target: TRACING_TARGET_OBJECTS,
            bucket = %location.bucket,
            key = %location.key,
            expected_size = ?request.content_length,
            "Streaming object upload"
        );

        let start = Instant::now();
        let writer = {
            let mut builder = operator.writer_with(&location.key).chunk(UPLOAD_CHUNK_SIZE);
            if let Some(content_type) = &request.content_type {
                builder = builder.content_type(content_type);
            }
            builder.await?
        };

        let size = write_stream(writer, reader, request.content_length)
            .await
            .inspect_err(|e| {
                error!(
                    target: TRACING_TARGET_OBJECTS,
                    bucket = %location.bucket,
                    key = %location.key,
                    error = %e,
                    elapsed = ?start.elapsed(),
                    "Streaming upload failed"
                );
            })?;

        self.finish_upload(key, location, size, request.content_type, presign, start)
            .await
    }

    fn new_location(&self, request: &UploadRequest) -> Result<(ObjectKey, ObjectLocation)> {
        let key = ObjectKey::generate(request.filename.as_str())?;
        let location = ObjectLocation::new(self.client.config().bucket.as_str(), key.to_string());
        Ok((key, location))
    }

    async fn finish_upload(
        &self,
        key: ObjectKey,
        location: ObjectLocation,
        size: u64,
        content_type: Option<String>,
        presign: bool,
        start: Instant,
    ) -> Result<UploadResult> {
        let (url, expires_at) = if presign {
            let lifetime = self.client.config().presign_lifetime();
            let url = self.presign_get(&location, lifetime).await?;
            (url, Some(expiration_from_now(lifetime)))
        } else {
            (self.object_url(&location)?, None)
        };

        let duration = start.elapsed();
        info!(
            target: TRACING_TARGET_OBJECTS,
            bucket = %location.bucket,
            key = %location.key,
            size = size,
            presigned = presign,
            elapsed = ?duration,
            "Object uploaded successfully"
        );

        Ok(UploadResult {
            location,
            key,
            url,
            size,
            content_type,
            expires_at,
            duration,
        })
    }
}

/// Writes `reader` through `writer` and commits the object.
///
/// The partial upload is aborted when reading, writing, or the length check
/// fails, so no object is left behind.
async fn write_stream<R>(mut writer: Writer, reader: R, expected: Option<u64>) -> Result<u64>
where
    R: AsyncRead + Unpin + Send,
{
    match copy_to_writer(reader, &mut writer, expected).await {
        Ok(size) => {
            writer.close().await?;
            Ok(size)
        }
        Err(e) => {
            if let Err(abort_err) = writer.abort().await {
                warn!(
                    target: TRACING_TARGET_OBJECTS,
                    error = %abort_err,
                    "Failed to abort partial upload"
                );
            }
            Err(e)
        }
    }
}

/// Drains `reader` into `writer`, returning the number of bytes written.
async fn copy_to_writer<R>(reader: R, writer: &mut Writer, expected: Option<u64>) -> Result<u64>
where
    R: AsyncRead + Unpin + Send,
{
    let mut stream = ReaderStream::with_capacity(reader, READ_BUFFER_SIZE);
    let mut written = 0u64;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        written += chunk.len() as u64;

        if let Some(expected) = expected
            && written > expected
        {
            return Err(length_mismatch(expected, written));
        }

        writer.write(chunk).await?;
    }

    check_content_length(expected, written)?;
    Ok(written)
}

fn check_content_length(expected: Option<u64>, actual: u64) -> Result<()> {
    match expected {
        Some(expected) if expected != actual => Err(length_mismatch(expected, actual)),
        _ => Ok(()),
    }
}

fn length_mismatch(expected: u64, actual: u64) -> Error {
    Error::InvalidRequest(format!(
        "Declared content length {expected} does not match {actual} uploaded bytes"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AddressingStyle, S3Config, S3Credentials};

    fn create_test_client() -> S3Client {
        let credentials = S3Credentials::new("minioadmin", "minioadmin");
        let config = S3Config::new("localhost:9000", "test-bucket", credentials)
            .with_protocol("http");
        S3Client::new(config).unwrap()
    }

    #[test]
    fn test_expiration_from_now() {
        let before = Timestamp::now();
        let expires = expiration_from_now(Duration::from_secs(3600));

        let ahead = expires.duration_since(before);
        assert!(ahead.as_secs() >= 3600);
        assert!(ahead.as_secs() < 3700);
    }

    #[test]
    fn test_expiration_saturates() {
        assert_eq!(expiration_from_now(Duration::MAX), Timestamp::MAX);
    }

    #[test]
    fn test_check_content_length() {
        assert!(check_content_length(None, 10).is_ok());
        assert!(check_content_length(Some(10), 10).is_ok());
        assert!(matches!(
            check_content_length(Some(10), 9),
            Err(Error::InvalidRequest(_))
        ));
    }

    fn memory_operator() -> opendal::Operator {
        opendal::Operator::new(opendal::services::Memory::default())
            .unwrap()
            .finish()
    }

    #[tokio::test]
    async fn test_write_stream_commits_exact_length() {
        let operator = memory_operator();
        let writer = operator.writer("exact.dat").await.unwrap();

        let size = write_stream(writer, &b"hello"[..], Some(5)).await.unwrap();
        assert_eq!(size, 5);
        assert_eq!(&operator.read("exact.dat").await.unwrap().to_bytes()[..], b"hello");
    }

    #[tokio::test]
    async fn test_write_stream_without_declared_length() {
        let operator = memory_operator();
        let writer = operator.writer("free.dat").await.unwrap();

        let size = write_stream(writer, &b"abc"[..], None).await.unwrap();
        assert_eq!(size, 3);
        assert!(operator.exists("free.dat").await.unwrap());
    }

    #[tokio::test]
    async fn test_write_stream_aborts_short_body() {
        let operator = memory_operator();
        let writer = operator.writer("short.dat").await.unwrap();

        let result = write_stream(writer, &b"abc"[..], Some(10)).await;
        assert!(matches!(result, Err(Error::InvalidRequest(_))));
        assert!(!operator.exists("short.dat").await.unwrap());
    }

    #[tokio::test]
    async fn test_write_stream_aborts_overlong_body() {
        let operator = memory_operator();
        let writer = operator.writer("long.dat").await.unwrap();

        let result = write_stream(writer, &b"hello world"[..], Some(3)).await;
        assert!(matches!(result, Err(Error::InvalidRequest(_))));
        assert!(!operator.exists("long.dat").await.unwrap());
    }

    #[tokio::test]
    async fn test_copy_to_writer_stops_at_overrun() {
        let operator = memory_operator();
        let mut writer = operator.writer("overrun.dat").await.unwrap();

        let result = copy_to_writer(&b"hello world"[..], &mut writer, Some(3)).await;
        assert!(matches!(result, Err(Error::InvalidRequest(_))));
        writer.abort().await.unwrap();
    }

    #[tokio::test]
    async fn test_presign_and_plain_url_reject_empty_segments() {
        let objects = create_test_client().object_operations();
        let location = ObjectLocation::new("test-bucket", "a//b.dat");

        assert!(matches!(
            objects.presign_get(&location, Duration::from_secs(60)).await,
            Err(Error::InvalidRequest(_))
        ));
        assert!(matches!(
            objects.object_url(&location),
            Err(Error::InvalidRequest(_))
        ));
    }

    #[tokio::test]
    async fn test_put_object_rejects_filename_with_empty_segment() {
        let objects = create_test_client().object_operations();

        let result = objects.put_object("hello", UploadRequest::new("x//y")).await;
        assert!(matches!(result, Err(Error::InvalidRequest(_))));
    }

    #[test]
    fn test_locate_and_object_url() {
        let objects = create_test_client().object_operations();
        let location = ObjectLocation::new("test-bucket", "id_file.txt.dat");

        let url = objects.object_url(&location).unwrap();
        assert_eq!(url.as_str(), "http://localhost:9000/test-bucket/id_file.txt.dat");
        assert_eq!(objects.locate(&url).unwrap(), location);
    }

    #[tokio::test]
    async fn test_presign_get_signs_locally() {
        let objects = create_test_client().object_operations();
        let location = ObjectLocation::new("test-bucket", "report.pdf");

        let url = objects
            .presign_get(&location, Duration::from_secs(600))
            .await
            .unwrap();

        assert_eq!(url.host_str(), Some("localhost"));
        assert_eq!(url.port(), Some(9000));
        assert_eq!(url.path(), "/test-bucket/report.pdf");
        assert!(url.query_pairs().any(|(k, _)| k == "X-Amz-Signature"));
        assert!(url.query_pairs().any(|(k, v)| k == "X-Amz-Expires" && v == "600"));

        assert_eq!(objects.locate(&url).unwrap(), location);
    }

    #[tokio::test]
    async fn test_put_object_rejects_length_mismatch() {
        let objects = create_test_client().object_operations();
        let request = UploadRequest::new("file.txt").with_content_length(3);

        let result = objects.put_object("hello", request).await;
        assert!(matches!(result, Err(Error::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_put_object_rejects_empty_filename() {
        let objects = create_test_client().object_operations();

        let result = objects.put_object("hello", UploadRequest::new("")).await;
        assert!(matches!(result, Err(Error::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_url_outside_endpoint_is_rejected() {
        let credentials = S3Credentials::new("minioadmin", "minioadmin");
        let config = S3Config::new("https://s3.example.com", "test-bucket", credentials)
            .with_addressing_style(AddressingStyle::VirtualHost);
        let objects = S3Client::new(config).unwrap().object_operations();

        let url = Url::parse("https://bucket.elsewhere.org/file.dat").unwrap();
        assert!(matches!(
            objects.get_object_info(&url).await,
            Err(Error::InvalidUrl(_))
        ));
        assert!(matches!(
            objects.delete_object(&url).await,
            Err(Error::InvalidUrl(_))
        ));
    }

    /// Builds a client from `S3_*` environment variables.
    fn live_client() -> S3Client {
        let var = |name: &str| std::env::var(name).unwrap_or_else(|_| panic!("{name} is not set"));

        let credentials = S3Credentials::new(var("S3_ACCESS_KEY"), var("S3_SECRET_KEY"));
        let mut config = S3Config::new(var("S3_ENDPOINT"), var("S3_BUCKET"), credentials);
        if let Ok(protocol) = std::env::var("S3_PROTOCOL") {
            config = config.with_protocol(protocol);
        }

        S3Client::new(config).unwrap()
    }

    #[tokio::test]
    #[ignore = "requires a running S3-compatible endpoint"]
    async fn test_live_object_lifecycle() {
        let objects = live_client().object_operations();
        let request = UploadRequest::new("lifecycle.txt").with_content_type("text/plain");

        let upload = objects.put_object_presigned("hello", request).await.unwrap();
        assert!(upload.is_presigned());
        assert!(upload.location.key.ends_with("_lifecycle.txt.dat"));

        let object = objects.get_object(&upload.url).await.unwrap();
        assert_eq!(&object.data[..], b"hello");
        assert_eq!(object.content_type(), Some("text/plain"));

        let info = objects.get_object_info(&upload.url).await.unwrap();
        assert_eq!(info.size, 5);

        objects.delete_object(&upload.url).await.unwrap();
        let missing = objects.get_object_info(&upload.url).await;
        assert!(matches!(missing, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    #[ignore = "requires a running S3-compatible endpoint"]
    async fn test_live_streaming_upload() {
        let objects = live_client().object_operations();
        let body = vec![7u8; 256 * 1024];
        let request = UploadRequest::new("stream.bin").with_content_length(body.len() as u64);

        let upload = objects
            .put_object_stream(body.as_slice(), request)
            .await
            .unwrap();
        assert!(!upload.is_presigned());
        assert_eq!(upload.size, body.len() as u64);

        let stream = objects.get_object_stream(&upload.url).await.unwrap();
        let object = stream.into_object().await.unwrap();
        assert_eq!(object.data.len(), body.len());

        objects.delete_object(&upload.url).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires a running S3-compatible endpoint"]
    async fn test_live_streaming_upload_aborts_on_short_body() {
        let objects = live_client().object_operations();
        let request = UploadRequest::new("short.bin").with_content_length(10);

        let result = objects.put_object_stream(&b"abc"[..], request).await;
        assert!(matches!(result, Err(Error::InvalidRequest(_))));
    }
}
