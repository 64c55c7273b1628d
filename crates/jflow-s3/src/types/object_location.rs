//! Bucket and key of an object, and their mapping to and from URLs.
//!
//! Path-style URLs carry the bucket as the first path segment
//! (`scheme://host/bucket/key`), virtual-hosted-style URLs carry it as the
//! leftmost host label (`scheme://bucket.host/key`). Query parameters, such
//! as the signature of a pre-signed URL, never affect the location.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::client::{AddressingStyle, S3Config};
use crate::{Error, Result};

/// Bucket and key that identify an object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectLocation {
    /// Bucket name.
    pub bucket: String,
    /// Object key within the bucket.
    pub key: String,
}

impl ObjectLocation {
    /// Creates a new location.
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// Resolves the bucket and key addressed by `url`.
    ///
    /// Any base path of the configured endpoint is skipped before the
    /// addressing style is applied. In virtual-host mode a URL whose host is
    /// the endpoint host itself is read path-style.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if the URL has no host, names a host
    /// outside the endpoint in virtual-host mode, or lacks a bucket or key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jflow_s3::{ObjectLocation, S3Config, S3Credentials};
    /// use url::Url;
    ///
    /// let config = S3Config::new("http://minio:9000", "docs", S3Credentials::new("a", "s"));
    /// let url = Url::parse("http://minio:9000/docs/reports/q1.pdf?X-Amz-Expires=3600").unwrap();
    ///
    /// let location = ObjectLocation::from_url(&url, &config).unwrap();
    /// assert_eq!(location, ObjectLocation::new("docs", "reports/q1.pdf"));
    /// ```
    pub fn from_url(url: &Url, config: &S3Config) -> Result<Self> {
        let endpoint = config.service_endpoint()?;
        let host = url
            .host_str()
            .filter(|host| !host.is_empty())
            .ok_or_else(|| Error::InvalidUrl(format!("'{url}' has no host")))?;

        let segments = relative_segments(url, &endpoint)?;

        match config.addressing_style {
            AddressingStyle::Path => Self::from_path_segments(url, segments),
            AddressingStyle::VirtualHost => {
                let endpoint_host = endpoint.host_str().unwrap_or_default();
                if host.eq_ignore_ascii_case(endpoint_host) {
                    return Self::from_path_segments(url, segments);
                }

                let bucket = bucket_from_host(host, endpoint_host).ok_or_else(|| {
                    Error::InvalidUrl(format!(
                        "'{url}' is not a virtual-hosted URL of '{endpoint_host}'"
                    ))
                })?;

                Self::checked(url, bucket.to_owned(), segments.join("/"))
            }
        }
    }

    /// Returns the plain (unsigned) URL of this object.
    ///
    /// The URL is built on [`S3Config::public_base_url`] using the configured
    /// addressing style. Key separators are kept, every other reserved
    /// character is percent-encoded.
    ///
    /// # Errors
    ///
    /// Returns an error if the location is not addressable (see
    /// [`validate`](Self::validate)), or the endpoint cannot be parsed or
    /// cannot carry the bucket as a host label.
    pub fn to_url(&self, config: &S3Config) -> Result<Url> {
        self.validate()?;
        let mut url = config.public_base_url()?;

        if config.addressing_style == AddressingStyle::VirtualHost {
            let host = format!("{}.{}", self.bucket, url.host_str().unwrap_or_default());
            url.set_host(Some(&host))
                .map_err(|e| Error::Config(format!("Invalid virtual host '{host}': {e}")))?;
        }

        {
            let base = url.clone();
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| Error::Config(format!("Endpoint '{base}' cannot carry a path")))?;
            segments.pop_if_empty();
            if config.addressing_style == AddressingStyle::Path {
                segments.push(&self.bucket);
            }
            segments.extend(self.key.split('/'));
        }

        Ok(url)
    }

    fn from_path_segments(url: &Url, mut segments: Vec<String>) -> Result<Self> {
        if segments.is_empty() {
            return Err(Error::InvalidUrl(format!("'{url}' does not name a bucket")));
        }

        let bucket = segments.remove(0);
        Self::checked(url, bucket, segments.join("/"))
    }

    fn checked(url: &Url, bucket: String, key: String) -> Result<Self> {
        if bucket.is_empty() {
            return Err(Error::InvalidUrl(format!("'{url}' does not name a bucket")));
        }

        if key.is_empty() {
            return Err(Error::InvalidUrl(format!("'{url}' does not name an object")));
        }

        if has_empty_segment(&key) {
            return Err(Error::InvalidUrl(format!(
                "'{url}' has an empty key segment"
            )));
        }

        Ok(Self { bucket, key })
    }

    /// Checks that the location can be addressed by the storage SDK.
    ///
    /// The SDK collapses repeated and trailing separators, so a key with an
    /// empty segment would silently refer to a different object.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] if the bucket or key is empty or the
    /// key has an empty segment.
    pub fn validate(&self) -> Result<()> {
        if self.bucket.is_empty() {
            return Err(Error::InvalidRequest("Bucket cannot be empty".to_string()));
        }

        if self.key.is_empty() || has_empty_segment(&self.key) {
            return Err(Error::InvalidRequest(format!(
                "'{}' is not an addressable object key",
                self.key
            )));
        }

        Ok(())
    }
}

impl fmt::Display for ObjectLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.bucket, self.key)
    }
}

/// Percent-decoded path segments of `url` with the endpoint base path removed.
fn relative_segments(url: &Url, endpoint: &Url) -> Result<Vec<String>> {
    let mut segments = decoded_segments(url)?;
    let base = decoded_segments(endpoint)?;
    let base: Vec<_> = base.into_iter().filter(|s| !s.is_empty()).collect();

    if !base.is_empty() && segments.starts_with(&base) {
        segments.drain(..base.len());
    }

    if segments.first().is_some_and(String::is_empty) {
        segments.remove(0);
    }

    Ok(segments)
}

fn decoded_segments(url: &Url) -> Result<Vec<String>> {
    let Some(segments) = url.path_segments() else {
        return Err(Error::InvalidUrl(format!("'{url}' has no path")));
    };

    segments
        .map(|segment| {
            urlencoding::decode(segment)
                .map(|decoded| decoded.into_owned())
                .map_err(|e| Error::InvalidUrl(format!("'{url}' has a malformed path: {e}")))
        })
        .collect()
}

fn has_empty_segment(key: &str) -> bool {
    key.split('/').any(str::is_empty)
}

/// Returns the bucket label when `host` is `<bucket>.<endpoint_host>`.
fn bucket_from_host<'a>(host: &'a str, endpoint_host: &str) -> Option<&'a str> {
    if endpoint_host.is_empty() || host.len() <= endpoint_host.len() + 1 {
        return None;
    }

    let split = host.len() - endpoint_host.len();
    let (bucket, suffix) = host.split_at_checked(split)?;
    let bucket = bucket.strip_suffix('.')?;

    suffix.eq_ignore_ascii_case(endpoint_host).then_some(bucket)
}
