//! High-level S3 client implementation.
//!
//! This module provides the main client interface, encapsulating operator
//! construction, per-bucket operator caching, and connectivity checks.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use opendal::layers::{RetryLayer, TimeoutLayer};
use opendal::{Operator, services};
use tracing::{debug, error, info, instrument};

use super::s3_config::{AddressingStyle, S3Config};
use crate::operations::ObjectOperations;
use crate::{Error, Result, TRACING_TARGET_CLIENT};

/// Upper bound on operators cached for buckets other than the configured one.
const MAX_CACHED_OPERATORS: usize = 32;

/// High-level S3 client that owns the storage SDK operators.
///
/// The operator for the configured bucket is built eagerly. Operators for
/// other buckets, reached through URLs that name them, are built on first
/// use with the same settings and cached, up to a fixed number of buckets.
#[derive(Clone)]
pub struct S3Client {
    operator: Operator,
    operators: Arc<RwLock<HashMap<String, Operator>>>,
    config: Arc<S3Config>,
}

impl S3Client {
    /// Creates a new S3 client with the provided configuration.
    ///
    /// This validates the configuration and builds the operator for the
    /// configured bucket but does not test connectivity.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration validation fails
    /// - The storage SDK rejects the resulting settings
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jflow_s3::{S3Client, S3Config, S3Credentials};
    ///
    /// let credentials = S3Credentials::new("access_key", "secret_key");
    /// let config = S3Config::new("https://play.min.io", "documents", credentials);
    /// let client = S3Client::new(config).unwrap();
    /// ```
    #[instrument(skip(config), target = TRACING_TARGET_CLIENT, fields(endpoint = %config.endpoint_masked()))]
    pub fn new(config: S3Config) -> Result<Self> {
        info!(target: TRACING_TARGET_CLIENT, "Initializing S3 client");

        config.validate().inspect_err(|e| {
            error!(target: TRACING_TARGET_CLIENT, error = %e, "Configuration validation failed");
        })?;

        let operator = build_operator(&config, &config.bucket).inspect_err(|e| {
            error!(target: TRACING_TARGET_CLIENT, error = %e, "Failed to create S3 operator");
        })?;

        info!(
            target: TRACING_TARGET_CLIENT,
            endpoint = %config.endpoint_masked(),
            bucket = %config.bucket,
            region = %config.region(),
            addressing_style = %config.addressing_style,
            "S3 client initialized successfully"
        );

        Ok(Self {
            operator,
            operators: Arc::new(RwLock::new(HashMap::new())),
            config: Arc::new(config),
        })
    }

    /// Creates a new S3 client and tests connectivity.
    ///
    /// # Errors
    ///
    /// Returns an error if client creation fails or the configured bucket
    /// cannot be reached.
    #[instrument(skip(config), target = TRACING_TARGET_CLIENT, fields(endpoint = %config.endpoint_masked()))]
    pub async fn new_with_test(config: S3Config) -> Result<Self> {
        let client = Self::new(config)?;
        client.test_connection().await?;
        Ok(client)
    }

    /// Tests the connection to the configured bucket.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection test fails due to:
    /// - Network connectivity issues
    /// - Authentication failures
    /// - A missing bucket
    #[instrument(skip(self), target = TRACING_TARGET_CLIENT)]
    pub async fn test_connection(&self) -> Result<()> {
        debug!(target: TRACING_TARGET_CLIENT, "Testing S3 connection");

        let start = std::time::Instant::now();
        let result = self.operator.check().await;
        let elapsed = start.elapsed();

        match result {
            Ok(()) => {
                debug!(
                    target: TRACING_TARGET_CLIENT,
                    elapsed = ?elapsed,
                    "Connection test successful"
                );
                Ok(())
            }
            Err(e) => {
                error!(
                    target: TRACING_TARGET_CLIENT,
                    error = %e,
                    elapsed = ?elapsed,
                    "Connection test failed"
                );
                Err(e.into())
            }
        }
    }

    /// Performs a health check on the S3 connection.
    ///
    /// # Errors
    ///
    /// Returns an error if the health check fails.
    pub async fn health_check(&self) -> Result<()> {
        self.test_connection().await
    }

    /// Creates a new ObjectOperations instance.
    pub fn object_operations(&self) -> ObjectOperations {
        ObjectOperations::new(self.clone())
    }

    /// Returns the client configuration.
    #[inline]
    pub fn config(&self) -> &S3Config {
        &self.config
    }

    /// Returns the operator for `bucket`, building and caching it if needed.
    pub(crate) fn operator(&self, bucket: &str) -> Result<Operator> {
        if bucket == self.config.bucket {
            return Ok(self.operator.clone());
        }

        let cached = self
            .operators
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(bucket)
            .cloned();
        if let Some(operator) = cached {
            return Ok(operator);
        }

        debug!(target: TRACING_TARGET_CLIENT, bucket = %bucket, "Creating operator for bucket");
        let operator = build_operator(&self.config, bucket)?;

        let mut operators = self
            .operators
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = operators.get(bucket) {
            return Ok(existing.clone());
        }

        if operators.len() >= MAX_CACHED_OPERATORS {
            debug!(
                target: TRACING_TARGET_CLIENT,
                bucket = %bucket,
                cached = operators.len(),
                "Operator cache full, using uncached operator"
            );
            return Ok(operator);
        }

        operators.insert(bucket.to_owned(), operator.clone());
        Ok(operator)
    }
}

impl std::fmt::Debug for S3Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("S3Client")
            .field("endpoint", &self.config.endpoint_masked())
            .field("bucket", &self.config.bucket)
            .field("region", &self.config.region())
            .field("addressing_style", &self.config.addressing_style)
            .field("access_key", &self.config.credentials().access_key_masked())
            .finish()
    }
}

/// Builds an S3 operator for `bucket` from the client configuration.
///
/// Only the static credentials from the configuration are used; ambient
/// profiles and instance metadata are never consulted.
fn build_operator(config: &S3Config, bucket: &str) -> Result<Operator> {
    let endpoint = config.service_endpoint()?;
    let credentials = config.credentials();

    let mut builder = services::S3::default()
        .bucket(bucket)
        .endpoint(endpoint.as_str().trim_end_matches('/'))
        .region(config.region())
        .access_key_id(credentials.access_key())
        .secret_access_key(credentials.secret_key())
        .disable_config_load()
        .disable_ec2_metadata();

    if let Some(session_token) = credentials.session_token() {
        builder = builder.session_token(session_token);
    }

    if config.addressing_style == AddressingStyle::VirtualHost {
        builder = builder.enable_virtual_host_style();
    }

    let operator = Operator::new(builder)
        .map_err(|e| Error::Config(format!("Failed to build S3 operator: {e}")))?
        .finish()
        .layer(TimeoutLayer::new().with_timeout(config.request_timeout()))
        .layer(RetryLayer::new().with_max_times(config.max_retries).with_jitter());

    Ok(operator)
}
