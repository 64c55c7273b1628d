//! S3 client with configuration management.
//!
//! This module provides the connection side of the crate: configuration with
//! validation and defaults, static credentials, and the [`S3Client`] that
//! turns both into storage SDK operators.

mod s3_client;
mod s3_config;
mod s3_credentials;

pub use s3_client::S3Client;
pub use s3_config::{AddressingStyle, DEFAULT_REGION, S3Config};
pub use s3_credentials::S3Credentials;
