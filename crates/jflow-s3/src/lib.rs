#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

// Tracing target constants for consistent logging
pub const TRACING_TARGET_CLIENT: &str = "jflow_s3::client";
pub const TRACING_TARGET_OBJECTS: &str = "jflow_s3::objects";

pub mod client;
mod error;
pub mod operations;
pub mod types;

#[doc(hidden)]
pub mod prelude;

pub use crate::client::{AddressingStyle, S3Client, S3Config, S3Credentials};
pub use crate::error::{Error, Result};
pub use crate::operations::{ObjectOperations, UploadResult, expiration_from_now};
pub use crate::types::{
    ByteStream, Object, ObjectInfo, ObjectKey, ObjectLocation, ObjectStream, UploadRequest,
};
