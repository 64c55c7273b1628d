//! Prelude module for convenient imports.

pub use crate::client::{AddressingStyle, S3Client, S3Config, S3Credentials};
pub use crate::error::{Error, Result};
pub use crate::operations::{ObjectOperations, UploadResult, expiration_from_now};
pub use crate::types::{Object, ObjectInfo, ObjectKey, ObjectLocation, ObjectStream, UploadRequest};
