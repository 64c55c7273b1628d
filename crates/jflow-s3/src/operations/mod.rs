//! Object operations built on top of [`S3Client`](crate::S3Client).

mod object_operations;

pub use object_operations::{ObjectOperations, UploadResult, expiration_from_now};
