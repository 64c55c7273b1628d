//! Types and data structures for object operations.
//!
//! This module provides the object identifiers, URL locations, metadata and
//! downloaded object representations used by the client.

use std::pin::Pin;

use bytes::Bytes;
use futures::stream::{Stream, TryStreamExt};
use tokio_util::io::StreamReader;

mod object_info;
mod object_key;
mod object_location;
mod upload_request;

pub use object_info::ObjectInfo;
pub use object_key::ObjectKey;
pub use object_location::ObjectLocation;
pub use upload_request::UploadRequest;

use crate::Result;

/// Boxed stream of object body chunks.
pub type ByteStream = Pin<Box<dyn Stream<Item = std::io::Result<Bytes>> + Send>>;

/// An object downloaded into memory.
#[derive(Debug, Clone)]
pub struct Object {
    /// Where the object was read from.
    pub location: ObjectLocation,
    /// Object metadata.
    pub info: ObjectInfo,
    /// Object body.
    pub data: Bytes,
}

impl Object {
    /// Returns the body size in bytes.
    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }

    /// Returns the content type, if the object has one.
    pub fn content_type(&self) -> Option<&str> {
        self.info.content_type.as_deref()
    }
}

/// An object whose body is read as a stream.
///
/// Large objects can be consumed chunk by chunk without loading them
/// entirely into memory.
pub struct ObjectStream {
    /// Where the object is read from.
    pub location: ObjectLocation,
    /// Object metadata.
    pub info: ObjectInfo,
    /// Content stream.
    pub stream: ByteStream,
}

impl ObjectStream {
    /// Creates a new ObjectStream.
    pub fn new<S>(location: ObjectLocation, info: ObjectInfo, stream: S) -> Self
    where
        S: Stream<Item = std::io::Result<Bytes>> + Send + 'static,
    {
        Self {
            location,
            info,
            stream: Box::pin(stream),
        }
    }

    /// Converts the stream into an [`AsyncRead`](tokio::io::AsyncRead).
    pub fn into_reader(self) -> StreamReader<ByteStream, Bytes> {
        StreamReader::new(self.stream)
    }

    /// Reads the remaining body into memory.
    pub async fn into_object(self) -> Result<Object> {
        let chunks: Vec<Bytes> = self.stream.try_collect().await?;
        let data = Bytes::from(chunks.concat());

        Ok(Object {
            location: self.location,
            info: self.info,
            data,
        })
    }
}

impl std::fmt::Debug for ObjectStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectStream")
            .field("location", &self.location)
            .field("info", &self.info)
            .finish_non_exhaustive()
    }
}
