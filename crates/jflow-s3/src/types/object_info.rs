//! Object information structures.

use std::collections::HashMap;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::ObjectLocation;

/// Metadata of a stored object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectInfo {
    /// Bucket the object lives in.
    pub bucket: String,
    /// Object key within the bucket.
    pub key: String,
    /// Object size in bytes.
    pub size: u64,
    /// Content type/MIME type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// ETag of the object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// Last modified timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<Timestamp>,
    /// User-defined metadata.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
}

impl ObjectInfo {
    /// Creates a new ObjectInfo.
    pub fn new(location: &ObjectLocation, size: u64) -> Self {
        Self {
            bucket: location.bucket.clone(),
            key: location.key.clone(),
            size,
            content_type: None,
            etag: None,
            last_modified: None,
            metadata: HashMap::new(),
        }
    }

    /// Sets the content type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Sets the ETag.
    pub fn with_etag(mut self, etag: impl Into<String>) -> Self {
        self.etag = Some(etag.into());
        self
    }

    /// Sets the last modified timestamp.
    pub fn with_last_modified(mut self, last_modified: Timestamp) -> Self {
        self.last_modified = Some(last_modified);
        self
    }

    /// Sets metadata.
    pub fn with_metadata(mut self, metadata: HashMap<String, String>) -> Self {
        self.metadata = metadata;
        self
    }

    /// Returns the location this information describes.
    pub fn location(&self) -> ObjectLocation {
        ObjectLocation::new(self.bucket.clone(), self.key.clone())
    }

    /// Builds the information from SDK metadata.
    pub(crate) fn from_metadata(location: &ObjectLocation, meta: &opendal::Metadata) -> Self {
        let mut info = Self::new(location, meta.content_length());

        info.content_type = meta.content_type().map(str::to_owned);
        info.etag = meta
            .etag()
            .map(|etag| etag.trim_matches('"').to_owned());
        info.last_modified = meta
            .last_modified()
            .and_then(|dt| Timestamp::from_second(dt.timestamp()).ok());

        if let Some(user_metadata) = meta.user_metadata() {
            info.metadata = user_metadata.clone();
        }

        info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_info_builder() {
        let location = ObjectLocation::new("docs", "a/b.txt");
        let timestamp = Timestamp::from_second(1_609_459_200).unwrap();

        let info = ObjectInfo::new(&location, 42)
            .with_content_type("text/plain")
            .with_etag("abc123")
            .with_last_modified(timestamp);

        assert_eq!(info.location(), location);
        assert_eq!(info.size, 42);
        assert_eq!(info.content_type.as_deref(), Some("text/plain"));
        assert_eq!(info.last_modified, Some(timestamp));
    }

    #[test]
    fn test_from_metadata_strips_etag_quotes() {
        let location = ObjectLocation::new("docs", "file.dat");
        let meta = opendal::Metadata::new(opendal::EntryMode::FILE)
            .with_content_length(7)
            .with_content_type("application/pdf".to_string())
            .with_etag("\"d41d8cd9\"".to_string());

        let info = ObjectInfo::from_metadata(&location, &meta);
        assert_eq!(info.size, 7);
        assert_eq!(info.etag.as_deref(), Some("d41d8cd9"));
        assert_eq!(info.content_type.as_deref(), Some("application/pdf"));
        assert!(info.metadata.is_empty());
    }

    #[test]
    fn test_serialization_skips_empty_fields() {
        let info = ObjectInfo::new(&ObjectLocation::new("docs", "file.dat"), 3);
        let json = serde_json::to_value(&info).unwrap();

        assert_eq!(json["bucket"], "docs");
        assert_eq!(json["size"], 3);
        assert!(json.get("etag").is_none());
        assert!(json.get("metadata").is_none());
    }
}
