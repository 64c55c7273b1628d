//! Identifiers for newly uploaded objects.
//!
//! Uploaded objects are stored under `{uuid}_{filename}.dat`, where the UUID
//! is a fresh v4 identifier and the filename is the caller-supplied name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

/// Separator between the identifier and the original filename.
const SEPARATOR: char = '_';

/// Suffix appended to every uploaded object.
const SUFFIX: &str = ".dat";

/// Object key of an uploaded file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ObjectKey {
    file_uuid: Uuid,
    filename: String,
}

impl ObjectKey {
    /// Creates a key for `filename` with a fresh random identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the filename is empty.
    pub fn generate(filename: impl Into<String>) -> Result<Self> {
        Self::new(Uuid::new_v4(), filename)
    }

    /// Creates a key from an explicit identifier and filename.
    ///
    /// # Errors
    ///
    /// Returns an error if the filename is empty or contains `//`.
    pub fn new(file_uuid: Uuid, filename: impl Into<String>) -> Result<Self> {
        let filename = filename.into();
        if filename.is_empty() {
            return Err(Error::InvalidRequest(
                "Filename cannot be empty".to_string(),
            ));
        }

        if filename.contains("//") {
            return Err(Error::InvalidRequest(format!(
                "Filename '{filename}' cannot contain empty path segments"
            )));
        }

        Ok(Self {
            file_uuid,
            filename,
        })
    }

    /// Returns the unique identifier part of the key.
    #[inline]
    pub fn file_uuid(&self) -> Uuid {
        self.file_uuid
    }

    /// Returns the original filename.
    #[inline]
    pub fn filename(&self) -> &str {
        &self.filename
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SEPARATOR}{}{SUFFIX}", self.file_uuid, self.filename)
    }
}

impl FromStr for ObjectKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidRequest(format!("Not an uploaded object key: '{s}'"));

        let stem = s.strip_suffix(SUFFIX).ok_or_else(invalid)?;
        let (uuid, filename) = stem.split_once(SEPARATOR).ok_or_else(invalid)?;
        let file_uuid = Uuid::parse_str(uuid).map_err(|_| invalid())?;

        Self::new(file_uuid, filename)
    }
}

impl TryFrom<String> for ObjectKey {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<ObjectKey> for String {
    fn from(key: ObjectKey) -> Self {
        key.to_string()
    }
}
