//! Sorting types for document listings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order.
    Asc,
    /// Descending order (newest / largest first).
    #[default]
    Desc,
}

impl SortDirection {
    /// Return the wire name of this direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(format!("unknown sort order '{other}'")),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Document attribute a listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Lexicographic order of the display name.
    FileName,
    /// Numeric order of the size in bytes.
    FileSize,
    /// Chronological order of the upload instant.
    #[default]
    UploadedAt,
}

impl SortKey {
    /// Return the wire name of this key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FileName => "fileName",
            Self::FileSize => "fileSize",
            Self::UploadedAt => "uploadedAt",
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "fileName" => Ok(Self::FileName),
            "fileSize" => Ok(Self::FileSize),
            "uploadedAt" => Ok(Self::UploadedAt),
            other => Err(format!("unknown sort key '{other}'")),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sort specification: key plus direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortSpec {
    /// Attribute to order by.
    pub key: SortKey,
    /// Direction of the ordering.
    pub direction: SortDirection,
}

impl SortSpec {
    /// Create a new sort specification.
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Build a sort spec from raw query values, falling back to the
    /// defaults (`uploadedAt`, `desc`) for missing or unrecognised input.
    pub fn from_lenient(key: Option<&str>, direction: Option<&str>) -> Self {
        Self {
            key: key.and_then(|k| k.parse().ok()).unwrap_or_default(),
            direction: direction.and_then(|d| d.parse().ok()).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let spec = SortSpec::default();
        assert_eq!(spec.key, SortKey::UploadedAt);
        assert_eq!(spec.direction, SortDirection::Desc);
    }

    #[test]
    fn test_lenient_parse_falls_back() {
        let spec = SortSpec::from_lenient(Some("fileSize"), Some("ASC"));
        assert_eq!(spec, SortSpec::new(SortKey::FileSize, SortDirection::Asc));

        let spec = SortSpec::from_lenient(Some("owner"), Some("sideways"));
        assert_eq!(spec, SortSpec::default());
    }
}
