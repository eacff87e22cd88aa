//! File format classification by extension and MIME type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification tag of a stored file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    Pdf,
    Doc,
    Docx,
    Xls,
    Xlsx,
    Ppt,
    Pptx,
    Txt,
    Csv,
    Jpg,
    Png,
    Gif,
    /// Anything not recognised above.
    Unknown,
}

/// Coarse grouping of formats, used for icons and filtering in clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatCategory {
    Document,
    Spreadsheet,
    Presentation,
    Text,
    Image,
    Other,
}

impl FileFormat {
    /// Classify a bare extension (no dot, any case).
    pub fn from_extension(extension: &str) -> Self {
        match extension.to_ascii_lowercase().as_str() {
            "pdf" => Self::Pdf,
            "doc" => Self::Doc,
            "docx" => Self::Docx,
            "xls" => Self::Xls,
            "xlsx" => Self::Xlsx,
            "ppt" => Self::Ppt,
            "pptx" => Self::Pptx,
            "txt" => Self::Txt,
            "csv" => Self::Csv,
            "jpg" | "jpeg" => Self::Jpg,
            "png" => Self::Png,
            "gif" => Self::Gif,
            _ => Self::Unknown,
        }
    }

    /// Classify a file by the extension of its name.
    pub fn from_file_name(file_name: &str) -> Self {
        extension_of(file_name)
            .map(Self::from_extension)
            .unwrap_or(Self::Unknown)
    }

    /// Classify a MIME type such as `application/pdf`. Parameters
    /// (`; charset=utf-8`) are ignored.
    pub fn from_mime(mime: &str) -> Self {
        let essence = mime.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
        match essence.as_str() {
            "application/pdf" => Self::Pdf,
            "application/msword" => Self::Doc,
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                Self::Docx
            }
            "application/vnd.ms-excel" => Self::Xls,
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet" => Self::Xlsx,
            "application/vnd.ms-powerpoint" => Self::Ppt,
            "application/vnd.openxmlformats-officedocument.presentationml.presentation" => {
                Self::Pptx
            }
            "text/plain" => Self::Txt,
            "text/csv" => Self::Csv,
            "image/jpeg" | "image/jpg" => Self::Jpg,
            "image/png" => Self::Png,
            "image/gif" => Self::Gif,
            _ => Self::Unknown,
        }
    }

    /// Classify by file name first, falling back to the MIME type.
    pub fn detect(file_name: &str, mime: Option<&str>) -> Self {
        match Self::from_file_name(file_name) {
            Self::Unknown => mime.map(Self::from_mime).unwrap_or(Self::Unknown),
            known => known,
        }
    }

    /// Return the coarse category of this format.
    pub fn category(&self) -> FormatCategory {
        match self {
            Self::Pdf | Self::Doc | Self::Docx => FormatCategory::Document,
            Self::Xls | Self::Xlsx | Self::Csv => FormatCategory::Spreadsheet,
            Self::Ppt | Self::Pptx => FormatCategory::Presentation,
            Self::Txt => FormatCategory::Text,
            Self::Jpg | Self::Png | Self::Gif => FormatCategory::Image,
            Self::Unknown => FormatCategory::Other,
        }
    }

    /// Canonical MIME type served on download.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Doc => "application/msword",
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            Self::Xls => "application/vnd.ms-excel",
            Self::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            Self::Ppt => "application/vnd.ms-powerpoint",
            Self::Pptx => {
                "application/vnd.openxmlformats-officedocument.presentationml.presentation"
            }
            Self::Txt => "text/plain",
            Self::Csv => "text/csv",
            Self::Jpg => "image/jpeg",
            Self::Png => "image/png",
            Self::Gif => "image/gif",
            Self::Unknown => "application/octet-stream",
        }
    }

    /// Return the format as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Doc => "doc",
            Self::Docx => "docx",
            Self::Xls => "xls",
            Self::Xlsx => "xlsx",
            Self::Ppt => "ppt",
            Self::Pptx => "pptx",
            Self::Txt => "txt",
            Self::Csv => "csv",
            Self::Jpg => "jpg",
            Self::Png => "png",
            Self::Gif => "gif",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Extension of `file_name` without the dot, if it has one.
///
/// Dot-files such as `.env` and names ending in a dot have no extension.
pub fn extension_of(file_name: &str) -> Option<&str> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        None
    } else {
        Some(ext)
    }
}
