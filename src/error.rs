use thiserror::Error;

/// Failure to read a configuration from any of the supported text forms.
///
/// Every variant means the whole input was rejected; no partially populated
/// configuration is ever returned alongside one of these.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Invalid configuration json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid legacy import document: {0}")]
    LegacyImport(#[from] LegacyImportError),
    #[error("Input is neither configuration json ({json}) nor a legacy import document ({xml})")]
    Unrecognised {
        json: serde_json::Error,
        xml: LegacyImportError,
    },
    #[error("Invalid base64 in compressed string: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("Compression stream error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Compressed string is too short ({0} bytes)")]
    Truncated(usize),
    #[error("{0} bytes follow the end of the compressed stream")]
    TrailingData(usize),
    #[error("Decompressed length {actual} does not match the stored length {expected}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("Decompressed text is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// The legacy flight-planning export could not be read as XML at all.
#[derive(Debug, Error)]
pub enum LegacyImportError {
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("Document has no root element")]
    MissingRoot,
    #[error("Document has more than one root element")]
    MultipleRoots,
    #[error("Text found outside the root element")]
    TextOutsideRoot,
    #[error("Element <{0}> is never closed")]
    UnclosedElement(String),
    #[error("Closing tag without a matching opening tag")]
    UnmatchedEnd,
    #[error("CDATA section is not valid UTF-8")]
    InvalidCData,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown aircraft model: {0}")]
pub struct UnknownAircraftModel(pub String);
