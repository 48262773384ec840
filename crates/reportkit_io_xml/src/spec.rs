//! Report-values document model and fault types.

use std::fmt;
use std::path::PathBuf;

use reportkit_grid::spec::SpecReportRecord;

/// Parsed report-values document: optional report name plus the record
/// sequence in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpecReportDocument {
    /// Report name, when the document carries one.
    pub name: Option<String>,
    /// Records in document order.
    pub records: Vec<SpecReportRecord>,
}

/// Faults raised while validating or parsing the report-values document.
#[derive(Debug)]
pub enum XmlIoError {
    /// Source file does not exist.
    FileNotFound(PathBuf),
    /// Source file does not carry the xml extension.
    NotXmlFile(PathBuf),
    /// Source file could not be read.
    Read {
        /// Document path.
        path: PathBuf,
        /// Underlying error text.
        message: String,
    },
    /// Document is not well-formed.
    Syntax {
        /// Byte position reported by the parser.
        position: u64,
        /// Underlying error text.
        message: String,
    },
    /// A numeric element holds non-numeric text.
    InvalidNumber {
        /// Element name.
        element: String,
        /// Offending text.
        text: String,
    },
    /// The document carries no report element.
    MissingReport,
}

impl fmt::Display for XmlIoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileNotFound(path) => {
                write!(f, "Report-values file not found: {}", path.display())
            }
            Self::NotXmlFile(path) => {
                write!(f, "File is not an xml document: {}", path.display())
            }
            Self::Read { path, message } => {
                write!(f, "Failed to read {}: {message}", path.display())
            }
            Self::Syntax { position, message } => {
                write!(f, "XML syntax error at position {position}: {message}")
            }
            Self::InvalidNumber { element, text } => {
                write!(f, "Element {element:?} holds non-numeric text {text:?}.")
            }
            Self::MissingReport => {
                write!(f, "Document carries no report element.")
            }
        }
    }
}

impl std::error::Error for XmlIoError {}
