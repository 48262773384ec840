//! `reportkit_io_xml` v1:
//! Report-values document parsing.
//!
//! Architecture:
//! - `conf`   : extension and element-name constants
//! - `spec`   : document model and fault types
//! - `util`   : source validation
//! - `parser` : event pull parsing into records

pub mod conf;
pub mod parser;
pub mod spec;
pub mod util;

pub use conf::C_EXT_XML;
pub use parser::{parse_report_document_file, parse_report_document_str};
pub use spec::{SpecReportDocument, XmlIoError};
pub use util::validate_xml_source;
