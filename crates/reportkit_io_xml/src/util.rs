//! Source validation for report-values documents.

use std::ffi::OsStr;
use std::path::Path;

use crate::conf::C_EXT_XML;
use crate::spec::XmlIoError;

/// Validate a report-values source before reading it: the file must exist
/// and carry the xml extension.
pub fn validate_xml_source(path: &Path) -> Result<(), XmlIoError> {
    if !path.is_file() {
        return Err(XmlIoError::FileNotFound(path.to_path_buf()));
    }
    if path.extension().and_then(OsStr::to_str) != Some(C_EXT_XML) {
        return Err(XmlIoError::NotXmlFile(path.to_path_buf()));
    }
    Ok(())
}
