//! Event pull parsing of the report-values document.

use std::fs;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::Event;

use reportkit_grid::spec::SpecReportRecord;

use crate::conf::{
    TAG_NAME, TAG_REPORT, TAG_VALUE, TAG_VALUE_COL, TAG_VALUE_ROW, TAG_VALUE_VAL,
};
use crate::spec::{SpecReportDocument, XmlIoError};
use crate::util::validate_xml_source;

/// Leaf element whose text is being captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EnumFieldTarget {
    None,
    ReportName,
    RecordRow,
    RecordColumn,
    RecordValue,
}

/// Parse a report-values document from a file, validating existence and
/// extension first.
pub fn parse_report_document_file(path: &Path) -> Result<SpecReportDocument, XmlIoError> {
    validate_xml_source(path)?;
    let c_xml = fs::read_to_string(path).map_err(|err| XmlIoError::Read {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    parse_report_document_str(&c_xml)
}

/// Parse a report-values document from a string.
///
/// Records are collected in document order. A blank or absent coordinate
/// element yields `None`; an absent value element yields `0`. Non-numeric
/// text inside a numeric element is a fault.
pub fn parse_report_document_str(xml: &str) -> Result<SpecReportDocument, XmlIoError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut document = SpecReportDocument::default();
    let mut if_report_seen = false;
    let mut pending_record: Option<SpecReportRecord> = None;
    let mut field_target = EnumFieldTarget::None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                tag if tag == TAG_REPORT => if_report_seen = true,
                tag if tag == TAG_NAME && pending_record.is_none() => {
                    field_target = EnumFieldTarget::ReportName;
                }
                tag if tag == TAG_VALUE => {
                    pending_record = Some(SpecReportRecord {
                        row: None,
                        column: None,
                        value: 0.0,
                    });
                }
                tag if tag == TAG_VALUE_ROW && pending_record.is_some() => {
                    field_target = EnumFieldTarget::RecordRow;
                }
                tag if tag == TAG_VALUE_COL && pending_record.is_some() => {
                    field_target = EnumFieldTarget::RecordColumn;
                }
                tag if tag == TAG_VALUE_VAL && pending_record.is_some() => {
                    field_target = EnumFieldTarget::RecordValue;
                }
                _ => {}
            },
            Ok(Event::End(ref e)) => {
                if e.name().as_ref() == TAG_VALUE
                    && let Some(record) = pending_record.take()
                {
                    document.records.push(record);
                }
                field_target = EnumFieldTarget::None;
            }
            Ok(Event::Empty(ref e)) => match e.name().as_ref() {
                tag if tag == TAG_REPORT => if_report_seen = true,
                tag if tag == TAG_VALUE => {
                    document.records.push(SpecReportRecord {
                        row: None,
                        column: None,
                        value: 0.0,
                    });
                }
                _ => {}
            },
            Ok(Event::Text(ref e)) => {
                let c_text = String::from_utf8_lossy(e).trim().to_string();
                match field_target {
                    EnumFieldTarget::ReportName => {
                        if !c_text.is_empty() {
                            document.name = Some(c_text);
                        }
                    }
                    EnumFieldTarget::RecordRow => {
                        if let Some(record) = pending_record.as_mut() {
                            record.row = parse_coordinate("ReportRow", &c_text)?;
                        }
                    }
                    EnumFieldTarget::RecordColumn => {
                        if let Some(record) = pending_record.as_mut() {
                            record.column = parse_coordinate("ReportCol", &c_text)?;
                        }
                    }
                    EnumFieldTarget::RecordValue => {
                        if let Some(record) = pending_record.as_mut() {
                            record.value = parse_value("Val", &c_text)?;
                        }
                    }
                    EnumFieldTarget::None => {}
                }
            }
            Ok(Event::Eof) => break,
            Err(err) => {
                return Err(XmlIoError::Syntax {
                    position: reader.buffer_position(),
                    message: err.to_string(),
                });
            }
            _ => {}
        }
    }

    if !if_report_seen {
        return Err(XmlIoError::MissingReport);
    }
    Ok(document)
}

fn parse_coordinate(element: &str, text: &str) -> Result<Option<i64>, XmlIoError> {
    if text.is_empty() {
        return Ok(None);
    }
    text.parse::<i64>()
        .map(Some)
        .map_err(|_| XmlIoError::InvalidNumber {
            element: element.to_string(),
            text: text.to_string(),
        })
}

fn parse_value(element: &str, text: &str) -> Result<f64, XmlIoError> {
    if text.is_empty() {
        return Ok(0.0);
    }
    text.parse::<f64>().map_err(|_| XmlIoError::InvalidNumber {
        element: element.to_string(),
        text: text.to_string(),
    })
}
