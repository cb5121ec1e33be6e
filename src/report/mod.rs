//! Reading report files and writing the merged result

use crate::error::{Error, Result};
use crate::types::ReportFile;
use crate::xml::Document;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Load one candidate report.
///
/// Returns `Ok(None)` for zero-byte files, which crashed shards leave behind.
/// Any other file must be well-formed XML.
pub fn parse_report(file: &ReportFile) -> Result<Option<Document>> {
    if file.is_empty() {
        info!(path = %file.path.display(), "skipping empty report");
        return Ok(None);
    }

    let bytes = fs::read(&file.path).map_err(|source| Error::Read {
        path: file.path.clone(),
        source,
    })?;
    let text = std::str::from_utf8(&bytes).map_err(|e| Error::MalformedXml {
        path: file.path.clone(),
        message: format!("not valid UTF-8: {e}"),
    })?;
    // a BOM is legal before the declaration
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let doc = Document::parse_str(text).map_err(|e| Error::MalformedXml {
        path: file.path.clone(),
        message: e.to_string(),
    })?;

    debug!(path = %file.path.display(), bytes = file.size, "parsed report");
    Ok(Some(doc))
}

/// Write the merged document, replacing `path` if it exists.
///
/// Parent directories are not created.
pub fn write_report(doc: &Document, path: &Path) -> Result<()> {
    let content = doc.to_pretty_string().map_err(|e| Error::Write {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    fs::write(path, content).map_err(|e| Error::Write {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    info!(path = %path.display(), "wrote merged report");
    Ok(())
}
