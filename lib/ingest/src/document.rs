//! Document readers.
//!
//! Readers never fail into the matching pipeline: any read error is logged
//! and surfaces as empty text, which the evaluator reports as an unreadable
//! document.

use crate::{IngestError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Supplies raw text for a document path.
pub trait DocumentReader: Send + Sync {
    /// Raw text of the document, or an empty string when it cannot be read.
    fn read_text(&self, path: &Path) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    PlainText,
    Docx,
    Pdf,
}

impl DocumentKind {
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("docx") => DocumentKind::Docx,
            Some("pdf") => DocumentKind::Pdf,
            _ => DocumentKind::PlainText,
        }
    }
}

/// Reads documents from the filesystem, dispatching on file extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileDocumentReader;

impl FileDocumentReader {
    pub fn new() -> Self {
        Self
    }

    /// Like [`DocumentReader::read_text`] but keeps the error.
    pub fn try_read(&self, path: &Path) -> Result<String> {
        if !path.is_file() {
            return Err(IngestError::NotFound(path.to_path_buf()));
        }
        match DocumentKind::from_path(path) {
            DocumentKind::PlainText => {
                let bytes = std::fs::read(path)?;
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
            DocumentKind::Docx => read_docx(path),
            DocumentKind::Pdf => read_pdf(path),
        }
    }
}

impl DocumentReader for FileDocumentReader {
    fn read_text(&self, path: &Path) -> String {
        match self.try_read(path) {
            Ok(text) => {
                debug!(path = %path.display(), chars = text.len(), "Read document");
                text
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read document");
                String::new()
            }
        }
    }
}

#[cfg(feature = "docx")]
fn read_docx(path: &Path) -> Result<String> {
    use std::io::Read;

    let file = std::fs::File::open(path)?;
    let mut archive = zip::ZipArchive::new(file)?;
    let mut xml = String::new();
    archive.by_name("word/document.xml")?.read_to_string(&mut xml)?;
    docx_xml_to_text(&xml)
}

#[cfg(not(feature = "docx"))]
fn read_docx(path: &Path) -> Result<String> {
    Err(IngestError::Unsupported(format!(
        "{} (built without the `docx` feature)",
        path.display()
    )))
}

/// Text of the `w:t` runs in a WordprocessingML body, one line per paragraph.
#[cfg(feature = "docx")]
pub fn docx_xml_to_text(xml: &str) -> Result<String> {
    use quick_xml::events::Event;
    use quick_xml::Reader;

    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_run_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == b"w:t" => in_run_text = true,
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_run_text = false,
                b"w:p" => text.push('\n'),
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:tab" => text.push('\t'),
                b"w:br" | b"w:cr" => text.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_run_text => text.push_str(&t.unescape()?),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(text)
}

#[cfg(feature = "pdf")]
fn read_pdf(path: &Path) -> Result<String> {
    pdf_extract::extract_text(path).map_err(|e| IngestError::Pdf(e.to_string()))
}

#[cfg(not(feature = "pdf"))]
fn read_pdf(path: &Path) -> Result<String> {
    Err(IngestError::Unsupported(format!(
        "{} (built without the `pdf` feature)",
        path.display()
    )))
}

/// Expands directories into the files beneath them, sorted by name.
/// Explicit file arguments are kept in the order given, existing or not, so
/// a missing file still shows up as an unreadable document.
pub fn expand_inputs<P: AsRef<Path>>(inputs: &[P]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        let input = input.as_ref();
        if input.is_dir() {
            for entry in WalkDir::new(input).sort_by_file_name() {
                let entry = entry?;
                if entry.file_type().is_file() {
                    files.push(entry.into_path());
                }
            }
        } else {
            files.push(input.to_path_buf());
        }
    }
    Ok(files)
}
