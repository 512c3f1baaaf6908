//! Document Text Extractor — turns an uploaded document into an ordered line sequence.
//!
//! No semantic filtering happens here. Blank paragraphs survive as empty lines so that
//! line indices stay aligned with the source document. Anything that cannot be read as
//! the declared format is a `FormatError`; partial text is never returned.

mod docx;
mod pdf;

use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("unsupported document type: {0}")]
    Unsupported(String),

    #[error("document is not a valid .docx archive: {0}")]
    NotAnArchive(String),

    #[error("document is missing required part '{0}'")]
    MissingPart(String),

    #[error("malformed document XML: {0}")]
    MalformedXml(String),

    #[error("could not extract PDF text: {0}")]
    Pdf(String),

    #[error("plain-text document is not valid UTF-8")]
    Encoding,
}

/// Formats the extractor can read, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Docx,
    Pdf,
    PlainText,
}

impl DocumentFormat {
    pub fn from_file_name(file_name: &str) -> Result<Self, FormatError> {
        let ext = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("docx") => Ok(DocumentFormat::Docx),
            Some("pdf") => Ok(DocumentFormat::Pdf),
            Some("txt") | Some("md") => Ok(DocumentFormat::PlainText),
            _ => Err(FormatError::Unsupported(file_name.to_string())),
        }
    }
}

/// Ordered text lines of one document. Immutable once produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentText {
    lines: Vec<String>,
}

impl DocumentText {
    /// Joins paragraphs with newlines and re-splits, so a line break inside a
    /// paragraph produces an extra line.
    pub fn from_paragraphs<I, S>(paragraphs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines = paragraphs
            .into_iter()
            .flat_map(|p| {
                p.as_ref()
                    .split('\n')
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
            .collect();
        DocumentText { lines }
    }

    pub fn from_text(text: &str) -> Self {
        DocumentText {
            lines: text.split('\n').map(|l| l.trim_end_matches('\r').to_string()).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Extracts the text of a document held in memory.
pub fn extract_document(bytes: &[u8], format: DocumentFormat) -> Result<DocumentText, FormatError> {
    match format {
        DocumentFormat::Docx => docx::read_paragraphs(bytes).map(DocumentText::from_paragraphs),
        DocumentFormat::Pdf => pdf::read_text(bytes).map(|t| DocumentText::from_text(&t)),
        DocumentFormat::PlainText => std::str::from_utf8(bytes)
            .map(DocumentText::from_text)
            .map_err(|_| FormatError::Encoding),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::io::{Cursor, Write};

    /// Wraps body XML in a minimal WordprocessingML document.
    pub(crate) fn document_xml(body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
        )
    }

    /// Builds an in-memory .docx with one paragraph per entry.
    pub(crate) fn build_docx(paragraphs: &[&str]) -> Vec<u8> {
        let body: String = paragraphs
            .iter()
            .map(|p| {
                if p.is_empty() {
                    "<w:p/>".to_string()
                } else {
                    let escaped = p
                        .replace('&', "&amp;")
                        .replace('<', "&lt;")
                        .replace('>', "&gt;");
                    format!(r#"<w:p><w:r><w:t xml:space="preserve">{escaped}</w:t></w:r></w:p>"#)
                }
            })
            .collect();

        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/document.xml", zip::write::FileOptions::default())
            .unwrap();
        writer.write_all(document_xml(&body).as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    /// Builds a one-page PDF whose page dictionary has no /MediaBox. The header,
    /// objects and xref table are well formed; only the page structure is broken.
    pub(crate) fn build_pdf_without_media_box() -> Vec<u8> {
        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            "<< /Type /Page /Parent 2 0 R /Resources << >> /Contents 4 0 R >>".to_string(),
            "<< /Length 0 >>\nstream\n\nendstream".to_string(),
        ];

        let mut pdf = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::with_capacity(objects.len());
        for (i, body) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
        }

        let xref_start = pdf.len();
        pdf.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
        pdf.extend_from_slice(b"0000000000 65535 f \n");
        for offset in offsets {
            pdf.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
        }
        pdf.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_start}\n%%EOF\n",
                objects.len() + 1
            )
            .as_bytes(),
        );
        pdf
    }
}
