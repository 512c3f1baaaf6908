use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use super::FormatError;

const DOCUMENT_PART: &str = "word/document.xml";

/// Containers whose paragraphs are not part of the body's paragraph sequence.
const SKIPPED_CONTAINERS: &[&[u8]] = &[
    b"tbl",
    b"txbxContent",
    b"drawing",
    b"pict",
    b"object",
    b"sdt",
    b"AlternateContent",
];

/// Reads the top-level body paragraphs of a .docx, in document order.
///
/// Text inside runs is concatenated; `<w:tab/>` becomes a tab and `<w:br/>` /
/// `<w:cr/>` become newlines. Tables, text boxes and content controls are skipped.
pub(super) fn read_paragraphs(bytes: &[u8]) -> Result<Vec<String>, FormatError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| FormatError::NotAnArchive(e.to_string()))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|_| FormatError::MissingPart(DOCUMENT_PART.to_string()))?
        .read_to_string(&mut xml)
        .map_err(|e| FormatError::MalformedXml(e.to_string()))?;

    parse_document_xml(&xml)
}

fn parse_document_xml(xml: &str) -> Result<Vec<String>, FormatError> {
    let mut reader = Reader::from_str(xml);

    let mut paragraphs = Vec::new();
    let mut current: Option<String> = None;
    let mut skip_depth = 0usize;
    let mut in_run = false;
    let mut in_text = false;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| FormatError::MalformedXml(e.to_string()))?;

        match event {
            Event::Start(e) => {
                let name = e.local_name();
                if SKIPPED_CONTAINERS.contains(&name.as_ref()) {
                    skip_depth += 1;
                    continue;
                }
                if skip_depth > 0 {
                    continue;
                }
                match name.as_ref() {
                    b"p" => current = Some(String::new()),
                    b"r" => in_run = true,
                    b"t" if in_run => in_text = true,
                    _ => {}
                }
            }
            Event::End(e) => {
                let name = e.local_name();
                if SKIPPED_CONTAINERS.contains(&name.as_ref()) {
                    skip_depth = skip_depth.saturating_sub(1);
                    continue;
                }
                if skip_depth > 0 {
                    continue;
                }
                match name.as_ref() {
                    b"p" => {
                        if let Some(text) = current.take() {
                            paragraphs.push(text);
                        }
                    }
                    b"r" => in_run = false,
                    b"t" => in_text = false,
                    _ => {}
                }
            }
            Event::Empty(e) => {
                if skip_depth > 0 {
                    continue;
                }
                match e.local_name().as_ref() {
                    b"p" => paragraphs.push(String::new()),
                    b"tab" if in_run => push_char(&mut current, '\t'),
                    b"br" | b"cr" if in_run => push_char(&mut current, '\n'),
                    _ => {}
                }
            }
            Event::Text(t) if in_text && skip_depth == 0 => {
                let text = t
                    .unescape()
                    .map_err(|e| FormatError::MalformedXml(e.to_string()))?;
                if let Some(buf) = current.as_mut() {
                    buf.push_str(&text);
                }
            }
            Event::CData(t) if in_text && skip_depth == 0 => {
                if let Some(buf) = current.as_mut() {
                    buf.push_str(&String::from_utf8_lossy(&t));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if current.is_some() {
        return Err(FormatError::MalformedXml(
            "document ended inside a paragraph".to_string(),
        ));
    }

    Ok(paragraphs)
}

fn push_char(current: &mut Option<String>, c: char) {
    if let Some(buf) = current.as_mut() {
        buf.push(c);
    }
}
