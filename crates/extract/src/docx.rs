//! Plain-text extraction from `.docx` packages.

use eventdoc_traits::{ExtractError, WordTextExtractor};
use quick_xml::Reader;
use quick_xml::events::Event as XmlEvent;
use std::io::{Cursor, Read};

const DOCUMENT_PART: &str = "word/document.xml";

/// Reads the main document part of an Office Open XML package and returns
/// its paragraphs, one per line. Tabs and manual line breaks inside a
/// paragraph are kept as `\t` and `\n`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocxTextExtractor;

impl DocxTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl WordTextExtractor for DocxTextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| ExtractError::Archive(e.to_string()))?;
        let xml = read_zip_entry(&mut archive, DOCUMENT_PART)?;
        let paragraphs = parse_document_xml(&xml)?;
        Ok(paragraphs.join("\n"))
    }
}

fn read_zip_entry(
    archive: &mut zip::ZipArchive<Cursor<&[u8]>>,
    path: &str,
) -> Result<String, ExtractError> {
    let mut file = archive
        .by_name(path)
        .map_err(|_| ExtractError::MissingPart(path.to_string()))?;
    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|e| ExtractError::Archive(format!("{path}: {e}")))?;
    Ok(content)
}

fn parse_document_xml(xml: &str) -> Result<Vec<String>, ExtractError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);
    let mut paragraphs = Vec::new();
    // Paragraphs nest through text boxes; each level keeps its own text and
    // is emitted when it closes.
    let mut open: Vec<String> = Vec::new();
    let mut in_text = false;
    let mut buf = Vec::new();

    loop {
        match reader
            .read_event_into(&mut buf)
            .map_err(|e| ExtractError::Xml(e.to_string()))?
        {
            XmlEvent::Start(e) => match e.local_name().as_ref() {
                b"t" => in_text = true,
                b"p" => open.push(String::new()),
                _ => {}
            },
            XmlEvent::Empty(e) => match (e.local_name().as_ref(), open.last_mut()) {
                (b"tab", Some(current)) => current.push('\t'),
                (b"br" | b"cr", Some(current)) => current.push('\n'),
                (b"p", _) => paragraphs.push(String::new()),
                _ => {}
            },
            XmlEvent::End(e) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"p" => paragraphs.extend(open.pop()),
                _ => {}
            },
            XmlEvent::Text(e) if in_text => {
                use quick_xml::escape::unescape;
                let raw_text =
                    std::str::from_utf8(e.as_ref()).map_err(|e| ExtractError::Xml(e.to_string()))?;
                let text = unescape(raw_text).map_err(|e| ExtractError::Xml(e.to_string()))?;
                if let Some(current) = open.last_mut() {
                    current.push_str(&text);
                }
            }
            XmlEvent::GeneralRef(e) if in_text => {
                let name =
                    std::str::from_utf8(&e).map_err(|e| ExtractError::Xml(e.to_string()))?;
                let resolved = resolve_entity(name)
                    .ok_or_else(|| ExtractError::Xml(format!("unknown entity &{name};")))?;
                if let Some(current) = open.last_mut() {
                    current.push(resolved);
                }
            }
            XmlEvent::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(paragraphs)
}

fn resolve_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => {
            let code = name.strip_prefix('#')?;
            let value = match code.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => code.parse().ok()?,
            };
            char::from_u32(value)
        }
    }
}
