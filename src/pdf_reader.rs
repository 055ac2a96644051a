use crate::reader::{BookReader, Metadata};
use anyhow::{Context, Result};
use lopdf::{Document, Object};
use std::path::Path;
use tracing::debug;

/// ISBNs live in the front matter; pages past this are not scanned.
const MAX_SCAN_PAGES: usize = 10;

pub struct PdfData {
    document: Document,
}

impl PdfData {
    pub fn open(path: &Path) -> Result<Self> {
        let document = Document::load(path)
            .map_err(|e| anyhow::anyhow!("{}", e))
            .with_context(|| format!("Failed to open PDF: {}", path.display()))?;
        Ok(Self { document })
    }

    /// Look up a string entry in the trailer's Info dictionary, trying both
    /// the canonical capitalized key and a lowercase spelling (producers
    /// disagree on the convention).
    fn info_string(&self, key: &str) -> Option<String> {
        let info = match self.document.trailer.get(b"Info").ok()? {
            Object::Reference(id) => self.document.get_object(*id).ok()?,
            other => other,
        };
        let dict = info.as_dict().ok()?;

        let value = dict
            .get(key.as_bytes())
            .or_else(|_| dict.get(key.to_ascii_lowercase().as_bytes()))
            .ok()?;

        value.as_str().ok().map(decode_pdf_string)
    }
}

impl BookReader for PdfData {
    fn metadata(&self) -> Metadata {
        Metadata {
            title: self.info_string("Title"),
            author: self.info_string("Author"),
        }
    }

    fn text_blocks(&self) -> Result<Vec<String>> {
        let mut blocks = Vec::new();

        // lopdf pages are keyed by 1-indexed page number.
        for &page_number in self.document.get_pages().keys().take(MAX_SCAN_PAGES) {
            match self.document.extract_text(&[page_number]) {
                Ok(text) => blocks.push(text),
                Err(err) => {
                    debug!(page_number, "Skipping undecodable PDF page: {err}");
                    blocks.push(String::new());
                }
            }
        }

        Ok(blocks)
    }
}

/// PDF text strings are either UTF-16BE with a byte-order mark or a latin-ish
/// single-byte encoding; decode the former properly and take the rest as
/// lossy UTF-8.
fn decode_pdf_string(bytes: &[u8]) -> String {
    if let Some(rest) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let units: Vec<u16> = rest
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16_lossy(&units)
    } else {
        String::from_utf8_lossy(bytes).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_utf16be_with_bom() {
        let bytes = [0xFE, 0xFF, 0x00, 0x48, 0x00, 0x69];
        assert_eq!(decode_pdf_string(&bytes), "Hi");
    }

    #[test]
    fn decodes_plain_bytes() {
        assert_eq!(decode_pdf_string(b"Plain Title"), "Plain Title");
    }
}
