use crate::epub_reader::EpubData;
use crate::isbn;
use crate::pdf_reader::PdfData;
use crate::reader::{BookReader, Metadata};
use std::cell::OnceCell;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Container format, classified from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookFormat {
    Pdf,
    Epub,
    Unknown,
}

impl BookFormat {
    fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("pdf") => Self::Pdf,
            Some("epub") => Self::Epub,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Epub => "EPUB",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for BookFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A best-effort view of one ebook file.
///
/// Metadata and the ISBN are computed on first access and cached for the
/// lifetime of the instance; the underlying file is opened per computation
/// and never held open between calls. Every extraction failure degrades to
/// an absent value — callers scanning batches of uneven-quality files get an
/// answer for each one, never an error.
#[derive(Debug)]
pub struct Book {
    path: PathBuf,
    format: BookFormat,
    metadata: OnceCell<Metadata>,
    isbn: OnceCell<Option<String>>,
}

impl Book {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = BookFormat::from_path(&path);
        Self {
            path,
            format,
            metadata: OnceCell::new(),
            isbn: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> BookFormat {
        self.format
    }

    /// Declared metadata, empty when the format is unknown or the container
    /// cannot be parsed.
    pub fn metadata(&self) -> &Metadata {
        self.metadata.get_or_init(|| {
            self.open_reader("metadata")
                .map(|reader| reader.metadata())
                .unwrap_or_default()
        })
    }

    pub fn title(&self) -> Option<&str> {
        self.metadata().title.as_deref()
    }

    pub fn author(&self) -> Option<&str> {
        self.metadata().author.as_deref()
    }

    /// First ISBN-shaped match found in the container's text blocks, in
    /// reading order, normalized.
    pub fn isbn(&self) -> Option<&str> {
        self.isbn
            .get_or_init(|| {
                let reader = self.open_reader("ISBN")?;
                match reader.text_blocks() {
                    Ok(blocks) => blocks.iter().find_map(|block| isbn::find_isbn(block)),
                    Err(err) => {
                        debug!("{} ISBN scan failed: {err:#}", self.format);
                        None
                    }
                }
            })
            .as_deref()
    }

    fn open_reader(&self, stage: &str) -> Option<Box<dyn BookReader>> {
        let opened: anyhow::Result<Box<dyn BookReader>> = match self.format {
            BookFormat::Pdf => PdfData::open(&self.path).map(|r| Box::new(r) as Box<dyn BookReader>),
            BookFormat::Epub => {
                EpubData::open(&self.path).map(|r| Box::new(r) as Box<dyn BookReader>)
            }
            BookFormat::Unknown => return None,
        };

        match opened {
            Ok(reader) => Some(reader),
            Err(err) => {
                debug!("{} {stage} extraction failed: {err:#}", self.format);
                None
            }
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title().unwrap_or("Unknown"), self.format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_extension_case_insensitively() {
        assert_eq!(Book::new("a.pdf").format(), BookFormat::Pdf);
        assert_eq!(Book::new("a.PDF").format(), BookFormat::Pdf);
        assert_eq!(Book::new("a.epub").format(), BookFormat::Epub);
        assert_eq!(Book::new("a.Epub").format(), BookFormat::Epub);
        assert_eq!(Book::new("a.txt").format(), BookFormat::Unknown);
        assert_eq!(Book::new("noextension").format(), BookFormat::Unknown);
    }

    #[test]
    fn unknown_format_yields_empty_results() {
        // No adapter exists for .txt, so nothing is ever opened or read.
        let book = Book::new("notes.txt");
        assert_eq!(book.format(), BookFormat::Unknown);
        assert_eq!(*book.metadata(), Metadata::default());
        assert_eq!(book.title(), None);
        assert_eq!(book.author(), None);
        assert_eq!(book.isbn(), None);
    }

    #[test]
    fn display_falls_back_to_unknown_title() {
        let book = Book::new("notes.txt");
        assert_eq!(book.to_string(), "Unknown (Unknown)");
    }
}
