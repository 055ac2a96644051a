use anyhow::Result;

/// Declared bibliographic metadata shared across all input formats.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    pub title: Option<String>,
    pub author: Option<String>,
}

/// Trait for reading ebook container formats (PDF, EPUB).
pub trait BookReader {
    /// Extract the container's declared metadata. A field the container does
    /// not declare (or cannot parse) comes back as `None`.
    fn metadata(&self) -> Metadata;

    /// Extract the container's textual content as an ordered sequence of
    /// blocks (PDF pages, EPUB content documents) suitable for scanning.
    fn text_blocks(&self) -> Result<Vec<String>>;
}
