use crate::reader::{BookReader, Metadata};
use anyhow::{Context, Result};
use rbook::prelude::*;
use rbook::prelude::Metadata as _;
use rbook::Epub;
use std::path::Path;
use tracing::debug;

pub struct EpubData {
    epub: Epub,
}

impl EpubData {
    pub fn open(path: &Path) -> Result<Self> {
        let epub = Epub::options()
            .strict(false)
            .open(path)
            .with_context(|| format!("Failed to open EPUB: {}", path.display()))?;
        Ok(Self { epub })
    }
}

impl BookReader for EpubData {
    fn metadata(&self) -> Metadata {
        // Dublin Core: first declared title and first creator win.
        let title = self
            .epub
            .metadata()
            .title()
            .map(|t| t.value().to_string());
        let author = self
            .epub
            .metadata()
            .creators()
            .next()
            .map(|c| c.value().to_string());

        Metadata { title, author }
    }

    fn text_blocks(&self) -> Result<Vec<String>> {
        let mut blocks = Vec::new();
        let mut reader = self.epub.reader();

        while let Some(result) = reader.read_next() {
            // A single unreadable chapter should not sink the whole scan.
            let data = match result {
                Ok(data) => data,
                Err(err) => {
                    debug!("Skipping unreadable EPUB chapter: {err}");
                    continue;
                }
            };

            let content = data.content().to_string();
            if content.trim().is_empty() {
                continue;
            }

            blocks.push(content);
        }

        Ok(blocks)
    }
}
