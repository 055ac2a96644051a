use clap::Parser;
use std::path::PathBuf;

/// Identify the title, author, and ISBN of a PDF or EPUB ebook
#[derive(Parser, Debug)]
#[command(name = "bookprobe", version, about)]
pub struct Cli {
    /// Path to the input ebook file
    pub input: PathBuf,
}
