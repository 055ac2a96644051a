pub mod book;
pub mod epub_reader;
pub mod isbn;
pub mod pdf_reader;
pub mod reader;

pub use book::{Book, BookFormat};
pub use reader::Metadata;
