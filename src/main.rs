mod cli;

use bookprobe::Book;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    if !cli.input.exists() {
        eprintln!("File not found: {}", cli.input.display());
        return ExitCode::FAILURE;
    }
    if !cli.input.is_file() {
        eprintln!("Not a file: {}", cli.input.display());
        return ExitCode::FAILURE;
    }

    let book = Book::new(&cli.input);
    println!("Book: {book}");
    println!("Title: {}", book.title().unwrap_or("-"));
    println!("Author: {}", book.author().unwrap_or("-"));
    println!("ISBN: {}", book.isbn().unwrap_or("-"));

    ExitCode::SUCCESS
}
