//! # Vitrine CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file
//! only invokes `cli::run()` and handles process termination.
//!
//! Everything that edits content goes through [`vitrine::api::VitrineApi`];
//! the CLI adds argument parsing, terminal rendering and logging setup.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
