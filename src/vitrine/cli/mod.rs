//! # CLI Behavior
//!
//! This is **one possible UI client** for vitrine, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! ## Data Directory
//!
//! Every backing key lives in one file under the data directory, resolved as:
//!
//! 1. `--data-dir <path>`
//! 2. the `VITRINE_HOME` environment variable
//! 3. the platform data directory (`directories::ProjectDirs`)
//!
//! `config.json` sits in the same directory.
//!
//! ## Sessions
//!
//! `vitrine login` persists the session under the `user` key, so later
//! invocations stay signed in until `vitrine logout`. Reads never need a
//! session; every edit does.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and per-command handlers
//! - `logging`: tracing subscriber setup
//! - `render`: Output formatting (tables, colors, messages)
//! - `setup`: Argument parsing via clap

mod commands;
mod logging;
mod render;
pub mod setup;

pub use commands::run;
