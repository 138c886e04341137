//! # Vitrine Architecture
//!
//! Vitrine is the content back office of a small agency site: a portfolio,
//! a list of services, the team, the landing page copy and a few site-wide
//! settings. Each of those is an in-memory collection (or document) mirrored
//! to a durable key-value backing. The library is UI-agnostic; the `vitrine`
//! binary is one client of it.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, installs logging       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the hydrated stores and the session                 │
//! │  - Requires a login before any mutation                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation and messages                                  │
//! │  - Operates on Rust types, returns `CmdResult`              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - CollectionStore / DocumentStore over a StorageBackend    │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Hydrate Once, Write Through
//!
//! Every store reads its key exactly once, when the API is built. From then
//! on the in-memory value is authoritative: each successful mutation writes
//! the full snapshot back, and a write failure is logged and recorded in the
//! store's [`store::PersistStatus`] without undoing the mutation. Corrupt
//! persisted values are discarded in favour of the built-in seed data.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits
//! the process. Diagnostics go through `tracing`; what subscriber (if any)
//! receives them is the client's choice.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Validation, gating results and messages for each command
//! - [`store`]: Backing abstraction, backends and the two store shapes
//! - [`model`]: Record and document types (`PortfolioItem`, `ServiceItem`,
//!   `TeamMember`, `SiteSettings`)
//! - [`content`]: The versioned landing page document and its sections
//! - [`seed`]: Built-in datasets used when nothing valid is persisted
//! - [`auth`]: Mock sign-in against a fixed allow-list
//! - [`validation`]: Field checks for drafts and records
//! - [`theme`]: Accent color conversion
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing and printing for the binary (not part of the lib API)

pub mod api;
pub mod auth;
pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod model;
pub mod seed;
pub mod store;
pub mod theme;
pub mod validation;
