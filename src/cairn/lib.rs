//! # Cairn Architecture
//!
//! Cairn is a **UI-agnostic climb journaling library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, runs the menu REPL, prompts, prints    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - The climb session state machine: start, log, end,        │
//! │    list, clear                                              │
//! │  - Re-reads activity state from the store on every call     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract ClimbStore trait                                │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Single-Active-Climb Invariant
//!
//! At most one climb in the store lacks an `end_time`. That record is
//! "the active climb", and its presence or absence is derived by
//! scanning the store—never cached in process memory. Each command
//! re-reads the state it is about to mutate, so state survives across
//! process invocations for free.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** prompts; confirmation of destructive operations and the
//!   name prompt for auto-started climbs belong to the CLI
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: The session state machine, one command per file
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Climb`, `Entry`, `Location`)
//! - [`location`]: Location provider abstraction and the GPS stub
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod location;
pub mod model;
pub mod store;
