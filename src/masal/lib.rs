//! # Masal Architecture
//!
//! Masal keeps a local library of generated, illustrated children's stories.
//! The library is **UI-agnostic**: the bundled `masal` binary is one client of
//! it, a graphical front end would be another.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  View Layer (cli/, wired by main.rs)                        │
//! │  - Parses arguments, prints stories and messages            │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the store and the session                           │
//! │  - Resolves selectors, drives the generator                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One function per state-machine trigger                   │
//! │  - Keeps the in-memory library in step with the store       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - StoryStore trait                                         │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The State Machine
//!
//! A [`session::Session`] is in exactly one [`model::AppState`]:
//!
//! ```text
//!            start_new                 generation_complete
//!  Library ────────────▶ Generating ───────────────────────▶ Reading
//!     ▲  ◀──────────────     │                                 │
//!     │   cancel / failure   │                                 │
//!     └──────────────────────┴──────────── back_to_library ────┘
//! ```
//!
//! `open_story` goes from Library to Reading; `delete_story` stays in
//! Library. Before any of this the session is *loading* and refuses
//! every command except the initial load.
//!
//! Storage errors never escape as `Err`. A failed load gives an empty
//! library, a failed delete leaves the story listed, and a failed save of a
//! freshly generated story still lets the user read it. Each of these comes
//! back as an error message in the command's [`commands::CmdResult`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per trigger
//! - [`session`]: Current state, library list, active story, loading flag
//! - [`library`]: Ordered, id-unique in-memory story list
//! - [`store`]: Storage abstraction and implementations
//! - [`generator`]: The story generation collaborator
//! - [`model`]: Core data types (`Story`, `Page`, `AppState`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod generator;
pub mod library;
pub mod model;
pub mod session;
pub mod store;
