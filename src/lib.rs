//! Momento — a personal journal of short "wisdom" entries with a scripted assistant.
//!
//! Entries are text, image or URL snippets tagged with a [`Source`](entry::Source)
//! and a [`Category`](entry::Category). The whole collection is saved as one JSON
//! value under a single key of a preference store after every change.
//!
//! The assistant answers a message by looking for entries that share a keyword with
//! it and filling in one of five persona-flavored templates:
//!
//! | Persona | Label | Style |
//! |---------|-------|-------|
//! | `motivator` | 동기부여자 | Energy and goals |
//! | `counselor` | 상담사 | Listening, problem solving |
//! | `philosopher` | 철학자 | Meaning and insight |
//! | `friend` | 친구 | Casual |
//! | `mentor` | 멘토 | Growth through experience (default) |
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`db`] — Key-value preference storage (SQLite or in-memory)
//! - [`entry`] — Entry model, the persisted [`EntryStore`](entry::EntryStore), filtering and statistics
//! - [`assistant`] — Keyword matching, reply templates and the [`Assistant`](assistant::Assistant) engine
//! - [`events`] — Broadcast change notifications for observers

pub mod assistant;
pub mod config;
pub mod db;
pub mod entry;
pub mod events;
