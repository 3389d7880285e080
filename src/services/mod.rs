//! Service layer containing the verification pipeline and side-effect helpers.
//!
//! ## Service map
//! - `config.rs` — TOML config load/validation + reference module selection.
//! - `extract.rs` — reference symbol extraction (pure line classifier).
//! - `search.rs` — candidate corpus search behind the matcher seam.
//! - `coverage.rs` — per-kind coverage accumulation.
//! - `report.rs` — report assembly and text rendering.
//! - `storage.rs` — artifact persistence + run audit log.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod config;
pub mod coverage;
pub mod extract;
pub mod output;
pub mod report;
pub mod search;
pub mod storage;
