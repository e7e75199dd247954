//! Data-driven rotation content and loaders.
//!
//! This crate reads the files the bot subsystem is configured from:
//! - Rotation documents, one row per rule (RON)
//! - Legacy rotation documents, one row per spec with fixed slots (RON)
//! - Per-action requirements, shipped inside rotation documents
//! - Subsystem configuration (TOML, with environment overrides)
//!
//! Rows are kept as plain strings and numbers until they are converted into
//! `bot-core` types, so one bad row never poisons the whole document.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, EntryRow, LegacyDocument, LegacyLoader, LegacySpecRow,
    LoadReport, LoadResult, RequirementRow, RotationDocument, RotationLoader, RowError, SpecRow,
};
