//! Core library for Yojna Mitra, a guided conversation that builds a citizen
//! profile and ranks government assistance programs against it.
//!
//! The crate is organized around three collaborators: a dialogue session that
//! walks the citizen through a fixed question sequence, a static bilingual
//! program catalog, and a matching engine that turns a completed profile into
//! a ranked result set. HTTP and CLI surfaces live in the `yojna-mitra-api`
//! service crate.

pub mod catalog;
pub mod config;
pub mod error;
pub mod localization;
pub mod matching;
pub mod sessions;
pub mod telemetry;
