//! Factory methods for creating test document data.
//!
//! This module provides factory methods for building the raw JSON values the
//! seeded documents are made of, with sensible defaults to reduce boilerplate
//! in tests.

pub mod points_entry;
pub mod rank;
