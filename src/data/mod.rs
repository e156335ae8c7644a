//! Document-backed repository layer.
//!
//! This module contains the generic JSON document store and the repository
//! structs that own all reads and writes of the two persisted documents (the
//! points ledger and the configuration document). Repositories perform full
//! read-modify-write cycles through the store and return domain models,
//! keeping file-format concerns out of the service layer.

pub mod config;
pub mod document;
pub mod points;

#[cfg(test)]
mod test;
