//! Service layer for business logic and orchestration.
//!
//! This module sits between the external command layer and the repository
//! layer. Services are responsible for:
//!
//! - **Business Logic**: award computation, promotion eligibility, input
//!   validation at the boundary
//! - **Orchestration**: coordinating the ledger and configuration
//!   repositories for multi-step operations
//! - **Narrow Interface**: consuming and returning only primitive ids,
//!   numbers, and domain models, never chat-platform types

pub mod activity;
pub mod authorization;
pub mod config;
pub mod leaderboard;
pub mod points;
pub mod promotion;

#[cfg(test)]
mod test;
