//! Pointsboard Test Utils
//!
//! Provides shared testing utilities for building unit tests for the
//! pointsboard application. This crate offers a builder pattern for creating
//! test contexts with seeded JSON documents inside a temporary directory.
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **TestBuilder**: Fluent builder for seeding points and configuration documents
//! - **TestContext**: Test environment owning the temporary directory and document paths
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required documents:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_ledger_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_member(1001, 250.0)
//!         .with_value("raid", 15.0)
//!         .build()?;
//!
//!     // Open stores against test.points_path / test.config_path...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
