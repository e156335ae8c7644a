use chrono::{DateTime, Utc};
use serde_json::{json, Map, Value};
use std::fs;

use crate::context::TestContext;
use crate::error::TestError;
use crate::factory::{points_entry, rank};

/// Builder for creating test contexts with seeded JSON documents.
///
/// Provides a fluent interface for configuring test environments. Use the
/// builder pattern to seed ledger entries, activity values, and rank rules,
/// then call `build()` to write both documents into a fresh temporary
/// directory.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_member(1001, 250.0)
///     .with_rank("Sergeant", 42, 1000.0, &[])
///     .build()?;
/// ```
pub struct TestBuilder {
    points: Map<String, Value>,
    values: Map<String, Value>,
    ranks: Map<String, Value>,
}

impl TestBuilder {
    /// Creates a new test builder with empty documents.
    ///
    /// # Returns
    /// - New `TestBuilder` instance; `build()` writes an empty ledger and a
    ///   configuration document with no values and no ranks unless seeded
    pub fn new() -> Self {
        Self {
            points: Map::new(),
            values: Map::new(),
            ranks: Map::new(),
        }
    }

    /// Seeds a ledger entry for a current member.
    ///
    /// # Arguments
    /// - `user_id` - Id of the member
    /// - `points` - The member's point total
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_member(mut self, user_id: u64, points: f64) -> Self {
        self.points
            .insert(user_id.to_string(), points_entry::entry(points));
        self
    }

    /// Seeds a ledger entry for a member who left the community.
    ///
    /// # Arguments
    /// - `user_id` - Id of the member
    /// - `points` - The member's point total
    /// - `left_at` - When the member was observed leaving
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_departed_member(
        mut self,
        user_id: u64,
        points: f64,
        left_at: DateTime<Utc>,
    ) -> Self {
        self.points.insert(
            user_id.to_string(),
            points_entry::departed_entry(points, left_at),
        );
        self
    }

    /// Seeds an activity value.
    ///
    /// # Arguments
    /// - `key` - Activity key
    /// - `value` - Configured point value
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_value(mut self, key: &str, value: f64) -> Self {
        self.values.insert(key.to_string(), json!(value));
        self
    }

    /// Seeds a rank rule.
    ///
    /// # Arguments
    /// - `name` - Rank name
    /// - `role_id` - Role granted by the promotion
    /// - `points_required` - Point total required to qualify
    /// - `requires_roles` - Roles that must already be held
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_rank(
        mut self,
        name: &str,
        role_id: u64,
        points_required: f64,
        requires_roles: &[u64],
    ) -> Self {
        self.ranks
            .insert(name.to_string(), rank::rule(role_id, points_required, requires_roles));
        self
    }

    /// Writes both seeded documents into a fresh temporary directory.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context owning the directory and document paths
    /// - `Err(TestError)` - Failed to create the directory or write a document
    pub fn build(self) -> Result<TestContext, TestError> {
        let dir = tempfile::tempdir()?;

        let points_path = dir.path().join("points.json");
        let config_path = dir.path().join("config.json");

        let points = Value::Object(self.points);
        let config = json!({
            "values": Value::Object(self.values),
            "ranks": Value::Object(self.ranks),
        });

        fs::write(&points_path, serde_json::to_string_pretty(&points)?)?;
        fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;

        Ok(TestContext {
            dir,
            points_path,
            config_path,
        })
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
