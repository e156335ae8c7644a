//! The persisted configuration document.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::activity::ActivityKind;
use crate::model::rank::RankRule;

/// The configuration document: activity point values plus rank rules.
///
/// Persisted as a single JSON document alongside the points document. The
/// value table stays string-keyed so the storage layer remains open-ended;
/// the typed `ActivityKind` set only restricts what the boundary constructs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigDocument {
    /// Activity key to point value. Missing keys read as 0.
    #[serde(default)]
    pub values: BTreeMap<String, f64>,
    /// Rank name to promotion rule.
    #[serde(default)]
    pub ranks: BTreeMap<String, RankRule>,
}

impl Default for ConfigDocument {
    fn default() -> Self {
        Self {
            values: default_value_table(),
            ranks: BTreeMap::new(),
        }
    }
}

/// The full activity key set, every value zeroed.
pub fn default_value_table() -> BTreeMap<String, f64> {
    ActivityKind::ALL
        .into_iter()
        .map(|kind| (kind.key().to_string(), 0.0))
        .collect()
}
