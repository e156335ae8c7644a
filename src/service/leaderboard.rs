//! Leaderboard computation.
//!
//! Produces sorted standings restricted to the current member set; the
//! command layer owns all message formatting and chunking.

use crate::data::document::DocumentStore;
use crate::data::points::PointsRepository;
use crate::error::AppError;
use crate::model::points::{LeaderboardRow, PointsDocument};

/// Service computing leaderboard standings from the ledger.
pub struct LeaderboardService<'a> {
    points: &'a DocumentStore<PointsDocument>,
}

impl<'a> LeaderboardService<'a> {
    /// Creates a new LeaderboardService instance.
    ///
    /// # Arguments
    /// - `points` - Reference to the opened points document store
    pub fn new(points: &'a DocumentStore<PointsDocument>) -> Self {
        Self { points }
    }

    /// Returns standings for the given members, sorted by points descending.
    ///
    /// Ledger entries for users outside `member_ids` (departed members whose
    /// entries have not been swept yet) are excluded.
    ///
    /// # Arguments
    /// - `member_ids` - Ids of the community's current members
    ///
    /// # Returns
    /// - `Ok(Vec<LeaderboardRow>)` - Sorted standings
    /// - `Err(AppError)` - Document load failure
    pub async fn standings(&self, member_ids: &[u64]) -> Result<Vec<LeaderboardRow>, AppError> {
        let entries = PointsRepository::new(self.points).entries().await?;

        let mut rows: Vec<LeaderboardRow> = entries
            .iter()
            .filter_map(|(key, entry)| {
                let user_id: u64 = key.parse().ok()?;
                member_ids.contains(&user_id).then_some(LeaderboardRow {
                    user_id,
                    points: entry.points,
                })
            })
            .collect();

        rows.sort_by(|a, b| b.points.total_cmp(&a.points));
        Ok(rows)
    }
}

/// Number of pages needed to show `row_count` rows, never 0.
///
/// # Arguments
/// - `row_count` - Total rows in the standings
/// - `per_page` - Rows per page
pub fn total_pages(row_count: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 1;
    }
    row_count.div_ceil(per_page).max(1)
}

/// One page of standings, 1-indexed.
///
/// Out-of-range pages yield an empty slice.
///
/// # Arguments
/// - `rows` - The full sorted standings
/// - `page` - 1-indexed page number
/// - `per_page` - Rows per page
pub fn page(rows: &[LeaderboardRow], page: usize, per_page: usize) -> &[LeaderboardRow] {
    if page == 0 || per_page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(per_page);
    if start >= rows.len() {
        return &[];
    }
    let end = start.saturating_add(per_page).min(rows.len());
    &rows[start..end]
}
