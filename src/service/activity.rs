//! Activity award computation and application.
//!
//! This module turns structured activity records into point grants using the
//! configured value table, then applies them through the ledger. Manual log
//! commands and the external log-parsing collaborator both produce
//! `ActivityRecord`s, so a parsed free-text log takes exactly the same path
//! as a hand-entered one.

use tracing::debug;

use crate::data::config::ConfigRepository;
use crate::data::document::DocumentStore;
use crate::data::points::PointsRepository;
use crate::error::AppError;
use crate::model::activity::{ActivityKind, ActivityRecord, AttendanceKind, AwardedPoints};
use crate::model::config::ConfigDocument;
use crate::model::points::PointsDocument;

/// Attendee count at which a rally pays the large-rally value.
const LARGE_RALLY_ATTENDEES: u32 = 5;

/// Service computing and applying point awards for logged activities.
pub struct ActivityService<'a> {
    points: &'a DocumentStore<PointsDocument>,
    config: &'a DocumentStore<ConfigDocument>,
}

impl<'a> ActivityService<'a> {
    /// Creates a new ActivityService instance.
    ///
    /// # Arguments
    /// - `points` - Reference to the opened points document store
    /// - `config` - Reference to the opened configuration document store
    pub fn new(
        points: &'a DocumentStore<PointsDocument>,
        config: &'a DocumentStore<ConfigDocument>,
    ) -> Self {
        Self { points, config }
    }

    /// Applies one activity record to the ledger.
    ///
    /// Award rules, all driven by the configured value table:
    /// - event activities pay their base value, plus the hosting or
    ///   co-hosting value when applicable, plus the booster bonus when the
    ///   member boosts the server
    /// - rallies pay the large-rally value from 5 attendees up
    /// - ads pay the x3 value for exactly 3 or 6 posted in a day
    /// - recruitment, leaderboard tasks, nameplates, and every other kind pay
    ///   their value once per completion
    ///
    /// # Arguments
    /// - `record` - The structured activity record to apply
    ///
    /// # Returns
    /// - `Ok(AwardedPoints)` - Amount granted and the member's new total
    /// - `Err(AppError::InvalidInput)` - Zero quantity
    /// - `Err(AppError)` - Document load or save failure
    pub async fn award(&self, record: &ActivityRecord) -> Result<AwardedPoints, AppError> {
        if record.quantity == 0 {
            return Err(AppError::InvalidInput(format!(
                "Quantity must be at least 1 for activity '{}'",
                record.activity
            )));
        }

        let config_repo = ConfigRepository::new(self.config);

        let base = if record.activity.is_event() {
            let mut amount = config_repo.get_value(record.activity.key()).await?;
            match record.attendance {
                Some(AttendanceKind::Attending) | None => {}
                Some(attendance) => {
                    amount += config_repo.get_value(attendance.key()).await?;
                }
            }
            amount
        } else {
            match record.activity {
                ActivityKind::Rally => {
                    if record.quantity >= LARGE_RALLY_ATTENDEES {
                        config_repo.get_value(ActivityKind::RallyX5.key()).await?
                    } else {
                        config_repo.get_value(ActivityKind::Rally.key()).await?
                    }
                }
                ActivityKind::Ad => {
                    if record.quantity == 3 || record.quantity == 6 {
                        config_repo.get_value(ActivityKind::AdX3.key()).await?
                    } else {
                        config_repo.get_value(ActivityKind::Ad.key()).await?
                    }
                }
                kind => {
                    config_repo.get_value(kind.key()).await? * f64::from(record.quantity)
                }
            }
        };

        // The booster bonus only rides on hosted events.
        let booster_bonus = if record.booster && record.activity.is_event() {
            config_repo.get_value(ActivityKind::Booster.key()).await?
        } else {
            0.0
        };

        let amount = base + booster_bonus;
        let total = PointsRepository::new(self.points)
            .add_points(record.user_id, amount)
            .await?;

        debug!(
            "Awarded {} points to {} for {} x{}",
            amount, record.user_id, record.activity, record.quantity
        );

        Ok(AwardedPoints {
            amount,
            booster_bonus,
            total,
        })
    }

    /// Applies a batch of records sequentially, as produced by the external
    /// log parser.
    ///
    /// Stops at the first failure; earlier grants in the batch stay applied.
    ///
    /// # Arguments
    /// - `records` - Structured records to apply in order
    ///
    /// # Returns
    /// - `Ok(Vec<AwardedPoints>)` - One result per record, in input order
    /// - `Err(AppError)` - First failure encountered
    pub async fn award_all(
        &self,
        records: &[ActivityRecord],
    ) -> Result<Vec<AwardedPoints>, AppError> {
        let mut results = Vec::with_capacity(records.len());
        for record in records {
            results.push(self.award(record).await?);
        }
        Ok(results)
    }
}
