use crate::data::document::DocumentStore;
use crate::error::AppError;
use crate::model::activity::{ActivityKind, ActivityRecord, AttendanceKind};
use crate::model::config::ConfigDocument;
use crate::model::points::PointsDocument;
use crate::service::activity::ActivityService;
use test_utils::builder::TestBuilder;
use test_utils::context::TestContext;

mod award_all;

/// Seeds the value table used across the award tests.
fn seeded_context() -> TestContext {
    TestBuilder::new()
        .with_value("raid", 15.0)
        .with_value("hosting", 10.0)
        .with_value("cohosting", 5.0)
        .with_value("booster", 3.0)
        .with_value("rally", 2.0)
        .with_value("rallyX5", 8.0)
        .with_value("ad", 1.0)
        .with_value("adX3", 4.0)
        .with_value("recruitment", 6.0)
        .with_value("pizzadelivery", 2.5)
        .build()
        .unwrap()
}

/// Opens both stores over the context's seeded documents.
fn open_stores(
    test: &TestContext,
) -> (
    DocumentStore<PointsDocument>,
    DocumentStore<ConfigDocument>,
) {
    (
        DocumentStore::open(&test.points_path, &PointsDocument::default()).unwrap(),
        DocumentStore::open(&test.config_path, &ConfigDocument::default()).unwrap(),
    )
}
