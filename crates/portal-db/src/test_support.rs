//! Shared test utilities for portal-db unit tests.

use chrono::{DateTime, TimeZone, Utc};

use crate::PortalDb;
use crate::service::PortalService;

/// Create an empty in-memory `PortalService` (no seed data).
pub async fn test_service() -> PortalService {
    let db = PortalDb::open_local(":memory:").await.unwrap();
    PortalService::from_db(db)
}

pub fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}
