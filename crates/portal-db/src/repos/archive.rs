//! Archive year counts across posts and circulars.

use std::collections::BTreeMap;

use portal_core::responses::ArchiveStat;

use crate::error::DatabaseError;
use crate::service::PortalService;

impl PortalService {
    /// Per-year counts of posts plus circulars, newest year first.
    pub async fn archive_year_counts(&self) -> Result<Vec<ArchiveStat>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT CAST(substr(published_at, 1, 4) AS INTEGER) AS year, COUNT(*) FROM journal_posts GROUP BY year
                 UNION ALL
                 SELECT CAST(substr(issue_date, 1, 4) AS INTEGER) AS year, COUNT(*) FROM circulars GROUP BY year",
                (),
            )
            .await?;

        let mut by_year: BTreeMap<i32, u32> = BTreeMap::new();
        while let Some(row) = rows.next().await? {
            let year = i32::try_from(row.get::<i64>(0)?)
                .map_err(|e| DatabaseError::Query(format!("archive year out of range: {e}")))?;
            let count = u32::try_from(row.get::<i64>(1)?)
                .map_err(|e| DatabaseError::Query(format!("archive count out of range: {e}")))?;
            *by_year.entry(year).or_default() += count;
        }

        Ok(by_year
            .into_iter()
            .rev()
            .map(|(year, count)| ArchiveStat { year, count })
            .collect())
    }
}
