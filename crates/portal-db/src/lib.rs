//! # portal-db
//!
//! libSQL content store for the intranet portal.
//!
//! Holds every persisted collection: journal posts, circulars, events,
//! holidays, menus, link categories and quick links, gallery albums, and user
//! profiles. Repository methods live on [`service::PortalService`] in
//! `impl` blocks under [`repos`].

pub mod error;
pub mod handle;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
pub mod updates;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Raw database handle: one libSQL database and its connection.
pub struct PortalDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl PortalDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Unavailable` if the engine cannot be opened,
    /// or `DatabaseError::Migration` if the schema cannot be created.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path)
            .build()
            .await
            .map_err(|e| DatabaseError::Unavailable(format!("open '{path}': {e}")))?;
        let conn = db
            .connect()
            .map_err(|e| DatabaseError::Unavailable(format!("connect '{path}': {e}")))?;

        let portal_db = Self { db, conn };
        portal_db.run_migrations().await?;
        tracing::debug!(path, "content store opened");
        Ok(portal_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Count rows in a table. `table` must be a trusted identifier.
    pub(crate) async fn count_rows(&self, table: &str) -> Result<i64, DatabaseError> {
        let mut rows = self
            .conn
            .query(&format!("SELECT COUNT(*) FROM {table}"), ())
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<i64>(0)?)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    async fn test_db() -> PortalDb {
        PortalDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;

        let tables = [
            "users",
            "journal_posts",
            "circulars",
            "org_events",
            "holidays",
            "menus",
            "link_categories",
            "quick_links",
            "gallery_albums",
        ];
        for table in &tables {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [*table],
                )
                .await
                .unwrap();
            let row = rows.next().await.unwrap();
            assert!(row.is_some(), "table '{table}' should exist");
        }
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        db.run_migrations().await.unwrap();
    }

    #[rstest]
    #[case::month_out_of_range("2024-13-01")]
    #[case::day_out_of_range("2024-02-30")]
    #[case::day_first("02/10/2024")]
    #[case::free_text("not a date")]
    #[tokio::test]
    async fn holiday_date_check_rejects_malformed_dates(#[case] bad: &str) {
        let db = test_db().await;
        let result = db
            .conn()
            .execute(
                "INSERT INTO holidays (name, date, type, color_hex) VALUES ('x', ?1, 'gazetted', '#ef4444')",
                [bad],
            )
            .await;
        assert!(result.is_err(), "date '{bad}' should be rejected");
        assert_eq!(db.count_rows("holidays").await.unwrap(), 0);
    }

    #[rstest]
    #[case::gazetted("gazetted")]
    #[case::restricted("restricted")]
    #[case::optional("optional")]
    #[case::institution("institution")]
    #[tokio::test]
    async fn holiday_type_check_accepts_known_types(#[case] kind: &str) {
        let db = test_db().await;
        db.conn()
            .execute(
                "INSERT INTO holidays (name, date, type, color_hex) VALUES ('Holi', '2024-03-25', ?1, '#eab308')",
                [kind],
            )
            .await
            .unwrap();
        assert_eq!(db.count_rows("holidays").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn holiday_type_check_rejects_unknown_type() {
        let db = test_db().await;
        let result = db
            .conn()
            .execute(
                "INSERT INTO holidays (name, date, type, color_hex) VALUES ('Onam', '2024-09-15', 'festival', '#eab308')",
                (),
            )
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn slug_unique_constraint() {
        let db = test_db().await;
        let insert = "INSERT INTO journal_posts (title, slug, category, published_at) VALUES ('A', 'same', 'General', '2024-01-01T00:00:00Z')";
        db.conn().execute(insert, ()).await.unwrap();
        assert!(db.conn().execute(insert, ()).await.is_err());
    }

    #[tokio::test]
    async fn open_fails_for_unwritable_path() {
        let result = PortalDb::open_local("/nonexistent-dir/for/portal/test.db").await;
        assert!(matches!(
            result,
            Err(DatabaseError::Unavailable(_) | DatabaseError::Migration(_))
        ));
    }
}
