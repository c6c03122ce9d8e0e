//! Link category and quick link repository.
//!
//! Categories own their links. The schema carries no foreign key, so
//! [`PortalService::delete_link_category`] removes both inside one transaction.

use std::collections::HashMap;

use portal_core::entities::{QuickLink, QuickLinkCategory};
use portal_core::errors::CoreError;

use crate::error::DatabaseError;
use crate::helpers::get_bool;
use crate::service::PortalService;

fn row_to_link(row: &libsql::Row) -> Result<QuickLink, DatabaseError> {
    Ok(QuickLink {
        id: row.get::<i64>(0)?,
        category_id: row.get::<i64>(1)?,
        title: row.get::<String>(2)?,
        url: row.get::<String>(3)?,
        is_external: get_bool(row, 4)?,
    })
}

impl PortalService {
    /// Every category in display order, each with its links attached.
    pub async fn list_link_categories(&self) -> Result<Vec<QuickLinkCategory>, DatabaseError> {
        let mut links_by_category: HashMap<i64, Vec<QuickLink>> = HashMap::new();
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, category_id, title, url, is_external FROM quick_links
                 ORDER BY category_id, order_index, id",
                (),
            )
            .await?;
        while let Some(row) = rows.next().await? {
            let link = row_to_link(&row)?;
            links_by_category.entry(link.category_id).or_default().push(link);
        }

        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, name, order_index FROM link_categories ORDER BY order_index, id",
                (),
            )
            .await?;
        let mut categories = Vec::new();
        while let Some(row) = rows.next().await? {
            let id = row.get::<i64>(0)?;
            categories.push(QuickLinkCategory {
                id,
                name: row.get::<String>(1)?,
                order_index: row.get::<i64>(2)?,
                links: links_by_category.remove(&id).unwrap_or_default(),
            });
        }
        Ok(categories)
    }

    /// Append a category after the existing ones.
    pub async fn create_link_category(&self, name: &str) -> Result<QuickLinkCategory, DatabaseError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::Validation("category name must not be empty".into()).into());
        }
        let order_index = self.db().count_rows("link_categories").await?;
        let mut rows = self
            .db()
            .conn()
            .query(
                "INSERT INTO link_categories (name, order_index) VALUES (?1, ?2) RETURNING id",
                libsql::params![name, order_index],
            )
            .await?;
        let id = rows.next().await?.ok_or(DatabaseError::NoResult)?.get::<i64>(0)?;
        tracing::debug!(id, name, "link category created");
        Ok(QuickLinkCategory {
            id,
            name: name.to_string(),
            order_index,
            links: Vec::new(),
        })
    }

    /// Delete a category and every link it owns, atomically.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` (and deletes nothing) if the category does not exist.
    pub async fn delete_link_category(&self, id: i64) -> Result<(), DatabaseError> {
        let tx = self.db().conn().transaction().await?;
        let links = tx
            .execute("DELETE FROM quick_links WHERE category_id = ?1", [id])
            .await?;
        let categories = tx
            .execute("DELETE FROM link_categories WHERE id = ?1", [id])
            .await?;
        if categories == 0 {
            tx.rollback().await?;
            return Err(DatabaseError::NotFound {
                entity: "link category",
                id,
            });
        }
        tx.commit().await?;
        tracing::debug!(id, links, "link category deleted");
        Ok(())
    }

    /// Add a link at the end of a category.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the category does not exist.
    pub async fn create_quick_link(
        &self,
        category_id: i64,
        title: &str,
        url: &str,
        is_external: bool,
    ) -> Result<QuickLink, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT (SELECT COUNT(*) FROM quick_links WHERE category_id = ?1)
                 FROM link_categories WHERE id = ?1",
                [category_id],
            )
            .await?;
        let order_index = rows
            .next()
            .await?
            .ok_or(DatabaseError::NotFound {
                entity: "link category",
                id: category_id,
            })?
            .get::<i64>(0)?;

        let mut rows = self
            .db()
            .conn()
            .query(
                "INSERT INTO quick_links (category_id, title, url, is_external, order_index)
                 VALUES (?1, ?2, ?3, ?4, ?5) RETURNING id",
                libsql::params![category_id, title, url, i64::from(is_external), order_index],
            )
            .await?;
        let id = rows.next().await?.ok_or(DatabaseError::NoResult)?.get::<i64>(0)?;
        Ok(QuickLink {
            id,
            category_id,
            title: title.to_string(),
            url: url.to_string(),
            is_external,
        })
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no link has this id.
    pub async fn delete_quick_link(&self, id: i64) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM quick_links WHERE id = ?1", [id])
            .await?;
        if affected == 0 {
            return Err(DatabaseError::NotFound { entity: "link", id });
        }
        Ok(())
    }
}
