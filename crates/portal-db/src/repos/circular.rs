//! Circular repository: list, create, delete.

use portal_core::entities::{ATTACHMENT_PLACEHOLDER, Circular};
use portal_core::requests::{CreateCircularRequest, slugify};

use crate::error::DatabaseError;
use crate::helpers::{format_date, get_bool, parse_date};
use crate::repos::{push_list_filters, where_clause};
use crate::service::PortalService;

const CIRCULAR_COLUMNS: &str =
    "id, title, slug, summary, ref_number, issue_date, category, is_archived, attachment_url";

fn row_to_circular(row: &libsql::Row) -> Result<Circular, DatabaseError> {
    Ok(Circular {
        id: row.get::<i64>(0)?,
        title: row.get::<String>(1)?,
        slug: row.get::<String>(2)?,
        summary: row.get::<String>(3)?,
        ref_number: row.get::<String>(4)?,
        issue_date: parse_date(&row.get::<String>(5)?)?,
        category: row.get::<String>(6)?,
        is_archived: get_bool(row, 7)?,
        attachment_url: row.get::<String>(8)?,
    })
}

impl PortalService {
    /// Circulars, newest issue date first.
    pub async fn list_circulars(
        &self,
        category: Option<&str>,
        year: Option<i32>,
    ) -> Result<Vec<Circular>, DatabaseError> {
        let mut conditions = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        push_list_filters(&mut conditions, &mut params, "issue_date", category, year);

        let sql = format!(
            "SELECT {CIRCULAR_COLUMNS} FROM circulars {} ORDER BY issue_date DESC",
            where_clause(&conditions)
        );
        tracing::debug!(?category, ?year, "listing circulars");

        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        let mut circulars = Vec::new();
        while let Some(row) = rows.next().await? {
            circulars.push(row_to_circular(&row)?);
        }
        Ok(circulars)
    }

    /// Issue a circular. New circulars are never archived; a missing
    /// attachment is stored as the `"#"` placeholder.
    pub async fn create_circular(
        &self,
        req: &CreateCircularRequest,
    ) -> Result<Circular, DatabaseError> {
        req.validate()?;
        let slug = self.unique_slug("circulars", &slugify(&req.title)).await?;
        let attachment_url = req
            .attachment_url
            .clone()
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| ATTACHMENT_PLACEHOLDER.to_string());

        let mut rows = self
            .db()
            .conn()
            .query(
                "INSERT INTO circulars (title, slug, summary, ref_number, issue_date, is_archived, category, attachment_url)
                 VALUES (?1, ?2, ?3, ?4, ?5, 0, ?6, ?7) RETURNING id",
                libsql::params![
                    req.title.as_str(),
                    slug.as_str(),
                    req.summary.as_str(),
                    req.ref_number.as_str(),
                    format_date(req.issue_date),
                    req.category.as_str(),
                    attachment_url.as_str()
                ],
            )
            .await?;
        let id = rows.next().await?.ok_or(DatabaseError::NoResult)?.get::<i64>(0)?;
        tracing::debug!(id, ref_number = %req.ref_number, "circular created");

        Ok(Circular {
            id,
            title: req.title.clone(),
            slug,
            summary: req.summary.clone(),
            ref_number: req.ref_number.clone(),
            issue_date: req.issue_date,
            category: req.category.clone(),
            is_archived: false,
            attachment_url,
        })
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no circular has this id.
    pub async fn delete_circular(&self, id: i64) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM circulars WHERE id = ?1", [id])
            .await?;
        if affected == 0 {
            return Err(DatabaseError::NotFound {
                entity: "circular",
                id,
            });
        }
        Ok(())
    }
}
