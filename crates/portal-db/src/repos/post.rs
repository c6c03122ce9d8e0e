//! Journal post repository: list, create, get, delete.

use chrono::{DateTime, SubsecRound, Utc};

use portal_core::entities::JournalPost;
use portal_core::requests::{CreatePostRequest, slugify};

use crate::error::DatabaseError;
use crate::helpers::{format_datetime, get_bool, get_opt_string, parse_datetime};
use crate::repos::{push_list_filters, where_clause};
use crate::service::PortalService;

const POST_COLUMNS: &str =
    "id, title, slug, excerpt, content, priority, category, published_at, attachment_url";

fn row_to_post(row: &libsql::Row) -> Result<JournalPost, DatabaseError> {
    Ok(JournalPost {
        id: row.get::<i64>(0)?,
        title: row.get::<String>(1)?,
        slug: row.get::<String>(2)?,
        excerpt: row.get::<String>(3)?,
        content: row.get::<String>(4)?,
        priority: get_bool(row, 5)?,
        category: row.get::<String>(6)?,
        published_at: parse_datetime(&row.get::<String>(7)?)?,
        attachment_url: get_opt_string(row, 8)?,
    })
}

impl PortalService {
    /// Posts ordered pinned-first, then newest first.
    pub async fn list_posts(
        &self,
        category: Option<&str>,
        year: Option<i32>,
    ) -> Result<Vec<JournalPost>, DatabaseError> {
        let mut conditions = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        push_list_filters(&mut conditions, &mut params, "published_at", category, year);

        let sql = format!(
            "SELECT {POST_COLUMNS} FROM journal_posts {} ORDER BY priority DESC, published_at DESC",
            where_clause(&conditions)
        );
        tracing::debug!(?category, ?year, "listing journal posts");

        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        let mut posts = Vec::new();
        while let Some(row) = rows.next().await? {
            posts.push(row_to_post(&row)?);
        }
        Ok(posts)
    }

    pub async fn get_post(&self, id: i64) -> Result<JournalPost, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {POST_COLUMNS} FROM journal_posts WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NotFound {
            entity: "post",
            id,
        })?;
        row_to_post(&row)
    }

    /// Publish a post now.
    pub async fn create_post(&self, req: &CreatePostRequest) -> Result<JournalPost, DatabaseError> {
        self.create_post_at(req, Utc::now()).await
    }

    /// Publish a post with an explicit timestamp.
    ///
    /// The slug is derived from the title; a taken slug gets a `-N` suffix.
    pub async fn create_post_at(
        &self,
        req: &CreatePostRequest,
        published_at: DateTime<Utc>,
    ) -> Result<JournalPost, DatabaseError> {
        req.validate()?;
        let published_at = published_at.trunc_subsecs(0);
        let slug = self.unique_slug("journal_posts", &slugify(&req.title)).await?;
        let content = req.effective_content().to_string();
        let attachment_url = req.attachment_url.clone().filter(|u| !u.is_empty());

        let mut rows = self
            .db()
            .conn()
            .query(
                "INSERT INTO journal_posts (title, slug, excerpt, content, priority, category, published_at, attachment_url)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8) RETURNING id",
                libsql::params![
                    req.title.as_str(),
                    slug.as_str(),
                    req.excerpt.as_str(),
                    content.as_str(),
                    i64::from(req.priority),
                    req.category.as_str(),
                    format_datetime(&published_at),
                    attachment_url.as_deref()
                ],
            )
            .await?;
        let id = rows.next().await?.ok_or(DatabaseError::NoResult)?.get::<i64>(0)?;
        tracing::debug!(id, %slug, "journal post created");

        Ok(JournalPost {
            id,
            title: req.title.clone(),
            slug,
            excerpt: req.excerpt.clone(),
            content,
            priority: req.priority,
            category: req.category.clone(),
            published_at,
            attachment_url,
        })
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no post has this id.
    pub async fn delete_post(&self, id: i64) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM journal_posts WHERE id = ?1", [id])
            .await?;
        if affected == 0 {
            return Err(DatabaseError::NotFound { entity: "post", id });
        }
        Ok(())
    }
}
