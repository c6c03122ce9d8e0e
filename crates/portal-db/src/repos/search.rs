//! Free-text search over posts and circulars.

use portal_core::enums::ContentType;
use portal_core::responses::{SEARCH_LIMIT_PER_TYPE, SearchResult};

use crate::error::DatabaseError;
use crate::helpers::{midnight_utc, parse_date, parse_datetime};
use crate::service::PortalService;

const PER_TYPE: usize = SEARCH_LIMIT_PER_TYPE as usize;

/// Whether any field contains `needle`, which must already be lower-cased.
fn any_contains(needle: &str, fields: &[&str]) -> bool {
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

impl PortalService {
    /// Case-insensitive substring search.
    ///
    /// Posts match on title, excerpt, or content; circulars on title,
    /// summary, or reference number. At most five hits per type, posts
    /// first. Case folding is Unicode-aware. Surrounding whitespace is
    /// ignored and a blank query returns nothing.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, DatabaseError> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }
        tracing::debug!(query = %needle, "searching content");

        let mut results = Vec::new();
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, title, excerpt, content, published_at FROM journal_posts ORDER BY id",
                (),
            )
            .await?;
        let mut posts = 0;
        while let Some(row) = rows.next().await? {
            let title = row.get::<String>(1)?;
            let excerpt = row.get::<String>(2)?;
            if !any_contains(&needle, &[&title, &excerpt, &row.get::<String>(3)?]) {
                continue;
            }
            results.push(SearchResult {
                id: row.get::<i64>(0)?,
                kind: ContentType::Journal,
                title,
                snippet: excerpt,
                date: parse_datetime(&row.get::<String>(4)?)?,
            });
            posts += 1;
            if posts == PER_TYPE {
                break;
            }
        }

        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, title, summary, ref_number, issue_date FROM circulars ORDER BY id",
                (),
            )
            .await?;
        let mut circulars = 0;
        while let Some(row) = rows.next().await? {
            let title = row.get::<String>(1)?;
            let summary = row.get::<String>(2)?;
            if !any_contains(&needle, &[&title, &summary, &row.get::<String>(3)?]) {
                continue;
            }
            results.push(SearchResult {
                id: row.get::<i64>(0)?,
                kind: ContentType::Circular,
                title,
                snippet: summary,
                date: midnight_utc(parse_date(&row.get::<String>(4)?)?),
            });
            circulars += 1;
            if circulars == PER_TYPE {
                break;
            }
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use portal_core::requests::{CreateCircularRequest, CreatePostRequest};

    use super::*;
    use crate::test_support::{test_service, utc};

    #[tokio::test]
    async fn matches_reference_numbers_and_ignores_case() {
        let svc = test_service().await;
        svc.create_circular(&CreateCircularRequest {
            title: "Guidelines for LTC Claims".into(),
            summary: "Checklist".into(),
            ref_number: "ADM/LTC/24-25".into(),
            issue_date: NaiveDate::from_ymd_opt(2024, 5, 15).unwrap(),
            category: "Administration".into(),
            attachment_url: None,
        })
        .await
        .unwrap();

        let hits = svc.search("adm/ltc").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].kind, ContentType::Circular);
        assert_eq!(hits[0].date, utc(2024, 5, 15));
    }

    #[tokio::test]
    async fn wildcards_match_literally() {
        let svc = test_service().await;
        svc.create_post_at(&CreatePostRequest::new("Discount 50% off", "x"), utc(2024, 1, 1))
            .await
            .unwrap();
        svc.create_post_at(&CreatePostRequest::new("Plain title", "x"), utc(2024, 1, 2))
            .await
            .unwrap();

        assert_eq!(svc.search("%").await.unwrap().len(), 1);
        assert!(svc.search("_").await.unwrap().is_empty());
        assert!(svc.search("   ").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn folds_non_ascii_case() {
        let svc = test_service().await;
        svc.create_post_at(&CreatePostRequest::new("Café Menu Änderung", "x"), utc(2024, 3, 1))
            .await
            .unwrap();

        assert_eq!(svc.search("café menu änderung").await.unwrap().len(), 1);
        assert_eq!(svc.search("CAFÉ").await.unwrap().len(), 1);
        assert_eq!(svc.search("ÄNDERUNG").await.unwrap()[0].title, "Café Menu Änderung");
        assert!(svc.search("cafe").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn cap_applies_after_filtering() {
        let svc = test_service().await;
        for n in 1..=4 {
            svc.create_post_at(&CreatePostRequest::new(format!("Noise {n}"), "x"), utc(2024, 1, n))
                .await
                .unwrap();
        }
        for n in 1..=7 {
            svc.create_post_at(
                &CreatePostRequest::new(format!("Übung {n}"), "x"),
                utc(2024, 2, n),
            )
            .await
            .unwrap();
        }

        let hits = svc.search("übung").await.unwrap();
        assert_eq!(hits.len(), 5);
        assert_eq!(hits[0].title, "Übung 1");
        assert_eq!(hits[4].title, "Übung 5");
    }
}
