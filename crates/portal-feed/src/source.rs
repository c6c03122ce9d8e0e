//! Read side of the content store as seen by the aggregator.

use std::future::Future;

use portal_core::entities::{Circular, JournalPost, OrgEvent, QuickLinkCategory};
use portal_core::responses::{ArchiveStat, SearchResult};
use portal_db::error::DatabaseError;
use portal_db::service::PortalService;

/// The store reads a feed load issues.
pub trait ContentSource: Sync {
    fn list_posts(
        &self,
        category: Option<&str>,
        year: Option<i32>,
    ) -> impl Future<Output = Result<Vec<JournalPost>, DatabaseError>> + Send;

    fn list_circulars(
        &self,
        category: Option<&str>,
        year: Option<i32>,
    ) -> impl Future<Output = Result<Vec<Circular>, DatabaseError>> + Send;

    fn list_events(&self) -> impl Future<Output = Result<Vec<OrgEvent>, DatabaseError>> + Send;

    fn archive_year_counts(
        &self,
    ) -> impl Future<Output = Result<Vec<ArchiveStat>, DatabaseError>> + Send;

    fn list_link_categories(
        &self,
    ) -> impl Future<Output = Result<Vec<QuickLinkCategory>, DatabaseError>> + Send;

    fn search(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<SearchResult>, DatabaseError>> + Send;
}

impl ContentSource for PortalService {
    async fn list_posts(
        &self,
        category: Option<&str>,
        year: Option<i32>,
    ) -> Result<Vec<JournalPost>, DatabaseError> {
        Self::list_posts(self, category, year).await
    }

    async fn list_circulars(
        &self,
        category: Option<&str>,
        year: Option<i32>,
    ) -> Result<Vec<Circular>, DatabaseError> {
        Self::list_circulars(self, category, year).await
    }

    async fn list_events(&self) -> Result<Vec<OrgEvent>, DatabaseError> {
        Self::list_events(self).await
    }

    async fn archive_year_counts(&self) -> Result<Vec<ArchiveStat>, DatabaseError> {
        Self::archive_year_counts(self).await
    }

    async fn list_link_categories(&self) -> Result<Vec<QuickLinkCategory>, DatabaseError> {
        Self::list_link_categories(self).await
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, DatabaseError> {
        Self::search(self, query).await
    }
}

impl<T: ContentSource> ContentSource for &T {
    async fn list_posts(
        &self,
        category: Option<&str>,
        year: Option<i32>,
    ) -> Result<Vec<JournalPost>, DatabaseError> {
        (**self).list_posts(category, year).await
    }

    async fn list_circulars(
        &self,
        category: Option<&str>,
        year: Option<i32>,
    ) -> Result<Vec<Circular>, DatabaseError> {
        (**self).list_circulars(category, year).await
    }

    async fn list_events(&self) -> Result<Vec<OrgEvent>, DatabaseError> {
        (**self).list_events().await
    }

    async fn archive_year_counts(&self) -> Result<Vec<ArchiveStat>, DatabaseError> {
        (**self).archive_year_counts().await
    }

    async fn list_link_categories(&self) -> Result<Vec<QuickLinkCategory>, DatabaseError> {
        (**self).list_link_categories().await
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, DatabaseError> {
        (**self).search(query).await
    }
}
