//! Admin submission entry point.

use serde::Serialize;

use portal_core::entities::{Circular, JournalPost};
use portal_core::requests::Submission;

use crate::error::DatabaseError;
use crate::service::PortalService;

/// The record a submission produced.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Submitted {
    Post(JournalPost),
    Circular(Circular),
}

impl PortalService {
    /// Create a post or circular from one admin form submission.
    pub async fn submit(&self, submission: &Submission) -> Result<Submitted, DatabaseError> {
        match submission {
            Submission::Post(req) => self.create_post(req).await.map(Submitted::Post),
            Submission::Circular(req) => self.create_circular(req).await.map(Submitted::Circular),
        }
    }
}

#[cfg(test)]
mod tests {
    use portal_core::requests::CreatePostRequest;

    use super::*;
    use crate::test_support::test_service;

    #[tokio::test]
    async fn post_submission_creates_post() {
        let svc = test_service().await;
        let submitted = svc
            .submit(&Submission::Post(CreatePostRequest::new("Hello Campus", "hi")))
            .await
            .unwrap();
        let Submitted::Post(post) = submitted else {
            panic!("expected a post");
        };
        assert_eq!(post.slug, "hello-campus");
        assert_eq!(post.category, "General");
        assert!(svc.list_circulars(None, None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn submission_deserializes_from_form_json() {
        let json = serde_json::json!({
            "kind": "circular",
            "title": "Revision of DA Rates",
            "summary": "DA revised",
            "ref_number": "FIN/2024/05/20",
            "issue_date": "2024-05-20",
            "category": "Finance",
            "attachment_url": null
        });
        let submission: Submission = serde_json::from_value(json).unwrap();
        let svc = test_service().await;
        let Submitted::Circular(c) = svc.submit(&submission).await.unwrap() else {
            panic!("expected a circular");
        };
        assert_eq!(c.attachment_url, "#");
    }
}
