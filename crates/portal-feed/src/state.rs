//! Caller-owned view state fed by ticketed loads.

use crate::aggregator::{FeedLoad, FeedView, LoadTicket};
use crate::error::FeedError;

/// The view currently on screen.
///
/// Only current, successful loads replace it. Superseded loads are ignored
/// and failures keep the previous view, remembering the error message.
#[derive(Debug, Default)]
pub struct FeedState {
    view: Option<FeedView>,
    applied: Option<LoadTicket>,
    last_error: Option<String>,
}

impl FeedState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one load outcome. Returns `true` if the view changed.
    pub fn apply(&mut self, outcome: Result<FeedLoad, FeedError>) -> bool {
        match outcome {
            Ok(FeedLoad::Current { ticket, view }) => {
                if self.applied.is_some_and(|applied| applied > ticket) {
                    return false;
                }
                self.view = Some(view);
                self.applied = Some(ticket);
                self.last_error = None;
                true
            }
            Ok(FeedLoad::Superseded { .. }) => false,
            Err(e) => {
                tracing::warn!(error = %e, "feed load failed, keeping previous view");
                self.last_error = Some(e.to_string());
                false
            }
        }
    }

    #[must_use]
    pub const fn view(&self) -> Option<&FeedView> {
        self.view.as_ref()
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    #[must_use]
    pub fn into_view(self) -> Option<FeedView> {
        self.view
    }
}
