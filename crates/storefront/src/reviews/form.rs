//! The submission half of the review board.

use super::error::ReviewError;
use crate::model::{DraftState, DraftUpdate, Review, ReviewDraft, StorefrontEvent, REVIEW_SUBMITTED};
use std::sync::Arc;
use storefront_framework::EventChannel;
use tracing::{debug, info, warn};

/// Collects review input and publishes accepted reviews on `"review-submitted"`.
///
/// The form never sees the published collection; whoever listens on the channel owns it.
pub struct ReviewForm {
    channel: Arc<EventChannel<StorefrontEvent>>,
    draft: ReviewDraft,
    errors: Vec<String>,
    rejected: bool,
}

impl ReviewForm {
    pub fn new(channel: Arc<EventChannel<StorefrontEvent>>) -> Self {
        Self {
            channel,
            draft: ReviewDraft::default(),
            errors: Vec::new(),
            rejected: false,
        }
    }

    /// Assigns one field. Errors from the last submit stay visible until the next submit.
    pub fn update_field(&mut self, update: DraftUpdate) {
        debug!(?update, "Draft field updated");
        self.draft.apply(update);
        self.rejected = false;
    }

    /// Validates the draft and, if it is complete, publishes it and starts a fresh draft.
    ///
    /// On rejection the draft is kept and the messages are stored for
    /// [`validation_errors`](Self::validation_errors). Repeating a rejected submit without
    /// edits yields the same messages.
    pub fn submit(&mut self) -> Result<Review, ReviewError> {
        match self.draft.validate() {
            Ok(review) => {
                let event = StorefrontEvent::ReviewSubmitted(review.clone());
                let delivered = self.channel.publish(REVIEW_SUBMITTED, &event)?;
                self.errors.clear();
                self.draft = ReviewDraft::default();
                self.rejected = false;
                info!(author = %review.author, rating = review.rating, delivered, "Review submitted");
                Ok(review)
            }
            Err(messages) => {
                warn!(?messages, "Review rejected");
                self.errors = messages.clone();
                self.rejected = true;
                Err(ReviewError::ValidationFailed { messages })
            }
        }
    }

    pub fn validation_errors(&self) -> &[String] {
        &self.errors
    }

    pub fn draft(&self) -> &ReviewDraft {
        &self.draft
    }

    pub fn draft_state(&self) -> DraftState {
        if self.rejected {
            DraftState::Invalid
        } else if self.draft.is_blank() {
            DraftState::Empty
        } else if self.draft.validate().is_ok() {
            DraftState::Valid
        } else {
            DraftState::Editing
        }
    }
}
