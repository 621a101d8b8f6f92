//! Reviews and the in-progress review draft.

use serde::{Deserialize, Serialize};

pub const NAME_REQUIRED: &str = "Name required.";
pub const REVIEW_REQUIRED: &str = "Review required.";
pub const RATING_REQUIRED: &str = "Rating required.";
pub const RATING_OUT_OF_RANGE: &str = "Rating must be between 1 and 5.";

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

/// A published review. Immutable once published.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub author: String,
    pub body: String,
    pub rating: u8,
}

impl Review {
    pub fn new(author: impl Into<String>, body: impl Into<String>, rating: u8) -> Self {
        Self {
            author: author.into(),
            body: body.into(),
            rating,
        }
    }
}

/// Review input that has not been submitted yet.
///
/// The rating is kept as entered, without clamping, so validation can reject values the
/// form widget should never have produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReviewDraft {
    pub author: Option<String>,
    pub body: Option<String>,
    pub rating: Option<i32>,
}

/// A single field assignment on the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftUpdate {
    Author(String),
    Body(String),
    Rating(Option<i32>),
}

/// Where the draft stands, as shown next to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DraftState {
    /// Nothing entered.
    Empty,
    /// Partially filled in.
    Editing,
    /// Would be accepted by a submit.
    Valid,
    /// The last submit was rejected and nothing has changed since.
    Invalid,
}

impl ReviewDraft {
    pub fn apply(&mut self, update: DraftUpdate) {
        match update {
            DraftUpdate::Author(author) => self.author = Some(author),
            DraftUpdate::Body(body) => self.body = Some(body),
            DraftUpdate::Rating(rating) => self.rating = rating,
        }
    }

    /// True when no field holds a value.
    pub fn is_blank(&self) -> bool {
        is_missing(&self.author) && is_missing(&self.body) && self.rating.is_none()
    }

    /// Builds the review, or lists what is wrong in field order: author, body, rating.
    pub fn validate(&self) -> Result<Review, Vec<String>> {
        let mut messages = Vec::new();
        if is_missing(&self.author) {
            messages.push(NAME_REQUIRED.to_string());
        }
        if is_missing(&self.body) {
            messages.push(REVIEW_REQUIRED.to_string());
        }
        let rating = match self.rating {
            None => {
                messages.push(RATING_REQUIRED.to_string());
                None
            }
            Some(r) if !(MIN_RATING..=MAX_RATING).contains(&r) => {
                messages.push(RATING_OUT_OF_RANGE.to_string());
                None
            }
            Some(r) => u8::try_from(r).ok(),
        };

        match (&self.author, &self.body, rating) {
            (Some(author), Some(body), Some(rating)) if messages.is_empty() => {
                Ok(Review::new(author.clone(), body.clone(), rating))
            }
            _ => Err(messages),
        }
    }
}

fn is_missing(field: &Option<String>) -> bool {
    field.as_deref().map_or(true, str::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ReviewDraft {
        let mut draft = ReviewDraft::default();
        draft.apply(DraftUpdate::Author("Alice".into()));
        draft.apply(DraftUpdate::Body("Great socks".into()));
        draft.apply(DraftUpdate::Rating(Some(5)));
        draft
    }

    #[test]
    fn complete_draft_becomes_a_review() {
        assert_eq!(filled().validate(), Ok(Review::new("Alice", "Great socks", 5)));
    }

    #[test]
    fn empty_draft_lists_every_field_in_order() {
        assert_eq!(
            ReviewDraft::default().validate(),
            Err(vec![
                NAME_REQUIRED.to_string(),
                REVIEW_REQUIRED.to_string(),
                RATING_REQUIRED.to_string(),
            ])
        );
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let mut draft = filled();
        draft.apply(DraftUpdate::Author(String::new()));
        assert_eq!(draft.validate(), Err(vec![NAME_REQUIRED.to_string()]));
    }

    #[test]
    fn rating_outside_one_to_five_is_rejected() {
        for rating in [0, 6, -1, 300] {
            let mut draft = filled();
            draft.apply(DraftUpdate::Rating(Some(rating)));
            assert_eq!(draft.validate(), Err(vec![RATING_OUT_OF_RANGE.to_string()]));
        }
    }

    #[test]
    fn cleared_rating_is_missing() {
        let mut draft = filled();
        draft.apply(DraftUpdate::Rating(None));
        assert_eq!(draft.validate(), Err(vec![RATING_REQUIRED.to_string()]));
    }

    #[test]
    fn blank_tracks_any_entered_value() {
        let mut draft = ReviewDraft::default();
        assert!(draft.is_blank());
        draft.apply(DraftUpdate::Body("ok".into()));
        assert!(!draft.is_blank());
    }
}
