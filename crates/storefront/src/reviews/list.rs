//! The display half of the review board.

use crate::model::{Review, StorefrontEvent, REVIEW_SUBMITTED};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use storefront_framework::{EventChannel, SubscriptionHandle};
use tracing::{debug, info};

/// Append-only list of published reviews, fed by the `"review-submitted"` topic.
///
/// The subscription is made in [`mount`](Self::mount), before the list is handed out, and
/// removed when the list is dropped.
pub struct ReviewList {
    channel: Arc<EventChannel<StorefrontEvent>>,
    collection: Arc<Mutex<Vec<Review>>>,
    subscription: SubscriptionHandle,
}

impl ReviewList {
    pub fn mount(channel: Arc<EventChannel<StorefrontEvent>>) -> Self {
        let collection = Arc::new(Mutex::new(Vec::new()));
        let sink = collection.clone();
        let subscription = channel.subscribe(REVIEW_SUBMITTED, move |event: &StorefrontEvent| {
            if let StorefrontEvent::ReviewSubmitted(review) = event {
                let mut reviews = lock(&sink);
                reviews.push(review.clone());
                debug!(total = reviews.len(), "Review appended");
            }
        });
        info!(topic = subscription.topic(), "Review list mounted");

        Self {
            channel,
            collection,
            subscription,
        }
    }

    /// Snapshot of the collection in arrival order.
    pub fn reviews(&self) -> Vec<Review> {
        lock(&self.collection).clone()
    }

    pub fn len(&self) -> usize {
        lock(&self.collection).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.collection).is_empty()
    }
}

impl Drop for ReviewList {
    fn drop(&mut self) {
        self.channel.unsubscribe(&self.subscription);
        debug!("Review list unmounted");
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
