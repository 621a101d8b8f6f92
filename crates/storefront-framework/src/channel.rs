//! # Event Channel
//!
//! A synchronous publish/subscribe registry for page regions that do not hold references
//! to each other. A region subscribes to a topic with a callback; another region publishes
//! a payload on that topic and every callback registered at that moment runs once, in
//! subscription order, on the publishing thread, before `publish` returns.
//!
//! There is no queue: a subscriber registered after a publish never sees it.
//!
//! ## Locking
//!
//! The registry sits behind a single mutex that is held only while the subscriber list is
//! changed or copied. Callbacks run with the lock released, so a callback may subscribe,
//! unsubscribe or publish on *another* topic. Publishing the topic that is currently being
//! dispatched on the same thread is rejected with [`ChannelError::ReentrantPublish`].
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use storefront_framework::channel::EventChannel;
//!
//! let channel = EventChannel::<String>::new();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//!
//! let sink = seen.clone();
//! let handle = channel.subscribe("greeting", move |msg: &String| {
//!     sink.lock().unwrap().push(msg.clone());
//! });
//!
//! assert_eq!(channel.publish("greeting", &"hello".to_string()).unwrap(), 1);
//! assert!(channel.unsubscribe(&handle));
//! assert_eq!(channel.publish("greeting", &"again".to_string()).unwrap(), 0);
//! assert_eq!(*seen.lock().unwrap(), vec!["hello".to_string()]);
//! ```

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, ThreadId};
use tracing::{debug, warn};

type Callback<E> = Arc<dyn Fn(&E) + Send + Sync>;

/// Errors raised by [`EventChannel::publish`].
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ChannelError {
    /// A callback tried to publish on the topic it is being dispatched for.
    #[error("re-entrant publish on topic '{topic}'")]
    ReentrantPublish { topic: String },
}

/// Identifies one registration. Pass it to [`EventChannel::unsubscribe`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubscriptionHandle {
    id: u64,
    topic: String,
}

impl SubscriptionHandle {
    pub fn topic(&self) -> &str {
        &self.topic
    }
}

struct Subscriber<E> {
    id: u64,
    active: Arc<AtomicBool>,
    callback: Callback<E>,
}

impl<E> Clone for Subscriber<E> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            active: self.active.clone(),
            callback: self.callback.clone(),
        }
    }
}

/// Topic-keyed registry of callbacks receiving payloads of type `E`.
///
/// Share it between regions with an `Arc`; every method takes `&self`.
pub struct EventChannel<E> {
    topics: Mutex<HashMap<String, Vec<Subscriber<E>>>>,
    dispatching: Mutex<HashSet<(ThreadId, String)>>,
    next_id: AtomicU64,
}

impl<E> Default for EventChannel<E> {
    fn default() -> Self {
        Self {
            topics: Mutex::new(HashMap::new()),
            dispatching: Mutex::new(HashSet::new()),
            next_id: AtomicU64::new(1),
        }
    }
}

impl<E> fmt::Debug for EventChannel<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let topics = lock(&self.topics);
        let counts: HashMap<&str, usize> = topics
            .iter()
            .map(|(topic, subs)| (topic.as_str(), subs.len()))
            .collect();
        f.debug_struct("EventChannel")
            .field("topics", &counts)
            .finish()
    }
}

impl<E> EventChannel<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `callback` for `topic`. It receives every later publish on that topic
    /// until the returned handle is passed to [`unsubscribe`](Self::unsubscribe).
    pub fn subscribe<F>(&self, topic: impl Into<String>, callback: F) -> SubscriptionHandle
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        let topic = topic.into();
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let subscriber = Subscriber {
            id,
            active: Arc::new(AtomicBool::new(true)),
            callback: Arc::new(callback),
        };

        let mut topics = lock(&self.topics);
        let subs = topics.entry(topic.clone()).or_default();
        subs.push(subscriber);
        debug!(topic = %topic, subscription = id, subscribers = subs.len(), "Subscribed");

        SubscriptionHandle { id, topic }
    }

    /// Removes a registration. Returns `false` if it was already gone.
    ///
    /// A callback removed while a publish on its topic is in progress is not invoked by
    /// that publish if it had not run yet.
    pub fn unsubscribe(&self, handle: &SubscriptionHandle) -> bool {
        let mut topics = lock(&self.topics);
        let Some(subs) = topics.get_mut(&handle.topic) else {
            return false;
        };
        let Some(pos) = subs.iter().position(|s| s.id == handle.id) else {
            return false;
        };

        let removed = subs.remove(pos);
        removed.active.store(false, Ordering::SeqCst);
        if subs.is_empty() {
            topics.remove(&handle.topic);
        }
        debug!(topic = %handle.topic, subscription = handle.id, "Unsubscribed");
        true
    }

    /// Delivers `payload` to every callback registered on `topic`, in subscription order.
    ///
    /// Returns how many callbacks ran.
    pub fn publish(&self, topic: &str, payload: &E) -> Result<usize, ChannelError> {
        let _guard = DispatchGuard::enter(&self.dispatching, topic)?;

        let snapshot: Vec<Subscriber<E>> = lock(&self.topics)
            .get(topic)
            .map(|subs| subs.to_vec())
            .unwrap_or_default();

        let mut delivered = 0;
        for subscriber in &snapshot {
            if !subscriber.active.load(Ordering::SeqCst) {
                continue;
            }
            (subscriber.callback)(payload);
            delivered += 1;
        }

        debug!(topic, delivered, "Published");
        Ok(delivered)
    }

    /// Number of live registrations on `topic`.
    pub fn subscriber_count(&self, topic: &str) -> usize {
        lock(&self.topics).get(topic).map_or(0, Vec::len)
    }
}

/// Marks `(thread, topic)` as being dispatched for the lifetime of the guard.
struct DispatchGuard<'a> {
    dispatching: &'a Mutex<HashSet<(ThreadId, String)>>,
    key: (ThreadId, String),
}

impl<'a> DispatchGuard<'a> {
    fn enter(
        dispatching: &'a Mutex<HashSet<(ThreadId, String)>>,
        topic: &str,
    ) -> Result<Self, ChannelError> {
        let key = (thread::current().id(), topic.to_string());
        if !lock(dispatching).insert(key.clone()) {
            warn!(topic, "Rejected re-entrant publish");
            return Err(ChannelError::ReentrantPublish {
                topic: topic.to_string(),
            });
        }
        Ok(Self { dispatching, key })
    }
}

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        lock(self.dispatching).remove(&self.key);
    }
}

// A panicking callback never runs while a registry lock is held, so the data behind a
// poisoned lock is still consistent.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
