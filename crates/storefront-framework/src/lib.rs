//! # Storefront Framework
//!
//! Infrastructure shared by the storefront page, with no knowledge of products, carts or
//! reviews.
//!
//! ## Actors
//!
//! State that may be touched by more than one caller lives inside a [`ResourceActor`]. The
//! actor owns a keyed store of entities and handles one request at a time, so the state
//! needs no locks and every mutation is serialized. Callers hold a cloneable
//! [`ResourceClient`] and get a `Result` back for every request.
//!
//! 1. **Entity layer** ([`ActorEntity`]): the state and its rules.
//! 2. **Runtime layer** ([`ResourceActor`]): the request loop.
//! 3. **Interface layer** ([`ResourceClient`], [`ActorClient`]): typed access.
//!
//! Dependencies reach an entity through its `Context`, passed to `run()` rather than
//! `new()`, so actors can be created first and wired afterwards.
//!
//! ## Event channel
//!
//! Regions of a page that must not reference each other talk through
//! [`EventChannel`](channel::EventChannel): synchronous, in-order, topic-keyed callbacks.
//!
//! ## Testing
//!
//! [`mock::MockClient`] stands in for an actor when testing code built on a client.

pub mod actor;
pub mod channel;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::ResourceActor;
pub use channel::{ChannelError, EventChannel, SubscriptionHandle};
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
