//! # ActorEntity Trait
//!
//! The contract a piece of page state implements so a [`ResourceActor`](crate::ResourceActor)
//! can own it. The associated types pin down which payloads create, update and act on the
//! entity, so a cart action can never be sent to the catalog actor.
//!
//! Hooks default to no-ops where that makes sense: `on_create` and `on_delete` are provided,
//! `on_update` and `handle_action` must be written by the entity.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// State owned exclusively by one actor task.
///
/// # Context
/// `Context` is handed to `run()` and passed by reference into every hook. It carries the
/// values an entity needs but does not own, such as page-wide configuration.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Identifier allocated by the actor. Built from a `u32` counter starting at 1.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload used to build a new instance.
    type Create: Send + Sync + Debug;

    /// Payload used to mutate an existing instance.
    type Update: Send + Sync + Debug;

    /// Entity-specific operations outside create/read/update/delete.
    type Action: Send + Sync + Debug;

    /// What an [`Action`](ActorEntity::Action) returns.
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected at `run()`. Use `()` when there are none.
    type Context: Send + Sync;

    /// One error enum per entity, shared by every hook.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the entity from its id and creation payload. Called before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Runs after construction and before the entity is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies an update in place. On error the actor replies with the error and keeps
    /// whatever state the hook left behind, so hooks should validate before mutating.
    async fn on_update(
        &mut self,
        update: Self::Update,
        ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Runs before the entity is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handles an entity-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
