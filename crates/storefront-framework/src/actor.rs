//! # ResourceActor
//!
//! The server half of an actor. It owns a keyed store of entities and the receiving end of
//! the request channel, and handles one request at a time. Because nothing else can touch
//! the store, entity state needs no lock: concurrent callers are serialized by the channel.
//!
//! ```rust
//! use storefront_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Tally { id: u32, hits: u32 }
//! #[derive(Debug)] struct TallyCreate;
//! #[derive(Debug)] enum TallyAction { Hit }
//! #[derive(Debug, thiserror::Error)] #[error("tally error")] struct TallyError;
//!
//! #[async_trait]
//! impl ActorEntity for Tally {
//!     type Id = u32; type Create = TallyCreate; type Update = ();
//!     type Action = TallyAction; type ActionResult = u32; type Context = (); type Error = TallyError;
//!     fn from_create_params(id: u32, _: TallyCreate) -> Result<Self, Self::Error> { Ok(Self { id, hits: 0 }) }
//!     async fn on_update(&mut self, _: (), _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, _: TallyAction, _: &()) -> Result<u32, Self::Error> {
//!         self.hits += 1;
//!         Ok(self.hits)
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Tally>::new(8);
//!     tokio::spawn(actor.run(()));
//!     let id = client.create(TallyCreate).await.unwrap();
//!     assert_eq!(client.perform_action(id, TallyAction::Hit).await.unwrap(), 1);
//! }
//! ```

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, Response};
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Owns every entity of type `T` and processes requests sequentially.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: u32,
    entity_type: &'static str,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates the actor and a client connected to it.
    ///
    /// `buffer_size` bounds the request queue; senders wait while it is full.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: 1,
            entity_type: short_type_name::<T>(),
        };
        (actor, ResourceClient::new(sender))
    }

    /// Processes requests until every client has been dropped.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = self.entity_type;
        info!(entity_type, "Actor started");

        while let Some(request) = self.receiver.recv().await {
            match request {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(params, &context).await;
                    reply(respond_to, result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    reply(respond_to, Ok(item));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let result = self.update(&id, update, &context).await;
                    reply(respond_to, result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = self.delete(&id, &context).await;
                    reply(respond_to, result);
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let result = self.act(&id, action, &context).await;
                    reply(respond_to, result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn create(
        &mut self,
        params: T::Create,
        context: &T::Context,
    ) -> Result<T::Id, FrameworkError> {
        let entity_type = self.entity_type;
        let id = T::Id::from(self.next_id);
        self.next_id += 1;

        let mut item = T::from_create_params(id.clone(), params).map_err(|e| {
            warn!(entity_type, error = %e, "Create failed");
            entity_error(e)
        })?;
        item.on_create(context).await.map_err(|e| {
            warn!(entity_type, error = %e, "on_create failed");
            entity_error(e)
        })?;

        self.store.insert(id.clone(), item);
        info!(entity_type, %id, size = self.store.len(), "Created");
        Ok(id)
    }

    async fn update(
        &mut self,
        id: &T::Id,
        update: T::Update,
        context: &T::Context,
    ) -> Result<T, FrameworkError> {
        let entity_type = self.entity_type;
        let item = self.find_mut(id)?;
        item.on_update(update, context).await.map_err(|e| {
            warn!(entity_type, %id, error = %e, "Update failed");
            entity_error(e)
        })?;
        info!(entity_type, %id, "Updated");
        Ok(item.clone())
    }

    async fn delete(&mut self, id: &T::Id, context: &T::Context) -> Result<(), FrameworkError> {
        let entity_type = self.entity_type;
        let item = self.find_mut(id)?;
        item.on_delete(context).await.map_err(|e| {
            warn!(entity_type, %id, error = %e, "on_delete failed");
            entity_error(e)
        })?;
        self.store.remove(id);
        info!(entity_type, %id, size = self.store.len(), "Deleted");
        Ok(())
    }

    async fn act(
        &mut self,
        id: &T::Id,
        action: T::Action,
        context: &T::Context,
    ) -> Result<T::ActionResult, FrameworkError> {
        let entity_type = self.entity_type;
        let item = self.find_mut(id)?;
        match item.handle_action(action, context).await {
            Ok(result) => {
                info!(entity_type, %id, "Action ok");
                Ok(result)
            }
            Err(e) => {
                warn!(entity_type, %id, error = %e, "Action failed");
                Err(entity_error(e))
            }
        }
    }

    fn find_mut(&mut self, id: &T::Id) -> Result<&mut T, FrameworkError> {
        let entity_type = self.entity_type;
        self.store.get_mut(id).ok_or_else(|| {
            warn!(entity_type, %id, "Not found");
            FrameworkError::NotFound(id.to_string())
        })
    }
}

fn reply<R>(respond_to: Response<R>, result: Result<R, FrameworkError>) {
    // The caller may have given up waiting; nothing to do in that case.
    let _ = respond_to.send(result);
}

fn entity_error<E: std::error::Error + Send + Sync + 'static>(e: E) -> FrameworkError {
    FrameworkError::EntityError(Box::new(e))
}

// "storefront::model::cart::Cart" -> "Cart"
fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
