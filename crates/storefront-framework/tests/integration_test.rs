use async_trait::async_trait;
use storefront_framework::{ActorEntity, FrameworkError, ResourceActor};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Shelf {
    id: u32,
    label: String,
    facings: Vec<String>,
}

#[derive(Debug)]
struct ShelfCreate {
    label: String,
}

#[derive(Debug)]
struct ShelfRelabel {
    label: String,
}

#[derive(Debug)]
enum ShelfAction {
    Stock(String),
    Count,
}

#[derive(Debug, thiserror::Error, PartialEq)]
enum ShelfError {
    #[error("label must not be empty")]
    EmptyLabel,
}

#[async_trait]
impl ActorEntity for Shelf {
    type Id = u32;
    type Create = ShelfCreate;
    type Update = ShelfRelabel;
    type Action = ShelfAction;
    type ActionResult = usize;
    type Context = usize;
    type Error = ShelfError;

    fn from_create_params(id: u32, params: ShelfCreate) -> Result<Self, Self::Error> {
        if params.label.is_empty() {
            return Err(ShelfError::EmptyLabel);
        }
        Ok(Self {
            id,
            label: params.label,
            facings: Vec::new(),
        })
    }

    async fn on_update(&mut self, update: ShelfRelabel, _ctx: &usize) -> Result<(), Self::Error> {
        if update.label.is_empty() {
            return Err(ShelfError::EmptyLabel);
        }
        self.label = update.label;
        Ok(())
    }

    async fn handle_action(&mut self, action: ShelfAction, capacity: &usize) -> Result<usize, Self::Error> {
        match action {
            ShelfAction::Stock(item) => {
                if self.facings.len() < *capacity {
                    self.facings.push(item);
                }
                Ok(self.facings.len())
            }
            ShelfAction::Count => Ok(self.facings.len()),
        }
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = ResourceActor::<Shelf>::new(10);
    let handle = tokio::spawn(actor.run(3));

    let id = client
        .create(ShelfCreate {
            label: "Hosiery".into(),
        })
        .await
        .unwrap();
    assert_eq!(id, 1);

    // Context caps the shelf at three facings.
    for item in ["green", "blue", "red", "black"] {
        client
            .perform_action(id, ShelfAction::Stock(item.into()))
            .await
            .unwrap();
    }
    assert_eq!(client.perform_action(id, ShelfAction::Count).await.unwrap(), 3);

    let relabeled = client
        .update(
            id,
            ShelfRelabel {
                label: "Socks".into(),
            },
        )
        .await
        .unwrap();
    assert_eq!(relabeled.label, "Socks");
    assert_eq!(relabeled.facings, vec!["green", "blue", "red"]);

    client.delete(id).await.unwrap();
    assert!(client.get(id).await.unwrap().is_none());

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_ids_are_sequential_from_one() {
    let (actor, client) = ResourceActor::<Shelf>::new(10);
    tokio::spawn(actor.run(1));

    for expected in 1..=3 {
        let id = client
            .create(ShelfCreate {
                label: format!("shelf {expected}"),
            })
            .await
            .unwrap();
        assert_eq!(id, expected);
    }
}

#[tokio::test]
async fn test_missing_entity_reports_not_found() {
    let (actor, client) = ResourceActor::<Shelf>::new(10);
    tokio::spawn(actor.run(1));

    let result = client.perform_action(42, ShelfAction::Count).await;
    assert!(matches!(result, Err(FrameworkError::NotFound(id)) if id == "42"));
    assert!(client.get(42).await.unwrap().is_none());
    assert!(matches!(client.delete(42).await, Err(FrameworkError::NotFound(_))));
}

#[tokio::test]
async fn test_entity_errors_keep_their_type() {
    let (actor, client) = ResourceActor::<Shelf>::new(10);
    tokio::spawn(actor.run(1));

    let err = client
        .create(ShelfCreate { label: String::new() })
        .await
        .unwrap_err();
    assert_eq!(err.into_entity_error::<ShelfError>().unwrap(), ShelfError::EmptyLabel);

    let id = client.create(ShelfCreate { label: "Hats".into() }).await.unwrap();
    let err = client
        .update(id, ShelfRelabel { label: String::new() })
        .await
        .unwrap_err();
    assert_eq!(err.into_entity_error::<ShelfError>().unwrap(), ShelfError::EmptyLabel);

    // A rejected update leaves the entity untouched.
    assert_eq!(client.get(id).await.unwrap().unwrap().label, "Hats");
}

#[tokio::test]
async fn test_concurrent_callers_are_serialized() {
    let (actor, client) = ResourceActor::<Shelf>::new(4);
    tokio::spawn(actor.run(1000));
    let id = client.create(ShelfCreate { label: "Bulk".into() }).await.unwrap();

    let tasks: Vec<_> = (0..50)
        .map(|n| {
            let client = client.clone();
            tokio::spawn(async move {
                client
                    .perform_action(id, ShelfAction::Stock(format!("item {n}")))
                    .await
            })
        })
        .collect();
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    assert_eq!(client.perform_action(id, ShelfAction::Count).await.unwrap(), 50);
}

#[tokio::test]
async fn test_closed_actor_rejects_requests() {
    let (actor, client) = ResourceActor::<Shelf>::new(1);
    drop(actor);

    assert!(client.is_closed());
    let result = client.get(1).await;
    assert!(matches!(result, Err(FrameworkError::ActorClosed)));
}
