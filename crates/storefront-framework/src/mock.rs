//! # Mock Clients
//!
//! Test doubles for code that sits *around* a [`ResourceClient`]: typed client wrappers and
//! page orchestration. Two styles are offered.
//!
//! - [`MockClient`] answers requests from a queue of expectations, in order. Use it when the
//!   test only cares about what comes back.
//! - [`create_mock_client`] hands back the raw request receiver. Pair it with
//!   [`expect_create`], [`expect_get`], [`expect_update`] and [`expect_action`] to assert on
//!   exactly what the wrapper sent, then answer through the responder.
//!
//! Errors that are awkward to provoke with a real actor, such as a closed channel, are one
//! `return_err` away.
//!
//! ```rust
//! use storefront_framework::mock::MockClient;
//! use storefront_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Basket { id: u32 }
//! #[derive(Debug)] struct BasketCreate;
//! #[derive(Debug, thiserror::Error)] #[error("basket error")] struct BasketError;
//!
//! #[async_trait]
//! impl ActorEntity for Basket {
//!     type Id = u32; type Create = BasketCreate; type Update = ();
//!     type Action = (); type ActionResult = (); type Context = (); type Error = BasketError;
//!     fn from_create_params(id: u32, _: BasketCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
//!     async fn on_update(&mut self, _: (), _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, _: (), _: &()) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Basket>::new();
//!     mock.expect_create().return_ok(1);
//!     mock.expect_get(1).return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.create(BasketCreate).await.unwrap(), 1);
//!     assert!(matches!(client.get(1).await, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

enum Expectation<T: ActorEntity> {
    Create(Result<T::Id, FrameworkError>),
    Get(T::Id, Result<Option<T>, FrameworkError>),
    Update(T::Id, Result<T, FrameworkError>),
    Delete(T::Id, Result<(), FrameworkError>),
    Action(T::Id, Result<T::ActionResult, FrameworkError>),
}

impl<T: ActorEntity> Expectation<T> {
    fn kind(&self) -> &'static str {
        match self {
            Expectation::Create(_) => "Create",
            Expectation::Get(..) => "Get",
            Expectation::Update(..) => "Update",
            Expectation::Delete(..) => "Delete",
            Expectation::Action(..) => "Action",
        }
    }
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A client whose requests are answered from a queue of expectations.
///
/// Requests must arrive in the order the expectations were queued, for the expected id.
/// A mismatch panics inside the background task, which drops the responder; the caller
/// then sees [`FrameworkError::ActorDropped`] and [`verify`](MockClient::verify) reports
/// the leftover expectation.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Starts the background responder. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = queue.lock().unwrap().pop_front();
                answer(request, next);
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_create(&mut self) -> Expect<T, T::Id> {
        self.builder(|response| Expectation::Create(response))
    }

    pub fn expect_get(&mut self, id: T::Id) -> Expect<T, Option<T>> {
        self.builder(move |response| Expectation::Get(id, response))
    }

    pub fn expect_update(&mut self, id: T::Id) -> Expect<T, T> {
        self.builder(move |response| Expectation::Update(id, response))
    }

    pub fn expect_delete(&mut self, id: T::Id) -> Expect<T, ()> {
        self.builder(move |response| Expectation::Delete(id, response))
    }

    pub fn expect_action(&mut self, id: T::Id) -> Expect<T, T::ActionResult> {
        self.builder(move |response| Expectation::Action(id, response))
    }

    /// Panics if any queued expectation was never consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap();
        if let Some(next) = remaining.front() {
            panic!(
                "Not all expectations were met. {} remaining, next is {}",
                remaining.len(),
                next.kind()
            );
        }
    }

    fn builder<R>(
        &self,
        make: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> Expect<T, R> {
        Expect {
            make: Box::new(make),
            expectations: self.expectations.clone(),
        }
    }
}

/// Pending expectation; finish it with [`return_ok`](Expect::return_ok) or
/// [`return_err`](Expect::return_err).
pub struct Expect<T: ActorEntity, R> {
    make: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
    expectations: Queue<T>,
}

impl<T: ActorEntity, R> Expect<T, R> {
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.make)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

fn answer<T: ActorEntity>(request: ResourceRequest<T>, expectation: Option<Expectation<T>>) {
    let kind = request.kind();
    match (request, expectation) {
        (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create(response))) => {
            let _ = respond_to.send(response);
        }
        (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get(expected, response))) => {
            respond_checked(kind, &id, &expected, respond_to, response);
        }
        (
            ResourceRequest::Update { id, respond_to, .. },
            Some(Expectation::Update(expected, response)),
        ) => {
            respond_checked(kind, &id, &expected, respond_to, response);
        }
        (
            ResourceRequest::Delete { id, respond_to },
            Some(Expectation::Delete(expected, response)),
        ) => {
            respond_checked(kind, &id, &expected, respond_to, response);
        }
        (
            ResourceRequest::Action { id, respond_to, .. },
            Some(Expectation::Action(expected, response)),
        ) => {
            respond_checked(kind, &id, &expected, respond_to, response);
        }
        (_, Some(other)) => panic!("Unexpected {kind} request, expected {}", other.kind()),
        (_, None) => panic!("Unexpected {kind} request, no expectations left"),
    }
}

fn respond_checked<I: PartialEq + std::fmt::Debug, R>(
    kind: &str,
    id: &I,
    expected: &I,
    respond_to: Response<R>,
    response: Result<R, FrameworkError>,
) {
    assert_eq!(id, expected, "{kind} request for unexpected id");
    let _ = respond_to.send(response);
}

// =============================================================================
// RECEIVER HELPERS
// =============================================================================

/// A client plus the receiver its requests land on.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Next request, if it is a `Create`.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, Response<T::Id>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next request, if it is a `Get`.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next request, if it is an `Update`.
pub async fn expect_update<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Update, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update {
            id,
            update,
            respond_to,
        }) => Some((id, update, respond_to)),
        _ => None,
    }
}

/// Next request, if it is an `Action`.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Response<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Coupon {
        id: u32,
        code: String,
        redeemed: bool,
    }

    #[derive(Debug)]
    struct CouponCreate {
        code: String,
    }

    #[derive(Debug)]
    enum CouponAction {
        Redeem,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("coupon error")]
    struct CouponError;

    #[async_trait]
    impl ActorEntity for Coupon {
        type Id = u32;
        type Create = CouponCreate;
        type Update = ();
        type Action = CouponAction;
        type ActionResult = bool;
        type Context = ();
        type Error = CouponError;

        fn from_create_params(id: u32, params: CouponCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                code: params.code,
                redeemed: false,
            })
        }

        async fn on_update(&mut self, _: (), _: &()) -> Result<(), Self::Error> {
            Ok(())
        }

        async fn handle_action(&mut self, _: CouponAction, _: &()) -> Result<bool, Self::Error> {
            Ok(!std::mem::replace(&mut self.redeemed, true))
        }
    }

    #[tokio::test]
    async fn receiver_helpers_expose_the_request() {
        let (client, mut receiver) = create_mock_client::<Coupon>(4);

        let task = tokio::spawn(async move {
            client
                .create(CouponCreate {
                    code: "SOCKS10".into(),
                })
                .await
        });

        let (params, responder) = expect_create(&mut receiver).await.expect("Create request");
        assert_eq!(params.code, "SOCKS10");
        responder.send(Ok(7)).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), 7);
    }

    #[tokio::test]
    async fn action_helper_sees_id_and_action() {
        let (client, mut receiver) = create_mock_client::<Coupon>(4);
        let task = tokio::spawn(async move { client.perform_action(3, CouponAction::Redeem).await });

        let (id, action, responder) = expect_action(&mut receiver).await.expect("Action request");
        assert_eq!(id, 3);
        assert!(matches!(action, CouponAction::Redeem));
        responder.send(Ok(true)).unwrap();

        assert!(task.await.unwrap().unwrap());
    }

    #[tokio::test]
    async fn expectations_answer_in_order() {
        let mut mock = MockClient::<Coupon>::new();
        mock.expect_create().return_ok(1);
        mock.expect_action(1).return_ok(true);
        mock.expect_get(1).return_ok(Some(Coupon {
            id: 1,
            code: "SOCKS10".into(),
            redeemed: true,
        }));
        mock.expect_delete(1).return_ok(());

        let client = mock.client();
        let id = client
            .create(CouponCreate {
                code: "SOCKS10".into(),
            })
            .await
            .unwrap();
        assert!(client.perform_action(id, CouponAction::Redeem).await.unwrap());
        assert!(client.get(id).await.unwrap().unwrap().redeemed);
        client.delete(id).await.unwrap();

        mock.verify();
    }

    #[tokio::test]
    async fn injected_errors_reach_the_caller() {
        let mut mock = MockClient::<Coupon>::new();
        mock.expect_update(2).return_err(FrameworkError::NotFound("2".into()));

        let result = mock.client().update(2, ()).await;
        assert!(matches!(result, Err(FrameworkError::NotFound(id)) if id == "2"));
        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Not all expectations were met")]
    async fn verify_reports_unused_expectations() {
        let mut mock = MockClient::<Coupon>::new();
        mock.expect_get(1).return_ok(None);
        mock.verify();
    }
}
