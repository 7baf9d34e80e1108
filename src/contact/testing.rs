//! Fakes for driving the contact flow without a browser or a backend.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::time::Duration;

use futures::future::LocalBoxFuture;

use crate::contact::api::{ApiError, ContactApi, ContactReceipt, ContactRequest, HealthProbe};
use crate::contact::controller::Delay;
use crate::contact::form::{FormAction, FormState};

/// Answers each submission with the next scripted result.
pub struct ScriptedApi {
    responses: RefCell<VecDeque<Result<ContactReceipt, ApiError>>>,
    health: Result<HealthProbe, ApiError>,
    calls: Cell<usize>,
    last_request: RefCell<Option<ContactRequest>>,
}

impl ScriptedApi {
    pub fn new(responses: Vec<Result<ContactReceipt, ApiError>>) -> Self {
        Self {
            responses: RefCell::new(responses.into()),
            health: Err(ApiError::Transport("no health script".to_string())),
            calls: Cell::new(0),
            last_request: RefCell::new(None),
        }
    }

    pub fn with_health(mut self, health: Result<HealthProbe, ApiError>) -> Self {
        self.health = health;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn last_request(&self) -> Option<ContactRequest> {
        self.last_request.borrow().clone()
    }
}

impl ContactApi for ScriptedApi {
    fn submit<'a>(
        &'a self,
        request: &'a ContactRequest,
    ) -> LocalBoxFuture<'a, Result<ContactReceipt, ApiError>> {
        self.calls.set(self.calls.get() + 1);
        *self.last_request.borrow_mut() = Some(request.clone());
        let next = self
            .responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("script exhausted".to_string())));
        Box::pin(async move { next })
    }

    fn health(&self) -> LocalBoxFuture<'_, Result<HealthProbe, ApiError>> {
        let health = self.health.clone();
        Box::pin(async move { health })
    }
}

/// Resolves immediately and remembers what was asked for.
#[derive(Default)]
pub struct RecordingDelay {
    requested: RefCell<Vec<Duration>>,
}

impl RecordingDelay {
    pub fn requested(&self) -> Vec<Duration> {
        self.requested.borrow().clone()
    }
}

impl Delay for RecordingDelay {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        self.requested.borrow_mut().push(duration);
        Box::pin(async {})
    }
}

/// Stands in for `use_reducer`: applies dispatched actions and keeps every
/// intermediate state.
pub struct FormRecorder {
    states: RefCell<Vec<FormState>>,
}

impl FormRecorder {
    pub fn new(initial: FormState) -> Self {
        Self {
            states: RefCell::new(vec![initial]),
        }
    }

    pub fn dispatch(&self, action: FormAction) {
        let next = self.current().apply(action);
        self.states.borrow_mut().push(next);
    }

    pub fn current(&self) -> FormState {
        self.states
            .borrow()
            .last()
            .cloned()
            .unwrap_or_default()
    }

    pub fn history(&self) -> Vec<FormState> {
        self.states.borrow().clone()
    }
}
