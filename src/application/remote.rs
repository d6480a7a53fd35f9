use std::cell::Cell;
use std::future::Future;
use std::marker::PhantomData;
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};

use crate::domain::{
    errors::ApiResult,
    logging::{LogComponent, LogEntry, LogLevel, get_logger},
};
use crate::log_error;

/// Generation token handed to each request when it is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// Counts issued requests so only the newest one may apply its response.
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: Cell<u64>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> RequestToken {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        RequestToken(next)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.get() == token.0
    }
}

/// Where a loader puts its data and loading flag.
pub trait ResourceSink<T> {
    fn publish(&self, value: T);
    fn set_loading(&self, loading: bool);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    /// A newer request was issued before this one resolved.
    Stale,
    Failed,
}

/// Fetch-on-change loader with latest-wins semantics: a response is applied
/// only if no other request was issued after it.
pub struct RemoteLoader<T, S> {
    name: &'static str,
    tracker: Rc<RequestTracker>,
    sink: Rc<S>,
    _value: PhantomData<fn(T)>,
}

impl<T, S> Clone for RemoteLoader<T, S> {
    fn clone(&self) -> Self {
        Self { name: self.name, tracker: self.tracker.clone(), sink: self.sink.clone(), _value: PhantomData }
    }
}

impl<T, S> RemoteLoader<T, S>
where
    T: 'static,
    S: ResourceSink<T> + 'static,
{
    pub fn new(name: &'static str, sink: S) -> Self {
        Self { name, tracker: Rc::new(RequestTracker::new()), sink: Rc::new(sink), _value: PhantomData }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Issue a request now; the returned future applies its result when it
    /// resolves, unless it has been superseded by then.
    pub fn load<F>(&self, fetch: F) -> LocalBoxFuture<'static, LoadOutcome>
    where
        F: Future<Output = ApiResult<T>> + 'static,
    {
        let token = self.tracker.begin();
        self.sink.set_loading(true);

        let name = self.name;
        let tracker = self.tracker.clone();
        let sink = self.sink.clone();
        async move {
            let result = fetch.await;
            if !tracker.is_current(token) {
                get_logger().log(
                    LogEntry::new(LogLevel::Debug, LogComponent::Application("RemoteLoader"), "discarding stale response")
                        .field("loader", name)
                        .field("token", token.0),
                );
                return LoadOutcome::Stale;
            }
            match result {
                Ok(value) => {
                    sink.publish(value);
                    sink.set_loading(false);
                    LoadOutcome::Applied
                }
                Err(error) => {
                    log_error!(LogComponent::Application("RemoteLoader"), "{}: request failed: {}", name, error);
                    sink.set_loading(false);
                    LoadOutcome::Failed
                }
            }
        }
        .boxed_local()
    }

    /// `load` for executors that only accept `()` futures, such as
    /// `leptos::spawn_local`. The outcome is dropped.
    pub fn load_detached<F>(&self, fetch: F) -> LocalBoxFuture<'static, ()>
    where
        F: Future<Output = ApiResult<T>> + 'static,
    {
        self.load(fetch).map(|_| ()).boxed_local()
    }

    /// Supersede whatever is in flight and publish `value` directly.
    pub fn reset(&self, value: T) {
        self.tracker.begin();
        self.sink.publish(value);
        self.sink.set_loading(false);
    }
}
