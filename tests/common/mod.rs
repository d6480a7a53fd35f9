#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use futures::channel::oneshot;
use futures::future::LocalBoxFuture;
use investment_lens::domain::errors::TransportError;
pub use investment_lens::infrastructure::http::ApiResponse;
use investment_lens::infrastructure::http::{ApiClient, ApiRequest, HttpTransport};

type Reply = Result<ApiResponse, TransportError>;

enum Scripted {
    Ready(Reply),
    /// Resolves when the test sends on the paired sender.
    Held(oneshot::Receiver<Reply>),
}

/// Scripted backend: replies are queued per path and every request is recorded.
/// A path with nothing queued fails at the transport level.
#[derive(Default)]
pub struct FakeTransport {
    replies: RefCell<HashMap<String, VecDeque<Scripted>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl FakeTransport {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    fn script(&self, path: &str, scripted: Scripted) {
        self.replies.borrow_mut().entry(path.to_string()).or_default().push_back(scripted);
    }

    pub fn reply(&self, path: &str, status: u16, body: &str) -> &Self {
        self.script(path, Scripted::Ready(Ok(ApiResponse::new(status, body))));
        self
    }

    pub fn fail(&self, path: &str, reason: &str) -> &Self {
        self.script(path, Scripted::Ready(Err(TransportError(reason.to_string()))));
        self
    }

    /// Queue a reply the test releases later through the returned sender.
    pub fn hold(&self, path: &str) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.script(path, Scripted::Held(rx));
        tx
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.requests.borrow().iter().map(|r| r.path.clone()).collect()
    }
}

impl HttpTransport for FakeTransport {
    fn send(&self, request: ApiRequest) -> LocalBoxFuture<'_, Result<ApiResponse, TransportError>> {
        let reply = self.replies.borrow_mut().get_mut(&request.path).and_then(|queue| queue.pop_front());
        let path = request.path.clone();
        self.requests.borrow_mut().push(request);
        Box::pin(async move {
            match reply {
                Some(Scripted::Ready(reply)) => reply,
                Some(Scripted::Held(rx)) => {
                    rx.await.unwrap_or_else(|_| Err(TransportError(format!("held reply for {} dropped", path))))
                }
                None => Err(TransportError(format!("nothing scripted for {}", path))),
            }
        })
    }
}

pub fn client(transport: &Rc<FakeTransport>) -> ApiClient {
    ApiClient::new(transport.clone())
}

pub const USER_JSON: &str = r#"{"user_id":"6f1c","username":"luntaixia","is_admin":false}"#;

pub const AAPL_JSON: &str = r#"{"symbol":"AAPL","name":"Apple Inc.","exchange":"NMS","currency":1,"prop_type":3,"industry":"Consumer Electronics","sector":"Technology","country":"United States"}"#;
