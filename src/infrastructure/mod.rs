pub mod dom_events;
pub mod http;
pub mod rendering;
pub mod services;

pub use http::{ApiClient, GlooTransport, HttpTransport};
