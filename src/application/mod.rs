pub mod account;
pub mod click_outside;
pub mod market_queries;
pub mod period_selection;
pub mod remote;
pub mod route_guard;
pub mod session;

pub use click_outside::{ClickOutside, PointerDownSource};
pub use period_selection::PeriodSelection;
pub use remote::{LoadOutcome, RemoteLoader, RequestTracker, ResourceSink};
pub use route_guard::{RouteAccess, route_access};
pub use session::Session;
