use leptos::*;
use leptos_router::*;

use crate::application::route_guard::{LOGIN_ROUTE, RouteAccess, route_access};
use crate::presentation::context::use_auth;

/// Renders `children` only for an authenticated session. Anonymous visitors
/// are sent to the login page without leaving a history entry behind.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let access = create_memo(move |_| auth.state.with(route_access));

    move || match access.get() {
        RouteAccess::Pending => view! { <div class="route-loading">"Loading..."</div> }.into_view(),
        RouteAccess::Denied => view! {
            <Redirect path=LOGIN_ROUTE options=NavigateOptions { replace: true, ..Default::default() } />
        }
        .into_view(),
        RouteAccess::Granted => children().into_view(),
    }
}
