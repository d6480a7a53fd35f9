use leptos::*;
use leptos_router::*;

use crate::domain::logging::{LogComponent, get_logger};
use crate::presentation::context::use_auth;

#[component]
fn Brand(href: &'static str) -> impl IntoView {
    view! {
        <A href=href class="navbar-logo">
            <span class="navbar-logo-mark">"◎"</span>
            <span>"Investment Lens"</span>
        </A>
    }
}

/// Navbar for visitors without a session.
#[component]
pub fn NavBarLogout() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="navbar-container">
                <Brand href="/" />
                <div class="navbar-menu">
                    <A href="/register" class="navbar-link">"Register"</A>
                    <A href="/login" class="navbar-link">"Login"</A>
                </div>
            </div>
        </nav>
    }
}

/// Navbar for guarded pages; logging out lands on the login page.
#[component]
pub fn NavBarLogin() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let on_logout = move |_| {
        let session = auth.session();
        let navigate = navigate.clone();
        spawn_local(async move {
            let outcome = session.logout().await;
            get_logger().info(LogComponent::Presentation("NavBar"), &outcome.message);
            if outcome.is_success {
                navigate("/login", NavigateOptions::default());
            }
        });
    };

    view! {
        <nav class="navbar">
            <div class="navbar-container">
                <Brand href="/home" />
                <div class="navbar-menu">
                    <A href="/home" class="navbar-link">"Home"</A>
                    <A href="/market" class="navbar-link">"Market"</A>
                    <button type="button" class="navbar-link" on:click=on_logout>"Logout"</button>
                </div>
            </div>
        </nav>
    }
}
