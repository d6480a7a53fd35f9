use leptos::*;
use leptos_router::*;

use crate::presentation::components::{
    CurrencySection, LoginForm, NavBarLogin, NavBarLogout, RegisterForm, ResetPasswordForms, YFinanceSection,
};
use crate::presentation::context::use_auth;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <NavBarLogout />
        <section class="landing-page">
            <div class="landing-page-container">
                <h1>"Welcome to Investment Lens"</h1>
                <p>"Exchange rates and price history for the markets you follow."</p>
                <div class="landing-actions">
                    <A href="/register" class="landing-button">"Get started"</A>
                    <A href="/login" class="landing-button secondary">"Login"</A>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <NavBarLogout />
        <section class="login-page">
            <LoginForm />
        </section>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <NavBarLogout />
        <section class="register-page">
            <RegisterForm />
        </section>
    }
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    view! {
        <NavBarLogout />
        <section class="reset-password-page">
            <ResetPasswordForms />
        </section>
    }
}

/// Dashboard greeting; only mounted behind the route guard.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let greeting = move || match auth.user() {
        Some(user) if user.is_admin => format!("Welcome, {} (admin)", user.username),
        Some(user) => format!("Welcome, {}", user.username),
        None => String::new(),
    };

    view! {
        <NavBarLogin />
        <section class="home-page">
            <h1>{greeting}</h1>
            <div class="home-cards">
                <A href="/market" class="home-card">
                    <h3>"Market"</h3>
                    <p>"Currency rates and symbol price history"</p>
                </A>
            </div>
        </section>
    }
}

#[component]
pub fn MarketPage() -> impl IntoView {
    view! {
        <NavBarLogin />
        <CurrencySection />
        <YFinanceSection />
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <NavBarLogout />
        <section class="not-found-page">
            <h1>"Page not found"</h1>
            <A href="/">"Back to start"</A>
        </section>
    }
}
