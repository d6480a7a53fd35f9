use leptos::*;
use leptos_router::*;

use crate::config::AppConfig;
use crate::presentation::components::ProtectedRoute;
use crate::presentation::context::provide_app_context;
use crate::presentation::pages::{
    HomePage, LandingPage, LoginPage, MarketPage, NotFoundPage, RegisterPage, ResetPasswordPage,
};

/// Root component: shared context, global styles and the route table.
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_app_context(config);

    view! {
        <style>{STYLES}</style>
        <Router>
            <main class="investment-lens-app">
                <Routes>
                    <Route path="/" view=LandingPage />
                    <Route path="/register" view=RegisterPage />
                    <Route path="/login" view=LoginPage />
                    <Route path="/reset_password" view=ResetPasswordPage />
                    <Route
                        path="/home"
                        view=|| view! { <ProtectedRoute><HomePage /></ProtectedRoute> }
                    />
                    <Route
                        path="/market"
                        view=|| view! { <ProtectedRoute><MarketPage /></ProtectedRoute> }
                    />
                    <Route path="/*any" view=NotFoundPage />
                </Routes>
            </main>
        </Router>
    }
}

const STYLES: &str = r#"
.investment-lens-app {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
    min-height: 100vh;
    background: #f5f7f6;
    color: #1f2d2b;
}

.navbar {
    background: #427a76;
    padding: 12px 24px;
}

.navbar-container {
    display: flex;
    justify-content: space-between;
    align-items: center;
    max-width: 1100px;
    margin: 0 auto;
}

.navbar-logo {
    display: flex;
    gap: 8px;
    align-items: center;
    color: white;
    font-weight: 700;
    font-size: 20px;
    text-decoration: none;
}

.navbar-menu {
    display: flex;
    gap: 16px;
}

.navbar-link {
    color: white;
    background: none;
    border: none;
    font-size: 15px;
    cursor: pointer;
    text-decoration: none;
}

.landing-page, .login-page, .register-page, .reset-password-page, .home-page, .not-found-page {
    display: flex;
    flex-direction: column;
    align-items: center;
    padding: 48px 16px;
    gap: 24px;
}

.landing-actions, .home-cards {
    display: flex;
    gap: 16px;
}

.landing-button, .home-card {
    padding: 12px 20px;
    border-radius: 8px;
    background: #427a76;
    color: white;
    text-decoration: none;
}

.landing-button.secondary {
    background: white;
    color: #427a76;
    border: 1px solid #427a76;
}

.register-form {
    display: flex;
    flex-direction: column;
    gap: 14px;
    width: 360px;
    padding: 28px;
    background: white;
    border-radius: 12px;
    box-shadow: 0 4px 16px rgba(0, 0, 0, 0.08);
}

.register-form-row {
    display: flex;
    flex-direction: column;
    gap: 6px;
}

.register-form-row input {
    padding: 10px;
    border: 1px solid #c9d6d4;
    border-radius: 6px;
}

.register-form-button {
    padding: 10px;
    border: none;
    border-radius: 6px;
    background: #427a76;
    color: white;
    font-weight: 600;
    cursor: pointer;
}

.register-form-button:disabled {
    opacity: 0.6;
    cursor: progress;
}

.error { color: #b03a2e; font-size: 13px; margin: 0; }
.success { color: #1e8449; }
.fail { color: #b03a2e; }

.market-page-container, .yfinance-section {
    max-width: 1100px;
    margin: 24px auto;
    padding: 24px;
    background: white;
    border-radius: 12px;
}

.currencies-dropdown-container {
    display: flex;
    gap: 24px;
    align-items: flex-end;
    flex-wrap: wrap;
}

.currency-dropdown-wrapper {
    position: relative;
}

.currency-dropdown-button {
    display: flex;
    gap: 8px;
    align-items: center;
    padding: 8px 12px;
    border: 1px solid #c9d6d4;
    border-radius: 6px;
    background: white;
    cursor: pointer;
}

.currency-dropdown-list {
    position: absolute;
    z-index: 10;
    list-style: none;
    margin: 4px 0 0;
    padding: 4px 0;
    max-height: 260px;
    overflow-y: auto;
    background: white;
    border: 1px solid #c9d6d4;
    border-radius: 6px;
}

.currency-dropdown-item {
    display: flex;
    gap: 8px;
    padding: 6px 14px;
    cursor: pointer;
}

.currency-dropdown-item.selected, .currency-dropdown-item:hover {
    background: #e4efed;
}

.current-fx-rate-value {
    font-size: 22px;
    font-weight: 700;
    color: #427a76;
}

.chart-container {
    position: relative;
    display: flex;
    flex-direction: column;
    gap: 10px;
    margin-top: 20px;
}

.chart-toolbar {
    display: flex;
    justify-content: space-between;
    align-items: center;
}

.chart-wrapper {
    position: relative;
}

.area-chart {
    width: 100%;
    cursor: crosshair;
}

.chart-tooltip {
    position: absolute;
    top: 8px;
    right: 8px;
    background: rgba(255, 255, 255, 0.95);
    border: 1px solid #c9d6d4;
    border-radius: 6px;
    padding: 6px 10px;
    font-size: 12px;
    pointer-events: none;
}

.chart-tooltip-value {
    font-weight: 700;
    color: #427a76;
}

.period-toolbar {
    display: flex;
    gap: 6px;
}

.period-button {
    padding: 4px 10px;
    border: 1px solid #c9d6d4;
    border-radius: 4px;
    background: white;
    cursor: pointer;
}

.period-button.active {
    background: #427a76;
    color: white;
}

.yfinance-search-bar-container {
    position: relative;
    max-width: 480px;
}

.yfinance-search-bar input {
    width: 100%;
    padding: 10px;
    border: 1px solid #c9d6d4;
    border-radius: 6px;
}

.yfinance-search-board {
    position: absolute;
    z-index: 10;
    width: 100%;
    background: white;
    border: 1px solid #c9d6d4;
    border-radius: 6px;
}

.yfinance-search-board-item {
    padding: 8px 12px;
    cursor: pointer;
}

.yfinance-search-board-item-header {
    display: flex;
    justify-content: space-between;
}

.yfinance-search-board-item-tags {
    display: flex;
    gap: 6px;
    font-size: 12px;
    color: #5d6d6b;
}

.property-details dl {
    display: grid;
    grid-template-columns: max-content 1fr;
    gap: 4px 16px;
}
"#;
