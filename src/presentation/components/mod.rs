mod chart;
mod controls;
mod forms;
mod navbar;
mod protected_route;
mod sections;

pub use chart::AreaChart;
pub use controls::{CurrencyDropdown, PeriodToolbar};
pub use forms::{LoginForm, RegisterForm, ResetPasswordForms};
pub use navbar::{NavBarLogin, NavBarLogout};
pub use protected_route::ProtectedRoute;
pub use sections::{CurrencySection, YFinanceSection};
