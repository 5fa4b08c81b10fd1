pub mod health;
pub mod redirect;
pub mod url_api;

pub use health::{AppStartTime, HealthService, health_routes};
pub use redirect::{RedirectService, redirect_routes};
pub use url_api::url_api_routes;
