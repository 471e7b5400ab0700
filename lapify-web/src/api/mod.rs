//! HTTP API handlers for lapify-web

pub mod admin;
pub mod auth;
pub mod buildinfo;
pub mod catalog;
pub mod health;
pub mod recommendation;
pub mod ui;

pub use admin::{get_source, list_rows, reload_catalog, update_source};
pub use auth::admin_auth;
pub use buildinfo::{get_build_info, BuildInfo};
pub use catalog::{default_preferences, get_facets, list_laptops};
pub use health::health_routes;
pub use recommendation::recommend;
pub use ui::{serve_app_js, serve_index};
