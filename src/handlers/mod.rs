//! HTTP request handlers.

mod assets;
mod cors;
mod error;
mod extract;
mod health;
mod items;

pub use assets::{app_js, index};
pub use cors::{cors_layer, preflight_no_content};
pub use error::{ApiError, not_found, timeout_as_json};
pub use extract::{ItemIdPath, JsonBody};
pub use health::{livez, version};
pub use items::{create_item, delete_item, get_item, list_items, update_item};
