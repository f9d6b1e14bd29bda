pub mod api_models;
pub mod db;
pub mod error;
mod extractors;
mod handlers;
mod router;

pub use handlers::data_sync::{health, method_not_allowed};
pub use router::{cors_layer, router};
