pub mod config;
pub mod errors;
pub mod services;
pub mod store;

pub mod app_context;
pub use app_context::AppContext;

#[cfg(feature = "graphql")]
pub mod graphql;

#[cfg(feature = "server")]
pub mod server;
