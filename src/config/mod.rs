/// Configuration module - resolve powgate configuration from its sources
pub mod loader;
pub mod schema;

pub use loader::load_config;
pub use schema::Config;
