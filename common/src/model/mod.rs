pub mod config;
pub mod envelope;
pub mod record;
pub mod resource;
pub mod session;
