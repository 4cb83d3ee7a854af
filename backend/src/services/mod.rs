pub mod console_config;
pub mod embedded;
