pub mod config_backend;
pub mod json_backend;
