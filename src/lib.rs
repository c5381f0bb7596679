pub mod application;
pub mod core;
pub mod modules;
pub mod utils;
