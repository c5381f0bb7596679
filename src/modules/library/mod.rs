pub mod scanner;
pub mod search_engine;
