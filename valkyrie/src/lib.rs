pub mod app;
pub mod client;
pub mod config;
mod error;

pub use error::ValkyrieError;
