pub mod config;
pub mod resolver;

pub use config::Config;
pub use resolver::{BatchReport, BatchResolver};
