pub mod config;
pub mod display;
pub mod loader;
pub mod model;
pub mod processor;

pub use crate::config::Config;
pub use crate::loader::Loader;
pub use crate::model::{Student, compare};
pub use crate::processor::StudentProcessor;
