pub mod config;
pub mod core;
pub mod error;

pub use crate::config::StoreConfig;
pub use crate::core::*;
pub use crate::error::{Result, StoreError};
