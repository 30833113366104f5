//! Common utilities and types shared across region-dist

pub mod config;
pub mod error;
pub mod utils;

pub use self::config::{Config, ExportFormat};
pub use self::error::{Error, Result};
pub use self::utils::{normalize_endpoints, parse_store_ids, primary_endpoint};
