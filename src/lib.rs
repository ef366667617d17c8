//! sample-service-client - blocking HTTP client for the sample service
//!
//! This crate issues GET, DELETE, JSON POST and multipart upload requests
//! against the sample service, and converts JSON to and from mappings and
//! plain data records.

pub mod client;
pub mod config;
pub mod demo;
pub mod error;
pub mod exit_code;
pub mod http;
pub mod json;
pub mod logging;
pub mod model;
pub mod utils;

pub use client::SampleServiceClient;
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use model::{KeyValuePair, UserRecord};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
