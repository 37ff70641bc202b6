//! Mergington High School activity signup service
//!
//! Keeps an in-memory catalog of extracurricular activities and lets
//! students sign up or unregister by email over a small JSON API.
//!
//! ## Module Structure
//!
//! - `activity`: Activity record and the built-in seed catalog
//! - `store`: Shared catalog with list/signup/unregister
//! - `error`: Signup and configuration errors
//! - `api`: HTTP handlers
//! - `server`: Router assembly and serve loop
//! - `config`: CLI/env configuration and catalog loading

pub mod activity;
pub mod api;
pub mod config;
pub mod error;
pub mod server;
pub mod store;

pub use activity::{default_catalog, Activity, Catalog};
pub use api::ApiState;
pub use config::{load_catalog_file, ServerConfig};
pub use error::{ConfigError, SignupError, SignupResult};
pub use store::{ActivityStore, CapacityPolicy};
