//! Configuration types and loading for longblock services.
//!
//! Every service reads the same layered configuration: a base file, an optional
//! environment specific file and `APP_` prefixed environment variables.

mod environment;
mod load;
pub mod shared;

pub use environment::{Environment, EnvironmentError};
pub use load::{Config, LoadConfigError, load_config, load_config_from};
