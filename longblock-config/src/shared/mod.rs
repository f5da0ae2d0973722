//! Shared configuration types for longblock services.

mod api;
mod block;
mod debug;
mod node;

pub use api::ApiConfig;
pub use block::BlockConfig;
pub use debug::DebugConfig;
pub use node::NodeConfig;

use thiserror::Error;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A field holds a value outside its allowed range.
    #[error("invalid value for `{field}`: {constraint}")]
    InvalidFieldValue { field: String, constraint: String },
}
