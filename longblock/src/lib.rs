pub mod concurrency;
pub mod control;
pub mod error;
pub mod module;
pub mod pauser;
