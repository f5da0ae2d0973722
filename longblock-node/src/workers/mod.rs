pub mod base;
pub mod block;
