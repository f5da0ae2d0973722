pub mod debug;
pub mod docs;
pub mod health_check;
