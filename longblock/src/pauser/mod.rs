//! Block pause services.
//!
//! [`gate::Gate`] is the real implementation, [`inert::InertGate`] the null object used
//! when pausing is compiled out. Callers hold both behind [`base::PauseService`].

pub mod base;
pub mod gate;
pub mod inert;
