//! Telemetry setup shared by longblock binaries and tests.

pub mod tracing;
