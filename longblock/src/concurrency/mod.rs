//! Concurrency primitives used to coordinate the block loop with its operators.
//!
//! - [`shutdown`] broadcasts a single shutdown notification to every task of the node.
//! - [`handoff`] is the rendezvous used to wake a held block loop: a signal is only
//!   delivered if a waiter is parked at the moment of signaling, and signaling never
//!   blocks.

pub mod handoff;
pub mod shutdown;
