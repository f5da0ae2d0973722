//! HTTP control surface of a longblock node.

pub mod routes;
pub mod startup;
