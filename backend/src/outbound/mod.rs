//! Outbound adapters implementing the domain's persistence ports.

pub mod memory;
pub mod persistence;
