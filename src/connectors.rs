//! Connector implementations.

pub mod flexpay;

pub use flexpay::Flexpay;
