//! Inbound adapters that turn external requests into driving-port calls.

pub mod http;
