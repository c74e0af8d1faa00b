//! # Connector Layer
//!
//! Adapters binding the application ports to concrete infrastructure.

pub mod adapter;

pub use adapter::*;
