//! UDP broadcast device discovery.
//!
//! One probe out, replies collected until the window closes.

pub mod service;

pub use service::{discover, DiscoveryOptions};
