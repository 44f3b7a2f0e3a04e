//! Top-level facade crate for reqtally.
//!
//! Re-exports the aggregator core and the HTTP gateway so users can depend on a single crate.

pub mod core {
    pub use reqtally_core::*;
}

pub mod gateway {
    pub use reqtally_gateway::*;
}
