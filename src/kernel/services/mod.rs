//! Services layer (ports + adapters).
//!
//! - `ports`: pure contracts/types used across the crate (kernel-facing).
//! - `adapters`: the matching engine plus OS specific IO (paths, settings file).

pub mod adapters;
pub mod ports;
