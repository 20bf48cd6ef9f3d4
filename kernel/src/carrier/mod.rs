//! Carrier module: `Side`, `Placement`, `Crossing`, and the identity-bytes contract.
//!
//! This is the foundational layer. No other kernel module is imported here.

pub mod crossing;
pub mod identity;
pub mod placement;
