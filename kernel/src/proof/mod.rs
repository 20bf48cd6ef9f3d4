//! Proof module: canonical hashing and canonical JSON.
//!
//! Depends on nothing in `carrier`; callers hash `IdentityBytes` output.

pub mod canon;
pub mod hash;
pub mod hash_domain;
