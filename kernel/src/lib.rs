//! Ferry Kernel: state carriers and canonical hashing for the search engine.
//!
//! # API Surface
//!
//! - [`carrier::placement::Placement`] -- which bank every entity stands on
//! - [`carrier::crossing::Crossing`] -- a set of entities moving to one bank
//! - [`carrier::identity::IdentityBytes`] -- canonical byte form used for fingerprints
//! - [`proof::hash::canonical_hash`] -- domain-separated SHA-256
//! - [`proof::canon::canonical_json_bytes`] -- the single canonical JSON writer
//!
//! # Module Dependency Direction
//!
//! `carrier` and `proof` do not import each other. The search crate joins
//! them: a state fingerprint is `canonical_hash` over `identity_bytes`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod carrier;
pub mod proof;
