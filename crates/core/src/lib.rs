//! Domain types and pure catalog logic shared by the storage and HTTP layers.
//!
//! Nothing in this crate performs I/O: status derivation and ordering operate
//! on in-memory record slices and take the observation instant as a parameter.

pub mod error;
pub mod ordering;
pub mod record;
pub mod serde_util;
pub mod status;
pub mod types;

#[cfg(test)]
mod fixtures;
