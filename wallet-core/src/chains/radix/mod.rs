// wallet-core/src/chains/radix/mod.rs

//! Radix Address Support
//!
//! # Key Features
//! - **Address Mapping**: the [`AddressMapper`] seam the account deriver calls to
//!   turn a public key into an address string.
//! - **Virtual Addresses**: [`RadixAddress`], Blake2b-256 + Bech32m pre-allocated
//!   account / identity addresses computed offline from an Ed25519 public key.

pub mod address;

// Re-exports for cleaner API access
pub use address::{AddressMapper, RadixAddress};
