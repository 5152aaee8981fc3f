// wallet-core/src/crypto/mod.rs

//! Core Cryptography Module
//!
//! This module implements the deterministic key pipeline behind every Radix account:
//!
//! - **Mnemonic Generation**: BIP-39 compliant phrases (12/24 words) via [`WalletMnemonic`].
//! - **Seed Derivation**: PBKDF2-HMAC-SHA512 mnemonic → 64-byte seed via [`SeedDeriver`].
//! - **Derivation Paths**: typed `m/44'/1022'/…` paths via [`DerivationPath`].
//! - **Key Derivation**: SLIP-0010 Ed25519 hardened derivation via [`KeyDeriver`].
//! - **Key Values**: opaque [`PrivateKey`] / [`PublicKey`] / [`KeyPair`].

pub mod key_deriver;
pub mod keys;
pub mod mnemonic;
pub mod paths;
pub mod seed;

// Re-exports for cleaner API access
pub use key_deriver::{DerivedKey, Ed25519Deriver, KeyDeriver};
pub use keys::{KeyPair, PrivateKey, PublicKey, KEY_LEN};
pub use mnemonic::{WalletMnemonic, WordCount};
pub use paths::{ChildIndex, DerivationPath, EntityType, KeyType};
pub use seed::{Seed, SeedDeriver, SEED_LEN};
