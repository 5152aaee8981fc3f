// wallet-core/src/crypto/key_deriver/mod.rs
//
// Key Derivation Engine
//
// ┌─────────────────────────────────────────────────┐
// │  Seed (64 bytes from BIP-39 Mnemonic)           │
// │                    │                            │
// │                    ▼                            │
// │          ed25519 (SLIP-0010, hardened)          │
// │   m/44'/1022'/network'/entity'/keyType'/index'  │
// │                    │                            │
// │                    ▼                            │
// │          PrivateKey ──▶ PublicKey               │
// └─────────────────────────────────────────────────┘

pub mod ed25519;

pub use ed25519::Ed25519Deriver;

use crate::chains::NetworkId;
use crate::crypto::keys::{KeyPair, PrivateKey};
use crate::crypto::paths::{DerivationPath, EntityType};
use crate::crypto::seed::{Seed, SEED_LEN};
use crate::error::{CryptoError, WalletError, WalletResult};
use tracing::trace;

// =============================================================================
// COMMON TYPES
// =============================================================================

/// Result of a derivation: the key plus the path it came from.
#[derive(Debug, Clone)]
pub struct DerivedKey {
    /// Private key (32 bytes, zeroized on drop)
    pub private_key: PrivateKey,
    /// Derivation path used
    pub path: DerivationPath,
}

impl DerivedKey {
    pub fn key_pair(&self) -> KeyPair {
        KeyPair::from_private_key(self.private_key.clone())
    }
}

// =============================================================================
// UNIFIED DERIVER
// =============================================================================

/// Entry point for key derivation over a seed.
pub struct KeyDeriver;

impl KeyDeriver {
    /// Derive the key at `path`.
    pub fn derive(seed: &Seed, path: &DerivationPath) -> WalletResult<DerivedKey> {
        let private_key = Ed25519Deriver::derive(seed, path)?;
        trace!(%path, "Derived ed25519 key");
        Ok(DerivedKey {
            private_key,
            path: path.clone(),
        })
    }

    /// Derive from raw seed bytes, which must be a full 64-byte BIP-39 seed.
    pub fn derive_from_seed_bytes(seed: &[u8], path: &DerivationPath) -> WalletResult<DerivedKey> {
        let seed = Self::validate_seed(seed)?;
        Self::derive(&seed, path)
    }

    /// Derive transaction-signing keys for several entity indices.
    ///
    /// Output order equals `indices` order, duplicates included. The first
    /// failure aborts the batch and is reported as
    /// `WalletError::BatchDerivation` carrying the failing index.
    ///
    /// With the `parallel` feature the indices are derived on the rayon pool;
    /// the result is the same.
    pub fn derive_batch(
        seed: &Seed,
        network: NetworkId,
        entity_type: EntityType,
        indices: &[u32],
    ) -> WalletResult<Vec<DerivedKey>> {
        let derive_one = |index: u32| -> WalletResult<DerivedKey> {
            DerivationPath::account(network, entity_type, index)
                .and_then(|path| Self::derive(seed, &path))
                .map_err(|e| e.at_index(index))
        };

        collect_in_order(indices, derive_one)
    }

    /// Validate seed length
    #[inline]
    fn validate_seed(seed: &[u8]) -> WalletResult<Seed> {
        let bytes: [u8; SEED_LEN] = seed.try_into().map_err(|_| {
            WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "Invalid seed length: expected {} bytes, got {}",
                SEED_LEN,
                seed.len()
            )))
        })?;
        Ok(Seed::from_bytes(bytes))
    }
}

/// Map every index through `f`, keeping input order; first error wins.
#[cfg(not(feature = "parallel"))]
fn collect_in_order<F>(indices: &[u32], f: F) -> WalletResult<Vec<DerivedKey>>
where
    F: Fn(u32) -> WalletResult<DerivedKey>,
{
    indices.iter().map(|&i| f(i)).collect()
}

/// Map every index through `f` on the rayon pool, keeping input order. When
/// several indices fail, which one is reported is unspecified.
#[cfg(feature = "parallel")]
fn collect_in_order<F>(indices: &[u32], f: F) -> WalletResult<Vec<DerivedKey>>
where
    F: Fn(u32) -> WalletResult<DerivedKey> + Sync + Send,
{
    use rayon::prelude::*;
    indices.par_iter().map(|&i| f(i)).collect()
}

// =============================================================================
// TESTS
// =============================================================================
