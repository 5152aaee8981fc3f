// wallet-core/src/crypto/keys.rs
//
// Ed25519 key values - opaque wrappers over raw bytes
//
// PrivateKey (32B seed) ──ed25519──▶ PublicKey (32B compressed point)
// The reverse direction does not exist.

use crate::error::{CryptoError, WalletError, WalletResult};
use ed25519_dalek::SigningKey;
use rand::{rngs::OsRng, CryptoRng, RngCore};
use serde::{Serialize, Serializer};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Length of an Ed25519 private or public key in bytes.
pub const KEY_LEN: usize = 32;

// =============================================================================
// PRIVATE KEY
// =============================================================================

/// Ed25519 private key (the 32-byte seed, RFC 8032 §5.1.5).
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey([u8; KEY_LEN]);

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("PrivateKey").field(&"[REDACTED]").finish()
    }
}

impl PrivateKey {
    /// Any 32 bytes are a valid Ed25519 private key.
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// # Errors
    /// `CryptoError::InvalidKeyLength` unless `bytes` is exactly 32 bytes long.
    pub fn from_slice(bytes: &[u8]) -> WalletResult<Self> {
        let array: [u8; KEY_LEN] = bytes.try_into().map_err(|_| {
            WalletError::Crypto(CryptoError::InvalidKeyLength {
                expected: KEY_LEN,
                actual: bytes.len(),
            })
        })?;
        Ok(Self(array))
    }

    /// Fresh random key from the OS CSPRNG.
    pub fn generate() -> WalletResult<Self> {
        Self::generate_with_rng(&mut OsRng)
    }

    /// Fresh random key drawn from `rng`.
    ///
    /// # Errors
    /// `CryptoError::RandomSourceUnavailable` when `rng` cannot fill 32 bytes.
    pub fn generate_with_rng<R>(rng: &mut R) -> WalletResult<Self>
    where
        R: RngCore + CryptoRng,
    {
        let mut bytes = Zeroizing::new([0u8; KEY_LEN]);
        rng.try_fill_bytes(bytes.as_mut_slice()).map_err(|e| {
            WalletError::Crypto(CryptoError::RandomSourceUnavailable(e.to_string()))
        })?;
        Ok(Self(*bytes))
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Copy of the raw bytes. The caller owns zeroing the copy.
    #[inline]
    pub fn to_bytes(&self) -> [u8; KEY_LEN] {
        self.0
    }

    /// Standard Ed25519 public key generation (SHA-512, clamp, scalar·B).
    pub fn public_key(&self) -> PublicKey {
        let signing_key = SigningKey::from_bytes(&self.0);
        PublicKey(signing_key.verifying_key().to_bytes())
    }
}

// =============================================================================
// PUBLIC KEY
// =============================================================================

/// Ed25519 public key (compressed Edwards point).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PublicKey([u8; KEY_LEN]);

impl PublicKey {
    /// Wrap bytes received from elsewhere. The point is not decompressed or
    /// checked; address mapping only needs the raw bytes.
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl std::fmt::Display for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for PublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

// =============================================================================
// KEY PAIR
// =============================================================================

/// Private key plus the public key computed from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    private_key: PrivateKey,
    public_key: PublicKey,
}

impl KeyPair {
    /// Build a pair from imported raw key bytes.
    ///
    /// # Errors
    /// `CryptoError::InvalidKeyLength` for anything other than 32 bytes.
    pub fn from_private_key_bytes(bytes: &[u8]) -> WalletResult<Self> {
        Ok(Self::from_private_key(PrivateKey::from_slice(bytes)?))
    }

    /// Build a pair around an existing (e.g. derived) private key.
    pub fn from_private_key(private_key: PrivateKey) -> Self {
        let public_key = private_key.public_key();
        Self {
            private_key,
            public_key,
        }
    }

    #[inline]
    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    #[inline]
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }
}
