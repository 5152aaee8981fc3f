// wallet-core/src/crypto/key_deriver/ed25519.rs
//
// Ed25519 Key Derivation (SLIP-0010)
//
// Reference: https://github.com/satoshilabs/slips/blob/master/slip-0010.md
//
// Ed25519 has no public-parent → public-child derivation, so every level of
// the path must be hardened:
//   m/44'/1022'/1'/525'/1460'/0'  ok
//   m/44'/1022'/1'/525'/1460'/0   rejected

use crate::crypto::keys::{PrivateKey, KEY_LEN};
use crate::crypto::paths::{ChildIndex, DerivationPath};
use crate::crypto::seed::Seed;
use crate::error::{CryptoError, WalletError, WalletResult};
use hmac::{Hmac, Mac};
use sha2::Sha512;
use zeroize::Zeroizing;

type HmacSha512 = Hmac<Sha512>;

/// HMAC key for the master node.
const ED25519_CURVE_KEY: &[u8] = b"ed25519 seed";

/// One node of the derivation tree. Both halves are wiped on drop.
struct ExtendedKey {
    key: Zeroizing<[u8; KEY_LEN]>,
    chain_code: Zeroizing<[u8; KEY_LEN]>,
}

impl ExtendedKey {
    /// I = HMAC-SHA512(Key = "ed25519 seed", Data = seed)
    fn master(seed: &[u8]) -> WalletResult<Self> {
        Self::from_hmac(ED25519_CURVE_KEY, &[seed])
    }

    /// I = HMAC-SHA512(Key = chain_code, Data = 0x00 || key || ser32(index))
    fn child(&self, index: ChildIndex) -> WalletResult<Self> {
        Self::from_hmac(
            self.chain_code.as_slice(),
            &[&[0x00], self.key.as_slice(), &index.to_bits().to_be_bytes()],
        )
    }

    /// IL becomes the key, IR the chain code.
    fn from_hmac(hmac_key: &[u8], data: &[&[u8]]) -> WalletResult<Self> {
        let mut mac = HmacSha512::new_from_slice(hmac_key).map_err(|e| {
            WalletError::Crypto(CryptoError::DerivationFailed(format!("HMAC init: {}", e)))
        })?;
        for part in data {
            mac.update(part);
        }

        let mut output = Zeroizing::new([0u8; 2 * KEY_LEN]);
        output.copy_from_slice(&mac.finalize().into_bytes());
        let mut node = Self {
            key: Zeroizing::new([0u8; KEY_LEN]),
            chain_code: Zeroizing::new([0u8; KEY_LEN]),
        };
        node.key.copy_from_slice(&output[..KEY_LEN]);
        node.chain_code.copy_from_slice(&output[KEY_LEN..]);
        Ok(node)
    }
}

/// SLIP-0010 deriver for Ed25519.
///
/// Unlike BIP-32 over secp256k1 there is no key range check (any 32 bytes
/// form an Ed25519 secret) and only hardened children exist. Nothing is
/// cached between calls.
pub struct Ed25519Deriver;

impl Ed25519Deriver {
    /// Derive the private key at `path` below `seed`.
    ///
    /// # Errors
    /// `CryptoError::UnsupportedDerivation` if any level is not hardened.
    pub fn derive(seed: &Seed, path: &DerivationPath) -> WalletResult<PrivateKey> {
        Self::derive_from_bytes(seed.as_bytes(), path)
    }

    /// Same as [`derive`](Self::derive) over raw seed bytes of any length
    /// (SLIP-0010 accepts 16..64 byte seeds, test vectors use 16).
    pub fn derive_from_bytes(seed: &[u8], path: &DerivationPath) -> WalletResult<PrivateKey> {
        // Reject before touching key material
        if let Some(bad) = path.segments().iter().find(|c| !c.is_hardened()) {
            return Err(WalletError::Crypto(CryptoError::UnsupportedDerivation(format!(
                "Ed25519 SLIP-0010 derives hardened levels only, got '{}' in {}",
                bad, path
            ))));
        }

        let node = path
            .segments()
            .iter()
            .try_fold(ExtendedKey::master(seed)?, |parent, &index| parent.child(index))?;

        Ok(PrivateKey::from_bytes(*node.key))
    }

    /// Whether `path` can be walked by this deriver.
    pub fn is_valid_path(path: &str) -> bool {
        path.parse::<DerivationPath>()
            .map(|p| p.is_fully_hardened())
            .unwrap_or(false)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chains::NetworkId;
    use crate::crypto::paths::EntityType;
    use crate::crypto::seed::SeedDeriver;

    const TEST_MNEMONIC_12: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    fn test_seed() -> Seed {
        SeedDeriver::to_seed(TEST_MNEMONIC_12, "")
    }

    fn account_path(network: NetworkId, index: u32) -> DerivationPath {
        DerivationPath::account(network, EntityType::Account, index).unwrap()
    }

    #[test]
    fn test_derive_radix_account_key() {
        let key = Ed25519Deriver::derive(&test_seed(), &account_path(NetworkId::MAINNET, 0)).unwrap();
        assert_eq!(
            hex::encode(key.as_bytes()),
            "c6da7f25529087c811de8bcaefbfee3ef1787bef6837f9116dac242d5a3e231a"
        );
    }

    #[test]
    fn test_derive_radix_stokenet_key() {
        let key = Ed25519Deriver::derive(&test_seed(), &account_path(NetworkId::STOKENET, 1)).unwrap();
        assert_eq!(
            hex::encode(key.as_bytes()),
            "e949cb6d15ef602bb1f526cb0c787c7c35ca964a28ed23329ea1ff55d333b97e"
        );
    }

    #[test]
    fn test_derive_identity_key() {
        let path = DerivationPath::account(NetworkId::MAINNET, EntityType::Identity, 0).unwrap();
        let key = Ed25519Deriver::derive(&test_seed(), &path).unwrap();
        assert_eq!(
            hex::encode(key.as_bytes()),
            "6ba1887be05f4e16b423a92c6084df7327a78e841d33dd31b7ef2bbc2dfa7ac9"
        );
    }

    #[test]
    fn test_consistency() {
        let seed = test_seed();
        let path = account_path(NetworkId::MAINNET, 5);
        let k1 = Ed25519Deriver::derive(&seed, &path).unwrap();
        let k2 = Ed25519Deriver::derive(&seed, &path).unwrap();
        assert_eq!(k1, k2);
    }

    #[test]
    fn test_different_indices() {
        let seed = test_seed();
        let k0 = Ed25519Deriver::derive(&seed, &account_path(NetworkId::MAINNET, 0)).unwrap();
        let k1 = Ed25519Deriver::derive(&seed, &account_path(NetworkId::MAINNET, 1)).unwrap();
        let k2 = Ed25519Deriver::derive(&seed, &account_path(NetworkId::MAINNET, 2)).unwrap();
        assert_ne!(k0, k1);
        assert_ne!(k1, k2);
        assert_ne!(k0, k2);
    }

    #[test]
    fn test_different_networks() {
        let seed = test_seed();
        let main = Ed25519Deriver::derive(&seed, &account_path(NetworkId::MAINNET, 0)).unwrap();
        let stoke = Ed25519Deriver::derive(&seed, &account_path(NetworkId::STOKENET, 0)).unwrap();
        assert_ne!(main, stoke);
    }

    #[test]
    fn test_non_hardened_path_rejected() {
        let path: DerivationPath = "m/44'/1022'/1'/525'/1460'/0".parse().unwrap();
        let result = Ed25519Deriver::derive(&test_seed(), &path);
        match result {
            Err(WalletError::Crypto(CryptoError::UnsupportedDerivation(msg))) => {
                assert!(msg.contains("hardened"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_is_valid_path() {
        assert!(Ed25519Deriver::is_valid_path("m/44'/1022'/1'/525'/1460'/0'"));
        assert!(!Ed25519Deriver::is_valid_path("m/44'/1022'/1'/525'/1460'/0")); // Not hardened
        assert!(!Ed25519Deriver::is_valid_path("invalid"));
    }

    // =========================================================================
    // SLIP-0010 Test Vector 1 for ed25519
    // =========================================================================
    // Seed: 000102030405060708090a0b0c0d0e0f

    #[test]
    fn test_slip0010_vector_master() {
        let seed = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
        let key = Ed25519Deriver::derive_from_bytes(&seed, &"m".parse().unwrap()).unwrap();
        assert_eq!(
            hex::encode(key.as_bytes()),
            "2b4be7f19ee27bbf30c667b642d5f4aa69fd169872f8fc3059c08ebae2eb19e7"
        );
        assert_eq!(
            key.public_key().to_hex(),
            "a4b2856bfec510abab89753fac1ac0e1112364e7d250545963f135f2a33188ed"
        );
    }

    #[test]
    fn test_slip0010_vector_first_child() {
        let seed = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
        let key = Ed25519Deriver::derive_from_bytes(&seed, &"m/0'".parse().unwrap()).unwrap();
        assert_eq!(
            hex::encode(key.as_bytes()),
            "68e0fe46dfb67e368c75379acec591dad19df3cde26e63b93a8e704f1dade7a3"
        );
    }

    #[test]
    fn test_slip0010_vector_deep_chain() {
        let seed = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
        let path: DerivationPath = "m/0'/1'/2'/2'/1000000000'".parse().unwrap();
        let key = Ed25519Deriver::derive_from_bytes(&seed, &path).unwrap();
        assert_eq!(
            hex::encode(key.as_bytes()),
            "8f94d394a8e8fd6b1bc2f3f49f5c47e385281d5c17e65324b0f62483e37e8793"
        );
    }
}
