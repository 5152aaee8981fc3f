// wallet-core/src/chains/radix/address.rs
//
// Radix Address Module - virtual (pre-allocated) entity addresses
// Blake2b-256, Bech32m, Ed25519

use crate::chains::{NetworkId, RadixNetworkConfig};
use crate::crypto::keys::PublicKey;
use crate::error::{WalletError, WalletResult};
use async_trait::async_trait;
use bech32::primitives::decode::CheckedHrpstring;
use bech32::{Bech32m, Hrp};
use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};

type Blake2b256 = Blake2b<U32>;

/// Node ids are one entity byte followed by 29 hash bytes.
const NODE_ID_LEN: usize = 30;
const HASH_PART_LEN: usize = NODE_ID_LEN - 1;

/// Entity byte of a pre-allocated account controlled by an Ed25519 key.
pub const ED25519_ACCOUNT_ENTITY_BYTE: u8 = 0x51;
/// Entity byte of a pre-allocated identity controlled by an Ed25519 key.
pub const ED25519_IDENTITY_ENTITY_BYTE: u8 = 0x52;

// =============================================================================
// MAPPER SEAM
// =============================================================================

/// Turns a public key into a network-scoped address string.
///
/// Implementations must be deterministic. The account deriver awaits these
/// calls and returns any error as-is: retries and timeouts belong to the
/// implementation.
#[async_trait]
pub trait AddressMapper: Send + Sync {
    /// Address of the account controlled by `public_key` on `network`.
    async fn derive_address(&self, public_key: &PublicKey, network: NetworkId)
        -> WalletResult<String>;

    /// Address of the virtual account controlled by `public_key`, used for
    /// accounts built from an existing private key. Same as
    /// [`derive_address`](Self::derive_address) unless overridden.
    async fn derive_virtual_address(
        &self,
        public_key: &PublicKey,
        network: NetworkId,
    ) -> WalletResult<String> {
        self.derive_address(public_key, network).await
    }
}

// =============================================================================
// RADIX VIRTUAL ADDRESSES
// =============================================================================

/// Radix Address Generator
///
/// # Flow: Public Key (32B) → Blake2b-256 → last 29B → entity byte ‖ hash (30B) → Bech32m
///
/// HRP is `{entity}_{network suffix}`: `account_rdx`, `account_tdx_2_`, ...
#[derive(Debug, Clone, Copy, Default)]
pub struct RadixAddress;

impl RadixAddress {
    /// Raw 30-byte node id for an entity byte and public key.
    pub fn node_id(entity_byte: u8, public_key: &PublicKey) -> [u8; NODE_ID_LEN] {
        let hash = Blake2b256::digest(public_key.as_bytes());

        let mut node_id = [0u8; NODE_ID_LEN];
        node_id[0] = entity_byte;
        node_id[1..].copy_from_slice(&hash[hash.len() - HASH_PART_LEN..]);
        node_id
    }

    /// `account_…` address for an Ed25519 public key.
    pub fn account(public_key: &PublicKey, network: NetworkId) -> WalletResult<String> {
        Self::encode(
            "account",
            &Self::node_id(ED25519_ACCOUNT_ENTITY_BYTE, public_key),
            network,
        )
    }

    /// `identity_…` address for an Ed25519 public key.
    pub fn identity(public_key: &PublicKey, network: NetworkId) -> WalletResult<String> {
        Self::encode(
            "identity",
            &Self::node_id(ED25519_IDENTITY_ENTITY_BYTE, public_key),
            network,
        )
    }

    fn encode(entity: &str, node_id: &[u8], network: NetworkId) -> WalletResult<String> {
        let config = RadixNetworkConfig::from_id(network);
        let hrp = Hrp::parse(&format!("{}_{}", entity, config.hrp_suffix))
            .map_err(|e| WalletError::AddressDerivationFailed(format!("invalid HRP: {}", e)))?;

        bech32::encode::<Bech32m>(hrp, node_id)
            .map_err(|e| WalletError::AddressDerivationFailed(format!("Bech32m encoding: {}", e)))
    }

    // =========================================================================
    // UTILITIES
    // =========================================================================

    /// Whether `address` is a well-formed Ed25519 virtual account address for `network`.
    pub fn is_valid_account(address: &str, network: NetworkId) -> bool {
        let expected_hrp = format!("account_{}", RadixNetworkConfig::from_id(network).hrp_suffix);

        let Ok(checked) = CheckedHrpstring::new::<Bech32m>(address) else {
            return false;
        };
        if checked.hrp().to_string() != expected_hrp {
            return false;
        }

        let data: Vec<u8> = checked.byte_iter().collect();
        data.len() == NODE_ID_LEN && data[0] == ED25519_ACCOUNT_ENTITY_BYTE
    }
}

#[async_trait]
impl AddressMapper for RadixAddress {
    async fn derive_address(
        &self,
        public_key: &PublicKey,
        network: NetworkId,
    ) -> WalletResult<String> {
        Self::account(public_key, network)
    }
}

// =============================================================================
// TESTS
// =============================================================================
