// wallet-core/src/account/mod.rs
//
// Account Derivation - mnemonic / raw key → ready-to-use Radix accounts
//
// Flow: phrase ─▶ Seed ─▶ m/44'/1022'/net'/525'/1460'/idx' ─▶ KeyPair ─▶ AddressMapper ─▶ Account
//
// Every operation is a pure function of its inputs plus the mapper call. The
// deriver keeps no session state between calls.

use crate::chains::radix::{AddressMapper, RadixAddress};
use crate::chains::NetworkId;
use crate::crypto::key_deriver::KeyDeriver;
use crate::crypto::keys::{KeyPair, PrivateKey, PublicKey};
use crate::crypto::paths::{DerivationPath, EntityType};
use crate::crypto::seed::{Seed, SeedDeriver};
use crate::error::WalletResult;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Resource address → vault ids. Owned and filled in by the caller.
pub type VaultMap = BTreeMap<String, Vec<String>>;

// =============================================================================
// ACCOUNT
// =============================================================================

/// A key pair and the address it controls.
///
/// Serializes its public view only; the private key never leaves through serde.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Entity index for HD accounts, `None` for imported keys
    #[serde(skip_serializing_if = "Option::is_none")]
    index: Option<u32>,
    address: String,
    network: NetworkId,
    #[serde(rename = "publicKey", serialize_with = "serialize_public_key")]
    key_pair: KeyPair,
    #[serde(skip_serializing_if = "Option::is_none")]
    vaults: Option<VaultMap>,
}

fn serialize_public_key<S: Serializer>(key_pair: &KeyPair, serializer: S) -> Result<S::Ok, S::Error> {
    key_pair.public_key().serialize(serializer)
}

impl Account {
    fn new(index: Option<u32>, address: String, network: NetworkId, key_pair: KeyPair) -> Self {
        Self {
            index,
            address,
            network,
            key_pair,
            vaults: None,
        }
    }

    #[inline]
    pub fn index(&self) -> Option<u32> {
        self.index
    }

    #[inline]
    pub fn address(&self) -> &str {
        &self.address
    }

    #[inline]
    pub fn network(&self) -> NetworkId {
        self.network
    }

    #[inline]
    pub fn key_pair(&self) -> &KeyPair {
        &self.key_pair
    }

    #[inline]
    pub fn private_key(&self) -> &PrivateKey {
        self.key_pair.private_key()
    }

    #[inline]
    pub fn public_key(&self) -> &PublicKey {
        self.key_pair.public_key()
    }

    #[inline]
    pub fn vaults(&self) -> Option<&VaultMap> {
        self.vaults.as_ref()
    }

    /// Mutable access for the caller's vault bookkeeping.
    #[inline]
    pub fn vaults_mut(&mut self) -> Option<&mut VaultMap> {
        self.vaults.as_mut()
    }

    /// Attach (or replace) the vault map.
    pub fn with_vaults(mut self, vaults: VaultMap) -> Self {
        self.vaults = Some(vaults);
        self
    }
}

// =============================================================================
// DERIVER
// =============================================================================

/// Produces accounts from phrases, seeds or raw keys.
///
/// Generic over the [`AddressMapper`]; [`RadixAddress`] by default.
#[derive(Debug, Clone, Default)]
pub struct AccountDeriver<M = RadixAddress> {
    mapper: M,
}

impl AccountDeriver<RadixAddress> {
    /// Deriver using the built-in Radix virtual address encoding.
    pub fn radix() -> Self {
        Self::new(RadixAddress)
    }
}

impl<M: AddressMapper> AccountDeriver<M> {
    pub fn new(mapper: M) -> Self {
        Self { mapper }
    }

    pub fn mapper(&self) -> &M {
        &self.mapper
    }

    // =========================================================================
    // KEY PAIRS
    // =========================================================================

    /// Transaction-signing key pair for any entity type.
    ///
    /// The phrase is not validated; see [`SeedDeriver::to_seed`].
    pub fn derive_key_pair(
        &self,
        phrase: &str,
        entity_index: u32,
        network: NetworkId,
        entity_type: EntityType,
    ) -> WalletResult<KeyPair> {
        let path = DerivationPath::account(network, entity_type, entity_index)?;
        let seed = SeedDeriver::to_seed(phrase, "");
        Ok(KeyDeriver::derive(&seed, &path)?.key_pair())
    }

    // =========================================================================
    // ACCOUNTS FROM A MNEMONIC
    // =========================================================================

    /// Account at `entity_index`. Same inputs always give the same account.
    pub async fn derive_account(
        &self,
        phrase: &str,
        entity_index: u32,
        network: NetworkId,
    ) -> WalletResult<Account> {
        let key_pair = self.derive_key_pair(phrase, entity_index, network, EntityType::Account)?;
        let address = self.mapper.derive_address(key_pair.public_key(), network).await?;

        debug!(%network, index = entity_index, "Derived account");
        Ok(Account::new(Some(entity_index), address, network, key_pair))
    }

    /// One account per entry of `indices`, in the same order.
    ///
    /// Duplicates and unsorted indices are kept as given. Any failure fails
    /// the whole call with `WalletError::BatchDerivation` naming the index;
    /// no partial list is returned.
    pub async fn derive_accounts(
        &self,
        phrase: &str,
        indices: &[u32],
        network: NetworkId,
    ) -> WalletResult<Vec<Account>> {
        let seed = SeedDeriver::to_seed(phrase, "");
        self.derive_accounts_from_seed(&seed, indices, network).await
    }

    /// [`derive_accounts`](Self::derive_accounts) for callers holding a seed.
    ///
    /// Each index is derived and mapped before the next one starts, so the
    /// reported failure is the first failing index in input order.
    #[cfg(not(feature = "parallel"))]
    pub async fn derive_accounts_from_seed(
        &self,
        seed: &Seed,
        indices: &[u32],
        network: NetworkId,
    ) -> WalletResult<Vec<Account>> {
        let mut accounts = Vec::with_capacity(indices.len());
        for &index in indices {
            let key_pair = DerivationPath::account(network, EntityType::Account, index)
                .and_then(|path| KeyDeriver::derive(seed, &path))
                .map_err(|e| e.at_index(index))?
                .key_pair();
            accounts.push(self.map_account(index, key_pair, network).await?);
        }

        debug!(%network, count = accounts.len(), "Derived account batch");
        Ok(accounts)
    }

    /// [`derive_accounts`](Self::derive_accounts) for callers holding a seed.
    ///
    /// Keys for the whole batch are derived on the rayon pool first, then
    /// mapped in input order. A key failure anywhere in the batch is reported
    /// before any mapper call.
    #[cfg(feature = "parallel")]
    pub async fn derive_accounts_from_seed(
        &self,
        seed: &Seed,
        indices: &[u32],
        network: NetworkId,
    ) -> WalletResult<Vec<Account>> {
        let keys = KeyDeriver::derive_batch(seed, network, EntityType::Account, indices)?;

        let mut accounts = Vec::with_capacity(keys.len());
        for (&index, derived) in indices.iter().zip(keys) {
            accounts.push(self.map_account(index, derived.key_pair(), network).await?);
        }

        debug!(%network, count = accounts.len(), "Derived account batch");
        Ok(accounts)
    }

    async fn map_account(
        &self,
        index: u32,
        key_pair: KeyPair,
        network: NetworkId,
    ) -> WalletResult<Account> {
        let address = self
            .mapper
            .derive_address(key_pair.public_key(), network)
            .await
            .map_err(|e| e.at_index(index))?;

        trace!(%network, index, %address, "Mapped account address");
        Ok(Account::new(Some(index), address, network, key_pair))
    }

    // =========================================================================
    // ACCOUNTS FROM EXISTING KEYS
    // =========================================================================

    /// Account for imported raw key bytes; no path derivation involved.
    ///
    /// # Errors
    /// `CryptoError::InvalidKeyLength` unless `bytes` is 32 bytes long.
    pub async fn account_from_private_key_bytes(
        &self,
        bytes: &[u8],
        network: NetworkId,
    ) -> WalletResult<Account> {
        let key_pair = KeyPair::from_private_key_bytes(bytes)?;
        let address = self.mapper.derive_address(key_pair.public_key(), network).await?;

        debug!(%network, "Imported account from raw key");
        Ok(Account::new(None, address, network, key_pair))
    }

    /// Virtual account for an existing private key, with an empty vault map.
    pub async fn new_virtual_account(
        &self,
        private_key: PrivateKey,
        network: NetworkId,
    ) -> WalletResult<Account> {
        let key_pair = KeyPair::from_private_key(private_key);
        let address = self
            .mapper
            .derive_virtual_address(key_pair.public_key(), network)
            .await?;

        debug!(%network, "Created virtual account");
        Ok(Account::new(None, address, network, key_pair).with_vaults(VaultMap::new()))
    }
}

// =============================================================================
// TESTS
// =============================================================================
