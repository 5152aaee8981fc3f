// wallet-core/src/api/mod.rs
//
// Flat entry points for bindings (FFI / WASM / FRB). Each call wires the
// Radix address mapper into an AccountDeriver; nothing is kept between calls.

use crate::account::{Account, AccountDeriver};
use crate::chains::radix::RadixAddress;
use crate::chains::NetworkId;
use crate::crypto::keys::{KeyPair, PrivateKey, PublicKey};
use crate::crypto::mnemonic::WalletMnemonic;
use crate::crypto::paths::EntityType;
use crate::error::WalletResult;

// --- Mnemonics ---

pub fn generate_12_word_mnemonic() -> WalletResult<String> {
    Ok(WalletMnemonic::generate_12_words()?.phrase().to_string())
}

pub fn generate_24_word_mnemonic() -> WalletResult<String> {
    Ok(WalletMnemonic::generate_24_words()?.phrase().to_string())
}

// --- Accounts ---

/// Accounts for `indices` on `network`, in the order given.
pub async fn generate_accounts_from_mnemonic(
    mnemonic: &str,
    indices: &[u32],
    network: NetworkId,
) -> WalletResult<Vec<Account>> {
    AccountDeriver::radix()
        .derive_accounts(mnemonic, indices, network)
        .await
}

pub async fn generate_account_from_private_key_bytes(
    private_key: &[u8],
    network: NetworkId,
) -> WalletResult<Account> {
    AccountDeriver::radix()
        .account_from_private_key_bytes(private_key, network)
        .await
}

pub async fn generate_new_virtual_account(
    private_key: PrivateKey,
    network: NetworkId,
) -> WalletResult<Account> {
    AccountDeriver::radix()
        .new_virtual_account(private_key, network)
        .await
}

// --- Keys ---

pub fn generate_key_pair(
    mnemonic: &str,
    entity_index: u32,
    network: NetworkId,
    entity_type: EntityType,
) -> WalletResult<KeyPair> {
    AccountDeriver::radix().derive_key_pair(mnemonic, entity_index, network, entity_type)
}

/// Wrap 32 caller-supplied bytes as a private key.
pub fn generate_ed25519_private_key(bytes: &[u8]) -> WalletResult<PrivateKey> {
    PrivateKey::from_slice(bytes)
}

pub fn derive_account_address_from_public_key(
    public_key: &PublicKey,
    network: NetworkId,
) -> WalletResult<String> {
    RadixAddress::account(public_key, network)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_mnemonics_are_valid() {
        let twelve = generate_12_word_mnemonic().unwrap();
        let twenty_four = generate_24_word_mnemonic().unwrap();

        assert_eq!(twelve.split_whitespace().count(), 12);
        assert_eq!(twenty_four.split_whitespace().count(), 24);
        assert!(WalletMnemonic::validate(&twelve));
        assert!(WalletMnemonic::validate(&twenty_four));
    }

    #[tokio::test]
    async fn test_facade_matches_deriver() {
        let phrase = generate_24_word_mnemonic().unwrap();
        let accounts = generate_accounts_from_mnemonic(&phrase, &[0, 1, 2, 100], NetworkId::from(0))
            .await
            .unwrap();

        let key_pair = generate_key_pair(&phrase, 1, NetworkId::from(0), EntityType::Account).unwrap();
        assert_eq!(accounts[1].key_pair(), &key_pair);
        assert_eq!(
            accounts[1].address(),
            derive_account_address_from_public_key(key_pair.public_key(), NetworkId::from(0)).unwrap()
        );
    }

    const FIXED_PRIVATE_KEY: [u8; 32] = [
        59, 221, 206, 186, 244, 250, 32, 61, 48, 35, 211, 187, 215, 144, 255, 221, 195, 4, 159,
        158, 149, 222, 251, 113, 141, 82, 164, 202, 44, 150, 174, 79,
    ];

    #[tokio::test]
    async fn test_virtual_account_from_imported_key() {
        let key = generate_ed25519_private_key(&FIXED_PRIVATE_KEY).unwrap();
        let account = generate_new_virtual_account(key, NetworkId::from(0)).await.unwrap();

        assert_eq!(
            account.address(),
            "account_tdx_0_12ydnxrdv9dl36vwr6swmmnajakkyvymu8cznqq3j4qmvqmttjnk8v8"
        );
        assert_eq!(account.vaults(), Some(&crate::account::VaultMap::new()));
    }

    #[test]
    fn test_private_key_wrapper_checks_length() {
        assert_eq!(
            generate_ed25519_private_key(&FIXED_PRIVATE_KEY[..31]).unwrap_err(),
            crate::error::WalletError::Crypto(crate::error::CryptoError::InvalidKeyLength {
                expected: 32,
                actual: 31
            })
        );
    }

    #[tokio::test]
    async fn test_virtual_account_from_fresh_key() {
        let key = PrivateKey::generate().unwrap();
        let bytes = key.to_bytes();

        let virtual_account = generate_new_virtual_account(key, NetworkId::STOKENET).await.unwrap();
        let imported = generate_account_from_private_key_bytes(&bytes, NetworkId::STOKENET)
            .await
            .unwrap();

        assert_eq!(virtual_account.address(), imported.address());
        assert!(virtual_account.vaults().is_some());
        assert!(imported.vaults().is_none());
    }
}
