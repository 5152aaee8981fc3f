// wallet-core/src/lib.rs

//! Radix Wallet Core
//!
//! Offline key management for Radix accounts: BIP-39 mnemonics, SLIP-0010
//! Ed25519 derivation along `m/44'/1022'/…` paths, and virtual account
//! addresses.
//!
//! ```no_run
//! # async fn demo() -> radix_wallet_core::WalletResult<()> {
//! use radix_wallet_core::{AccountDeriver, NetworkId, WalletMnemonic};
//!
//! let mnemonic = WalletMnemonic::generate_24_words()?;
//! let accounts = AccountDeriver::radix()
//!     .derive_accounts(mnemonic.phrase(), &[0, 1, 2], NetworkId::STOKENET)
//!     .await?;
//! println!("{}", accounts[0].address());
//! # Ok(())
//! # }
//! ```

pub mod account;
pub mod api;
pub mod chains;
pub mod crypto;
pub mod error;

pub use account::{Account, AccountDeriver, VaultMap};
pub use chains::radix::{AddressMapper, RadixAddress};
pub use chains::{NetworkId, RadixNetworkConfig};
pub use crypto::{
    DerivationPath, EntityType, KeyDeriver, KeyPair, KeyType, PrivateKey, PublicKey, Seed,
    SeedDeriver, WalletMnemonic, WordCount,
};
pub use error::{CryptoError, MnemonicError, WalletError, WalletResult};
