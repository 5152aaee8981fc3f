// wallet-core/src/error.rs

use thiserror::Error;

pub type WalletResult<T> = std::result::Result<T, WalletError>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WalletError {
    #[error("Mnemonic Error: {0}")]
    Mnemonic(#[from] MnemonicError),

    #[error("Cryptography Error: {0}")]
    Crypto(#[from] CryptoError),

    /// Raised by an [`AddressMapper`](crate::chains::radix::AddressMapper);
    /// the account deriver passes it through untouched.
    #[error("Address derivation failed: {0}")]
    AddressDerivationFailed(String),

    #[error("Derivation failed for entity index {index}: {source}")]
    BatchDerivation {
        index: u32,
        #[source]
        source: Box<WalletError>,
    },
}

impl WalletError {
    /// Wrap an error with the entity index whose derivation produced it.
    pub(crate) fn at_index(self, index: u32) -> Self {
        WalletError::BatchDerivation {
            index,
            source: Box::new(self),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MnemonicError {
    #[error("Secure random source unavailable: {0}")]
    EntropySourceUnavailable(String),

    #[error("Invalid word count: {0}. Expected 12 or 24 words.")]
    InvalidWordCount(usize),

    #[error("Word '{0}' not found in the BIP39 wordlist.")]
    UnknownWord(String),

    #[error("Checksum validation failed.")]
    ChecksumFailed,

    #[error("BIP39 internal error: {0}")]
    Bip39Error(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CryptoError {
    #[error("Invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("Unsupported derivation: {0}")]
    UnsupportedDerivation(String),

    #[error("Invalid derivation path: {0}")]
    InvalidPath(String),

    #[error("Key derivation failed: {0}")]
    DerivationFailed(String),

    #[error("Secure random source unavailable: {0}")]
    RandomSourceUnavailable(String),
}
