//! Wallet snapshot persistence
//!
//! Serializes a wallet (category registry + transaction ledger) as one unit,
//! keyed by user login. The snapshot keeps categories in registry insertion
//! order and transactions in append order, so a save/load round trip is
//! observationally identical under every statistics query.
//!
//! Deserialization is all-or-nothing: a snapshot that fails validation
//! produces no wallet at all, never a partially populated one.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::paths::FinFlowPaths;
use crate::error::{FinFlowError, FinFlowResult};
use crate::models::{Category, Transaction, Wallet};

use super::file_io::write_json_atomic;

/// Serializable wallet snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WalletSnapshot {
    /// Categories in registry insertion order
    pub categories: Vec<Category>,
    /// Transactions in append order
    pub transactions: Vec<Transaction>,
}

impl WalletSnapshot {
    /// Capture a snapshot of a wallet
    pub fn from_wallet(wallet: &Wallet) -> Self {
        Self {
            categories: wallet.categories().cloned().collect(),
            transactions: wallet.transactions().to_vec(),
        }
    }

    /// Rebuild the wallet this snapshot was captured from
    pub fn into_wallet(self) -> FinFlowResult<Wallet> {
        Wallet::from_parts(self.categories, self.transactions)
    }
}

/// Encode a wallet as snapshot bytes
pub fn serialize_wallet(wallet: &Wallet) -> FinFlowResult<Vec<u8>> {
    serde_json::to_vec_pretty(&WalletSnapshot::from_wallet(wallet))
        .map_err(|e| FinFlowError::Storage(format!("Failed to serialize wallet: {}", e)))
}

/// Decode snapshot bytes back into a wallet
pub fn deserialize_wallet(bytes: &[u8]) -> FinFlowResult<Wallet> {
    let snapshot: WalletSnapshot = serde_json::from_slice(bytes)
        .map_err(|e| FinFlowError::CorruptData(format!("Unreadable wallet snapshot: {}", e)))?;
    snapshot.into_wallet()
}

/// Repository for wallet snapshots, one file per user login
pub struct WalletRepository {
    data_dir: PathBuf,
}

impl WalletRepository {
    /// Create a new wallet repository
    pub fn new(paths: &FinFlowPaths) -> Self {
        Self {
            data_dir: paths.data_dir(),
        }
    }

    /// Path of a user's wallet snapshot file
    pub fn wallet_file(&self, login: &str) -> PathBuf {
        self.data_dir.join(format!("{}.wallet.json", login))
    }

    /// Whether a snapshot exists for this login
    pub fn exists(&self, login: &str) -> bool {
        self.wallet_file(login).exists()
    }

    /// Save a user's wallet snapshot atomically.
    ///
    /// On failure the previous snapshot (if any) is left intact and the
    /// in-memory wallet stays authoritative for the session.
    pub fn save(&self, login: &str, wallet: &Wallet) -> FinFlowResult<()> {
        write_json_atomic(self.wallet_file(login), &WalletSnapshot::from_wallet(wallet))
    }

    /// Load a user's wallet snapshot.
    ///
    /// Returns `Ok(None)` when no snapshot exists yet (first-time users
    /// start with an empty wallet); `CorruptData` when the file cannot be
    /// decoded or fails validation.
    pub fn load(&self, login: &str) -> FinFlowResult<Option<Wallet>> {
        let path = self.wallet_file(login);
        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path)
            .map_err(|e| FinFlowError::Storage(format!("Failed to read {}: {}", path.display(), e)))?;

        deserialize_wallet(&bytes).map(Some)
    }
}
