use std::path::PathBuf;

use solana_client::client_error::ClientError;
use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeployError {
    #[error("rpc request failed: {0}")]
    Client(#[from] ClientError),

    #[error("account {0} does not exist")]
    MissingAccount(Pubkey),

    #[error("account {address} is not a marketplace: {reason}")]
    Decode { address: Pubkey, reason: String },

    #[error("marketplace {address} was deployed with {field} {found}, expected {expected}")]
    Reconciliation {
        address: Pubkey,
        field: &'static str,
        expected: Pubkey,
        found: Pubkey,
    },

    #[error("failed to read keypair {}: {reason}", path.display())]
    Keypair { path: PathBuf, reason: String },
}
