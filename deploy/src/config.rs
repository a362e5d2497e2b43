use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{read_keypair_file, Keypair};

use crate::error::DeployError;
use crate::module::{MarketplaceModule, DEFAULT_MEMBERSHIP_NFT};

#[derive(Debug, Clone, Parser)]
#[command(name = "nft-marketplace-deploy", version, about = "Deploy an NFT marketplace instance")]
pub struct DeployArgs {
    /// RPC endpoint of the target cluster.
    #[arg(long, env = "ANCHOR_PROVIDER_URL", default_value = "http://127.0.0.1:8899")]
    pub url: String,

    /// Keypair paying for and administering the marketplace.
    #[arg(long, env = "ANCHOR_WALLET", default_value = "~/.config/solana/id.json")]
    pub keypair: PathBuf,

    /// Membership NFT collection passed to `initialize`.
    #[arg(long, default_value_t = DEFAULT_MEMBERSHIP_NFT)]
    pub membership_nft: Pubkey,

    /// Address the program was deployed at.
    #[arg(long, default_value_t = nft_marketplace::ID)]
    pub program_id: Pubkey,

    #[arg(long, value_enum, default_value_t = Commitment::Confirmed)]
    pub commitment: Commitment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Commitment {
    Processed,
    Confirmed,
    Finalized,
}

impl From<Commitment> for CommitmentConfig {
    fn from(commitment: Commitment) -> Self {
        match commitment {
            Commitment::Processed => CommitmentConfig::processed(),
            Commitment::Confirmed => CommitmentConfig::confirmed(),
            Commitment::Finalized => CommitmentConfig::finalized(),
        }
    }
}

impl DeployArgs {
    pub fn module(&self) -> MarketplaceModule {
        MarketplaceModule::new(self.membership_nft).with_program_id(self.program_id)
    }

    pub fn keypair_path(&self) -> PathBuf {
        expand_home(&self.keypair)
    }

    pub fn load_payer(&self) -> Result<Keypair, DeployError> {
        let path = self.keypair_path();
        read_keypair_file(&path).map_err(|err| DeployError::Keypair {
            reason: err.to_string(),
            path,
        })
    }
}

fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), std::env::var_os("HOME")) {
        (Ok(rest), Some(home)) => PathBuf::from(home).join(rest),
        _ => path.to_path_buf(),
    }
}
