use solana_client::rpc_client::RpcClient;
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature, Signer};
use solana_sdk::transaction::Transaction;
use tracing::debug;

use crate::error::DeployError;

/// The cluster side of a deployment: reads accounts and lands transactions.
pub trait DeploymentRunner {
    /// Raw data of `address`, or `None` when the account does not exist.
    fn account_data(&self, address: &Pubkey) -> Result<Option<Vec<u8>>, DeployError>;

    /// Signs `instruction` with `payer` and waits for confirmation.
    fn submit(&self, instruction: Instruction, payer: &Keypair) -> Result<Signature, DeployError>;
}

impl DeploymentRunner for RpcClient {
    fn account_data(&self, address: &Pubkey) -> Result<Option<Vec<u8>>, DeployError> {
        let response = self.get_account_with_commitment(address, self.commitment())?;
        Ok(response.value.map(|account| account.data))
    }

    fn submit(&self, instruction: Instruction, payer: &Keypair) -> Result<Signature, DeployError> {
        let blockhash = self.get_latest_blockhash()?;
        let tx = Transaction::new_signed_with_payer(
            &[instruction],
            Some(&payer.pubkey()),
            &[payer],
            blockhash,
        );
        debug!(%blockhash, payer = %payer.pubkey(), "sending transaction");

        Ok(self.send_and_confirm_transaction(&tx)?)
    }
}
