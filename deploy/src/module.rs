use anchor_lang::{system_program, AccountDeserialize, InstructionData, ToAccountMetas};
use nft_marketplace::constants::MARKETPLACE_SEED;
use nft_marketplace::state::Marketplace;
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature, Signer};
use tracing::info;

use crate::error::DeployError;
use crate::runner::DeploymentRunner;

pub const MODULE_ID: &str = "NftMarketplaceModule";
pub const PROGRAM_NAME: &str = "nft_marketplace";

// Membership collection used when none is given on the command line.
pub const DEFAULT_MEMBERSHIP_NFT: Pubkey = Pubkey::new_from_array([
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 158, 131, 202, 109, 188, 109, 158, 13, 174, 62, 168, 59, 7,
    98, 190, 246, 222, 32, 112, 141,
]);

/// Which program to instantiate and its constructor arguments, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketplaceModule {
    pub id: &'static str,
    pub program: &'static str,
    pub program_id: Pubkey,
    pub membership_nft: Pubkey,
}

/// Handle to a marketplace instance on the cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployedMarketplace {
    pub program_id: Pubkey,
    pub address: Pubkey,
    pub admin: Pubkey,
    /// `None` when the instance already existed and nothing was sent.
    pub signature: Option<Signature>,
}

impl DeployedMarketplace {
    pub fn is_fresh(&self) -> bool {
        self.signature.is_some()
    }
}

impl Default for MarketplaceModule {
    fn default() -> Self {
        Self::new(DEFAULT_MEMBERSHIP_NFT)
    }
}

impl MarketplaceModule {
    pub fn new(membership_nft: Pubkey) -> Self {
        Self {
            id: MODULE_ID,
            program: PROGRAM_NAME,
            program_id: nft_marketplace::ID,
            membership_nft,
        }
    }

    pub fn with_program_id(mut self, program_id: Pubkey) -> Self {
        self.program_id = program_id;
        self
    }

    pub fn marketplace_address(&self, admin: &Pubkey) -> Pubkey {
        Pubkey::find_program_address(&[MARKETPLACE_SEED, admin.as_ref()], &self.program_id).0
    }

    pub fn initialize_instruction(&self, admin: &Pubkey) -> Instruction {
        Instruction {
            program_id: self.program_id,
            accounts: nft_marketplace::accounts::Initialize {
                admin: *admin,
                marketplace: self.marketplace_address(admin),
                system_program: system_program::ID,
            }
            .to_account_metas(None),
            data: nft_marketplace::instruction::Initialize {
                membership_nft: self.membership_nft,
            }
            .data(),
        }
    }

    /// Instantiates the marketplace with `payer` as admin.
    ///
    /// An instance already at the derived address is returned as-is
    /// instead of being initialized again.
    pub fn deploy<R>(&self, runner: &R, payer: &Keypair) -> Result<DeployedMarketplace, DeployError>
    where
        R: DeploymentRunner + ?Sized,
    {
        let admin = payer.pubkey();
        let address = self.marketplace_address(&admin);

        let mut deployed = DeployedMarketplace {
            program_id: self.program_id,
            address,
            admin,
            signature: None,
        };

        if let Some(data) = runner.account_data(&address)? {
            let existing = decode_marketplace(&address, &data)?;
            self.reconcile(&address, &admin, &existing)?;

            info!(module = self.id, %address, "marketplace already deployed, reusing");
            return Ok(deployed);
        }

        let signature = runner.submit(self.initialize_instruction(&admin), payer)?;
        info!(
            module = self.id,
            program = self.program,
            %address,
            %admin,
            membership_nft = %self.membership_nft,
            %signature,
            "marketplace deployed"
        );

        deployed.signature = Some(signature);
        Ok(deployed)
    }
}

impl MarketplaceModule {
    // An existing instance is only reusable if it was built from the same arguments.
    fn reconcile(
        &self,
        address: &Pubkey,
        admin: &Pubkey,
        existing: &Marketplace,
    ) -> Result<(), DeployError> {
        let checks = [
            ("admin", *admin, existing.admin),
            ("membership_nft", self.membership_nft, existing.membership_nft),
        ];
        for (field, expected, found) in checks {
            if expected != found {
                return Err(DeployError::Reconciliation {
                    address: *address,
                    field,
                    expected,
                    found,
                });
            }
        }
        Ok(())
    }
}

/// Reads and decodes the marketplace account at `address`.
pub fn fetch_marketplace<R>(runner: &R, address: &Pubkey) -> Result<Marketplace, DeployError>
where
    R: DeploymentRunner + ?Sized,
{
    let data = runner
        .account_data(address)?
        .ok_or(DeployError::MissingAccount(*address))?;

    decode_marketplace(address, &data)
}

fn decode_marketplace(address: &Pubkey, data: &[u8]) -> Result<Marketplace, DeployError> {
    Marketplace::try_deserialize(&mut &data[..]).map_err(|err| DeployError::Decode {
        address: *address,
        reason: err.to_string(),
    })
}
