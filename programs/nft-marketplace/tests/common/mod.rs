#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

use anchor_lang::prelude::Pubkey;
use anchor_lang::{AnchorDeserialize, InstructionData, ToAccountMetas};
use litesvm::types::{FailedTransactionMetadata, TransactionResult};
use litesvm::LiteSVM;
use solana_instruction::Instruction;
use solana_keypair::Keypair;
use solana_signer::Signer;
use solana_transaction::Transaction;

use nft_marketplace::constants::MARKETPLACE_SEED;

pub const PROGRAM_SO: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../target/deploy/nft_marketplace.so"
);

// Membership collection the fixture deploys with.
pub const MEMBERSHIP_NFT: Pubkey = Pubkey::new_from_array([
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 188, 76, 160, 237, 167, 100, 122, 138, 183, 194, 6, 28,
    46, 17, 138, 24, 169, 54, 241, 61,
]);

const AIRDROP_LAMPORTS: u64 = 10_000_000_000;

static DEPLOYMENTS: AtomicUsize = AtomicUsize::new(0);
static FIXTURE: OnceLock<DeploymentSnapshot> = OnceLock::new();

pub fn marketplace_address(admin: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[MARKETPLACE_SEED, admin.as_ref()], &nft_marketplace::ID).0
}

/// A LiteSVM instance with the program loaded and a funded admin.
pub struct TestMarketplace {
    pub svm: LiteSVM,
    pub admin: Keypair,
    pub marketplace: Pubkey,
}

impl TestMarketplace {
    pub fn new() -> Self {
        let mut svm = LiteSVM::new();
        svm.add_program_from_file(nft_marketplace::ID, PROGRAM_SO)
            .expect("missing program binary, run `anchor build` first");

        let admin = Keypair::new();
        svm.airdrop(&admin.pubkey(), AIRDROP_LAMPORTS)
            .expect("airdrop failed");
        let marketplace = marketplace_address(&admin.pubkey());

        Self {
            svm,
            admin,
            marketplace,
        }
    }

    /// Funds and returns a second signer in the same SVM.
    pub fn funded_signer(&mut self) -> Keypair {
        let signer = Keypair::new();
        self.svm
            .airdrop(&signer.pubkey(), AIRDROP_LAMPORTS)
            .expect("airdrop failed");
        signer
    }

    pub fn initialize(&mut self, membership_nft: Pubkey) -> TransactionResult {
        let admin = self.admin.insecure_clone();
        self.initialize_as(&admin, membership_nft)
    }

    pub fn initialize_as(&mut self, admin: &Keypair, membership_nft: Pubkey) -> TransactionResult {
        let ix = Instruction {
            program_id: nft_marketplace::ID,
            accounts: nft_marketplace::accounts::Initialize {
                admin: admin.pubkey(),
                marketplace: marketplace_address(&admin.pubkey()),
                system_program: anchor_lang::system_program::ID,
            }
            .to_account_metas(None),
            data: nft_marketplace::instruction::Initialize { membership_nft }.data(),
        };
        let tx = Transaction::new_signed_with_payer(
            &[ix],
            Some(&admin.pubkey()),
            &[admin],
            self.svm.latest_blockhash(),
        );
        self.svm.send_transaction(tx)
    }

    /// Calls a read-only accessor and decodes its return data.
    pub fn read<T: AnchorDeserialize>(
        &self,
        marketplace: Pubkey,
        data: impl InstructionData,
    ) -> Result<T, FailedTransactionMetadata> {
        let ix = Instruction {
            program_id: nft_marketplace::ID,
            accounts: nft_marketplace::accounts::ReadMarketplace { marketplace }
                .to_account_metas(None),
            data: data.data(),
        };
        let tx = Transaction::new_signed_with_payer(
            &[ix],
            Some(&self.admin.pubkey()),
            &[&self.admin],
            self.svm.latest_blockhash(),
        );
        let info = self.svm.simulate_transaction(tx)?;
        let return_data = info.meta.return_data;
        assert_eq!(
            return_data.program_id,
            nft_marketplace::ID,
            "accessor set no return data"
        );

        // The runtime strips trailing zero bytes from return data.
        let width = std::mem::size_of::<T>();
        assert!(
            return_data.data.len() <= width,
            "return data is {} bytes, expected at most {width}",
            return_data.data.len()
        );
        let mut bytes = return_data.data;
        bytes.resize(width, 0);
        Ok(T::try_from_slice(&bytes).expect("undecodable return data"))
    }

    pub fn snapshot(&self) -> DeploymentSnapshot {
        use nft_marketplace::instruction as ix;

        let marketplace = self.marketplace;
        DeploymentSnapshot {
            admin: self.admin.pubkey(),
            marketplace,
            admin_address: self.read(marketplace, ix::Admin {}).unwrap(),
            membership_nft: self.read(marketplace, ix::MembershipNft {}).unwrap(),
            marketplace_fee: self.read(marketplace, ix::MarketplaceFee {}).unwrap(),
            number_of_sellers: self.read(marketplace, ix::NumberOfSellers {}).unwrap(),
            number_of_sales: self.read(marketplace, ix::NumberOfSales {}).unwrap(),
            number_of_minted_nfts: self.read(marketplace, ix::NumberOfMintedNfts {}).unwrap(),
        }
    }
}

/// Values read back right after deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentSnapshot {
    pub admin: Pubkey,
    pub marketplace: Pubkey,
    pub admin_address: Pubkey,
    pub membership_nft: Pubkey,
    pub marketplace_fee: u8,
    pub number_of_sellers: u64,
    pub number_of_sales: u64,
    pub number_of_minted_nfts: u64,
}

/// Deploys once per test binary and hands every caller the same snapshot.
pub fn deploy_fixture() -> &'static DeploymentSnapshot {
    FIXTURE.get_or_init(|| {
        DEPLOYMENTS.fetch_add(1, Ordering::SeqCst);

        let mut market = TestMarketplace::new();
        market
            .initialize(MEMBERSHIP_NFT)
            .expect("fixture deployment failed");
        market.snapshot()
    })
}

pub fn fixture_deployments() -> usize {
    DEPLOYMENTS.load(Ordering::SeqCst)
}

pub fn logs_contain(failed: &FailedTransactionMetadata, needle: &str) -> bool {
    failed.meta.logs.iter().any(|line| line.contains(needle))
}
