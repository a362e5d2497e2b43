use anchor_lang::prelude::*;

use crate::constants::DEFAULT_MARKETPLACE_FEE;

/// Marketplace configuration and counters, one per admin.
#[account]
#[derive(InitSpace)]
pub struct Marketplace {
    pub admin: Pubkey,
    pub membership_nft: Pubkey, // collection gating seller membership
    pub marketplace_fee: u8,    // percent
    pub number_of_sellers: u64,
    pub number_of_sales: u64,
    pub number_of_minted_nfts: u64,
    pub bump: u8,
}

impl Marketplace {
    /// State written at deployment: default fee and zeroed counters.
    pub fn new(admin: Pubkey, membership_nft: Pubkey, bump: u8) -> Self {
        Self {
            admin,
            membership_nft,
            marketplace_fee: DEFAULT_MARKETPLACE_FEE,
            number_of_sellers: 0,
            number_of_sales: 0,
            number_of_minted_nfts: 0,
            bump,
        }
    }
}
