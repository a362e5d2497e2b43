use anchor_lang::prelude::*;

use crate::constants::MARKETPLACE_SEED;
use crate::state::Marketplace;

// Shared by every read-only accessor; values come back as return data.
#[derive(Accounts)]
pub struct ReadMarketplace<'info> {
    #[account(
        seeds = [MARKETPLACE_SEED, marketplace.admin.as_ref()],
        bump = marketplace.bump
    )]
    pub marketplace: Account<'info, Marketplace>,
}

impl<'info> ReadMarketplace<'info> {
    pub fn admin(&self) -> Result<Pubkey> {
        Ok(self.marketplace.admin)
    }

    pub fn membership_nft(&self) -> Result<Pubkey> {
        Ok(self.marketplace.membership_nft)
    }

    pub fn marketplace_fee(&self) -> Result<u8> {
        Ok(self.marketplace.marketplace_fee)
    }

    pub fn number_of_sellers(&self) -> Result<u64> {
        Ok(self.marketplace.number_of_sellers)
    }

    pub fn number_of_sales(&self) -> Result<u64> {
        Ok(self.marketplace.number_of_sales)
    }

    pub fn number_of_minted_nfts(&self) -> Result<u64> {
        Ok(self.marketplace.number_of_minted_nfts)
    }
}
