#![allow(unexpected_cfgs, deprecated)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("63kHSETMuuHutKPGStVfP21VuW2QUWdDnhNGBVySMwez");

#[program]
pub mod nft_marketplace {
    use super::*;

    // Deployment
    pub fn initialize(ctx: Context<Initialize>, membership_nft: Pubkey) -> Result<()> {
        ctx.accounts.init_marketplace(membership_nft, &ctx.bumps)
    }

    // Read-only accessors
    pub fn admin(ctx: Context<ReadMarketplace>) -> Result<Pubkey> {
        ctx.accounts.admin()
    }

    pub fn membership_nft(ctx: Context<ReadMarketplace>) -> Result<Pubkey> {
        ctx.accounts.membership_nft()
    }

    pub fn marketplace_fee(ctx: Context<ReadMarketplace>) -> Result<u8> {
        ctx.accounts.marketplace_fee()
    }

    pub fn number_of_sellers(ctx: Context<ReadMarketplace>) -> Result<u64> {
        ctx.accounts.number_of_sellers()
    }

    pub fn number_of_sales(ctx: Context<ReadMarketplace>) -> Result<u64> {
        ctx.accounts.number_of_sales()
    }

    pub fn number_of_minted_nfts(ctx: Context<ReadMarketplace>) -> Result<u64> {
        ctx.accounts.number_of_minted_nfts()
    }
}
