use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::ErrorCode;
use crate::events::MarketplaceInitialized;
use crate::state::Marketplace;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = 8 + Marketplace::INIT_SPACE,
        seeds = [MARKETPLACE_SEED, admin.key().as_ref()],
        bump
    )]
    pub marketplace: Account<'info, Marketplace>,

    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn init_marketplace(&mut self, membership_nft: Pubkey, bumps: &InitializeBumps) -> Result<()> {
        require!(
            membership_nft != Pubkey::default(),
            ErrorCode::InvalidMembershipNft
        );

        self.marketplace.set_inner(Marketplace::new(
            self.admin.key(),
            membership_nft,
            bumps.marketplace,
        ));

        emit!(MarketplaceInitialized {
            marketplace: self.marketplace.key(),
            admin: self.admin.key(),
            membership_nft,
            marketplace_fee: self.marketplace.marketplace_fee,
        });

        msg!(
            "Marketplace initialized by {} with fee: {}%",
            self.admin.key(),
            self.marketplace.marketplace_fee
        );
        Ok(())
    }
}
