use anchor_lang::prelude::*;

#[event]
pub struct MarketplaceInitialized {
    pub marketplace: Pubkey,
    pub admin: Pubkey,
    pub membership_nft: Pubkey,
    pub marketplace_fee: u8,
}
