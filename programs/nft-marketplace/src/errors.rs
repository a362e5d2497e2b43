use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Membership NFT address must not be the default pubkey")]
    InvalidMembershipNft,
}
