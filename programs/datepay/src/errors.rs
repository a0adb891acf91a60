use anchor_lang::prelude::*;

#[error_code]
pub enum DatePayError {
    #[msg("Only the platform authority can perform this action.")]
    Unauthorized,
    #[msg("FID must be greater than zero.")]
    InvalidFid,
    #[msg("Wallet cannot be the default address.")]
    InvalidWallet,
    #[msg("Player is already registered.")]
    AlreadyRegistered,
    #[msg("Player is not registered.")]
    PlayerNotRegistered,
    #[msg("Price update cooldown has not elapsed.")]
    PriceCooldownActive,
    #[msg("Wallet update cooldown has not elapsed.")]
    WalletCooldownActive,
    #[msg("Player is not accepting payments.")]
    PlayerInactive,
    #[msg("Payment is below the player's minimum price.")]
    BelowMinimumPrice,
    #[msg("Fee basis points must be between 0 and 2000 (20%).")]
    FeeTooHigh,
    #[msg("Index is beyond the registered FID list.")]
    IndexOutOfRange,
    #[msg("Player directory is at capacity.")]
    DirectoryFull,
    #[msg("Arithmetic overflow.")]
    MathOverflow,
}
