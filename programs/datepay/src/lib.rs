use anchor_lang::prelude::*;

pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod datepay {
    use super::*;

    /// One-time platform initialization: treasury, fee and empty directory.
    pub fn initialize_platform(ctx: Context<InitializePlatform>, fee_bps: u16) -> Result<()> {
        instructions::initialize_platform::handler(ctx, fee_bps)
    }

    /// Admin registers a player under a FID with a payout wallet and minimum price.
    pub fn register_player(
        ctx: Context<RegisterPlayer>,
        fid: u64,
        wallet: Pubkey,
        min_price: u64,
    ) -> Result<()> {
        instructions::register_player::handler(ctx, fid, wallet, min_price)
    }

    /// Admin updates a player's wallet/price/active flag, subject to the
    /// per-field cooldowns.
    pub fn update_player(
        ctx: Context<UpdatePlayer>,
        wallet: Pubkey,
        min_price: u64,
        active: bool,
    ) -> Result<()> {
        instructions::update_player::handler(ctx, wallet, min_price, active)
    }

    /// Admin re-enables payments for a player. Never cooldown-gated.
    pub fn activate_player(ctx: Context<SetPlayerActive>) -> Result<()> {
        instructions::set_player_active::handler(ctx, true)
    }

    /// Admin pauses payments for a player. Never cooldown-gated.
    pub fn deactivate_player(ctx: Context<SetPlayerActive>) -> Result<()> {
        instructions::set_player_active::handler(ctx, false)
    }

    /// Admin removes a player; the FID may be registered again afterwards.
    pub fn deregister_player(ctx: Context<DeregisterPlayer>) -> Result<()> {
        instructions::deregister_player::handler(ctx)
    }

    /// Anyone pays for a date; the amount is split between the player's
    /// wallet and the platform treasury.
    pub fn pay_for_date(ctx: Context<PayForDate>, amount: u64) -> Result<()> {
        instructions::pay_for_date::handler(ctx, amount)
    }

    /// Admin points the fee share at a new treasury wallet.
    pub fn set_platform_wallet(ctx: Context<SetPlatformWallet>) -> Result<()> {
        instructions::set_platform_wallet::handler(ctx)
    }

    /// Admin changes the fee, capped at 20%.
    pub fn set_platform_fee(ctx: Context<SetPlatformFee>, new_fee_bps: u16) -> Result<()> {
        instructions::set_platform_fee::handler(ctx, new_fee_bps)
    }
}
