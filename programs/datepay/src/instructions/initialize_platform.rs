use anchor_lang::prelude::*;

use crate::errors::DatePayError;
use crate::state::{Platform, PlayerDirectory};

#[derive(Accounts)]
pub struct InitializePlatform<'info> {
    #[account(
        init,
        payer = authority,
        space = 8 + Platform::INIT_SPACE,
        seeds = [Platform::SEED],
        bump,
    )]
    pub platform: Account<'info, Platform>,

    #[account(
        init,
        payer = authority,
        space = 8 + PlayerDirectory::INIT_SPACE,
        seeds = [PlayerDirectory::SEED],
        bump,
    )]
    pub directory: Account<'info, PlayerDirectory>,

    #[account(mut)]
    pub authority: Signer<'info>,

    /// CHECK: Treasury wallet that receives platform fees.
    pub treasury: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializePlatform>, fee_bps: u16) -> Result<()> {
    require!(fee_bps <= Platform::MAX_FEE_BPS, DatePayError::FeeTooHigh);
    require_keys_neq!(
        ctx.accounts.treasury.key(),
        Pubkey::default(),
        DatePayError::InvalidWallet
    );

    let platform = &mut ctx.accounts.platform;
    platform.authority = ctx.accounts.authority.key();
    platform.treasury = ctx.accounts.treasury.key();
    platform.fee_bps = fee_bps;
    platform.total_dates = 0;
    platform.total_volume = 0;
    platform.bump = ctx.bumps.platform;

    let directory = &mut ctx.accounts.directory;
    directory.fids = Vec::new();
    directory.bump = ctx.bumps.directory;

    Ok(())
}
