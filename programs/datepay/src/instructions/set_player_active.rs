use anchor_lang::prelude::*;

use crate::errors::DatePayError;
use crate::state::{Platform, PlayerRecord};

/// Shared context for activate/deactivate. The flag flips immediately, with
/// no cooldown interaction and no timestamp change.
#[derive(Accounts)]
pub struct SetPlayerActive<'info> {
    #[account(
        seeds = [Platform::SEED],
        bump = platform.bump,
        has_one = authority @ DatePayError::Unauthorized,
    )]
    pub platform: Account<'info, Platform>,

    #[account(
        mut,
        seeds = [PlayerRecord::SEED, record.fid.to_le_bytes().as_ref()],
        bump = record.bump,
    )]
    pub record: Account<'info, PlayerRecord>,

    pub authority: Signer<'info>,
}

pub fn handler(ctx: Context<SetPlayerActive>, active: bool) -> Result<()> {
    ctx.accounts.record.active = active;
    msg!("player {} active = {}", ctx.accounts.record.fid, active);
    Ok(())
}
