use anchor_lang::prelude::*;

use crate::errors::DatePayError;
use crate::events::PlayerDeregistered;
use crate::state::{Platform, PlayerDirectory, PlayerRecord};

#[derive(Accounts)]
pub struct DeregisterPlayer<'info> {
    #[account(
        seeds = [Platform::SEED],
        bump = platform.bump,
        has_one = authority @ DatePayError::Unauthorized,
    )]
    pub platform: Account<'info, Platform>,

    #[account(
        mut,
        seeds = [PlayerDirectory::SEED],
        bump = directory.bump,
    )]
    pub directory: Account<'info, PlayerDirectory>,

    /// Closing the record is the tombstone: the FID becomes free for a fresh
    /// registration with restarted cooldown clocks.
    #[account(
        mut,
        close = authority,
        seeds = [PlayerRecord::SEED, record.fid.to_le_bytes().as_ref()],
        bump = record.bump,
    )]
    pub record: Account<'info, PlayerRecord>,

    #[account(mut)]
    pub authority: Signer<'info>,
}

pub fn handler(ctx: Context<DeregisterPlayer>) -> Result<()> {
    let fid = ctx.accounts.record.fid;
    ctx.accounts.directory.remove(fid)?;

    emit!(PlayerDeregistered { fid });

    Ok(())
}
