use anchor_lang::prelude::*;

use crate::errors::DatePayError;
use crate::events::PlayerUpdated;
use crate::state::{Platform, PlayerRecord};

#[derive(Accounts)]
pub struct UpdatePlayer<'info> {
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

pub fn handler(
    ctx: Context<UpdatePlayer>,
    wallet: Pubkey,
    min_price: u64,
    active: bool,
) -> Result<()> {
    let clock = Clock::get()?;
    let record = &mut ctx.accounts.record;

    record.apply_update(wallet, min_price, active, clock.unix_timestamp)?;

    emit!(PlayerUpdated {
        fid: record.fid,
        wallet: record.wallet,
        min_price: record.min_price,
        active: record.active,
    });

    Ok(())
}
