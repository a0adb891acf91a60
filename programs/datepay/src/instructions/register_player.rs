use anchor_lang::prelude::*;

use crate::errors::DatePayError;
use crate::events::PlayerRegistered;
use crate::state::{Platform, PlayerDirectory, PlayerRecord};

#[derive(Accounts)]
#[instruction(fid: u64)]
pub struct RegisterPlayer<'info> {
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

    #[account(
        init,
        payer = authority,
        space = 8 + PlayerRecord::INIT_SPACE,
        seeds = [PlayerRecord::SEED, fid.to_le_bytes().as_ref()],
        bump,
    )]
    pub record: Account<'info, PlayerRecord>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<RegisterPlayer>, fid: u64, wallet: Pubkey, min_price: u64) -> Result<()> {
    require!(fid > 0, DatePayError::InvalidFid);
    require_keys_neq!(wallet, Pubkey::default(), DatePayError::InvalidWallet);

    ctx.accounts.directory.insert(fid)?;

    let clock = Clock::get()?;
    ctx.accounts
        .record
        .init(fid, wallet, min_price, clock.unix_timestamp, ctx.bumps.record);

    emit!(PlayerRegistered {
        fid,
        wallet,
        min_price,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
