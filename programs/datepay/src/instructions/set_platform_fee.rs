use anchor_lang::prelude::*;

use crate::errors::DatePayError;
use crate::events::PlatformFeeUpdated;
use crate::state::Platform;

#[derive(Accounts)]
pub struct SetPlatformFee<'info> {
    #[account(
        mut,
        seeds = [Platform::SEED],
        bump = platform.bump,
        has_one = authority @ DatePayError::Unauthorized,
    )]
    pub platform: Account<'info, Platform>,

    pub authority: Signer<'info>,
}

pub fn handler(ctx: Context<SetPlatformFee>, new_fee_bps: u16) -> Result<()> {
    let old_fee_bps = ctx.accounts.platform.set_fee(new_fee_bps)?;

    msg!("platform fee updated: {} -> {} bps", old_fee_bps, new_fee_bps);
    emit!(PlatformFeeUpdated {
        old_fee_bps,
        new_fee_bps,
    });

    Ok(())
}
