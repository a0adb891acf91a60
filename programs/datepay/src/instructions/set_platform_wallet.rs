use anchor_lang::prelude::*;

use crate::errors::DatePayError;
use crate::events::PlatformWalletUpdated;
use crate::state::Platform;

#[derive(Accounts)]
pub struct SetPlatformWallet<'info> {
    #[account(
        mut,
        seeds = [Platform::SEED],
        bump = platform.bump,
        has_one = authority @ DatePayError::Unauthorized,
    )]
    pub platform: Account<'info, Platform>,

    pub authority: Signer<'info>,

    /// CHECK: New treasury wallet; only its key is stored.
    pub new_treasury: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<SetPlatformWallet>) -> Result<()> {
    let new_wallet = ctx.accounts.new_treasury.key();
    let old_wallet = ctx.accounts.platform.set_treasury(new_wallet)?;

    emit!(PlatformWalletUpdated {
        old_wallet,
        new_wallet,
    });

    Ok(())
}
