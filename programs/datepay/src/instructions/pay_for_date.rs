use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::errors::DatePayError;
use crate::events::DatePaid;
use crate::state::{Platform, PlayerRecord};

#[derive(Accounts)]
pub struct PayForDate<'info> {
    #[account(
        mut,
        seeds = [Platform::SEED],
        bump = platform.bump,
    )]
    pub platform: Account<'info, Platform>,

    #[account(
        seeds = [PlayerRecord::SEED, record.fid.to_le_bytes().as_ref()],
        bump = record.bump,
    )]
    pub record: Account<'info, PlayerRecord>,

    /// CHECK: Payout destination, pinned to the record's wallet.
    #[account(
        mut,
        constraint = player_wallet.key() == record.wallet @ DatePayError::InvalidWallet,
    )]
    pub player_wallet: UncheckedAccount<'info>,

    /// CHECK: Fee destination, pinned to the platform treasury.
    #[account(
        mut,
        constraint = treasury.key() == platform.treasury @ DatePayError::InvalidWallet,
    )]
    pub treasury: UncheckedAccount<'info>,

    /// Anyone may pay for a date.
    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<PayForDate>, amount: u64) -> Result<()> {
    let record = &ctx.accounts.record;
    record.validate_payment(amount)?;

    let (player_share, platform_share) = ctx.accounts.platform.calculate_split(amount)?;

    // Both legs run inside this instruction; if either fails the whole
    // transaction reverts, stats included.
    if player_share > 0 {
        let transfer_to_player = CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.payer.to_account_info(),
                to: ctx.accounts.player_wallet.to_account_info(),
            },
        );
        system_program::transfer(transfer_to_player, player_share)?;
    }

    if platform_share > 0 {
        let transfer_to_treasury = CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.payer.to_account_info(),
                to: ctx.accounts.treasury.to_account_info(),
            },
        );
        system_program::transfer(transfer_to_treasury, platform_share)?;
    }

    ctx.accounts.platform.record_payment(amount)?;

    emit!(DatePaid {
        fid: ctx.accounts.record.fid,
        payer: ctx.accounts.payer.key(),
        amount,
        player_share,
        platform_share,
    });

    Ok(())
}
