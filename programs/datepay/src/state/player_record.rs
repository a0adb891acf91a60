use anchor_lang::prelude::*;

use crate::errors::DatePayError;
use crate::state::cooldown;

#[account]
#[derive(InitSpace)]
pub struct PlayerRecord {
    /// Externally assigned numeric player id. Immutable.
    pub fid: u64,
    /// Payout wallet. Changes are gated by a 24h cooldown.
    pub wallet: Pubkey,
    /// Minimum accepted payment in lamports (0 = free). Changes are gated by a 1h cooldown.
    pub min_price: u64,
    /// Whether the player currently accepts payments. Toggling is never gated.
    pub active: bool,
    /// Unix timestamp of registration. Immutable.
    pub registered_at: i64,
    /// Unix timestamp of the last min_price change.
    pub last_price_update_at: i64,
    /// Unix timestamp of the last wallet change.
    pub last_wallet_update_at: i64,
    /// PDA bump seed.
    pub bump: u8,
}

impl PlayerRecord {
    pub const SEED: &'static [u8] = b"player";

    /// Populate a freshly initialized record. Both cooldown clocks start at
    /// `now`, so an immediate `apply_update` is blocked.
    pub fn init(&mut self, fid: u64, wallet: Pubkey, min_price: u64, now: i64, bump: u8) {
        self.fid = fid;
        self.wallet = wallet;
        self.min_price = min_price;
        self.active = true;
        self.registered_at = now;
        self.last_price_update_at = now;
        self.last_wallet_update_at = now;
        self.bump = bump;
    }

    pub fn price_cooldown_remaining(&self, now: i64) -> i64 {
        cooldown::remaining(now, self.last_price_update_at, cooldown::PRICE_UPDATE_COOLDOWN)
    }

    pub fn wallet_cooldown_remaining(&self, now: i64) -> i64 {
        cooldown::remaining(now, self.last_wallet_update_at, cooldown::WALLET_UPDATE_COOLDOWN)
    }

    /// Overwrite wallet/min_price/active. A cooldown gate applies only to a
    /// field whose value actually changes; both gates are checked (price
    /// first) before anything is written, and only the clocks of changed
    /// fields refresh. `active` is never gated here.
    pub fn apply_update(
        &mut self,
        wallet: Pubkey,
        min_price: u64,
        active: bool,
        now: i64,
    ) -> Result<()> {
        let price_changed = min_price != self.min_price;
        let wallet_changed = wallet != self.wallet;

        if price_changed {
            require!(
                self.price_cooldown_remaining(now) == 0,
                DatePayError::PriceCooldownActive
            );
        }
        if wallet_changed {
            require_keys_neq!(wallet, Pubkey::default(), DatePayError::InvalidWallet);
            require!(
                self.wallet_cooldown_remaining(now) == 0,
                DatePayError::WalletCooldownActive
            );
        }

        if price_changed {
            self.min_price = min_price;
            self.last_price_update_at = now;
        }
        if wallet_changed {
            self.wallet = wallet;
            self.last_wallet_update_at = now;
        }
        self.active = active;

        Ok(())
    }

    /// Payment preconditions: player must be active and the amount must meet
    /// the minimum (exact minimum accepted).
    pub fn validate_payment(&self, amount: u64) -> Result<()> {
        require!(self.active, DatePayError::PlayerInactive);
        require!(amount >= self.min_price, DatePayError::BelowMinimumPrice);
        Ok(())
    }
}
