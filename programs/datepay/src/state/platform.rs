use anchor_lang::prelude::*;

use crate::errors::DatePayError;

/// Fee denominator: 10_000 bps = 100%.
pub const BPS_DENOMINATOR: u64 = 10_000;

#[account]
#[derive(InitSpace)]
pub struct Platform {
    /// Admin who can manage players and platform settings.
    pub authority: Pubkey,
    /// Treasury wallet that receives the platform's share.
    pub treasury: Pubkey,
    /// Platform fee in basis points (100 = 1%).
    pub fee_bps: u16,
    /// Running count of paid dates.
    pub total_dates: u64,
    /// Cumulative gross payment volume in lamports.
    pub total_volume: u64,
    /// PDA bump seed.
    pub bump: u8,
}

impl Platform {
    pub const SEED: &'static [u8] = b"platform";

    /// Hard ceiling on the platform fee: 2000 bps = 20%.
    pub const MAX_FEE_BPS: u16 = 2_000;

    pub fn set_fee(&mut self, new_fee_bps: u16) -> Result<u16> {
        require!(new_fee_bps <= Self::MAX_FEE_BPS, DatePayError::FeeTooHigh);
        let old = self.fee_bps;
        self.fee_bps = new_fee_bps;
        Ok(old)
    }

    pub fn set_treasury(&mut self, new_treasury: Pubkey) -> Result<Pubkey> {
        require_keys_neq!(new_treasury, Pubkey::default(), DatePayError::InvalidWallet);
        let old = self.treasury;
        self.treasury = new_treasury;
        Ok(old)
    }

    /// Split a gross payment into (player_share, platform_share).
    ///
    /// The platform share is floored, so the player share absorbs any
    /// rounding dust and the two always sum to `amount`.
    pub fn calculate_split(&self, amount: u64) -> Result<(u64, u64)> {
        let platform_share = amount
            .checked_mul(self.fee_bps as u64)
            .ok_or(DatePayError::MathOverflow)?
            .checked_div(BPS_DENOMINATOR)
            .ok_or(DatePayError::MathOverflow)?;
        let player_share = amount
            .checked_sub(platform_share)
            .ok_or(DatePayError::MathOverflow)?;
        Ok((player_share, platform_share))
    }

    /// Fold a successful payment into the running stats (gross amount).
    pub fn record_payment(&mut self, amount: u64) -> Result<()> {
        self.total_dates = self
            .total_dates
            .checked_add(1)
            .ok_or(DatePayError::MathOverflow)?;
        self.total_volume = self
            .total_volume
            .checked_add(amount)
            .ok_or(DatePayError::MathOverflow)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOL: u64 = 1_000_000_000;

    fn platform(fee_bps: u16) -> Platform {
        Platform {
            authority: Pubkey::new_unique(),
            treasury: Pubkey::new_unique(),
            fee_bps,
            total_dates: 0,
            total_volume: 0,
            bump: 255,
        }
    }

    #[test]
    fn five_percent_split() {
        let p = platform(500);
        let (player_share, platform_share) = p.calculate_split(SOL).unwrap();
        assert_eq!(player_share, 950_000_000);
        assert_eq!(platform_share, 50_000_000);
    }

    #[test]
    fn shares_always_sum_to_amount() {
        let p = platform(337);
        for amount in [0, 1, 3, 9_999, 10_000, 10_001, 123_456_789, SOL] {
            let (player_share, platform_share) = p.calculate_split(amount).unwrap();
            assert_eq!(player_share + platform_share, amount);
            assert!(platform_share <= amount);
        }
    }

    #[test]
    fn zero_fee_gives_everything_to_player() {
        let p = platform(0);
        assert_eq!(p.calculate_split(SOL).unwrap(), (SOL, 0));
    }

    #[test]
    fn max_fee_takes_twenty_percent() {
        let p = platform(Platform::MAX_FEE_BPS);
        assert_eq!(p.calculate_split(SOL).unwrap(), (800_000_000, 200_000_000));
    }

    #[test]
    fn tiny_amounts_floor_the_platform_share() {
        let p = platform(500);
        // 5% of 1 lamport floors to 0; the player keeps the whole lamport.
        assert_eq!(p.calculate_split(1).unwrap(), (1, 0));
    }

    #[test]
    fn fee_ceiling_enforced() {
        let mut p = platform(500);
        assert_eq!(p.set_fee(2_500).unwrap_err(), DatePayError::FeeTooHigh.into());
        assert_eq!(p.fee_bps, 500);

        assert_eq!(p.set_fee(2_000).unwrap(), 500);
        assert_eq!(p.fee_bps, 2_000);
        assert_eq!(p.set_fee(0).unwrap(), 2_000);
        assert_eq!(p.fee_bps, 0);
    }

    #[test]
    fn treasury_must_not_be_default() {
        let mut p = platform(500);
        let before = p.treasury;
        assert_eq!(
            p.set_treasury(Pubkey::default()).unwrap_err(),
            DatePayError::InvalidWallet.into()
        );
        assert_eq!(p.treasury, before);

        let next = Pubkey::new_unique();
        assert_eq!(p.set_treasury(next).unwrap(), before);
        assert_eq!(p.treasury, next);
    }

    #[test]
    fn stats_accumulate_gross_volume() {
        let mut p = platform(500);
        p.record_payment(SOL / 10).unwrap();
        p.record_payment(SOL / 20).unwrap();
        assert_eq!(p.total_dates, 2);
        assert_eq!(p.total_volume, 150_000_000);
    }
}
