/// Minimum seconds between two `min_price` changes.
pub const PRICE_UPDATE_COOLDOWN: i64 = 3_600;

/// Minimum seconds between two payout-wallet changes.
pub const WALLET_UPDATE_COOLDOWN: i64 = 86_400;

/// Seconds until a field gated by `window` may change again, 0 when open.
pub const fn remaining(now: i64, last_change_at: i64, window: i64) -> i64 {
    let open_at = last_change_at.saturating_add(window);
    if now >= open_at {
        0
    } else {
        open_at - now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_down_to_zero() {
        assert_eq!(remaining(1_000, 1_000, 60), 60);
        assert_eq!(remaining(1_030, 1_000, 60), 30);
        assert_eq!(remaining(1_059, 1_000, 60), 1);
        assert_eq!(remaining(1_060, 1_000, 60), 0);
        assert_eq!(remaining(2_000, 1_000, 60), 0);
    }

    #[test]
    fn repeated_reads_are_stable() {
        assert_eq!(remaining(1_030, 1_000, 60), remaining(1_030, 1_000, 60));
    }

    #[test]
    fn saturates_near_i64_max() {
        assert_eq!(remaining(0, i64::MAX - 10, WALLET_UPDATE_COOLDOWN), i64::MAX);
    }
}
