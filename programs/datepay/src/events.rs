use anchor_lang::prelude::*;

#[event]
pub struct PlayerRegistered {
    pub fid: u64,
    pub wallet: Pubkey,
    pub min_price: u64,
    pub timestamp: i64,
}

#[event]
pub struct PlayerUpdated {
    pub fid: u64,
    pub wallet: Pubkey,
    pub min_price: u64,
    pub active: bool,
}

#[event]
pub struct PlayerDeregistered {
    pub fid: u64,
}

#[event]
pub struct DatePaid {
    pub fid: u64,
    pub payer: Pubkey,
    pub amount: u64,
    pub player_share: u64,
    pub platform_share: u64,
}

#[event]
pub struct PlatformWalletUpdated {
    pub old_wallet: Pubkey,
    pub new_wallet: Pubkey,
}

#[event]
pub struct PlatformFeeUpdated {
    pub old_fee_bps: u16,
    pub new_fee_bps: u16,
}
