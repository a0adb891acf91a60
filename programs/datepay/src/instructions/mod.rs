pub mod deregister_player;
pub mod initialize_platform;
pub mod pay_for_date;
pub mod register_player;
pub mod set_platform_fee;
pub mod set_platform_wallet;
pub mod set_player_active;
pub mod update_player;

pub use deregister_player::*;
pub use initialize_platform::*;
pub use pay_for_date::*;
pub use register_player::*;
pub use set_platform_fee::*;
pub use set_platform_wallet::*;
pub use set_player_active::*;
pub use update_player::*;
