pub mod cooldown;
pub mod directory;
pub mod platform;
pub mod player_record;

pub use directory::*;
pub use platform::*;
pub use player_record::*;
