/// Total supply: 1 billion AERO tokens (with 9 decimals)
pub const TOTAL_SUPPLY: u64 = 1_000_000_000 * 1_000_000_000;

/// AERO token decimals
pub const TOKEN_DECIMALS: u8 = 9;

/// Maximum device ID length (32 bytes for hash-like IDs)
pub const MAX_DEVICE_ID_LEN: usize = 32;

/// Halving interval: 4 years in seconds (like Bitcoin)
pub const HALVING_INTERVAL_SECONDS: i64 = 4 * 365 * 24 * 60 * 60; // ~126M seconds

/// PDA seed for device registry accounts
pub const DEVICE_SEED: &[u8] = b"device";

/// PDA seed for device reward accounts
pub const DEVICE_REWARDS_SEED: &[u8] = b"device_rewards";

/// PDA seed for the global reward config singleton
pub const REWARD_CONFIG_SEED: &[u8] = b"reward_config";

/// PDA seed for the treasury token account
pub const TREASURY_SEED: &[u8] = b"treasury";
