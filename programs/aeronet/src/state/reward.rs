use anchor_lang::prelude::*;

use crate::constants::HALVING_INTERVAL_SECONDS;

/// Global reward configuration with halving mechanism
/// Singleton PDA [b"reward_config"]; created once, start_timestamp never changes
#[account]
#[derive(InitSpace)]
pub struct RewardConfig {
    /// Authority that initialized the config
    pub authority: Pubkey,

    /// Mint of the reward token
    pub mint: Pubkey,

    /// Treasury PDA token account that pays out rewards
    pub treasury: Pubkey,

    /// Initial reward per data submission (in smallest units)
    pub initial_reward: u64,

    /// Timestamp when reward system started (for time-based halving)
    pub start_timestamp: i64,

    /// Total data submissions across all devices (statistics)
    pub total_data_submitted: u64,

    /// Total rewards paid out of the treasury (in smallest units)
    pub total_rewards_distributed: u64,
}

impl RewardConfig {
    /// Number of completed 4-year halving intervals at `now`.
    /// Clock skew before start_timestamp counts as epoch 0.
    pub fn halving_epoch(&self, now: i64) -> u64 {
        let elapsed = now.saturating_sub(self.start_timestamp).max(0);
        (elapsed / HALVING_INTERVAL_SECONDS) as u64
    }

    /// Reward per submission at `now`: initial_reward halved once per epoch.
    /// Clamps to 1 base unit rather than rounding down to zero; only an epoch
    /// that shifts out the whole 64-bit range yields 0.
    pub fn current_reward(&self, now: i64) -> u64 {
        if self.initial_reward == 0 {
            return 0;
        }
        let epoch = self.halving_epoch(now);
        match u32::try_from(epoch)
            .ok()
            .and_then(|e| self.initial_reward.checked_shr(e))
        {
            Some(reward) => reward.max(1),
            None => 0,
        }
    }
}

/// Per-device submission statistics
/// Rewards are tied to the device, not the user: when ownership changes,
/// future payouts follow the device to its new owner
#[account]
#[derive(InitSpace)]
pub struct DeviceRewards {
    /// Device ID this reward account belongs to
    #[max_len(32)]
    pub device_id: String,

    /// Current owner of the device (updated on ownership transfer)
    pub owner: Pubkey,

    /// Total data submissions by this device
    pub total_data_submitted: u64,

    /// Last submission timestamp (0 until the first submission)
    pub last_submission: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: i64 = 1_700_000_000;

    fn config(initial_reward: u64) -> RewardConfig {
        RewardConfig {
            authority: Pubkey::default(),
            mint: Pubkey::default(),
            treasury: Pubkey::default(),
            initial_reward,
            start_timestamp: START,
            total_data_submitted: 0,
            total_rewards_distributed: 0,
        }
    }

    #[test]
    fn full_reward_during_first_epoch() {
        let config = config(100_000_000_000);
        assert_eq!(config.halving_epoch(START), 0);
        assert_eq!(config.current_reward(START), 100_000_000_000);
        assert_eq!(
            config.current_reward(START + HALVING_INTERVAL_SECONDS - 1),
            100_000_000_000
        );
    }

    #[test]
    fn halves_at_each_interval_boundary() {
        let config = config(100_000_000_000);
        assert_eq!(
            config.current_reward(START + HALVING_INTERVAL_SECONDS),
            50_000_000_000
        );
        assert_eq!(
            config.current_reward(START + 2 * HALVING_INTERVAL_SECONDS + 1),
            25_000_000_000
        );
        assert_eq!(
            config.halving_epoch(START + 3 * HALVING_INTERVAL_SECONDS),
            3
        );
    }

    #[test]
    fn clock_before_start_counts_as_epoch_zero() {
        let config = config(100);
        assert_eq!(config.halving_epoch(START - 500), 0);
        assert_eq!(config.current_reward(START - 500), 100);
    }

    #[test]
    fn clamps_to_one_base_unit_instead_of_zero() {
        // 100 >> 7 == 0; the payout floors at 1 base unit
        let config = config(100);
        assert_eq!(config.current_reward(START + 6 * HALVING_INTERVAL_SECONDS), 1);
        assert_eq!(config.current_reward(START + 7 * HALVING_INTERVAL_SECONDS), 1);
        assert_eq!(config.current_reward(START + 40 * HALVING_INTERVAL_SECONDS), 1);
    }

    #[test]
    fn epoch_past_bit_width_pays_zero() {
        let config = config(u64::MAX);
        assert_eq!(config.current_reward(START + 63 * HALVING_INTERVAL_SECONDS), 1);
        assert_eq!(config.current_reward(START + 64 * HALVING_INTERVAL_SECONDS), 0);
        assert_eq!(config.current_reward(i64::MAX), 0);
    }

    #[test]
    fn repeated_epoch_zero_submissions_aggregate_exactly() {
        // 7 submissions at 100 base units each
        let config = config(100);
        let paid: u64 = (0..7).map(|_| config.current_reward(START + 60)).sum();
        assert_eq!(paid, 700);
    }

    #[test]
    fn zero_initial_reward_stays_zero() {
        let config = config(0);
        assert_eq!(config.current_reward(START), 0);
        assert_eq!(config.current_reward(START + HALVING_INTERVAL_SECONDS), 0);
    }
}
