pub mod device;
pub mod events;
pub mod reward;

pub use device::*;
pub use events::*;
pub use reward::*;

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::Space;

    // Fixed-size record layouts; a String costs 4 length-prefix bytes plus max_len

    #[test]
    fn device_registry_layout() {
        assert_eq!(DeviceRegistry::INIT_SPACE, (4 + 32) + 32 + 8 + 1);
    }

    #[test]
    fn device_rewards_layout() {
        assert_eq!(DeviceRewards::INIT_SPACE, (4 + 32) + 32 + 8 + 8);
    }

    #[test]
    fn reward_config_layout() {
        assert_eq!(RewardConfig::INIT_SPACE, 32 + 32 + 32 + 8 + 8 + 8 + 8);
    }
}
