use anchor_lang::prelude::*;

use crate::constants::MAX_DEVICE_ID_LEN;
use crate::errors::AeronetError;

/// Device Registry Account
/// One per physical sensor unit, addressed by PDA [b"device", device_id]
#[account]
#[derive(InitSpace)]
pub struct DeviceRegistry {
    /// Unique device identifier (e.g., serial number), immutable after registration
    #[max_len(32)]
    pub device_id: String,

    /// Owner's wallet address
    pub owner: Pubkey,

    /// Timestamp when device was registered
    pub registered_at: i64,

    /// Whether the device is currently active
    /// Deactivation is one-way; there is no reactivation instruction
    pub is_active: bool,
}

/// Checks that a device id fits the PDA seed constraints: 1..=32 bytes.
/// Length is counted in bytes, not chars, since the id is used as a raw seed.
pub fn validate_device_id(device_id: &str) -> Result<()> {
    require!(
        !device_id.is_empty() && device_id.len() <= MAX_DEVICE_ID_LEN,
        AeronetError::InvalidDeviceId
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_lengths_one_through_thirty_two() {
        assert!(validate_device_id("a").is_ok());
        assert!(validate_device_id("sensor-042").is_ok());
        assert!(validate_device_id(&"x".repeat(32)).is_ok());
    }

    #[test]
    fn rejects_empty_id() {
        assert!(validate_device_id("").is_err());
    }

    #[test]
    fn rejects_id_over_thirty_two_bytes() {
        assert!(validate_device_id(&"x".repeat(33)).is_err());
    }

    #[test]
    fn counts_multibyte_ids_in_bytes() {
        // 11 chars but 33 bytes
        assert!(validate_device_id(&"€".repeat(11)).is_err());
        // 10 chars, 30 bytes
        assert!(validate_device_id(&"€".repeat(10)).is_ok());
    }
}
