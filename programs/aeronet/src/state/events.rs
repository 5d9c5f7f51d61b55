use anchor_lang::prelude::*;

/// Event emitted when a device submits a sensor reading
#[event]
pub struct DataSubmitted {
    /// Device identifier
    pub device_id: String,

    /// Timestamp of submission
    pub timestamp: i64,

    /// PM2.5 air quality measurement in μg/m³ × 10
    /// Example: 35.2 μg/m³ = 352
    pub pm25: u32,

    /// PM10 air quality measurement in μg/m³ × 10
    /// Example: 50.1 μg/m³ = 501
    pub pm10: u32,

    /// Temperature in Celsius × 10
    /// Example: 25.3°C = 253
    pub temperature: i32,

    /// Humidity percentage × 10
    /// Example: 65.5% = 655
    pub humidity: u32,

    /// Reward amount paid out for this submission
    pub reward_amount: u64,

    /// Current halving epoch (0, 1, 2, ...)
    pub halving_epoch: u64,

    /// Device owner at time of submission
    pub owner: Pubkey,
}

/// Event emitted when a new device is registered
#[event]
pub struct DeviceRegistered {
    /// Device identifier
    pub device_id: String,

    /// Initial owner
    pub owner: Pubkey,

    /// Registration timestamp
    pub registered_at: i64,
}

/// Event emitted when device ownership changes hands
#[event]
pub struct OwnershipTransferred {
    /// Device identifier
    pub device_id: String,

    /// Owner before the transfer
    pub previous_owner: Pubkey,

    /// Owner after the transfer
    pub new_owner: Pubkey,

    /// Transfer timestamp
    pub timestamp: i64,
}

/// Event emitted when a device is permanently deactivated
#[event]
pub struct DeviceDeactivated {
    /// Device identifier
    pub device_id: String,

    /// Owner who deactivated the device
    pub owner: Pubkey,

    /// Deactivation timestamp
    pub timestamp: i64,
}
