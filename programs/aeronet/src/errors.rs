use anchor_lang::prelude::*;

#[error_code]
pub enum AeronetError {
    #[msg("Device ID must be between 1 and 32 bytes")]
    InvalidDeviceId,

    #[msg("Unauthorized: You are not the owner of this device")]
    Unauthorized,

    #[msg("Device is not active")]
    DeviceNotActive,

    #[msg("Treasury does not hold enough tokens for this reward")]
    InsufficientTreasuryFunds,

    #[msg("Token account mint does not match the reward mint")]
    InvalidMint,

    #[msg("Token account is not owned by the device owner")]
    InvalidOwner,

    #[msg("Arithmetic overflow")]
    Overflow,
}
