use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("BSWLfRyT9Dd7MDqHY9jYJJjhCiXxJNVobyyGii8wrzBR");

/// AERO device registry and reward distribution program.
///
/// Sensor devices register under an owner wallet, then earn AERO tokens for
/// every data submission. Rewards are paid immediately out of a keyless
/// treasury PDA and halve every 4 years from the configured start timestamp.
#[program]
pub mod aeronet {
    use super::*;

    /// Create the AERO mint and treasury PDA, mint the fixed total supply
    /// into the treasury, then revoke the mint authority. One-time.
    pub fn initialize_token(ctx: Context<InitializeToken>) -> Result<()> {
        instructions::token::initialize_token(ctx)
    }

    /// Anchor the halving schedule and zero the global counters. One-time.
    pub fn initialize_reward_config(
        ctx: Context<InitializeRewardConfig>,
        initial_reward: u64,
    ) -> Result<()> {
        instructions::reward::initialize_reward_config(ctx, initial_reward)
    }

    /// Register a device and its rewards record under the signing owner.
    pub fn register_device(ctx: Context<RegisterDevice>, device_id: String) -> Result<()> {
        instructions::device::register_device(ctx, device_id)
    }

    /// Hand a device to a new owner. Owner-signed; counters stay put.
    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        instructions::device::transfer_ownership(ctx, new_owner)
    }

    /// Permanently retire a device. Owner-signed.
    pub fn deactivate_device(ctx: Context<DeactivateDevice>) -> Result<()> {
        instructions::device::deactivate_device(ctx)
    }

    /// Record a sensor reading and auto-distribute the current reward to the
    /// device owner's token account.
    pub fn submit_data(
        ctx: Context<SubmitData>,
        device_id: String,
        pm25: u32,
        pm10: u32,
        temperature: i32,
        humidity: u32,
    ) -> Result<()> {
        instructions::data::submit_data(ctx, device_id, pm25, pm10, temperature, humidity)
    }
}
