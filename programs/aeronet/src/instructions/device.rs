use anchor_lang::prelude::*;

use crate::constants::{DEVICE_REWARDS_SEED, DEVICE_SEED};
use crate::errors::AeronetError;
use crate::state::{
    validate_device_id, DeviceDeactivated, DeviceRegistered, DeviceRegistry, DeviceRewards,
    OwnershipTransferred,
};

/// Register a new sensor device under the signing owner
/// device_id: unique identifier (e.g., serial number), doubles as the PDA seed
pub fn register_device(ctx: Context<RegisterDevice>, device_id: String) -> Result<()> {
    validate_device_id(&device_id)?;

    let now = Clock::get()?.unix_timestamp;
    let owner = ctx.accounts.owner.key();

    let device = &mut ctx.accounts.device;
    device.device_id = device_id.clone();
    device.owner = owner;
    device.registered_at = now;
    device.is_active = true;

    // Rewards record is created in the same transaction so every registered
    // device can submit data immediately
    let device_rewards = &mut ctx.accounts.device_rewards;
    device_rewards.device_id = device_id.clone();
    device_rewards.owner = owner;
    device_rewards.total_data_submitted = 0;
    device_rewards.last_submission = 0;

    msg!("Device registered: {} -> {}", device_id, owner);

    emit!(DeviceRegistered {
        device_id,
        owner,
        registered_at: now,
    });

    Ok(())
}

/// Transfer device ownership to a new owner
/// Only the current owner can transfer; history and counters stay with the device
pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
    let device = &mut ctx.accounts.device;
    let device_rewards = &mut ctx.accounts.device_rewards;
    let previous_owner = device.owner;

    device.owner = new_owner;
    device_rewards.owner = new_owner;

    msg!(
        "Device {} ownership transferred: {} -> {}",
        device.device_id,
        previous_owner,
        new_owner
    );

    emit!(OwnershipTransferred {
        device_id: device.device_id.clone(),
        previous_owner,
        new_owner,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

/// Deactivate a device (only owner can deactivate)
/// One-way: there is no instruction to reactivate a retired device
pub fn deactivate_device(ctx: Context<DeactivateDevice>) -> Result<()> {
    let device = &mut ctx.accounts.device;
    device.is_active = false;

    msg!("Device {} deactivated", device.device_id);

    emit!(DeviceDeactivated {
        device_id: device.device_id.clone(),
        owner: device.owner,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(device_id: String)]
pub struct RegisterDevice<'info> {
    /// Device account to be created
    /// `init` fails with "account already in use" if the id is taken
    #[account(
        init,
        payer = owner,
        space = 8 + DeviceRegistry::INIT_SPACE,
        seeds = [DEVICE_SEED, device_id.as_bytes()],
        bump
    )]
    pub device: Account<'info, DeviceRegistry>,

    /// Device rewards account - created together with device
    #[account(
        init,
        payer = owner,
        space = 8 + DeviceRewards::INIT_SPACE,
        seeds = [DEVICE_REWARDS_SEED, device_id.as_bytes()],
        bump
    )]
    pub device_rewards: Account<'info, DeviceRewards>,

    /// Owner of the device
    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
#[instruction(new_owner: Pubkey)]
pub struct TransferOwnership<'info> {
    /// Device account
    #[account(
        mut,
        has_one = owner @ AeronetError::Unauthorized
    )]
    pub device: Account<'info, DeviceRegistry>,

    /// Device rewards account, kept in sync with the registry owner
    #[account(
        mut,
        seeds = [DEVICE_REWARDS_SEED, device.device_id.as_bytes()],
        bump
    )]
    pub device_rewards: Account<'info, DeviceRewards>,

    /// Current owner (must sign)
    pub owner: Signer<'info>,
}

#[derive(Accounts)]
pub struct DeactivateDevice<'info> {
    /// Device account
    #[account(
        mut,
        has_one = owner @ AeronetError::Unauthorized
    )]
    pub device: Account<'info, DeviceRegistry>,

    /// Current owner (must sign)
    pub owner: Signer<'info>,
}
