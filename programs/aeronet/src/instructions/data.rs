use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount};

use crate::constants::{DEVICE_REWARDS_SEED, DEVICE_SEED, REWARD_CONFIG_SEED, TREASURY_SEED};
use crate::errors::AeronetError;
use crate::state::{DataSubmitted, DeviceRegistry, DeviceRewards, RewardConfig};

/// Submit a sensor reading and pay the current reward to the device owner.
/// Readings are fixed-point x10 (35.2 ug/m3 = 352) and are recorded as-is;
/// plausibility checking is the caller's concern, this is a ledger.
pub fn submit_data(
    ctx: Context<SubmitData>,
    device_id: String,
    pm25: u32,
    pm10: u32,
    temperature: i32,
    humidity: u32,
) -> Result<()> {
    let device = &ctx.accounts.device;
    let config = &mut ctx.accounts.reward_config;
    let device_rewards = &mut ctx.accounts.device_rewards;
    let now = Clock::get()?.unix_timestamp;

    require!(device.is_active, AeronetError::DeviceNotActive);

    let halving_epoch = config.halving_epoch(now);
    let reward = config.current_reward(now);

    require!(
        ctx.accounts.treasury.amount >= reward,
        AeronetError::InsufficientTreasuryFunds
    );

    // Treasury is its own authority; re-derive the PDA proof and sign
    let signer_seeds: &[&[&[u8]]] = &[&[TREASURY_SEED, &[ctx.bumps.treasury]]];

    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            token::Transfer {
                from: ctx.accounts.treasury.to_account_info(),
                to: ctx.accounts.owner_token_account.to_account_info(),
                authority: ctx.accounts.treasury.to_account_info(),
            },
            signer_seeds,
        ),
        reward,
    )?;

    device_rewards.total_data_submitted = device_rewards
        .total_data_submitted
        .checked_add(1)
        .ok_or(AeronetError::Overflow)?;
    device_rewards.last_submission = now;
    device_rewards.owner = device.owner; // re-sync in case of transfer

    config.total_data_submitted = config
        .total_data_submitted
        .checked_add(1)
        .ok_or(AeronetError::Overflow)?;
    config.total_rewards_distributed = config
        .total_rewards_distributed
        .checked_add(reward)
        .ok_or(AeronetError::Overflow)?;

    msg!(
        "Data submitted - device: {}, PM2.5: {}, PM10: {}, temp: {}, humidity: {}, reward: {} (epoch {})",
        device_id,
        pm25,
        pm10,
        temperature,
        humidity,
        reward,
        halving_epoch
    );

    emit!(DataSubmitted {
        device_id,
        timestamp: now,
        pm25,
        pm10,
        temperature,
        humidity,
        reward_amount: reward,
        halving_epoch,
        owner: device.owner,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(device_id: String)]
pub struct SubmitData<'info> {
    /// Device that is submitting data
    #[account(
        seeds = [DEVICE_SEED, device_id.as_bytes()],
        bump
    )]
    pub device: Account<'info, DeviceRegistry>,

    /// Device rewards account - must already exist from registration
    #[account(
        mut,
        seeds = [DEVICE_REWARDS_SEED, device_id.as_bytes()],
        bump
    )]
    pub device_rewards: Account<'info, DeviceRewards>,

    /// Global reward config
    #[account(
        mut,
        seeds = [REWARD_CONFIG_SEED],
        bump
    )]
    pub reward_config: Account<'info, RewardConfig>,

    /// Treasury PDA that holds and pays out the tokens
    #[account(
        mut,
        seeds = [TREASURY_SEED],
        bump
    )]
    pub treasury: Account<'info, TokenAccount>,

    /// Owner's token account that receives the payout
    #[account(
        mut,
        constraint = owner_token_account.mint == treasury.mint @ AeronetError::InvalidMint,
        constraint = owner_token_account.owner == device.owner @ AeronetError::InvalidOwner,
    )]
    pub owner_token_account: Account<'info, TokenAccount>,

    /// Relay server that forwards device readings
    pub server: Signer<'info>,

    pub token_program: Program<'info, Token>,
}
