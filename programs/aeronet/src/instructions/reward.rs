use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::{REWARD_CONFIG_SEED, TREASURY_SEED};
use crate::state::RewardConfig;

/// Initialize reward configuration (one-time setup)
/// Anchors the halving schedule at the current timestamp; the mint is read
/// off the treasury account created by initialize_token
pub fn initialize_reward_config(
    ctx: Context<InitializeRewardConfig>,
    initial_reward: u64,
) -> Result<()> {
    let config = &mut ctx.accounts.reward_config;
    config.authority = ctx.accounts.authority.key();
    config.mint = ctx.accounts.treasury.mint;
    config.treasury = ctx.accounts.treasury.key();
    config.initial_reward = initial_reward;
    config.start_timestamp = Clock::get()?.unix_timestamp;
    config.total_data_submitted = 0;
    config.total_rewards_distributed = 0;

    msg!(
        "Reward config initialized: mint {}, treasury {}, {} base units per submission, halving every 4 years",
        config.mint,
        config.treasury,
        initial_reward
    );
    Ok(())
}

#[derive(Accounts)]
pub struct InitializeRewardConfig<'info> {
    /// Singleton config PDA; `init` fails if the config already exists
    #[account(
        init,
        payer = authority,
        space = 8 + RewardConfig::INIT_SPACE,
        seeds = [REWARD_CONFIG_SEED],
        bump
    )]
    pub reward_config: Account<'info, RewardConfig>,

    /// Treasury PDA token account (must exist, i.e. initialize_token ran first)
    #[account(
        seeds = [TREASURY_SEED],
        bump
    )]
    pub treasury: Account<'info, TokenAccount>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}
