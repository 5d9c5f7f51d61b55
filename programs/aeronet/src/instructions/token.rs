use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, MintTo, Token, TokenAccount};

use crate::constants::{TOKEN_DECIMALS, TOTAL_SUPPLY, TREASURY_SEED};

/// Initialize the AERO token and mint the full supply into the treasury PDA
/// This can only be called once: the treasury `init` fails on a second attempt
pub fn initialize_token(ctx: Context<InitializeToken>) -> Result<()> {
    token::mint_to(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            MintTo {
                mint: ctx.accounts.mint.to_account_info(),
                to: ctx.accounts.treasury.to_account_info(),
                authority: ctx.accounts.mint_authority.to_account_info(),
            },
        ),
        TOTAL_SUPPLY,
    )?;

    // Revoke the mint authority so the supply is fixed forever
    token::set_authority(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            token::SetAuthority {
                current_authority: ctx.accounts.mint_authority.to_account_info(),
                account_or_mint: ctx.accounts.mint.to_account_info(),
            },
        ),
        token::spl_token::instruction::AuthorityType::MintTokens,
        None,
    )?;

    msg!(
        "AERO token initialized: {} total supply minted to treasury PDA",
        TOTAL_SUPPLY
    );
    msg!("Mint authority revoked - no more tokens can be minted");
    Ok(())
}

#[derive(Accounts)]
pub struct InitializeToken<'info> {
    /// The AERO token mint account
    #[account(
        init,
        payer = payer,
        mint::decimals = TOKEN_DECIMALS,
        mint::authority = mint_authority,
    )]
    pub mint: Account<'info, Mint>,

    /// Treasury token account at PDA [b"treasury"], its own transfer authority.
    /// No private key exists for it; only this program can sign payouts.
    #[account(
        init,
        payer = payer,
        seeds = [TREASURY_SEED],
        bump,
        token::mint = mint,
        token::authority = treasury,
    )]
    pub treasury: Account<'info, TokenAccount>,

    /// Mint authority (revoked after the initial mint)
    pub mint_authority: Signer<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub rent: Sysvar<'info, Rent>,
}
