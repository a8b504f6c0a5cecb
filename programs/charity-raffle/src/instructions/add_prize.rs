use anchor_lang::prelude::*;

use super::validation::{validate_name, validate_text};
use crate::{
    error::RaffleError,
    state::{Prize, Raffle, MAX_DESCRIPTION_LEN, PRIZE_ACCOUNT_SIZE},
};

/// Event emitted when a prize is added to a raffle
#[event]
pub struct PrizeAdded {
    pub raffle: Pubkey,
    pub prize: Pubkey,
    pub name: String,
    /// Amount a participant has to donate per ticket
    pub ticket_cost: u64,
}

/// Adds a prize to the organizer's raffle.
///
/// The prize account is allocated at its maximum size up front, large enough
/// for a play result covering `MAX_DONATIONS_PER_PRIZE` donations.
pub fn add_prize(
    ctx: Context<AddPrize>,
    name: String,
    ticket_cost: u64,
    description: String,
) -> Result<()> {
    validate_name(&name)?;
    require!(ticket_cost > 0, RaffleError::InvalidTicketCost);
    validate_text(
        &description,
        MAX_DESCRIPTION_LEN,
        RaffleError::DescriptionTooLong,
    )?;

    let prize = &mut ctx.accounts.prize;
    prize.raffle = ctx.accounts.raffle.key();
    prize.name = name;
    prize.ticket_cost = ticket_cost;
    prize.description = description;
    prize.created_at = Clock::get()?.unix_timestamp;
    prize.donation_count = 0;
    prize.play_result = None;
    prize.bump = ctx.bumps.prize;

    ctx.accounts.raffle.prize_count = ctx
        .accounts
        .raffle
        .prize_count
        .checked_add(1)
        .ok_or(RaffleError::Overflow)?;

    emit!(PrizeAdded {
        raffle: prize.raffle,
        prize: prize.key(),
        name: prize.name.clone(),
        ticket_cost,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct AddPrize<'info> {
    #[account(
        mut,
        has_one = organizer @ RaffleError::NotRaffleOrganizer,
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(
        init,
        payer = organizer,
        space = PRIZE_ACCOUNT_SIZE,
        seeds = [
            b"prize",
            raffle.key().as_ref(),
            raffle.prize_count.to_le_bytes().as_ref(),
        ],
        bump,
    )]
    pub prize: Account<'info, Prize>,

    #[account(mut)]
    pub organizer: Signer<'info>,

    pub system_program: Program<'info, System>,
}
