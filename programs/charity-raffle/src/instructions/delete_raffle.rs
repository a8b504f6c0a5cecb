use anchor_lang::prelude::*;

use crate::{error::RaffleError, state::Raffle};

/// Event emitted when a raffle is closed
#[event]
pub struct RaffleDeleted {
    pub raffle: Pubkey,
    pub organizer: Pubkey,
}

/// Closes a raffle that has no participants and no prizes, returning its rent
/// to the organizer.
pub fn delete_raffle(ctx: Context<DeleteRaffle>) -> Result<()> {
    emit!(RaffleDeleted {
        raffle: ctx.accounts.raffle.key(),
        organizer: ctx.accounts.organizer.key(),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct DeleteRaffle<'info> {
    #[account(
        mut,
        close = organizer,
        has_one = organizer @ RaffleError::NotRaffleOrganizer,
        constraint = raffle.participant_count == 0 && raffle.prize_count == 0
            @ RaffleError::RaffleNotEmpty,
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(mut)]
    pub organizer: Signer<'info>,
}
