use anchor_lang::prelude::*;

use super::validation::{validate_name, validate_text};
use crate::{
    error::RaffleError,
    state::{Prize, Raffle, MAX_DESCRIPTION_LEN},
};

/// Event emitted when a prize's details change
#[event]
pub struct PrizeUpdated {
    pub raffle: Pubkey,
    pub prize: Pubkey,
    pub name: String,
    pub ticket_cost: u64,
}

/// Updates a prize's name, ticket cost and description.
///
/// Recorded donations cache their ticket numbers and a played prize stores
/// its pool, so the ticket cost can only change while the prize has neither.
/// Passing the current cost is always accepted.
pub fn update_prize(
    ctx: Context<UpdatePrize>,
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
    if ticket_cost != prize.ticket_cost {
        require!(prize.can_change_ticket_cost(), RaffleError::TicketCostLocked);
    }

    prize.name = name;
    prize.ticket_cost = ticket_cost;
    prize.description = description;

    emit!(PrizeUpdated {
        raffle: prize.raffle,
        prize: prize.key(),
        name: prize.name.clone(),
        ticket_cost,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct UpdatePrize<'info> {
    #[account(has_one = organizer @ RaffleError::NotRaffleOrganizer)]
    pub raffle: Account<'info, Raffle>,

    #[account(
        mut,
        has_one = raffle @ RaffleError::RaffleMismatch,
    )]
    pub prize: Account<'info, Prize>,

    pub organizer: Signer<'info>,
}
