use anchor_lang::prelude::*;

use super::validation::{validate_name, validate_text};
use crate::{
    error::RaffleError,
    state::{Raffle, MAX_NOTE_LEN},
};

/// Event emitted when a raffle's name or note changes
#[event]
pub struct RaffleUpdated {
    pub raffle: Pubkey,
    pub name: String,
}

/// Renames a raffle and replaces its note. Counters and seed stay as they are.
pub fn update_raffle(ctx: Context<UpdateRaffle>, name: String, note: String) -> Result<()> {
    validate_name(&name)?;
    validate_text(&note, MAX_NOTE_LEN, RaffleError::NoteTooLong)?;

    let raffle = &mut ctx.accounts.raffle;
    raffle.name = name;
    raffle.note = note;

    emit!(RaffleUpdated {
        raffle: raffle.key(),
        name: raffle.name.clone(),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct UpdateRaffle<'info> {
    #[account(
        mut,
        has_one = organizer @ RaffleError::NotRaffleOrganizer,
    )]
    pub raffle: Account<'info, Raffle>,

    pub organizer: Signer<'info>,
}
