use anchor_lang::prelude::*;

use super::validation::{normalize_phone, validate_name, validate_text};
use crate::{
    error::RaffleError,
    state::{Participant, Raffle, MAX_NOTE_LEN, PARTICIPANT_ACCOUNT_SIZE},
};

/// Event emitted when a participant is registered in a raffle
#[event]
pub struct ParticipantAdded {
    pub raffle: Pubkey,
    pub participant: Pubkey,
    pub name: String,
}

/// Registers a participant in the organizer's raffle.
///
/// The participant PDA is derived from the raffle's running participant
/// counter, so the counter always equals the number of registered
/// participants. Phones are stored without spaces or a leading `+`.
pub fn add_participant(
    ctx: Context<AddParticipant>,
    name: String,
    phone: String,
    note: String,
) -> Result<()> {
    validate_name(&name)?;
    let phone = normalize_phone(&phone)?;
    validate_text(&note, MAX_NOTE_LEN, RaffleError::NoteTooLong)?;

    let participant = &mut ctx.accounts.participant;
    participant.raffle = ctx.accounts.raffle.key();
    participant.name = name;
    participant.phone = phone;
    participant.note = note;
    participant.created_at = Clock::get()?.unix_timestamp;
    participant.bump = ctx.bumps.participant;

    ctx.accounts.raffle.participant_count = ctx
        .accounts
        .raffle
        .participant_count
        .checked_add(1)
        .ok_or(RaffleError::Overflow)?;

    emit!(ParticipantAdded {
        raffle: participant.raffle,
        participant: participant.key(),
        name: participant.name.clone(),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct AddParticipant<'info> {
    #[account(
        mut,
        has_one = organizer @ RaffleError::NotRaffleOrganizer,
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(
        init,
        payer = organizer,
        space = PARTICIPANT_ACCOUNT_SIZE,
        seeds = [
            b"participant",
            raffle.key().as_ref(),
            raffle.participant_count.to_le_bytes().as_ref(),
        ],
        bump,
    )]
    pub participant: Account<'info, Participant>,

    #[account(mut)]
    pub organizer: Signer<'info>,

    pub system_program: Program<'info, System>,
}
