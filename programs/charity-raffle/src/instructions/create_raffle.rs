use anchor_lang::prelude::*;

use super::validation::{validate_name, validate_text};
use crate::{
    error::RaffleError,
    state::{Raffle, MAX_NOTE_LEN, RAFFLE_ACCOUNT_SIZE},
};

/// Event emitted when a raffle is created
#[event]
pub struct RaffleCreated {
    /// The pubkey of the created raffle
    pub raffle: Pubkey,
    /// The organizer running the raffle
    pub organizer: Pubkey,
    pub name: String,
    pub created_at: i64,
}

/// Instruction to create a new charity raffle owned by the signing organizer
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `raffle_seed` - Organizer-chosen seed distinguishing their raffles
/// * `name` - Raffle name, 3 to 50 characters
/// * `note` - Free-form note, at most 256 bytes
///
/// # Account Validations
/// * Raffle - New PDA initialized with seeds ["raffle", organizer, raffle_seed]
/// * Organizer - Signer paying for the account, recorded as the raffle owner
pub fn create_raffle(
    ctx: Context<CreateRaffle>,
    raffle_seed: [u8; 8],
    name: String,
    note: String,
) -> Result<()> {
    validate_name(&name)?;
    validate_text(&note, MAX_NOTE_LEN, RaffleError::NoteTooLong)?;

    let created_at = Clock::get()?.unix_timestamp;

    let raffle = &mut ctx.accounts.raffle;
    raffle.organizer = ctx.accounts.organizer.key();
    raffle.seed = raffle_seed;
    raffle.name = name;
    raffle.note = note;
    raffle.created_at = created_at;
    raffle.participant_count = 0;
    raffle.prize_count = 0;
    raffle.bump = ctx.bumps.raffle;

    emit!(RaffleCreated {
        raffle: raffle.key(),
        organizer: raffle.organizer,
        name: raffle.name.clone(),
        created_at,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(raffle_seed: [u8; 8])]
pub struct CreateRaffle<'info> {
    #[account(
        init,
        payer = organizer,
        space = RAFFLE_ACCOUNT_SIZE,
        seeds = [
            b"raffle",
            organizer.key().as_ref(),
            raffle_seed.as_ref(),
        ],
        bump
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(mut)]
    pub organizer: Signer<'info>,

    pub system_program: Program<'info, System>,
}
