use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    state::{Donation, Participant, Prize, Raffle},
};

/// Event emitted when a recorded donation is corrected
#[event]
pub struct DonationUpdated {
    pub prize: Pubkey,
    pub donation: Pubkey,
    pub participant: Pubkey,
    pub amount: u64,
    pub ticket_number: u64,
}

/// Corrects the amount or the donor of a donation.
///
/// The donation keeps its index, so its place in the ticket ranges does not
/// move. Once the prize has been played the donation is frozen.
pub fn update_donation(ctx: Context<UpdateDonation>, amount: u64) -> Result<()> {
    require!(amount > 0, RaffleError::InvalidDonationAmount);

    let ticket_cost = ctx.accounts.prize.ticket_cost;
    require!(ticket_cost > 0, RaffleError::InvalidTicketCost);

    let donation = &mut ctx.accounts.donation;
    donation.participant = ctx.accounts.participant.key();
    donation.amount = amount;
    donation.ticket_number = amount / ticket_cost;

    emit!(DonationUpdated {
        prize: donation.prize,
        donation: donation.key(),
        participant: donation.participant,
        amount,
        ticket_number: donation.ticket_number,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct UpdateDonation<'info> {
    #[account(has_one = organizer @ RaffleError::NotRaffleOrganizer)]
    pub raffle: Account<'info, Raffle>,

    #[account(
        has_one = raffle @ RaffleError::RaffleMismatch,
        constraint = !prize.is_played() @ RaffleError::PrizeAlreadyPlayed,
    )]
    pub prize: Account<'info, Prize>,

    #[account(
        mut,
        has_one = prize @ RaffleError::PrizeMismatch,
    )]
    pub donation: Account<'info, Donation>,

    /// The donor after the update; may be the current one.
    #[account(has_one = raffle @ RaffleError::RaffleMismatch)]
    pub participant: Account<'info, Participant>,

    pub organizer: Signer<'info>,
}
