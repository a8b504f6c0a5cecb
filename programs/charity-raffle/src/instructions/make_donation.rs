use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    state::{Donation, Participant, Prize, Raffle, DONATION_ACCOUNT_SIZE, MAX_DONATIONS_PER_PRIZE},
};

/// Event emitted when a donation is recorded
#[event]
pub struct DonationMade {
    pub prize: Pubkey,
    pub participant: Pubkey,
    pub donation: Pubkey,
    pub amount: u64,
    /// Tickets this donation alone is worth
    pub ticket_number: u64,
}

/// Records a participant's donation towards a prize.
///
/// # Security Considerations
/// 1. Only the raffle organizer records donations
/// 2. The prize and participant must both belong to the raffle
/// 3. A prize stops accepting donations once it has been played, so the pool
///    stored by the first draw never goes stale
/// 4. Donations per prize are capped so the play result fits the prize account
///    and the first draw fits in one transaction
pub fn make_donation(ctx: Context<MakeDonation>, amount: u64) -> Result<()> {
    require!(amount > 0, RaffleError::InvalidDonationAmount);

    let ticket_cost = ctx.accounts.prize.ticket_cost;
    require!(ticket_cost > 0, RaffleError::InvalidTicketCost);

    let donation = &mut ctx.accounts.donation;
    donation.prize = ctx.accounts.prize.key();
    donation.participant = ctx.accounts.participant.key();
    donation.index = ctx.accounts.prize.donation_count;
    donation.amount = amount;
    donation.ticket_number = amount / ticket_cost;
    donation.created_at = Clock::get()?.unix_timestamp;
    donation.bump = ctx.bumps.donation;

    ctx.accounts.prize.donation_count = ctx
        .accounts
        .prize
        .donation_count
        .checked_add(1)
        .ok_or(RaffleError::Overflow)?;

    emit!(DonationMade {
        prize: donation.prize,
        participant: donation.participant,
        donation: donation.key(),
        amount,
        ticket_number: donation.ticket_number,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct MakeDonation<'info> {
    #[account(has_one = organizer @ RaffleError::NotRaffleOrganizer)]
    pub raffle: Account<'info, Raffle>,

    #[account(
        mut,
        has_one = raffle @ RaffleError::RaffleMismatch,
        constraint = !prize.is_played() @ RaffleError::PrizeAlreadyPlayed,
        constraint = prize.donation_count < MAX_DONATIONS_PER_PRIZE @ RaffleError::TooManyDonations,
    )]
    pub prize: Account<'info, Prize>,

    #[account(has_one = raffle @ RaffleError::RaffleMismatch)]
    pub participant: Account<'info, Participant>,

    #[account(
        init,
        payer = organizer,
        space = DONATION_ACCOUNT_SIZE,
        seeds = [
            b"donation",
            prize.key().as_ref(),
            prize.donation_count.to_le_bytes().as_ref(),
        ],
        bump,
    )]
    pub donation: Account<'info, Donation>,

    #[account(mut)]
    pub organizer: Signer<'info>,

    pub system_program: Program<'info, System>,
}
