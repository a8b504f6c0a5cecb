use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    state::{Donation, Prize, Raffle},
};

/// Event emitted when a donation is removed
#[event]
pub struct DonationDeleted {
    pub prize: Pubkey,
    pub donation: Pubkey,
}

/// Removes the most recently recorded donation of an unplayed prize and
/// returns its rent to the organizer.
///
/// Donation addresses are derived from the prize's donation counter, and the
/// first draw checks it was handed `donation_count` donations. Only the last
/// donation can go without leaving a gap, and its address is reused by the
/// next donation recorded.
pub fn delete_donation(ctx: Context<DeleteDonation>) -> Result<()> {
    let prize = &mut ctx.accounts.prize;
    prize.donation_count = prize
        .donation_count
        .checked_sub(1)
        .ok_or(RaffleError::Overflow)?;

    emit!(DonationDeleted {
        prize: prize.key(),
        donation: ctx.accounts.donation.key(),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct DeleteDonation<'info> {
    #[account(has_one = organizer @ RaffleError::NotRaffleOrganizer)]
    pub raffle: Account<'info, Raffle>,

    #[account(
        mut,
        has_one = raffle @ RaffleError::RaffleMismatch,
        constraint = !prize.is_played() @ RaffleError::PrizeAlreadyPlayed,
    )]
    pub prize: Account<'info, Prize>,

    #[account(
        mut,
        close = organizer,
        has_one = prize @ RaffleError::PrizeMismatch,
        constraint = prize.is_latest_donation(&donation) @ RaffleError::NotLatestDonation,
    )]
    pub donation: Account<'info, Donation>,

    #[account(mut)]
    pub organizer: Signer<'info>,
}
