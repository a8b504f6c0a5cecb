use std::collections::BTreeSet;

use anchor_lang::{prelude::*, solana_program::sysvar::slot_hashes};

use crate::{
    draw::{
        DonationStorage, DrawEngine, Keyed, ParticipantStorage, PrizeStorage, SlotHashRandomizer,
    },
    error::RaffleError,
    state::{Donation, Participant, Prize, Raffle, MAX_DONATIONS_PER_PRIZE},
};

/// Event emitted every time a prize draws a winner
#[event]
pub struct PrizePlayed {
    pub raffle: Pubkey,
    pub prize: Pubkey,
    /// The participant drawn by this call
    pub winner: Pubkey,
    /// Tickets the winner held in the draw
    pub winner_tickets: u64,
    /// Winners drawn so far, including this one
    pub winners_count: u32,
    /// Participants still eligible for another draw
    pub remaining_participants: u32,
}

/// Account keys one transaction may lock.
const MAX_TRANSACTION_ACCOUNTS: usize = 64;

/// The four `PlayPrize` accounts, the program itself and the compute budget program.
const PLAY_PRIZE_FIXED_ACCOUNTS: usize = 6;

// Worst case: every donation comes from a different participant.
const _: () = assert!(
    PLAY_PRIZE_FIXED_ACCOUNTS + 2 * MAX_DONATIONS_PER_PRIZE as usize <= MAX_TRANSACTION_ACCOUNTS
);

/// Draws the next winner of a prize.
///
/// The first call aggregates the prize's donations into a weighted pool and
/// draws from it; every later call draws from the participants who have not
/// won yet. Winners are picked with randomness from the SlotHashes sysvar.
///
/// # Remaining Accounts
/// The first draw needs every donation of the prize and the participant
/// behind each of them, passed as remaining accounts in any order, without
/// duplicates. Participants who did not donate to the prize may be left out.
/// Once the prize has been played, remaining accounts are not read at all.
///
/// # Errors
/// - `NoParticipants`, `NoDonations`, `NotEnoughDonations` from the draw
/// - `IncompleteDonationHistory` if the first draw is not handed every donation
/// - `MissingParticipant` if a donor's participant account is not supplied
/// - `UnexpectedAccount`, `RaffleMismatch`, `PrizeMismatch` for remaining
///   accounts that are not this raffle's participants or this prize's donations
pub fn play_prize(ctx: Context<PlayPrize>) -> Result<()> {
    let raffle_key = ctx.accounts.raffle.key();
    let prize_key = ctx.accounts.prize.key();

    let remaining = if ctx.accounts.prize.is_played() {
        &[][..]
    } else {
        ctx.remaining_accounts
    };
    let supplied = SuppliedAccounts::load(
        remaining,
        &raffle_key,
        &prize_key,
        ctx.accounts.raffle.participant_count,
        ctx.accounts.prize.donation_count,
    )?;

    let randomizer = {
        let data = ctx.accounts.recent_slothashes.try_borrow_data()?;
        SlotHashRandomizer::new(&data, Clock::get()?.unix_timestamp)?
    };

    let mut prizes = PrizeAccount {
        key: prize_key,
        account: &mut ctx.accounts.prize,
    };
    let result = DrawEngine::new(&supplied, &supplied, &mut prizes, randomizer).play(&prize_key)?;

    if let Some(winner) = result.winners.last() {
        emit!(PrizePlayed {
            raffle: raffle_key,
            prize: prize_key,
            winner: winner.participant,
            winner_tickets: winner.total_tickets_number,
            winners_count: result.winners.len() as u32,
            remaining_participants: result.play_participants.len() as u32,
        });
    }

    Ok(())
}

#[derive(Accounts)]
pub struct PlayPrize<'info> {
    #[account(has_one = organizer @ RaffleError::NotRaffleOrganizer)]
    pub raffle: Account<'info, Raffle>,

    #[account(
        mut,
        has_one = raffle @ RaffleError::RaffleMismatch,
    )]
    pub prize: Account<'info, Prize>,

    pub organizer: Signer<'info>,

    /// The SlotHashes sysvar contains the most recent block hashes
    /// This is used as a source of randomness
    /// CHECK: Only the address is checked. Anchor cannot deserialize SlotHashes.
    #[account(address = slot_hashes::ID @ RaffleError::InvalidSlotHashesAccount)]
    pub recent_slothashes: UncheckedAccount<'info>,
}

/// Participants and donations handed to the instruction as remaining accounts.
struct SuppliedAccounts {
    participants: Vec<Keyed<Participant>>,
    donations: Vec<Keyed<Donation>>,
    registered_participants: u32,
    expected_donations: u32,
}

impl SuppliedAccounts {
    fn load(
        accounts: &[AccountInfo],
        raffle: &Pubkey,
        prize: &Pubkey,
        registered_participants: u32,
        expected_donations: u32,
    ) -> Result<Self> {
        let mut participants = Vec::new();
        let mut donations = Vec::new();
        let mut seen = BTreeSet::new();

        for info in accounts {
            require_keys_eq!(*info.owner, crate::ID, RaffleError::UnexpectedAccount);
            require!(seen.insert(info.key()), RaffleError::UnexpectedAccount);

            let data = info.try_borrow_data()?;
            if data.starts_with(Participant::DISCRIMINATOR) {
                let participant = Participant::try_deserialize(&mut &data[..])?;
                require_keys_eq!(participant.raffle, *raffle, RaffleError::RaffleMismatch);
                participants.push(Keyed::new(info.key(), participant));
            } else if data.starts_with(Donation::DISCRIMINATOR) {
                let donation = Donation::try_deserialize(&mut &data[..])?;
                require_keys_eq!(donation.prize, *prize, RaffleError::PrizeMismatch);
                donations.push(Keyed::new(info.key(), donation));
            } else {
                return err!(RaffleError::UnexpectedAccount);
            }
        }

        // Ticket ranges follow recording order, not the order accounts were listed.
        donations.sort_by_key(|d| d.account.index);

        Ok(Self {
            participants,
            donations,
            registered_participants,
            expected_donations,
        })
    }
}

// Only donors are supplied; aggregation reports any donor left out.
impl ParticipantStorage for SuppliedAccounts {
    fn get_all(&self) -> Result<Vec<Keyed<Participant>>> {
        Ok(self.participants.clone())
    }

    fn is_empty(&self) -> Result<bool> {
        Ok(self.registered_participants == 0)
    }
}

impl DonationStorage for SuppliedAccounts {
    fn get_all(&self) -> Result<Vec<Keyed<Donation>>> {
        require!(
            self.donations.len() == self.expected_donations as usize,
            RaffleError::IncompleteDonationHistory
        );
        Ok(self.donations.clone())
    }
}

/// The prize account being played, exposed as prize storage.
struct PrizeAccount<'a, 'info> {
    key: Pubkey,
    account: &'a mut Account<'info, Prize>,
}

impl PrizeStorage for PrizeAccount<'_, '_> {
    fn get(&self, key: &Pubkey) -> Result<Prize> {
        require_keys_eq!(*key, self.key, RaffleError::PrizeNotFound);
        Ok((**self.account).clone())
    }

    fn update(&mut self, key: &Pubkey, prize: &Prize) -> Result<()> {
        require_keys_eq!(*key, self.key, RaffleError::PrizeNotFound);
        **self.account = prize.clone();
        Ok(())
    }
}
