use anchor_lang::prelude::*;

use super::{aggregate, select_winner, Keyed, Randomizer};
use crate::{
    error::RaffleError,
    state::{Donation, Participant, Prize, PrizePlayResult},
};

/// Participants of the raffle a prize belongs to.
///
/// `get_all` must return at least every participant named by the prize's
/// donations. `is_empty` reports whether the raffle has no participants at all,
/// which storages that only load donors answer without calling `get_all`.
pub trait ParticipantStorage {
    fn get_all(&self) -> Result<Vec<Keyed<Participant>>>;

    fn is_empty(&self) -> Result<bool> {
        Ok(self.get_all()?.is_empty())
    }
}

/// Every donation recorded against one prize, in the order they were made.
pub trait DonationStorage {
    fn get_all(&self) -> Result<Vec<Keyed<Donation>>>;
}

pub trait PrizeStorage {
    fn get(&self, key: &Pubkey) -> Result<Prize>;
    fn update(&mut self, key: &Pubkey, prize: &Prize) -> Result<()>;
}

/// Draws prize winners one at a time.
///
/// A prize without a play result is played for the first time: its donations
/// are aggregated into a pool and one winner is taken out of it. A prize that
/// already has a play result draws the next winner from the stored remainder,
/// reusing the ticket counts computed by the first draw.
///
/// Reads and writes of the prize are not guarded against a concurrent `play`
/// on the same prize. On-chain this holds because the runtime write-locks the
/// prize account for the whole transaction.
pub struct DrawEngine<'a, R> {
    participants: &'a dyn ParticipantStorage,
    donations: &'a dyn DonationStorage,
    prizes: &'a mut dyn PrizeStorage,
    randomizer: R,
}

impl<'a, R: Randomizer> DrawEngine<'a, R> {
    pub fn new(
        participants: &'a dyn ParticipantStorage,
        donations: &'a dyn DonationStorage,
        prizes: &'a mut dyn PrizeStorage,
        randomizer: R,
    ) -> Self {
        Self {
            participants,
            donations,
            prizes,
            randomizer,
        }
    }

    /// Draws one more winner for the prize at `prize_key` and persists the
    /// extended play result.
    ///
    /// # Errors
    /// - `NoParticipants` if the raffle has no participants, or every
    ///   participant of an already played prize has won
    /// - `NoDonations` if nothing was donated towards the prize
    /// - `NotEnoughDonations` if no participant donated a full ticket's cost
    /// - `PoolInvariantViolated` if a stored pool holds a member without tickets
    /// - storage errors unchanged, tagged with the collection they came from
    ///
    /// Nothing is persisted when an error is returned.
    pub fn play(&mut self, prize_key: &Pubkey) -> Result<PrizePlayResult> {
        let mut prize = self
            .prizes
            .get(prize_key)
            .map_err(|e| e.with_account_name("prize"))?;

        let result = match prize.play_result.take() {
            None => self.first_draw(&prize)?,
            Some(previous) => self.draw_again(previous)?,
        };

        prize.play_result = Some(result.clone());
        self.prizes
            .update(prize_key, &prize)
            .map_err(|e| e.with_account_name("prize"))?;

        Ok(result)
    }

    fn first_draw(&mut self, prize: &Prize) -> Result<PrizePlayResult> {
        let no_participants = self
            .participants
            .is_empty()
            .map_err(|e| e.with_account_name("participants"))?;
        require!(!no_participants, RaffleError::NoParticipants);

        let donations = self
            .donations
            .get_all()
            .map_err(|e| e.with_account_name("donations"))?;
        require!(!donations.is_empty(), RaffleError::NoDonations);

        let participants = self
            .participants
            .get_all()
            .map_err(|e| e.with_account_name("participants"))?;

        let pool = aggregate(&donations, &participants, prize.ticket_cost)?;
        require!(!pool.is_empty(), RaffleError::NotEnoughDonations);

        self.draw_from(PrizePlayResult {
            winners: Vec::new(),
            play_participants: pool,
        })
    }

    fn draw_again(&mut self, previous: PrizePlayResult) -> Result<PrizePlayResult> {
        require!(
            !previous.play_participants.is_empty(),
            RaffleError::NoParticipants
        );

        self.draw_from(previous)
    }

    fn draw_from(&mut self, mut result: PrizePlayResult) -> Result<PrizePlayResult> {
        let position = select_winner(&result.play_participants, &mut self.randomizer)?;

        // `remove` keeps the relative order of the remaining pool.
        let winner = result.play_participants.remove(position);
        msg!(
            "Winner {} drawn with {} tickets, {} participants remain",
            winner.participant,
            winner.total_tickets_number,
            result.play_participants.len()
        );
        result.winners.push(winner);

        Ok(result)
    }
}
