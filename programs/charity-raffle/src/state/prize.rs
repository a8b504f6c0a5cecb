use anchor_lang::prelude::*;

use super::{Donation, PrizePlayResult, MAX_NAME_LEN, PLAY_RESULT_MAX_SIZE};

pub const MAX_DESCRIPTION_LEN: usize = 256;

/// Upper bound on donations recorded against one prize. Every play participant
/// holds at least one donation, so this also bounds the size of the play result.
/// The first draw of a prize takes every donation plus one participant per
/// donation as accounts, so the cap also keeps that draw within one transaction.
pub const MAX_DONATIONS_PER_PRIZE: u32 = 28;

// Space calculation:
// 8 (discriminator) +
// 32 (raffle) +
// 4 + 200 (name) +
// 8 (ticket_cost) +
// 4 + 256 (description) +
// 8 (created_at) +
// 4 (donation_count) +
// 1 (bump) +
// PLAY_RESULT_MAX_SIZE (play_result: Option<PrizePlayResult>)
pub const PRIZE_ACCOUNT_SIZE: usize =
    8 + 32 + 4 + MAX_NAME_LEN + 8 + 4 + MAX_DESCRIPTION_LEN + 8 + 4 + 1 + PLAY_RESULT_MAX_SIZE;

#[account]
pub struct Prize {
    pub raffle: Pubkey,
    pub name: String,
    pub ticket_cost: u64,
    pub description: String,
    pub created_at: i64,
    pub donation_count: u32,
    /// Absent until the first draw, then only ever extended by further draws.
    pub play_result: Option<PrizePlayResult>,
    pub bump: u8,
}

impl Prize {
    pub fn is_played(&self) -> bool {
        self.play_result.is_some()
    }

    /// Ticket numbers of recorded donations were computed with the current cost.
    pub fn can_change_ticket_cost(&self) -> bool {
        self.donation_count == 0 && !self.is_played()
    }

    pub fn is_latest_donation(&self, donation: &Donation) -> bool {
        donation.index.checked_add(1) == Some(self.donation_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prize(donation_count: u32, play_result: Option<PrizePlayResult>) -> Prize {
        Prize {
            raffle: Pubkey::new_unique(),
            name: String::from("Bicycle"),
            ticket_cost: 10,
            description: String::new(),
            created_at: 0,
            donation_count,
            play_result,
            bump: 0,
        }
    }

    #[test]
    fn ticket_cost_is_locked_by_donations_or_draws() {
        assert!(prize(0, None).can_change_ticket_cost());
        assert!(!prize(1, None).can_change_ticket_cost());
        assert!(!prize(0, Some(PrizePlayResult::default())).can_change_ticket_cost());
    }

    #[test]
    fn only_the_last_donation_is_latest() {
        let donation = |index| Donation {
            prize: Pubkey::new_unique(),
            participant: Pubkey::new_unique(),
            index,
            amount: 10,
            ticket_number: 1,
            created_at: 0,
            bump: 0,
        };
        let recorded = prize(3, None);

        assert!(recorded.is_latest_donation(&donation(2)));
        assert!(!recorded.is_latest_donation(&donation(1)));
        assert!(!recorded.is_latest_donation(&donation(3)));
        assert!(!prize(0, None).is_latest_donation(&donation(0)));
    }

    #[test]
    fn largest_prize_fits_a_program_created_account() {
        assert!(PRIZE_ACCOUNT_SIZE <= 10 * 1024);
    }
}
