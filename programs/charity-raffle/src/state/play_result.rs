use anchor_lang::prelude::*;

use super::{MAX_DONATIONS_PER_PRIZE, MAX_NAME_LEN};

// 32 participant + (4 + 200) name + 8 total_donation + 8 total_tickets_number + 4 donations length
pub const PLAY_PARTICIPANT_BASE_SIZE: usize = 32 + 4 + MAX_NAME_LEN + 8 + 8 + 4;

// 1 option tag + 4 winners length + 4 play_participants length, then at most one
// entry per donation and one donation key per donation across both lists.
pub const PLAY_RESULT_MAX_SIZE: usize = 1
    + 4
    + 4
    + MAX_DONATIONS_PER_PRIZE as usize * PLAY_PARTICIPANT_BASE_SIZE
    + MAX_DONATIONS_PER_PRIZE as usize * 32;

/// A participant's standing in one prize draw, aggregated from their donations.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct PlayParticipant {
    pub participant: Pubkey,
    pub name: String,
    pub total_donation: u64,
    /// Always `total_donation / ticket_cost`, and never zero.
    pub total_tickets_number: u64,
    /// Donation addresses in the order they were recorded.
    pub donations: Vec<Pubkey>,
}

/// Winners drawn so far and the pool still eligible for the next draw.
/// The two lists never share a participant.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct PrizePlayResult {
    pub winners: Vec<PlayParticipant>,
    pub play_participants: Vec<PlayParticipant>,
}
