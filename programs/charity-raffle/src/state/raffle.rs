use anchor_lang::prelude::*;

// Space calculation:
// 8 (discriminator) +
// 32 (organizer) +
// 8 (seed) +
// 4 + 200 (name) +
// 4 + 256 (note) +
// 8 (created_at) +
// 4 (participant_count) +
// 4 (prize_count) +
// 1 (bump) =
// 529 total bytes
pub const RAFFLE_ACCOUNT_SIZE: usize = 8 + 32 + 8 + 4 + MAX_NAME_LEN + 4 + MAX_NOTE_LEN + 8 + 4 + 4 + 1;

pub const MIN_NAME_LEN: usize = 3;
/// Names are limited in characters.
pub const MAX_NAME_CHARS: usize = 50;
/// Bytes reserved for a name: any 50 UTF-8 characters fit.
pub const MAX_NAME_LEN: usize = 4 * MAX_NAME_CHARS;
pub const MAX_NOTE_LEN: usize = 256;

#[account]
pub struct Raffle {
    pub organizer: Pubkey,
    pub seed: [u8; 8],
    pub name: String,
    pub note: String,
    pub created_at: i64,
    pub participant_count: u32,
    pub prize_count: u32,
    pub bump: u8,
}
