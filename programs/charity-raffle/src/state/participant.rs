use anchor_lang::prelude::*;

use super::{MAX_NAME_LEN, MAX_NOTE_LEN};

pub const MIN_PHONE_LEN: usize = 10;
pub const MAX_PHONE_LEN: usize = 12;

// 8 discriminator + 32 raffle + (4 + 200) name + (4 + 12) phone + (4 + 256) note + 8 created_at + 1 bump
pub const PARTICIPANT_ACCOUNT_SIZE: usize =
    8 + 32 + 4 + MAX_NAME_LEN + 4 + MAX_PHONE_LEN + 4 + MAX_NOTE_LEN + 8 + 1;

#[account]
pub struct Participant {
    pub raffle: Pubkey,
    pub name: String,
    pub phone: String,
    pub note: String,
    pub created_at: i64,
    pub bump: u8,
}
