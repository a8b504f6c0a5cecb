use anchor_lang::prelude::*;

// 8 discriminator + 32 prize + 32 participant + 4 index + 8 amount + 8 ticket_number + 8 created_at + 1 bump
pub const DONATION_ACCOUNT_SIZE: usize = 8 + 32 + 32 + 4 + 8 + 8 + 8 + 1;

#[account]
pub struct Donation {
    pub prize: Pubkey,
    pub participant: Pubkey,
    /// Position in the prize's donation history, also the PDA seed.
    pub index: u32,
    pub amount: u64,
    /// Tickets this donation alone is worth, cached for display. Draws recompute
    /// tickets from the participant's summed amount instead.
    pub ticket_number: u64,
    pub created_at: i64,
    pub bump: u8,
}
