use anchor_lang::error_code;

#[error_code]
pub enum RaffleError {
    Overflow,
    #[msg("Name must be between 3 and 50 characters")]
    InvalidName,
    #[msg("Note exceeds maximum length of 256 bytes")]
    NoteTooLong,
    #[msg("Description exceeds maximum length of 256 bytes")]
    DescriptionTooLong,
    #[msg("Phone must be empty or contain 10 to 12 digits")]
    InvalidPhone,
    #[msg("Ticket cost must be greater than zero")]
    InvalidTicketCost,
    #[msg("Ticket cost cannot change once the prize has donations or has been played")]
    TicketCostLocked,
    #[msg("Donation amount must be greater than zero")]
    InvalidDonationAmount,
    #[msg("Only the raffle organizer may perform this action")]
    NotRaffleOrganizer,
    #[msg("Account does not belong to this raffle")]
    RaffleMismatch,
    #[msg("Account does not belong to this prize")]
    PrizeMismatch,
    #[msg("Prize has already been played and no longer accepts donations")]
    PrizeAlreadyPlayed,
    #[msg("Prize has reached the maximum number of donations")]
    TooManyDonations,
    #[msg("Only the most recently recorded donation of a prize can be deleted")]
    NotLatestDonation,
    #[msg("Raffle still has participants or prizes")]
    RaffleNotEmpty,
    #[msg("Invalid SlotHashes account provided")]
    InvalidSlotHashesAccount,
    #[msg("Prize not found")]
    PrizeNotFound,
    #[msg("No participants left to play the prize")]
    NoParticipants,
    #[msg("No donations recorded for the prize")]
    NoDonations,
    #[msg("No participant donated enough for a single ticket")]
    NotEnoughDonations,
    #[msg("Donation refers to a participant that is not registered in the raffle")]
    MissingParticipant,
    #[msg("Remaining account is neither a participant nor a donation of this program")]
    UnexpectedAccount,
    #[msg("Not every donation of the prize was supplied")]
    IncompleteDonationHistory,
    #[msg("Draw pool is empty or holds a participant without tickets")]
    PoolInvariantViolated,
    #[msg("Randomizer returned an index outside the ticket range")]
    RandomIndexOutOfRange,
}
