use anchor_lang::prelude::*;

use super::Keyed;
use crate::state::{Donation, Participant, PlayParticipant};

pub fn participant(name: &str) -> Keyed<Participant> {
    Keyed::new(
        Pubkey::new_unique(),
        Participant {
            raffle: Pubkey::default(),
            name: name.to_string(),
            phone: String::new(),
            note: String::new(),
            created_at: 0,
            bump: 0,
        },
    )
}

pub fn donation(participant: &Keyed<Participant>, amount: u64) -> Keyed<Donation> {
    Keyed::new(
        Pubkey::new_unique(),
        Donation {
            prize: Pubkey::default(),
            participant: participant.key,
            index: 0,
            amount,
            ticket_number: 0,
            created_at: 0,
            bump: 0,
        },
    )
}

pub fn member(tickets: u64) -> PlayParticipant {
    PlayParticipant {
        participant: Pubkey::new_unique(),
        name: String::from("member"),
        total_donation: tickets,
        total_tickets_number: tickets,
        donations: vec![Pubkey::new_unique()],
    }
}
