use std::collections::HashMap;

use anchor_lang::prelude::*;

use super::Keyed;
use crate::{
    error::RaffleError,
    state::{Donation, Participant, PlayParticipant},
};

/// Groups a prize's donations by participant and converts each group's total
/// into whole tickets.
///
/// Groups are returned in the order each participant first appears in
/// `donations`, which fixes where their tickets land in the draw. Remainders
/// below one ticket are dropped per participant and never pooled, and
/// participants left with zero tickets are removed.
///
/// # Errors
/// - `InvalidTicketCost` if `ticket_cost` is zero
/// - `MissingParticipant` if a donation names a participant absent from `participants`
/// - `Overflow` if a participant's total does not fit in a `u64`
pub fn aggregate(
    donations: &[Keyed<Donation>],
    participants: &[Keyed<Participant>],
    ticket_cost: u64,
) -> Result<Vec<PlayParticipant>> {
    require!(ticket_cost > 0, RaffleError::InvalidTicketCost);

    let names: HashMap<Pubkey, &str> = participants
        .iter()
        .map(|p| (p.key, p.account.name.as_str()))
        .collect();

    let mut groups: Vec<PlayParticipant> = Vec::new();
    let mut positions: HashMap<Pubkey, usize> = HashMap::new();

    for donation in donations {
        let owner = donation.account.participant;
        let position = match positions.get(&owner) {
            Some(&position) => position,
            None => {
                let Some(name) = names.get(&owner) else {
                    msg!(
                        "Donation {} refers to unknown participant {}",
                        donation.key,
                        owner
                    );
                    return err!(RaffleError::MissingParticipant);
                };
                groups.push(PlayParticipant {
                    participant: owner,
                    name: name.to_string(),
                    total_donation: 0,
                    total_tickets_number: 0,
                    donations: Vec::new(),
                });
                positions.insert(owner, groups.len() - 1);
                groups.len() - 1
            }
        };

        let group = &mut groups[position];
        group.total_donation = group
            .total_donation
            .checked_add(donation.account.amount)
            .ok_or(RaffleError::Overflow)?;
        group.donations.push(donation.key);
    }

    Ok(groups
        .into_iter()
        .filter_map(|mut group| {
            group.total_tickets_number = group.total_donation / ticket_cost;
            (group.total_tickets_number > 0).then_some(group)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::fixtures::{donation, participant};

    #[test]
    fn sums_per_participant_in_first_donation_order() {
        let p1 = participant("Participant 1");
        let p2 = participant("Participant 2");
        let p3 = participant("Participant 3");
        // p3 donates first, so it takes the lowest tickets despite being listed last.
        let donations = vec![
            donation(&p3, 300),
            donation(&p1, 100),
            donation(&p2, 200),
            donation(&p1, 100),
            donation(&p2, 200),
        ];

        let pool = aggregate(&donations, &[p1.clone(), p2.clone(), p3.clone()], 10).unwrap();

        let order: Vec<Pubkey> = pool.iter().map(|m| m.participant).collect();
        assert_eq!(order, vec![p3.key, p1.key, p2.key]);

        assert_eq!(pool[1].name, "Participant 1");
        assert_eq!(pool[1].total_donation, 200);
        assert_eq!(pool[1].total_tickets_number, 20);
        assert_eq!(pool[1].donations, vec![donations[1].key, donations[3].key]);
        assert_eq!(pool[2].total_tickets_number, 40);
        assert_eq!(pool[0].total_tickets_number, 30);
    }

    #[test]
    fn remainders_are_not_pooled_across_participants() {
        let p1 = participant("p1");
        let p2 = participant("p2");
        let p3 = participant("p3");
        let donations = vec![
            donation(&p1, 15),
            donation(&p2, 15),
            donation(&p3, 5),
            donation(&p3, 5),
        ];

        let pool = aggregate(&donations, &[p1, p2, p3.clone()], 10).unwrap();

        // 15 + 15 would be three tickets if remainders were shared.
        let total: u64 = pool.iter().map(|m| m.total_tickets_number).sum();
        assert_eq!(total, 3);
        assert_eq!(pool[2].participant, p3.key);
        assert_eq!(pool[2].total_tickets_number, 1);
    }

    #[test]
    fn drops_participants_below_one_ticket() {
        let p1 = participant("p1");
        let p2 = participant("p2");
        let donations = vec![donation(&p1, 99), donation(&p2, 100)];

        let pool = aggregate(&donations, &[p1, p2.clone()], 100).unwrap();

        assert_eq!(pool.len(), 1);
        assert_eq!(pool[0].participant, p2.key);
        assert!(pool.iter().all(|m| m.total_tickets_number > 0));
    }

    #[test]
    fn empty_when_nobody_reaches_ticket_cost() {
        let p1 = participant("p1");
        let donations = vec![donation(&p1, 25), donation(&p1, 25)];

        let pool = aggregate(&donations, &[p1], 1000).unwrap();

        assert!(pool.is_empty());
    }

    #[test]
    fn unknown_participant_is_a_consistency_error() {
        let known = participant("known");
        let stranger = participant("stranger");
        let donations = vec![donation(&known, 10), donation(&stranger, 10)];

        let err = aggregate(&donations, &[known], 10).unwrap_err();

        assert_eq!(err, RaffleError::MissingParticipant.into());
    }

    #[test]
    fn rejects_zero_ticket_cost() {
        let p1 = participant("p1");
        let donations = vec![donation(&p1, 10)];

        let err = aggregate(&donations, &[p1], 0).unwrap_err();

        assert_eq!(err, RaffleError::InvalidTicketCost.into());
    }

    #[test]
    fn total_overflow_is_reported() {
        let p1 = participant("p1");
        let donations = vec![donation(&p1, u64::MAX), donation(&p1, 1)];

        let err = aggregate(&donations, &[p1], 1).unwrap_err();

        assert_eq!(err, RaffleError::Overflow.into());
    }
}
