use std::ops::Range;

use anchor_lang::prelude::*;

use super::Randomizer;
use crate::{error::RaffleError, state::PlayParticipant};

/// Lays a draw pool out on one contiguous ticket index space.
///
/// Member `i` owns the half-open range `[end(i - 1), end(i))`, in pool order,
/// starting from zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TicketAllocation {
    ends: Vec<u64>,
}

impl TicketAllocation {
    /// Fails with `PoolInvariantViolated` for an empty pool or a member
    /// holding no tickets. Neither can come out of aggregation, so either
    /// one means the stored pool is corrupt.
    pub fn new(pool: &[PlayParticipant]) -> Result<Self> {
        require!(!pool.is_empty(), RaffleError::PoolInvariantViolated);

        let mut ends = Vec::with_capacity(pool.len());
        let mut offset: u64 = 0;
        for member in pool {
            require!(
                member.total_tickets_number > 0,
                RaffleError::PoolInvariantViolated
            );
            offset = offset
                .checked_add(member.total_tickets_number)
                .ok_or(RaffleError::Overflow)?;
            ends.push(offset);
        }

        Ok(Self { ends })
    }

    pub fn total_tickets(&self) -> u64 {
        self.ends.last().copied().unwrap_or_default()
    }

    /// Ticket range owned by the member at `position`.
    pub fn range_of(&self, position: usize) -> Option<Range<u64>> {
        let end = *self.ends.get(position)?;
        let start = match position {
            0 => 0,
            _ => self.ends[position - 1],
        };
        Some(start..end)
    }

    /// Position of the member owning `ticket`, or `None` past the last ticket.
    pub fn owner_of(&self, ticket: u64) -> Option<usize> {
        let position = self.ends.partition_point(|&end| end <= ticket);
        (position < self.ends.len()).then_some(position)
    }
}

/// Draws one ticket from `pool` and returns the position of its owner.
///
/// A member holding `k` of `T` tickets wins with probability `k / T` under a
/// uniform randomizer.
pub fn select_winner<R: Randomizer>(pool: &[PlayParticipant], randomizer: &mut R) -> Result<usize> {
    let allocation = TicketAllocation::new(pool)?;
    let ticket = randomizer.draw(allocation.total_tickets())?;

    let position = allocation
        .owner_of(ticket)
        .ok_or_else(|| error!(RaffleError::RandomIndexOutOfRange))?;
    if let Some(range) = allocation.range_of(position) {
        msg!(
            "Ticket {} of {} falls in [{}, {}) held by {}",
            ticket,
            allocation.total_tickets(),
            range.start,
            range.end,
            pool[position].participant
        );
    }

    Ok(position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::fixtures::member;

    #[test]
    fn ranges_are_contiguous_in_pool_order() {
        let pool = vec![member(20), member(40), member(30)];

        let allocation = TicketAllocation::new(&pool).unwrap();

        assert_eq!(allocation.total_tickets(), 90);
        assert_eq!(allocation.range_of(0), Some(0..20));
        assert_eq!(allocation.range_of(1), Some(20..60));
        assert_eq!(allocation.range_of(2), Some(60..90));
        assert_eq!(allocation.range_of(3), None);
    }

    #[test]
    fn owner_lookup_respects_range_boundaries() {
        let pool = vec![member(20), member(40), member(30)];
        let allocation = TicketAllocation::new(&pool).unwrap();

        assert_eq!(allocation.owner_of(0), Some(0));
        assert_eq!(allocation.owner_of(19), Some(0));
        assert_eq!(allocation.owner_of(20), Some(1));
        assert_eq!(allocation.owner_of(59), Some(1));
        assert_eq!(allocation.owner_of(60), Some(2));
        assert_eq!(allocation.owner_of(89), Some(2));
        assert_eq!(allocation.owner_of(90), None);
    }

    #[test]
    fn every_ticket_maps_to_its_owner() {
        let pool = vec![member(3), member(1), member(2)];
        let allocation = TicketAllocation::new(&pool).unwrap();

        let owners: Vec<usize> = (0..allocation.total_tickets())
            .map(|ticket| allocation.owner_of(ticket).unwrap())
            .collect();

        assert_eq!(owners, vec![0, 0, 0, 1, 2, 2]);
    }

    #[test]
    fn winner_follows_drawn_ticket() {
        let pool = vec![member(20), member(40), member(30)];

        assert_eq!(select_winner(&pool, &mut |_: u64| 0u64).unwrap(), 0);
        assert_eq!(select_winner(&pool, &mut |_: u64| 20u64).unwrap(), 1);
        assert_eq!(select_winner(&pool, &mut |bound: u64| bound - 1).unwrap(), 2);
    }

    #[test]
    fn randomizer_receives_total_tickets() {
        let pool = vec![member(2), member(5)];
        let mut seen = None;

        select_winner(&pool, &mut |bound: u64| {
            seen = Some(bound);
            0u64
        })
        .unwrap();

        assert_eq!(seen, Some(7));
    }

    #[test]
    fn empty_pool_violates_invariant() {
        let err = select_winner(&[], &mut |_: u64| 0u64).unwrap_err();

        assert_eq!(err, RaffleError::PoolInvariantViolated.into());
    }

    #[test]
    fn zero_ticket_member_violates_invariant() {
        let pool = vec![member(3), member(0)];

        let err = select_winner(&pool, &mut |_: u64| 0u64).unwrap_err();

        assert_eq!(err, RaffleError::PoolInvariantViolated.into());
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let pool = vec![member(3)];

        let err = select_winner(&pool, &mut |bound: u64| bound).unwrap_err();

        assert_eq!(err, RaffleError::RandomIndexOutOfRange.into());
    }
}
