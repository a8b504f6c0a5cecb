//! Weighted prize draws.
//!
//! A prize's donations are summed per participant and converted into tickets,
//! the ticket-bearing participants are laid out on one contiguous index space,
//! and an injected [`Randomizer`] picks an index. Each call to
//! [`DrawEngine::play`] draws exactly one new winner.

use anchor_lang::prelude::*;

pub use aggregate::*;
pub use allocate::*;
pub use engine::*;
pub use randomizer::*;

pub mod aggregate;
pub mod allocate;
pub mod engine;
pub mod randomizer;

#[cfg(test)]
mod fixtures;

/// Decoded account data paired with the address it was loaded from.
#[derive(Clone)]
pub struct Keyed<T> {
    pub key: Pubkey,
    pub account: T,
}

impl<T> Keyed<T> {
    pub fn new(key: Pubkey, account: T) -> Self {
        Self { key, account }
    }
}
