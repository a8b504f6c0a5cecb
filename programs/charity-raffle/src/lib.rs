use anchor_lang::prelude::*;
use instructions::*;

pub mod draw;
pub mod error;
pub mod instructions;
pub mod state;

declare_id!("DyqqVrMnSafhDiXSGf9wDWcd8NjGN9FaWnikrQDFqUBv");

#[program]
pub mod charity_raffle {
    use super::*;

    pub fn create_raffle(
        ctx: Context<CreateRaffle>,
        raffle_seed: [u8; 8],
        name: String,
        note: String,
    ) -> Result<()> {
        instructions::create_raffle::create_raffle(ctx, raffle_seed, name, note)
    }

    pub fn add_participant(
        ctx: Context<AddParticipant>,
        name: String,
        phone: String,
        note: String,
    ) -> Result<()> {
        instructions::add_participant::add_participant(ctx, name, phone, note)
    }

    pub fn add_prize(
        ctx: Context<AddPrize>,
        name: String,
        ticket_cost: u64,
        description: String,
    ) -> Result<()> {
        instructions::add_prize::add_prize(ctx, name, ticket_cost, description)
    }

    pub fn make_donation(ctx: Context<MakeDonation>, amount: u64) -> Result<()> {
        instructions::make_donation::make_donation(ctx, amount)
    }

    pub fn play_prize(ctx: Context<PlayPrize>) -> Result<()> {
        instructions::play_prize::play_prize(ctx)
    }

    pub fn update_raffle(ctx: Context<UpdateRaffle>, name: String, note: String) -> Result<()> {
        instructions::update_raffle::update_raffle(ctx, name, note)
    }

    pub fn update_prize(
        ctx: Context<UpdatePrize>,
        name: String,
        ticket_cost: u64,
        description: String,
    ) -> Result<()> {
        instructions::update_prize::update_prize(ctx, name, ticket_cost, description)
    }

    pub fn update_donation(ctx: Context<UpdateDonation>, amount: u64) -> Result<()> {
        instructions::update_donation::update_donation(ctx, amount)
    }

    pub fn delete_donation(ctx: Context<DeleteDonation>) -> Result<()> {
        instructions::delete_donation::delete_donation(ctx)
    }

    pub fn delete_raffle(ctx: Context<DeleteRaffle>) -> Result<()> {
        instructions::delete_raffle::delete_raffle(ctx)
    }
}
