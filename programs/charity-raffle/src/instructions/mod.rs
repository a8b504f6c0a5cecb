pub mod add_participant;
pub mod add_prize;
pub mod create_raffle;
pub mod delete_donation;
pub mod delete_raffle;
pub mod make_donation;
pub mod play_prize;
pub mod update_donation;
pub mod update_prize;
pub mod update_raffle;
pub mod validation;

pub use add_participant::*;
pub use add_prize::*;
pub use create_raffle::*;
pub use delete_donation::*;
pub use delete_raffle::*;
pub use make_donation::*;
pub use play_prize::*;
pub use update_donation::*;
pub use update_prize::*;
pub use update_raffle::*;
