pub use donation::*;
pub use participant::*;
pub use play_result::*;
pub use prize::*;
pub use raffle::*;

pub mod donation;
pub mod participant;
pub mod play_result;
pub mod prize;
pub mod raffle;
