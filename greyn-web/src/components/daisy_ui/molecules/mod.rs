pub mod card;
pub mod stat;

pub use card::Card;
pub use stat::{Stat, StatItem};
