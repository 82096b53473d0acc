pub mod human;
pub mod random;
pub mod registry;
pub mod threshold;

pub use human::HumanBot;
pub use random::RandomBot;
pub use threshold::ThresholdBot;
