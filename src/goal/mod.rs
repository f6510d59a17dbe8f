//! Goal Module
//!
//! Goal variants, their payout rules and the save-line format.

pub mod definition;
pub mod events;
pub mod kind;

pub use definition::Goal;
pub use events::RecordOutcome;
pub use kind::GoalType;
