//! Eternal Quest - goal tracking with points and levels
//!
//! Goals come in three variants (simple, eternal, checklist) and are kept in
//! a [`ledger::QuestLedger`] that accumulates score, derives a level and
//! saves to a flat text file. The [`console::Console`] driver wraps the
//! ledger in an interactive menu.

pub mod config;
pub mod console;
pub mod error;
pub mod goal;
pub mod ledger;
pub mod level;

pub use config::QuestConfig;
pub use console::Console;
pub use error::{ConfigError, GoalParseError, LedgerError};
pub use goal::{Goal, GoalType, RecordOutcome};
pub use ledger::{LoadOutcome, LoadSummary, QuestLedger};
