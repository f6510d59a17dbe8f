//! Goal type tags

use std::fmt;

/// The closed set of goal variants, as tagged in save files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalType {
    /// Completed by a single recorded event
    Simple,
    /// Never completes; every event pays out
    Eternal,
    /// Completed after a target number of events, with a bonus on the last one
    Checklist,
}

impl GoalType {
    pub const ALL: [GoalType; 3] = [GoalType::Simple, GoalType::Eternal, GoalType::Checklist];

    /// Tag written at the start of a save line
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalType::Simple => "Simple",
            GoalType::Eternal => "Eternal",
            GoalType::Checklist => "Checklist",
        }
    }

    /// Parse a tag or a typed-in type name, ignoring case
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "simple" => Some(GoalType::Simple),
            "eternal" => Some(GoalType::Eternal),
            "checklist" => Some(GoalType::Checklist),
            _ => None,
        }
    }

    /// Number of `|`-separated fields a save line of this type carries
    pub fn field_count(&self) -> usize {
        match self {
            GoalType::Simple => 4,
            GoalType::Eternal => 3,
            GoalType::Checklist => 6,
        }
    }
}

impl fmt::Display for GoalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
