//! Record Outcomes
//!
//! What happened when progress was recorded against a goal in the ledger.

/// Result of recording one event through the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecordOutcome {
    /// Points earned by this event (0 when nothing was awarded)
    pub points: i32,
    /// Whether this event moved the goal into its completed state
    pub goal_completed: bool,
    /// New level, set only when the level strictly increased
    pub new_level: Option<i64>,
}

impl RecordOutcome {
    pub fn awarded(points: i32, goal_completed: bool, new_level: Option<i64>) -> Self {
        Self {
            points,
            goal_completed,
            new_level,
        }
    }

    /// Out-of-range index or an already exhausted goal
    pub fn no_change() -> Self {
        Self::default()
    }

    pub fn leveled_up(&self) -> bool {
        self.new_level.is_some()
    }
}
