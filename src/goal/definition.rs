//! Goal Definition
//!
//! A goal is a named, point-valued objective. Recording an event against it
//! may pay out points depending on its variant:
//!
//! - `Simple`: pays once, then stays completed
//! - `Eternal`: pays every time, never completes
//! - `Checklist`: pays per event up to a target, plus a one-time bonus on the
//!   event that reaches the target
//!
//! Goals persist as one `|`-delimited line each:
//!
//! ```text
//! Simple|<description>|<points>|<completed>
//! Eternal|<description>|<points>
//! Checklist|<description>|<points>|<target>|<bonus>|<completed_count>
//! ```
//!
//! Descriptions are written verbatim, so a description containing `|` will
//! not read back.

use std::fmt;

use super::kind::GoalType;
use crate::error::GoalParseError;

/// Separator between fields of a save line
pub const FIELD_DELIMITER: char = '|';

/// Variant-specific progress state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalProgress {
    Simple {
        completed: bool,
    },
    Eternal,
    Checklist {
        target: i32,
        bonus: i32,
        completed_count: i32,
    },
}

/// A trackable goal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    description: String,
    points: i32,
    progress: GoalProgress,
}

impl Goal {
    /// A fresh one-shot goal
    pub fn simple(description: &str, points: i32) -> Self {
        Self::restore_simple(description, points, false)
    }

    /// A one-shot goal with saved completion state
    pub fn restore_simple(description: &str, points: i32, completed: bool) -> Self {
        Self {
            description: description.to_string(),
            points,
            progress: GoalProgress::Simple { completed },
        }
    }

    /// A goal that never completes
    pub fn eternal(description: &str, points: i32) -> Self {
        Self {
            description: description.to_string(),
            points,
            progress: GoalProgress::Eternal,
        }
    }

    /// A fresh count-based goal
    pub fn checklist(description: &str, points: i32, target: i32, bonus: i32) -> Self {
        Self::restore_checklist(description, points, target, bonus, 0)
    }

    /// A count-based goal with a saved completion count
    pub fn restore_checklist(
        description: &str,
        points: i32,
        target: i32,
        bonus: i32,
        completed_count: i32,
    ) -> Self {
        Self {
            description: description.to_string(),
            points,
            progress: GoalProgress::Checklist {
                target,
                bonus,
                completed_count,
            },
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Points paid per recorded event (excluding any checklist bonus)
    pub fn points(&self) -> i32 {
        self.points
    }

    pub fn goal_type(&self) -> GoalType {
        match self.progress {
            GoalProgress::Simple { .. } => GoalType::Simple,
            GoalProgress::Eternal => GoalType::Eternal,
            GoalProgress::Checklist { .. } => GoalType::Checklist,
        }
    }

    /// Record one occurrence of progress and return the points it earned.
    /// Completed goals earn 0.
    pub fn record_event(&mut self) -> i32 {
        match &mut self.progress {
            GoalProgress::Simple { completed } => {
                if *completed {
                    return 0;
                }
                *completed = true;
                self.points
            }
            GoalProgress::Eternal => self.points,
            GoalProgress::Checklist {
                target,
                bonus,
                completed_count,
            } => {
                if *completed_count >= *target {
                    return 0;
                }
                *completed_count += 1;
                if *completed_count == *target {
                    self.points.saturating_add(*bonus)
                } else {
                    self.points
                }
            }
        }
    }

    pub fn is_completed(&self) -> bool {
        match self.progress {
            GoalProgress::Simple { completed } => completed,
            GoalProgress::Eternal => false,
            GoalProgress::Checklist {
                target,
                completed_count,
                ..
            } => completed_count >= target,
        }
    }

    /// `[X]` when completed, `[ ]` otherwise
    pub fn completion_mark(&self) -> &'static str {
        if self.is_completed() { "[X]" } else { "[ ]" }
    }

    /// Count progress for checklist goals
    pub fn progress(&self) -> Option<String> {
        match self.progress {
            GoalProgress::Checklist {
                target,
                completed_count,
                ..
            } => Some(format!("Completed {}/{}", completed_count, target)),
            _ => None,
        }
    }

    /// Serialize to a single type-tagged save line
    pub fn to_save_line(&self) -> String {
        let tag = self.goal_type().as_str();
        match self.progress {
            GoalProgress::Simple { completed } => {
                format!("{tag}|{}|{}|{}", self.description, self.points, completed)
            }
            GoalProgress::Eternal => format!("{tag}|{}|{}", self.description, self.points),
            GoalProgress::Checklist {
                target,
                bonus,
                completed_count,
            } => format!(
                "{tag}|{}|{}|{}|{}|{}",
                self.description, self.points, target, bonus, completed_count
            ),
        }
    }

    /// Rebuild a goal from a save line produced by [`Goal::to_save_line`].
    /// Fields past the ones a variant needs are ignored.
    pub fn from_save_line(line: &str) -> Result<Self, GoalParseError> {
        let parts: Vec<&str> = line.split(FIELD_DELIMITER).collect();

        let goal_type = GoalType::from_str(parts[0])
            .ok_or_else(|| GoalParseError::UnknownType(parts[0].to_string()))?;

        let expected = goal_type.field_count();
        if parts.len() < expected {
            return Err(GoalParseError::MissingFields {
                goal_type: goal_type.as_str(),
                expected,
                found: parts.len(),
            });
        }

        let description = parts[1];
        let points = parse_int("points", parts[2])?;

        let goal = match goal_type {
            GoalType::Simple => {
                Goal::restore_simple(description, points, parse_bool("completed", parts[3])?)
            }
            GoalType::Eternal => Goal::eternal(description, points),
            GoalType::Checklist => Goal::restore_checklist(
                description,
                points,
                parse_int("target", parts[3])?,
                parse_int("bonus", parts[4])?,
                parse_int("completed_count", parts[5])?,
            ),
        };

        Ok(goal)
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.progress() {
            Some(progress) => write!(
                f,
                "{} {} - {}",
                self.completion_mark(),
                progress,
                self.description
            ),
            None => write!(f, "{} - {}", self.completion_mark(), self.description),
        }
    }
}

fn parse_int(field: &'static str, value: &str) -> Result<i32, GoalParseError> {
    value
        .trim()
        .parse()
        .map_err(|_| GoalParseError::InvalidInteger {
            field,
            value: value.to_string(),
        })
}

fn parse_bool(field: &'static str, value: &str) -> Result<bool, GoalParseError> {
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(GoalParseError::InvalidBool {
            field,
            value: value.to_string(),
        })
    }
}
