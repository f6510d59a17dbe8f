//! Quest Ledger
//!
//! Owns the ordered goal list and the cumulative score, and persists both to
//! a flat text file:
//!
//! ```text
//! <score>
//! <goal count>
//! <one save line per goal, in display order>
//! ```

use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::LedgerError;
use crate::goal::{Goal, RecordOutcome};
use crate::level;

/// Counts from a successful parse of save data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    /// Goals restored into the ledger
    pub loaded: usize,
    /// Goal lines dropped because they were malformed or of an unknown type
    pub skipped: usize,
}

/// Result of loading a save file. Every variant except `Loaded` leaves the
/// ledger untouched.
#[derive(Debug)]
pub enum LoadOutcome {
    /// No save file exists at the path
    Missing,
    /// The file exists but could not be read or has a broken header
    Unreadable(LedgerError),
    Loaded(LoadSummary),
}

/// All goals and score for a single user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestLedger {
    /// Goals in insertion order (also display order)
    goals: Vec<Goal>,
    /// Cumulative score, never decreases through recording
    score: i64,
}

impl QuestLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a goal to the end of the list
    pub fn add_goal(&mut self, goal: Goal) {
        debug!("Added {} goal: {}", goal.goal_type(), goal.description());
        self.goals.push(goal);
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Get a goal by zero-based index
    pub fn goal(&self, index: usize) -> Option<&Goal> {
        self.goals.get(index)
    }

    pub fn goal_count(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn level(&self) -> i64 {
        level::level_for_score(self.score)
    }

    pub fn points_to_next_level(&self) -> i64 {
        level::points_to_next_level(self.score)
    }

    /// Progress within the current level (0.0 to 1.0)
    pub fn level_progress(&self) -> f32 {
        level::level_progress(self.score)
    }

    /// Record progress on the goal at `index`. Out-of-range indices earn
    /// nothing. Only positive awards are added to the score.
    pub fn record_event(&mut self, index: usize) -> RecordOutcome {
        let Some(goal) = self.goals.get_mut(index) else {
            debug!("Ignoring event for out-of-range goal index {}", index);
            return RecordOutcome::no_change();
        };

        let was_completed = goal.is_completed();
        let points = goal.record_event();
        let goal_completed = !was_completed && goal.is_completed();

        if points <= 0 {
            return RecordOutcome::awarded(0, goal_completed, None);
        }

        let old_level = self.level();
        self.score = self.score.saturating_add(i64::from(points));
        let new_level = self.level();

        info!(
            "Goal '{}' earned {} points (score {})",
            self.goals[index].description(),
            points,
            self.score
        );

        let leveled = (new_level > old_level).then_some(new_level);
        if let Some(level) = leveled {
            info!("Reached level {}", level);
        }

        RecordOutcome::awarded(points, goal_completed, leveled)
    }

    /// Numbered (1-based) display strings for every goal
    pub fn display_lines(&self) -> Vec<String> {
        self.goals
            .iter()
            .enumerate()
            .map(|(i, goal)| format!("{}. {}", i + 1, goal))
            .collect()
    }

    /// Serialize score and all goals into save-file text
    pub fn serialize_all(&self) -> String {
        let mut out = format!("{}\n{}\n", self.score, self.goals.len());
        for goal in &self.goals {
            out.push_str(&goal.to_save_line());
            out.push('\n');
        }
        out
    }

    /// Replace the ledger contents with parsed save-file text.
    ///
    /// A missing or invalid header leaves the ledger unchanged. Bad goal
    /// lines are skipped and counted instead of aborting the load.
    pub fn deserialize_all(&mut self, text: &str) -> Result<LoadSummary, LedgerError> {
        let mut lines = text.lines();

        let (Some(score_line), Some(count_line)) = (lines.next(), lines.next()) else {
            return Err(LedgerError::MissingHeader);
        };

        let score: i64 = score_line
            .trim()
            .parse()
            .map_err(|_| LedgerError::InvalidHeader {
                field: "score",
                value: score_line.to_string(),
            })?;

        let count: usize = count_line
            .trim()
            .parse()
            .map_err(|_| LedgerError::InvalidHeader {
                field: "goal count",
                value: count_line.to_string(),
            })?;

        let mut goals = Vec::new();
        let mut skipped = 0;

        for (i, line) in lines.take(count).enumerate() {
            match Goal::from_save_line(line) {
                Ok(goal) => goals.push(goal),
                Err(e) => {
                    warn!("Skipping goal line {}: {}", i + 1, e);
                    skipped += 1;
                }
            }
        }

        if goals.len() + skipped < count {
            warn!(
                "Save data announced {} goals but only {} lines were present",
                count,
                goals.len() + skipped
            );
        }

        self.score = score;
        self.goals = goals;

        Ok(LoadSummary {
            loaded: self.goals.len(),
            skipped,
        })
    }

    /// Write the ledger to `path`, replacing any existing file
    pub fn save(&self, path: &Path) -> Result<(), LedgerError> {
        std::fs::write(path, self.serialize_all())?;
        info!("Saved {} goals to {:?}", self.goals.len(), path);
        Ok(())
    }

    /// Load the ledger from `path`. Failures are reported through the
    /// outcome and leave the ledger as it was.
    pub fn load(&mut self, path: &Path) -> LoadOutcome {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No save file at {:?}", path);
                return LoadOutcome::Missing;
            }
            Err(e) => {
                warn!("Failed to read {:?}: {}", path, e);
                return LoadOutcome::Unreadable(e.into());
            }
        };

        match self.deserialize_all(&content) {
            Ok(summary) => {
                info!(
                    "Loaded {} goals from {:?} ({} skipped)",
                    summary.loaded, path, summary.skipped
                );
                LoadOutcome::Loaded(summary)
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                LoadOutcome::Unreadable(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_ledger() -> QuestLedger {
        let mut ledger = QuestLedger::new();
        ledger.add_goal(Goal::simple("Run a marathon", 1000));
        ledger.add_goal(Goal::eternal("Read scriptures", 100));
        ledger.add_goal(Goal::checklist("Attend the temple", 50, 10, 500));
        ledger
    }

    #[test]
    fn test_record_event_accumulates_score() {
        let mut ledger = QuestLedger::new();
        ledger.add_goal(Goal::checklist("Attend the temple", 10, 3, 50));

        assert_eq!(ledger.record_event(0).points, 10);
        assert_eq!(ledger.record_event(0).points, 10);

        let outcome = ledger.record_event(0);
        assert_eq!(outcome.points, 60);
        assert!(outcome.goal_completed);
        assert_eq!(ledger.score(), 80);

        assert_eq!(ledger.record_event(0), RecordOutcome::no_change());
        assert_eq!(ledger.score(), 80);
    }

    #[test]
    fn test_record_event_out_of_range() {
        let mut ledger = sample_ledger();
        assert_eq!(ledger.record_event(3), RecordOutcome::no_change());
        assert_eq!(ledger.record_event(usize::MAX).points, 0);
        assert_eq!(ledger.score(), 0);
    }

    #[test]
    fn test_level_up_is_reported_once() {
        let mut ledger = QuestLedger::new();
        ledger.add_goal(Goal::eternal("Exercise", 400));

        assert!(!ledger.record_event(0).leveled_up());
        assert!(!ledger.record_event(0).leveled_up());

        // 1200 points crosses into level 1
        let outcome = ledger.record_event(0);
        assert_eq!(outcome.new_level, Some(1));
        assert_eq!(ledger.level(), 1);

        assert!(!ledger.record_event(0).leveled_up());
        assert_eq!(ledger.points_to_next_level(), 400);
    }

    #[test]
    fn test_negative_points_do_not_lower_score() {
        let mut ledger = QuestLedger::new();
        ledger.add_goal(Goal::eternal("Penalty", -25));
        assert_eq!(ledger.record_event(0).points, 0);
        assert_eq!(ledger.score(), 0);
    }

    #[test]
    fn test_huge_values_saturate() {
        let mut ledger = QuestLedger::new();
        ledger
            .deserialize_all("0\n1\nChecklist|Big|2147483647|1|1|0\n")
            .unwrap();
        assert_eq!(ledger.record_event(0).points, i32::MAX);
        assert_eq!(ledger.score(), i64::from(i32::MAX));

        ledger
            .deserialize_all("9223372036854775807\n1\nEternal|Pray|5\n")
            .unwrap();
        assert_eq!(ledger.record_event(0).points, 5);
        assert_eq!(ledger.score(), i64::MAX);
        assert_eq!(ledger.points_to_next_level(), 0);
    }

    #[test]
    fn test_serialize_format() {
        let mut ledger = sample_ledger();
        ledger.record_event(0);
        ledger.record_event(2);

        assert_eq!(
            ledger.serialize_all(),
            "1050\n3\n\
             Simple|Run a marathon|1000|true\n\
             Eternal|Read scriptures|100\n\
             Checklist|Attend the temple|50|10|500|1\n"
        );
    }

    #[test]
    fn test_round_trip() {
        let mut ledger = sample_ledger();
        ledger.record_event(0);
        ledger.record_event(1);
        for _ in 0..10 {
            ledger.record_event(2);
        }

        let mut restored = QuestLedger::new();
        let summary = restored.deserialize_all(&ledger.serialize_all()).unwrap();

        assert_eq!(summary, LoadSummary { loaded: 3, skipped: 0 });
        assert_eq!(restored, ledger);
        assert_eq!(restored.level(), ledger.level());
    }

    #[test]
    fn test_deserialize_replaces_goals() {
        let mut ledger = sample_ledger();
        ledger
            .deserialize_all("20\n1\nEternal|Pray|20\n")
            .unwrap();

        assert_eq!(ledger.goal_count(), 1);
        assert_eq!(ledger.score(), 20);
        assert_eq!(ledger.goal(0), Some(&Goal::eternal("Pray", 20)));
    }

    #[test]
    fn test_deserialize_skips_bad_lines() {
        let text = "150\n4\n\
                    Simple|Plant a tree|50|false\n\
                    Weekly|Chores|10\n\
                    Checklist|Run|ten|3|5|0\n\
                    Eternal|Pray|5\n";

        let mut ledger = QuestLedger::new();
        let summary = ledger.deserialize_all(text).unwrap();

        assert_eq!(summary, LoadSummary { loaded: 2, skipped: 2 });
        assert_eq!(ledger.score(), 150);
        assert_eq!(ledger.goal(1), Some(&Goal::eternal("Pray", 5)));
    }

    #[test]
    fn test_deserialize_short_and_long_files() {
        let mut ledger = QuestLedger::new();

        // Fewer lines than announced
        let summary = ledger.deserialize_all("0\n3\nEternal|Pray|5").unwrap();
        assert_eq!(summary.loaded, 1);

        // Lines past the announced count are ignored
        let summary = ledger
            .deserialize_all("0\n1\nEternal|Pray|5\nEternal|Extra|5\n")
            .unwrap();
        assert_eq!(summary.loaded, 1);
        assert_eq!(ledger.goal_count(), 1);
    }

    #[test]
    fn test_bad_header_leaves_ledger_unchanged() {
        let mut ledger = sample_ledger();
        ledger.record_event(1);
        let before = ledger.clone();

        assert!(matches!(
            ledger.deserialize_all(""),
            Err(LedgerError::MissingHeader)
        ));
        assert!(matches!(
            ledger.deserialize_all("12"),
            Err(LedgerError::MissingHeader)
        ));
        assert!(matches!(
            ledger.deserialize_all("lots\n1\nEternal|Pray|5\n"),
            Err(LedgerError::InvalidHeader { field: "score", .. })
        ));
        assert!(matches!(
            ledger.deserialize_all("10\n-1\n"),
            Err(LedgerError::InvalidHeader { field: "goal count", .. })
        ));

        assert_eq!(ledger, before);
    }

    #[test]
    fn test_save_and_load_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("goals.txt");

        let mut ledger = sample_ledger();
        ledger.record_event(2);
        ledger.save(&path).unwrap();

        let mut restored = QuestLedger::new();
        let outcome = restored.load(&path);
        assert!(matches!(
            outcome,
            LoadOutcome::Loaded(LoadSummary { loaded: 3, skipped: 0 })
        ));
        assert_eq!(restored, ledger);
    }

    #[test]
    fn test_load_missing_file_is_noop() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = sample_ledger();
        let before = ledger.clone();

        let outcome = ledger.load(&temp_dir.path().join("nothing.txt"));
        assert!(matches!(outcome, LoadOutcome::Missing));
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_load_unreadable_file_is_noop() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = sample_ledger();
        let before = ledger.clone();

        // A directory can't be read as a file
        let outcome = ledger.load(temp_dir.path());
        assert!(matches!(outcome, LoadOutcome::Unreadable(LedgerError::Io(_))));

        let path = temp_dir.path().join("broken.txt");
        std::fs::write(&path, "not a score\n").unwrap();
        assert!(matches!(ledger.load(&path), LoadOutcome::Unreadable(_)));

        assert_eq!(ledger, before);
    }
}
