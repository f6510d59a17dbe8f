//! Console Driver
//!
//! Interactive menu around a [`QuestLedger`]. All prompting, input parsing
//! and messages live here; the ledger itself never touches the terminal.
//! End of input is treated as quitting.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::goal::{Goal, GoalType};
use crate::goal::definition::FIELD_DELIMITER;
use crate::ledger::{LoadOutcome, QuestLedger};

/// Main menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateGoal,
    RecordEvent,
    DisplayGoals,
    DisplayScore,
    Save,
    Load,
    Quit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::CreateGoal,
        MenuChoice::RecordEvent,
        MenuChoice::DisplayGoals,
        MenuChoice::DisplayScore,
        MenuChoice::Save,
        MenuChoice::Load,
        MenuChoice::Quit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::CreateGoal => "Create New Goal",
            MenuChoice::RecordEvent => "Record Event",
            MenuChoice::DisplayGoals => "Display Goals",
            MenuChoice::DisplayScore => "Display Score",
            MenuChoice::Save => "Save Progress",
            MenuChoice::Load => "Load Progress",
            MenuChoice::Quit => "Quit",
        }
    }

    /// Parse a 1-based menu number
    pub fn from_str(s: &str) -> Option<Self> {
        let number: usize = s.trim().parse().ok()?;
        Self::ALL.get(number.checked_sub(1)?).copied()
    }
}

/// Menu loop reading commands from `input` and writing to `output`
pub struct Console<R, W> {
    input: R,
    output: W,
    ledger: QuestLedger,
    save_path: PathBuf,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, save_path: PathBuf) -> Self {
        Self::with_ledger(input, output, save_path, QuestLedger::new())
    }

    pub fn with_ledger(input: R, output: W, save_path: PathBuf, ledger: QuestLedger) -> Self {
        Self {
            input,
            output,
            ledger,
            save_path,
        }
    }

    pub fn ledger(&self) -> &QuestLedger {
        &self.ledger
    }

    pub fn into_parts(self) -> (QuestLedger, W) {
        (self.ledger, self.output)
    }

    /// Run the menu until the user quits or input ends
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to Eternal Quest!")?;

        loop {
            self.print_menu()?;
            let Some(line) = self.prompt("Select option: ")? else {
                break;
            };

            match MenuChoice::from_str(&line) {
                Some(MenuChoice::CreateGoal) => self.create_goal()?,
                Some(MenuChoice::RecordEvent) => self.record_event()?,
                Some(MenuChoice::DisplayGoals) => self.display_goals()?,
                Some(MenuChoice::DisplayScore) => self.display_score()?,
                Some(MenuChoice::Save) => self.save_progress()?,
                Some(MenuChoice::Load) => self.load_progress()?,
                Some(MenuChoice::Quit) => break,
                None => writeln!(self.output, "Invalid option.")?,
            }
        }

        writeln!(self.output, "Thanks for playing Eternal Quest!")?;
        self.output.flush()
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\nMenu Options:")?;
        for (i, choice) in MenuChoice::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, choice.label())?;
        }
        Ok(())
    }

    /// Print a prompt and read one trimmed line; `None` at end of input
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt for an integer, reporting invalid input
    fn prompt_number(&mut self, label: &str) -> io::Result<Option<i32>> {
        let Some(line) = self.prompt(label)? else {
            return Ok(None);
        };
        match line.parse() {
            Ok(n) => Ok(Some(n)),
            Err(_) => {
                writeln!(self.output, "Invalid number.")?;
                Ok(None)
            }
        }
    }

    fn create_goal(&mut self) -> io::Result<()> {
        let Some(type_name) = self.prompt("Goal type (simple/eternal/checklist): ")? else {
            return Ok(());
        };
        let Some(goal_type) = GoalType::from_str(&type_name) else {
            writeln!(self.output, "Invalid type.")?;
            return Ok(());
        };

        let Some(description) = self.prompt("Description: ")? else {
            return Ok(());
        };
        if description.contains(FIELD_DELIMITER) {
            writeln!(
                self.output,
                "Descriptions cannot contain '{}'.",
                FIELD_DELIMITER
            )?;
            return Ok(());
        }

        let Some(points) = self.prompt_number("Points per completion: ")? else {
            return Ok(());
        };

        let goal = match goal_type {
            GoalType::Simple => Goal::simple(&description, points),
            GoalType::Eternal => Goal::eternal(&description, points),
            GoalType::Checklist => {
                let Some(target) = self.prompt_number("Target completions: ")? else {
                    return Ok(());
                };
                let Some(bonus) = self.prompt_number("Bonus points: ")? else {
                    return Ok(());
                };
                Goal::checklist(&description, points, target, bonus)
            }
        };

        self.ledger.add_goal(goal);
        writeln!(self.output, "Goal created!")
    }

    fn record_event(&mut self) -> io::Result<()> {
        if self.ledger.is_empty() {
            return writeln!(self.output, "No goals yet. Create some first!");
        }

        self.display_goals()?;
        let Some(line) = self.prompt("Which goal (number)? ")? else {
            return Ok(());
        };

        let index = match line.parse::<usize>() {
            Ok(n) if n >= 1 && n <= self.ledger.goal_count() => n - 1,
            _ => return writeln!(self.output, "Invalid selection."),
        };

        let outcome = self.ledger.record_event(index);
        let completed = self.ledger.goal(index).is_some_and(Goal::is_completed);
        if outcome.points > 0 {
            writeln!(self.output, "You earned {} points!", outcome.points)?;
        } else if completed {
            writeln!(self.output, "No points awarded (goal already complete).")?;
        } else {
            writeln!(self.output, "No points awarded.")?;
        }
        if let Some(level) = outcome.new_level {
            writeln!(self.output, "\nCongratulations! You've reached level {}!", level)?;
        }
        Ok(())
    }

    fn display_goals(&mut self) -> io::Result<()> {
        if self.ledger.is_empty() {
            return writeln!(self.output, "No goals yet.");
        }

        writeln!(self.output, "\n--- Goals ---")?;
        for line in self.ledger.display_lines() {
            writeln!(self.output, "{}", line)?;
        }
        writeln!(self.output, "---")
    }

    fn display_score(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- Score ---")?;
        writeln!(self.output, "You have {} points.", self.ledger.score())?;
        writeln!(self.output, "Level: {}", self.ledger.level())?;
        writeln!(
            self.output,
            "{} points to level {} ({:.0}% there).",
            self.ledger.points_to_next_level(),
            self.ledger.level() + 1,
            self.ledger.level_progress() * 100.0
        )?;
        writeln!(self.output, "---")
    }

    fn save_progress(&mut self) -> io::Result<()> {
        match self.ledger.save(&self.save_path) {
            Ok(()) => writeln!(self.output, "Progress saved!"),
            Err(e) => writeln!(self.output, "Could not save progress: {}", e),
        }
    }

    /// Load the save file into the ledger and report what happened
    pub fn load_progress(&mut self) -> io::Result<()> {
        match self.ledger.load(&self.save_path) {
            LoadOutcome::Missing => writeln!(self.output, "No saved progress found."),
            LoadOutcome::Unreadable(e) => {
                writeln!(self.output, "Could not load progress: {}", e)
            }
            LoadOutcome::Loaded(summary) => {
                writeln!(self.output, "Progress loaded!")?;
                if summary.skipped > 0 {
                    writeln!(
                        self.output,
                        "{} goal(s) could not be read and were skipped.",
                        summary.skipped
                    )?;
                }
                Ok(())
            }
        }
    }
}
