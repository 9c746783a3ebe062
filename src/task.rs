use core::fmt;
use std::fmt::Display;

use chrono::NaiveDate;

/// What kind of task this is, along with the dates that kind carries.
#[derive(Debug, Hash, Eq, PartialEq, Clone)]
pub enum TaskKind {
    ToDo,
    Deadline { due: NaiveDate },
    Event { start: NaiveDate, end: NaiveDate },
}

/// A single tracked task.
///
/// The `Display` impl is the canonical rendered form used for display,
/// search matching, and summaries. It must stay stable:
/// `[<tag>][<X or space>] <description>` plus the kind's date suffix.
#[derive(Debug, Hash, Eq, PartialEq, Clone)]
pub struct Task {
    pub description: String,
    pub done: bool,
    pub kind: TaskKind,
}

impl Task {
    #[must_use]
    pub fn todo(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind: TaskKind::ToDo,
        }
    }

    #[must_use]
    pub fn deadline(description: impl Into<String>, due: NaiveDate) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind: TaskKind::Deadline { due },
        }
    }

    #[must_use]
    pub fn event(description: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind: TaskKind::Event { start, end },
        }
    }

    /// One-letter type tag used in the rendered form.
    #[must_use]
    pub const fn type_tag(&self) -> char {
        match self.kind {
            TaskKind::ToDo => 'T',
            TaskKind::Deadline { .. } => 'D',
            TaskKind::Event { .. } => 'E',
        }
    }

    /// Marks the task done. Marking an already-done task is a no-op.
    pub fn complete(&mut self) {
        self.done = true;
    }

    const fn done_marker(&self) -> char {
        if self.done {
            'X'
        } else {
            ' '
        }
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}][{}] {}",
            self.type_tag(),
            self.done_marker(),
            self.description
        )?;
        match &self.kind {
            TaskKind::ToDo => Ok(()),
            TaskKind::Deadline { due } => write!(f, " (by: {})", due.format("%Y-%m-%d")),
            TaskKind::Event { start, end } => write!(
                f,
                " (from: {} to: {})",
                start.format("%Y-%m-%d"),
                end.format("%Y-%m-%d")
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::Task;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_render_todo() {
        let task = Task::todo("read book");
        assert_eq!(task.to_string(), "[T][ ] read book");
    }

    #[test]
    fn test_render_todo_done() {
        let mut task = Task::todo("read book");
        task.complete();
        assert_eq!(task.to_string(), "[T][X] read book");
    }

    #[test]
    fn test_complete_is_idempotent() {
        let mut task = Task::todo("read book");
        task.complete();
        task.complete();
        assert_eq!(task.to_string(), "[T][X] read book");
    }

    #[test]
    fn test_render_deadline() {
        let task = Task::deadline("submit report", date(2024, 12, 1));
        assert_eq!(task.to_string(), "[D][ ] submit report (by: 2024-12-01)");
    }

    #[test]
    fn test_render_event() {
        let task = Task::event("trip", date(2024, 1, 5), date(2024, 1, 10));
        assert_eq!(
            task.to_string(),
            "[E][ ] trip (from: 2024-01-05 to: 2024-01-10)"
        );
    }
}
