//! Command-to-task translation and task-collection engine.
//!
//! Raw tokenized commands come in; typed tasks, plain-text summaries,
//! and specific [`CommandError`]s come out. The engine performs no I/O:
//! an external reader tokenizes input, an external presenter displays
//! the returned summaries, and an external storage collaborator
//! persists the collection through [`TaskRecord`]s.

use core::fmt;
use std::fmt::Display;

use color_eyre::Result;
use tracing::{debug, info};

use crate::{config::TrackerConfig, error::CommandError, parser::command, record::TaskRecord, task::Task};

pub mod config;
pub mod error;
pub mod filter;
pub mod logging;
pub mod parser;
pub mod record;
pub mod task;

pub use logging::init as init_logging;

/// The ordered task collection and its command handlers.
///
/// Task numbers are 1-based at this boundary. Handlers validate their
/// whole command before touching the collection, so a failed command
/// leaves it untouched.
#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    config: TrackerConfig,
}

impl TaskList {
    #[must_use]
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            tasks: vec![],
            config,
        }
    }

    /// Rebuilds a collection from its persisted records, in order.
    ///
    /// # Errors
    ///
    /// Fails if any record is internally inconsistent (empty
    /// description, or date fields that don't match the variant tag).
    pub fn from_records(records: Vec<TaskRecord>, config: TrackerConfig) -> Result<Self> {
        let tasks = records
            .into_iter()
            .map(Task::try_from)
            .collect::<Result<Vec<_>>>()?;
        info!("loaded {} tasks from records", tasks.len());
        Ok(Self { tasks, config })
    }

    /// Flattens the collection for the storage collaborator.
    #[must_use]
    pub fn to_records(&self) -> Vec<TaskRecord> {
        self.tasks.iter().map(TaskRecord::from).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Returns the task at 1-based `task_num`, if it exists.
    #[must_use]
    pub fn get(&self, task_num: usize) -> Option<&Task> {
        task_num.checked_sub(1).and_then(|i| self.tasks.get(i))
    }

    /// Handles `todo <description...>`.
    pub fn add_todo(&mut self, tokens: &[&str]) -> Result<String, CommandError> {
        let args = command::todo_args(tokens)?;
        Ok(self.push(Task::todo(args.description)))
    }

    /// Handles `deadline <description...> /by <date>`.
    pub fn add_deadline(&mut self, tokens: &[&str]) -> Result<String, CommandError> {
        let args = command::deadline_args(tokens, &self.config.markers)?;
        Ok(self.push(Task::deadline(args.description, args.due)))
    }

    /// Handles `event <description...> /from <date> /to <date>`.
    pub fn add_event(&mut self, tokens: &[&str]) -> Result<String, CommandError> {
        let args = command::event_args(tokens, &self.config.markers)?;
        Ok(self.push(Task::event(args.description, args.start, args.end)))
    }

    /// Appends a task and reports it along with the new total.
    pub fn push(&mut self, task: Task) -> String {
        debug!("adding {task}");
        let rendered = task.to_string();
        self.tasks.push(task);
        let count = self.tasks.len();
        format!(
            "Added '{rendered}'!\nYou now have {count} {}.",
            plural(count)
        )
    }

    /// Renders every task, 1-based, with a fixed closing remark.
    #[must_use]
    pub fn display_list(&self) -> String {
        let mut res = String::from("Here are your tasks:\n");
        for (i, task) in self.tasks.iter().enumerate() {
            res.push_str(&format!("{}.{task}\n", i + 1));
        }
        res.push_str("That's every task on the list.");
        res
    }

    /// Handles `mark <task number>`. Marking an already-done task
    /// succeeds silently.
    pub fn mark_done(&mut self, task_num: usize) -> Result<String, CommandError> {
        let index = self.check_bounds(task_num)?;
        let task = &mut self.tasks[index];
        task.complete();
        let rendered = task.to_string();
        debug!("marked task {task_num} done");
        Ok(format!("Marked task {task_num} as done:\n{rendered}"))
    }

    /// Handles `delete <task number>`.
    pub fn delete_task(&mut self, task_num: usize) -> Result<String, CommandError> {
        let index = self.check_bounds(task_num)?;
        let task = self.tasks.remove(index);
        let count = self.tasks.len();
        info!("deleted task {task_num}: {task}");
        Ok(format!(
            "Deleted '{task}'.\nYou have {count} {} left.",
            plural(count)
        ))
    }

    /// Handles `find <term...>`: case-sensitive substring match over
    /// rendered forms, results renumbered from 1.
    pub fn search(&self, tokens: &[&str]) -> Result<String, CommandError> {
        let term = command::find_args(tokens)?;
        let matches = filter::matching_tasks(&self.tasks, &term);
        debug!(
            "search for '{term}' matched {} of {} tasks",
            matches.len(),
            self.tasks.len()
        );
        let mut res = format!("Tasks matching '{term}':\n");
        for (i, task) in matches.iter().enumerate() {
            res.push_str(&format!("{}.{task}\n", i + 1));
        }
        Ok(res.trim_end().to_string())
    }

    /// Maps a 1-based task number to a vec index, rejecting 0 and
    /// anything past the end.
    fn check_bounds(&self, task_num: usize) -> Result<usize, CommandError> {
        if task_num == 0 || task_num > self.tasks.len() {
            return Err(CommandError::TaskNumOutOfBounds(task_num));
        }
        Ok(task_num - 1)
    }
}

impl Display for TaskList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, task) in self.tasks.iter().enumerate() {
            writeln!(f, "{}.{task}", i + 1)?;
        }
        Ok(())
    }
}

const fn plural(count: usize) -> &'static str {
    if count == 1 {
        "task"
    } else {
        "tasks"
    }
}
