//! The exchange form handed to the external storage collaborator.
//!
//! Storage owns the on-disk encoding; this module only guarantees that a
//! collection can be flattened to records and rebuilt from them without
//! loss.

use chrono::NaiveDate;
use color_eyre::eyre::bail;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::task::{Task, TaskKind};

/// Variant tag of a persisted task.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TaskTag {
    ToDo,
    Deadline,
    Event,
}

/// One persisted task: variant tag, description, done flag, and the
/// 0, 1, or 2 dates the variant carries.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub kind: TaskTag,
    pub description: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDate>,
}

impl From<&Task> for TaskRecord {
    fn from(task: &Task) -> Self {
        let (kind, due, start, end) = match &task.kind {
            TaskKind::ToDo => (TaskTag::ToDo, None, None, None),
            TaskKind::Deadline { due } => (TaskTag::Deadline, Some(*due), None, None),
            TaskKind::Event { start, end } => (TaskTag::Event, None, Some(*start), Some(*end)),
        };
        Self {
            kind,
            description: task.description.clone(),
            done: task.done,
            due,
            start,
            end,
        }
    }
}

impl TryFrom<TaskRecord> for Task {
    type Error = color_eyre::Report;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        if record.description.is_empty() {
            bail!("task record has an empty description");
        }
        let kind = match record.kind {
            TaskTag::ToDo => TaskKind::ToDo,
            TaskTag::Deadline => match record.due {
                Some(due) => TaskKind::Deadline { due },
                None => bail!(
                    "deadline record '{}' is missing its due date",
                    record.description
                ),
            },
            TaskTag::Event => match (record.start, record.end) {
                (Some(start), Some(end)) => TaskKind::Event { start, end },
                _ => bail!(
                    "event record '{}' is missing a start or end date",
                    record.description
                ),
            },
        };
        Ok(Self {
            description: record.description,
            done: record.done,
            kind,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use crate::task::Task;

    use super::{TaskRecord, TaskTag};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_record_round_trip_preserves_every_field() {
        let mut done_todo = Task::todo("water plants");
        done_todo.complete();
        let tasks = vec![
            done_todo,
            Task::deadline("submit report", date(2024, 12, 1)),
            Task::event("trip", date(2024, 1, 5), date(2024, 1, 10)),
        ];
        let rebuilt: Vec<Task> = tasks
            .iter()
            .map(TaskRecord::from)
            .map(|record| Task::try_from(record).unwrap())
            .collect();
        assert_eq!(rebuilt, tasks);
    }

    #[test]
    fn test_record_serializes_to_toml_and_back() {
        let record = TaskRecord::from(&Task::deadline("submit report", date(2024, 12, 1)));
        let encoded = toml::to_string(&record).unwrap();
        let decoded: TaskRecord = toml::from_str(&encoded).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_deadline_record_without_due_date_is_rejected() {
        let record = TaskRecord {
            kind: TaskTag::Deadline,
            description: "submit report".to_string(),
            done: false,
            due: None,
            start: None,
            end: None,
        };
        assert!(Task::try_from(record).is_err());
    }

    #[test]
    fn test_event_record_without_end_date_is_rejected() {
        let record = TaskRecord {
            kind: TaskTag::Event,
            description: "trip".to_string(),
            done: false,
            due: None,
            start: Some(date(2024, 1, 5)),
            end: None,
        };
        assert!(Task::try_from(record).is_err());
    }

    #[test]
    fn test_empty_description_is_rejected() {
        let record = TaskRecord {
            kind: TaskTag::ToDo,
            description: String::new(),
            done: false,
            due: None,
            start: None,
            end: None,
        };
        assert!(Task::try_from(record).is_err());
    }
}
