//! Search matching over rendered task forms.

use crate::task::Task;

/// Returns the tasks whose rendered form contains `term`, in their
/// original relative order. Matching is case-sensitive and runs over
/// the full rendered form, so date text is searchable too.
#[must_use]
pub fn matching_tasks<'a>(tasks: &'a [Task], term: &str) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|task| task.to_string().contains(term))
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use crate::task::Task;

    use super::matching_tasks;

    fn sample() -> Vec<Task> {
        vec![
            Task::todo("water plants"),
            Task::todo("read trip report"),
            Task::event(
                "trip",
                NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            ),
        ]
    }

    #[test]
    fn test_matching_preserves_relative_order() {
        let tasks = sample();
        let res = matching_tasks(&tasks, "trip");
        assert_eq!(
            res.iter().map(|t| t.description.as_str()).collect::<Vec<_>>(),
            vec!["read trip report", "trip"]
        );
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let tasks = sample();
        assert!(matching_tasks(&tasks, "Trip").is_empty());
    }

    #[test]
    fn test_matching_sees_rendered_dates() {
        let tasks = sample();
        let res = matching_tasks(&tasks, "2024-01-05");
        assert_eq!(res.len(), 1);
        assert_eq!(res[0].description, "trip");
    }

    #[test]
    fn test_no_match_yields_empty() {
        let tasks = sample();
        assert!(matching_tasks(&tasks, "laundry").is_empty());
    }
}
