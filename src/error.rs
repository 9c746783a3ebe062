use thiserror::Error;

/// Errors a command handler can surface to the caller.
///
/// Each kind carries its user-facing message; the engine never recovers
/// from these and never performs partial mutation before raising one.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// Required task description or argument is absent.
    #[error("No task description given")]
    MissingTask,

    /// A structural marker is absent or misplaced. Carries the expected
    /// command suffix, e.g. `/by [DATE]`.
    #[error("Malformed command, expected `{0}` at the end")]
    InvalidTaskFormat(String),

    /// A date token failed to parse, or extra tokens trail the date(s).
    #[error("Invalid date, expected yyyy-MM-dd")]
    InvalidDateFormat,

    /// Search command given with no search term.
    #[error("No search term given")]
    InvalidFindFormat,

    /// A 1-based task number outside `[1, count]`.
    #[error("Task {0} does not exist")]
    TaskNumOutOfBounds(usize),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::CommandError;

    #[test]
    fn test_out_of_bounds_message_names_the_task() {
        let err = CommandError::TaskNumOutOfBounds(42);
        assert_eq!(err.to_string(), "Task 42 does not exist");
    }

    #[test]
    fn test_task_format_message_carries_usage() {
        let err = CommandError::InvalidTaskFormat("/by [DATE]".to_string());
        assert_eq!(
            err.to_string(),
            "Malformed command, expected `/by [DATE]` at the end"
        );
    }
}
