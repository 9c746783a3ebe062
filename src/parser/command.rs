//! Per-command token grammars.
//!
//! Every add-style command follows the same shape: a description
//! segment, then one marker/date pair per date the task carries, and
//! nothing after the last date. Matching the whole token slice against
//! that pattern up front keeps the "extra trailing tokens" rule in one
//! place and the handlers free of index arithmetic.

use chrono::NaiveDate;

use crate::{config::MarkerConfig, error::CommandError};

use super::date::parse_date;

/// Arguments of a valid `todo` command.
#[derive(Debug, PartialEq, Eq)]
pub struct TodoArgs {
    pub description: String,
}

/// Arguments of a valid `deadline` command.
#[derive(Debug, PartialEq, Eq)]
pub struct DeadlineArgs {
    pub description: String,
    pub due: NaiveDate,
}

/// Arguments of a valid `event` command.
#[derive(Debug, PartialEq, Eq)]
pub struct EventArgs {
    pub description: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Strips the command keyword, failing with `MissingTask` when nothing
/// follows it.
fn arguments<'a, 'b>(tokens: &'a [&'b str]) -> Result<&'a [&'b str], CommandError> {
    match tokens.split_first() {
        Some((_keyword, rest)) if !rest.is_empty() => Ok(rest),
        _ => Err(CommandError::MissingTask),
    }
}

/// Matches `todo <description...>`.
pub fn todo_args(tokens: &[&str]) -> Result<TodoArgs, CommandError> {
    let args = arguments(tokens)?;
    Ok(TodoArgs {
        description: args.join(" "),
    })
}

/// Matches `deadline <description...> /by <date>`.
pub fn deadline_args(tokens: &[&str], markers: &MarkerConfig) -> Result<DeadlineArgs, CommandError> {
    let args = arguments(tokens)?;
    if args[0] == markers.by {
        return Err(CommandError::MissingTask);
    }
    let usage = || CommandError::InvalidTaskFormat(format!("{} [DATE]", markers.by));
    let by = args
        .iter()
        .position(|token| *token == markers.by)
        .ok_or_else(usage)?;
    if by == args.len() - 1 {
        return Err(usage());
    }
    let due = parse_date(args[by + 1]).ok_or(CommandError::InvalidDateFormat)?;
    // Exactly one `/by DATE` pair, at the very end.
    if args.len() > by + 2 {
        return Err(CommandError::InvalidDateFormat);
    }
    Ok(DeadlineArgs {
        description: args[..by].join(" "),
        due,
    })
}

/// Matches `event <description...> /from <date> /to <date>`.
pub fn event_args(tokens: &[&str], markers: &MarkerConfig) -> Result<EventArgs, CommandError> {
    let args = arguments(tokens)?;
    if args[0] == markers.from || args[0] == markers.to {
        return Err(CommandError::MissingTask);
    }
    let usage =
        || CommandError::InvalidTaskFormat(format!("{} [DATE] {} [DATE]", markers.from, markers.to));
    let from = args
        .iter()
        .position(|token| *token == markers.from)
        .ok_or_else(usage)?;
    let to = args
        .iter()
        .position(|token| *token == markers.to)
        .ok_or_else(usage)?;
    if from > to || from + 1 == to || to == args.len() - 1 {
        return Err(usage());
    }
    let start = parse_date(args[from + 1]).ok_or(CommandError::InvalidDateFormat)?;
    // The start date must be followed directly by the `/to` marker.
    if args[from + 2] != markers.to {
        return Err(CommandError::InvalidDateFormat);
    }
    let end = parse_date(args[from + 3]).ok_or(CommandError::InvalidDateFormat)?;
    // Exactly one `/from DATE /to DATE` suffix, at the very end.
    if args.len() > from + 4 {
        return Err(CommandError::InvalidDateFormat);
    }
    Ok(EventArgs {
        description: args[..from].join(" "),
        start,
        end,
    })
}

/// Matches `find <term...>`; the term tokens are joined with single
/// spaces into one search string.
pub fn find_args(tokens: &[&str]) -> Result<String, CommandError> {
    match tokens.split_first() {
        Some((_keyword, rest)) if !rest.is_empty() => Ok(rest.join(" ")),
        _ => Err(CommandError::InvalidFindFormat),
    }
}
