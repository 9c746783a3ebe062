use chrono::NaiveDate;
use winnow::{token::take_while, Parser, Result};

/// Parses a strict `yyyy-MM-dd` date: four digits, dash, two digits,
/// dash, two digits, and a valid calendar day.
fn iso_date(input: &mut &str) -> Result<NaiveDate> {
    (
        take_while(4..=4, '0'..='9').parse_to::<i32>(),
        '-',
        take_while(2..=2, '0'..='9').parse_to::<u32>(),
        '-',
        take_while(2..=2, '0'..='9').parse_to::<u32>(),
    )
        .verify_map(|(year, _, month, _, day)| NaiveDate::from_ymd_opt(year, month, day))
        .parse_next(input)
}

/// Validates a single token as a `yyyy-MM-dd` calendar date.
///
/// Returns `None` on any failure (wrong shape, non-numeric, impossible
/// day or month, trailing characters); callers turn that sentinel into
/// their own error message. Never panics.
#[must_use]
pub fn parse_date(token: &str) -> Option<NaiveDate> {
    iso_date.parse(token).ok()
}
