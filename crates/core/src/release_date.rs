//! Parser for the `"YYYY M D"` release-date text accepted by the movie endpoints.
//!
//! The accepted format is three whitespace-separated integers: year, month,
//! day. Leading zeros and repeated whitespace are tolerated; anything else
//! (ISO dates, extra tokens, impossible calendar days) is rejected with a
//! [`ReleaseDateError`] naming what went wrong.

use chrono::NaiveDate;

/// Why a release-date string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReleaseDateError {
    #[error("expected 3 space-separated components (year month day), got {0}")]
    WrongTokenCount(usize),

    #[error("component '{0}' is not an integer")]
    InvalidComponent(String),

    #[error("{year}-{month}-{day} is not a calendar date")]
    OutOfRange { year: i32, month: i64, day: i64 },
}

/// Parse `"YYYY M D"` into a calendar date.
pub fn parse_release_date(input: &str) -> Result<NaiveDate, ReleaseDateError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    if tokens.len() != 3 {
        return Err(ReleaseDateError::WrongTokenCount(tokens.len()));
    }

    let year: i32 = parse_component(tokens[0])?;
    let month: i64 = parse_component(tokens[1])?;
    let day: i64 = parse_component(tokens[2])?;

    u32::try_from(month)
        .ok()
        .zip(u32::try_from(day).ok())
        .and_then(|(m, d)| NaiveDate::from_ymd_opt(year, m, d))
        .ok_or(ReleaseDateError::OutOfRange { year, month, day })
}

fn parse_component<T: std::str::FromStr>(token: &str) -> Result<T, ReleaseDateError> {
    token
        .parse()
        .map_err(|_| ReleaseDateError::InvalidComponent(token.to_string()))
}
