use std::time::Duration;

use url::Url;

use super::types::PositiveUsize;
use crate::error::{AppError, AppResult, ValidationError};

pub(super) fn parse_positive_usize(s: &str) -> AppResult<PositiveUsize> {
    s.parse::<PositiveUsize>().map_err(AppError::from)
}

/// Accepts only absolute `http`/`https` URLs.
pub(crate) fn parse_target_url(s: &str) -> Result<Url, ValidationError> {
    let url = Url::parse(s.trim()).map_err(|err| ValidationError::InvalidUrl {
        url: s.to_owned(),
        source: err,
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ValidationError::UnsupportedScheme {
            url: s.to_owned(),
            scheme: other.to_owned(),
        }),
    }
}

pub(crate) fn parse_duration_arg(s: &str) -> Result<Duration, ValidationError> {
    let value = s.trim();
    if value.is_empty() {
        return Err(ValidationError::DurationEmpty);
    }

    let mut digits_len = 0usize;
    for ch in value.chars() {
        if ch.is_ascii_digit() {
            digits_len = digits_len.saturating_add(1);
        } else {
            break;
        }
    }
    if digits_len == 0 {
        return Err(ValidationError::InvalidDurationFormat {
            value: value.to_owned(),
        });
    }
    let (num_part, unit_part) = value.split_at(digits_len);
    let number: u64 = num_part
        .parse()
        .map_err(|err| ValidationError::InvalidDurationNumber {
            value: value.to_owned(),
            source: err,
        })?;

    let unit = if unit_part.is_empty() { "s" } else { unit_part };
    let duration = match unit {
        "ms" => Duration::from_millis(number),
        "s" => Duration::from_secs(number),
        "m" => {
            let secs = number
                .checked_mul(60)
                .ok_or(ValidationError::DurationOverflow)?;
            Duration::from_secs(secs)
        }
        _ => {
            return Err(ValidationError::InvalidDurationUnit {
                unit: unit.to_owned(),
            });
        }
    };

    if duration.is_zero() {
        return Err(ValidationError::DurationZero);
    }

    Ok(duration)
}
