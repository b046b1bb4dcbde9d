use std::time::Duration;

use serde::Deserialize;

use crate::args::{TransportPolicy, parse_duration_arg};
use crate::error::ValidationError;

/// File-level counterpart of [`crate::args::LoadArgs`]; every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub url: Option<String>,
    pub workers: Option<usize>,
    pub requests: Option<usize>,
    pub timeout: Option<DurationValue>,
    pub on_transport_error: Option<TransportPolicy>,
    pub sequential: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self) -> Result<Duration, ValidationError> {
        match self {
            DurationValue::Seconds(secs) => {
                if *secs == 0 {
                    Err(ValidationError::DurationZero)
                } else {
                    Ok(Duration::from_secs(*secs))
                }
            }
            DurationValue::Text(text) => parse_duration_arg(text),
        }
    }
}
