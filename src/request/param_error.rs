use std::fmt::Display;

use crate::filter::FilterError;

/// Why a request's parameters were rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamError {
    InvalidDimension(String),
    InvalidMetric { name: String, allowed: Vec<String> },
    InvalidTime(String),
    Filter(FilterError),
}

impl ParamError {
    pub fn status(&self) -> u16 {
        400
    }
}

impl Display for ParamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamError::InvalidDimension(name) => {
                write!(f, "invalid \"dimension\" parameter: {}", name)
            }
            ParamError::InvalidMetric { name, allowed } => {
                write!(
                    f,
                    "\"metric\" parameter must be one of: {} (got {})",
                    allowed.join(", "),
                    name
                )
            }
            ParamError::InvalidTime(value) => {
                write!(
                    f,
                    "\"time\" param must be a comma delimited string: \"<start>,<end>\". Use \"null\", a YYYY-MM-DD string, or a unix timestamp (got {})",
                    value
                )
            }
            ParamError::Filter(err) => write!(f, "{}", err),
        }
    }
}

impl From<FilterError> for ParamError {
    fn from(err: FilterError) -> Self {
        ParamError::Filter(err)
    }
}
