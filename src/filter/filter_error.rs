use std::fmt::Display;

use crate::filter::Channel;
use crate::parser::{ast::ComparatorOp, ParseError};

/// Why a WHERE expression cannot be decomposed into the two-group model.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterError {
    Syntax(ParseError),
    UnknownColumn(String),
    UnsupportedOperator { operator: ComparatorOp, channel: Channel },
    CrossChannelOr,
    MixedConnectiveSameChannel,
    UnpartitionedMixedChannel,
    MixedConnectiveWithinPartition,
}

impl FilterError {
    /// HTTP-style status for surfacing to clients. Every rejection here is
    /// the caller's to fix; nothing is retryable.
    pub fn status(&self) -> u16 {
        400
    }
}

impl Display for FilterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterError::Syntax(err) => write!(f, "{}", err),
            FilterError::UnknownColumn(column) => {
                write!(f, "{} is not a supported metric or dimension", column)
            }
            FilterError::UnsupportedOperator { operator, channel } => {
                write!(f, "{} is not a currently supported {} operator", operator, channel)
            }
            FilterError::CrossChannelOr => {
                write!(f, "metric and dimension predicates cannot be combined with OR, only with AND")
            }
            FilterError::MixedConnectiveSameChannel => {
                write!(f, "multiple logical operators cannot be used within a single predicate type (metrics or dimensions)")
            }
            FilterError::UnpartitionedMixedChannel => {
                write!(
                    f,
                    "metric and dimension predicates must be partitioned into left and right groups with parentheses, e.g. (views > 50 OR sessions > 20) AND (country = 'Canada' OR country = 'US')"
                )
            }
            FilterError::MixedConnectiveWithinPartition => {
                write!(f, "mixed logical operators (AND, OR) within a group of metric or dimension predicates are not supported")
            }
        }
    }
}

impl From<ParseError> for FilterError {
    fn from(err: ParseError) -> Self {
        FilterError::Syntax(err)
    }
}
