use serde::Serialize;

use crate::filter::Channel;
use crate::parser::ast::{ComparatorOp, Literal};

/// A classified, flattened leaf comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Predicate {
    pub key: String,
    pub operator: ComparatorOp,
    pub value: Literal,
    #[serde(skip)]
    pub channel: Channel,
}
