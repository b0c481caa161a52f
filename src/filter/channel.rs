use std::fmt;

use crate::parser::ast::ComparatorOp;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Dimension,
    Metric,
}

impl Channel {
    /// Operator legality per channel: dimensions are exact-match only,
    /// metrics also compare with `<` and `>`.
    pub fn allows(&self, operator: ComparatorOp) -> bool {
        match self {
            Channel::Dimension => matches!(operator, ComparatorOp::Eq),
            Channel::Metric => matches!(
                operator,
                ComparatorOp::Eq | ComparatorOp::Lt | ComparatorOp::Gt
            ),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Dimension => write!(f, "dimension"),
            Channel::Metric => write!(f, "metric"),
        }
    }
}

impl fmt::Debug for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Channel({})", self)
    }
}

#[cfg(test)]
mod tests {
    use crate::filter::Channel;
    use crate::parser::ast::ComparatorOp;

    #[test]
    pub fn test_dimension_allows_equality_only() {
        assert!(Channel::Dimension.allows(ComparatorOp::Eq));
        assert!(!Channel::Dimension.allows(ComparatorOp::Lt));
        assert!(!Channel::Dimension.allows(ComparatorOp::Gt));
        assert!(!Channel::Dimension.allows(ComparatorOp::NotEq));
    }

    #[test]
    pub fn test_metric_allows_comparisons() {
        assert!(Channel::Metric.allows(ComparatorOp::Eq));
        assert!(Channel::Metric.allows(ComparatorOp::Lt));
        assert!(Channel::Metric.allows(ComparatorOp::Gt));
        assert!(!Channel::Metric.allows(ComparatorOp::LtEq));
        assert!(!Channel::Metric.allows(ComparatorOp::GtEq));
        assert!(!Channel::Metric.allows(ComparatorOp::NotEq));
    }
}
