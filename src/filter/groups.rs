use serde::Serialize;

use crate::filter::{Channel, EnrichedExpr, Predicate};
use crate::parser::ast::Connective;

/// Flat, same-channel predicate collection sharing one connective. The
/// connective of a group with at most one filter is never observed
/// downstream; it stays at the `Or` default.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterGroup {
    #[serde(rename = "operator")]
    pub connective: Connective,
    pub filters: Vec<Predicate>,
}

/// The decomposition result: one homogeneous group per channel, implicitly
/// joined by AND.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WhereFilters {
    pub metric_filters: FilterGroup,
    pub dimension_filters: FilterGroup,
}

/// Partition a validated expression's predicates by channel and assign each
/// group its connective.
pub fn emit(root: &EnrichedExpr) -> WhereFilters {
    let mut metric_filters = FilterGroup::default();
    let mut dimension_filters = FilterGroup::default();

    for predicate in &root.predicates {
        match predicate.channel {
            Channel::Metric => metric_filters.filters.push(predicate.clone()),
            Channel::Dimension => dimension_filters.filters.push(predicate.clone()),
        }
    }

    // A single connective in force applies to both groups.
    if root.connectives.len() == 1 {
        if let Some(connective) = root.connectives.first() {
            metric_filters.connective = *connective;
            dimension_filters.connective = *connective;
        }
    }

    // With both channels present and more than one connective, each side of
    // the root is one channel's partition; give each group its own side's
    // connective.
    if root.channels.len() > 1 && root.connectives.len() > 1 {
        if let Some((left, right)) = &root.branches {
            let left_connective = left.connectives.first().copied().unwrap_or_default();
            let right_connective = right.connectives.first().copied().unwrap_or_default();

            match left.channels.first() {
                Some(Channel::Metric) => {
                    metric_filters.connective = left_connective;
                    dimension_filters.connective = right_connective;
                }
                _ => {
                    dimension_filters.connective = left_connective;
                    metric_filters.connective = right_connective;
                }
            }
        }
    }

    WhereFilters {
        metric_filters,
        dimension_filters,
    }
}
