use indexmap::IndexSet;

use crate::catalog::Catalog;
use crate::filter::{Channel, FilterError, Predicate};
use crate::parser::ast::{Connective, Expr};

/// Per-subtree aggregation produced by the bottom-up enrichment walk.
///
/// `connectives` is insertion-ordered with the node's own connective first;
/// the separability check reads index 0 as "the connective in force at this
/// level". `branches` is present for logical nodes only.
#[derive(Debug, Clone)]
pub struct EnrichedExpr {
    pub channels: IndexSet<Channel>,
    pub connectives: IndexSet<Connective>,
    pub predicates: Vec<Predicate>,
    pub branches: Option<(Box<EnrichedExpr>, Box<EnrichedExpr>)>,
}

/// Classify every leaf against the catalog and aggregate subtree metadata.
/// Pure: reads only its input and the catalog.
pub fn enrich(expr: &Expr, catalog: &Catalog) -> Result<EnrichedExpr, FilterError> {
    match expr {
        Expr::Comparison { column, operator, value } => {
            let channel = catalog
                .channel_of(column)
                .ok_or_else(|| FilterError::UnknownColumn(column.clone()))?;

            if !channel.allows(*operator) {
                return Err(FilterError::UnsupportedOperator { operator: *operator, channel });
            }

            let mut channels = IndexSet::new();
            channels.insert(channel);

            Ok(EnrichedExpr {
                channels,
                connectives: IndexSet::new(),
                predicates: vec![Predicate {
                    key: column.clone(),
                    operator: *operator,
                    value: value.clone(),
                    channel,
                }],
                branches: None,
            })
        }
        Expr::Logical { connective, left, right } => {
            // Left side first; an error short-circuits before the right side
            // is visited.
            let left = enrich(left, catalog)?;
            let right = enrich(right, catalog)?;

            let mut channels = IndexSet::new();
            channels.extend(left.channels.iter().copied());
            channels.extend(right.channels.iter().copied());

            let mut connectives = IndexSet::new();
            connectives.insert(*connective);
            connectives.extend(left.connectives.iter().copied());
            connectives.extend(right.connectives.iter().copied());

            let mut predicates = Vec::with_capacity(left.predicates.len() + right.predicates.len());
            predicates.extend(left.predicates.iter().cloned());
            predicates.extend(right.predicates.iter().cloned());

            Ok(EnrichedExpr {
                channels,
                connectives,
                predicates,
                branches: Some((Box::new(left), Box::new(right))),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::Catalog;
    use crate::filter::{enrich, Channel, FilterError};
    use crate::parser::ast::{ComparatorOp, Connective, Expr};

    fn enriched(expression: &str) -> Result<crate::filter::EnrichedExpr, FilterError> {
        let catalog = Catalog::base();
        let expr = Expr::parse(expression).expect("Failed to parse expression");
        enrich(&expr, &catalog)
    }

    #[test]
    pub fn test_enrich_metric_leaf() {
        let result = enriched("views > 100").expect("Failed to enrich");

        assert_eq!(result.channels.len(), 1);
        assert!(result.channels.contains(&Channel::Metric));
        assert!(result.connectives.is_empty());
        assert_eq!(result.predicates.len(), 1);
        assert_eq!(result.predicates[0].key, "views");
        assert_eq!(result.predicates[0].operator, ComparatorOp::Gt);
        assert!(result.branches.is_none());
    }

    #[test]
    pub fn test_enrich_dimension_leaf() {
        let result = enriched("country = 'Canada'").expect("Failed to enrich");

        assert!(result.channels.contains(&Channel::Dimension));
        assert_eq!(result.predicates[0].channel, Channel::Dimension);
    }

    #[test]
    pub fn test_enrich_unknown_column() {
        let result = enriched("bogus = 'x'");

        match result {
            Err(FilterError::UnknownColumn(column)) => assert_eq!(column, "bogus"),
            _ => panic!(),
        }
    }

    #[test]
    pub fn test_enrich_dimension_rejects_inequality() {
        let result = enriched("country > 'Canada'");

        match result {
            Err(FilterError::UnsupportedOperator { operator, channel }) => {
                assert_eq!(operator, ComparatorOp::Gt);
                assert_eq!(channel, Channel::Dimension);
            }
            _ => panic!(),
        }
    }

    #[test]
    pub fn test_enrich_metric_rejects_lteq() {
        let result = enriched("views <= 100");

        match result {
            Err(FilterError::UnsupportedOperator { operator, channel }) => {
                assert_eq!(operator, ComparatorOp::LtEq);
                assert_eq!(channel, Channel::Metric);
            }
            _ => panic!(),
        }
    }

    #[test]
    pub fn test_enrich_aggregates_channels_and_predicates() {
        let result = enriched("country = 'Canada' AND views > 100").expect("Failed to enrich");

        assert_eq!(result.channels.len(), 2);
        assert_eq!(result.connectives.len(), 1);
        assert_eq!(result.predicates.len(), 2);
        assert!(result.branches.is_some());
    }

    #[test]
    pub fn test_enrich_root_connective_is_first() {
        let result =
            enriched("(country='Canada' OR country='US') AND views>100").expect("Failed to enrich");

        let connectives: Vec<_> = result.connectives.iter().copied().collect();
        assert_eq!(connectives, vec![Connective::And, Connective::Or]);
    }

    #[test]
    pub fn test_enrich_short_circuits_on_left_error() {
        // Right side also holds an error; the left one must win.
        let result = enriched("bogus = 'x' AND country > 'Canada'");

        match result {
            Err(FilterError::UnknownColumn(column)) => assert_eq!(column, "bogus"),
            _ => panic!(),
        }
    }

    #[test]
    pub fn test_enrich_deduplicates_connectives() {
        let result = enriched("views > 100 AND views < 500 AND sessions > 5").expect("Failed to enrich");

        assert_eq!(result.connectives.len(), 1);
        assert_eq!(result.predicates.len(), 3);
    }
}
