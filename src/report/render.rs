use serde::Serialize;

use crate::catalog::Catalog;
use crate::filter::{Channel, FilterError, Predicate};
use crate::parser::ast::ComparatorOp;

/// Metric comparison operators in the provider vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MetricOperator {
    Equal,
    LessThan,
    GreaterThan,
}

impl TryFrom<ComparatorOp> for MetricOperator {
    type Error = FilterError;

    fn try_from(operator: ComparatorOp) -> Result<Self, Self::Error> {
        match operator {
            ComparatorOp::Eq => Ok(MetricOperator::Equal),
            ComparatorOp::Lt => Ok(MetricOperator::LessThan),
            ComparatorOp::Gt => Ok(MetricOperator::GreaterThan),
            other => Err(FilterError::UnsupportedOperator {
                operator: other,
                channel: Channel::Metric,
            }),
        }
    }
}

/// Dimension filters always use exact-match semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DimensionOperator {
    Exact,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionFilter {
    pub dimension_name: String,
    pub operator: DimensionOperator,
    pub expressions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricFilter {
    pub metric_name: String,
    pub operator: MetricOperator,
    pub comparison_value: String,
}

/// Render a dimension predicate into the provider filter shape, applying any
/// declared value rule for the column.
pub fn render_dimension_predicate(
    predicate: &Predicate,
    catalog: &Catalog,
) -> Result<DimensionFilter, FilterError> {
    let dimension_name = provider_name(catalog, &predicate.key)?;

    let mut value = predicate.value.render();
    if let Some(rule) = catalog.value_rule(&predicate.key) {
        value = rule.apply(&value);
    }

    Ok(DimensionFilter {
        dimension_name,
        operator: DimensionOperator::Exact,
        expressions: vec![value],
    })
}

/// Render a metric predicate into the provider filter shape.
pub fn render_metric_predicate(
    predicate: &Predicate,
    catalog: &Catalog,
) -> Result<MetricFilter, FilterError> {
    let metric_name = provider_name(catalog, &predicate.key)?;

    Ok(MetricFilter {
        metric_name,
        operator: MetricOperator::try_from(predicate.operator)?,
        comparison_value: predicate.value.render(),
    })
}

fn provider_name(catalog: &Catalog, column: &str) -> Result<String, FilterError> {
    catalog
        .provider_name(column)
        .map(str::to_string)
        .ok_or_else(|| FilterError::UnknownColumn(column.to_string()))
}
