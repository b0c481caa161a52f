use serde::Serialize;
use tracing::debug;

use crate::catalog::{Catalog, Settings};
use crate::filter::FilterError;
use crate::parser::ast::Connective;
use crate::report::{render_dimension_predicate, render_metric_predicate, DimensionFilter, MetricFilter};
use crate::request::Params;

/// Largest page the provider returns in one report.
pub const MAX_RECORD_COUNT: u32 = 10_000;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub view_id: String,
    pub page_size: u32,
    pub date_ranges: Vec<DateRange>,
    pub metrics: Vec<MetricRef>,
    pub dimensions: Vec<DimensionRef>,
    pub metric_filter_clauses: Vec<MetricFilterClause>,
    pub dimension_filter_clauses: Vec<DimensionFilterClause>,
    pub include_empty_rows: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricRef {
    pub expression: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionRef {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricFilterClause {
    pub operator: Connective,
    pub filters: Vec<MetricFilter>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionFilterClause {
    pub operator: Connective,
    pub filters: Vec<DimensionFilter>,
}

/// Map validated request parameters into the provider's report-request wire
/// shape. Filter groups are rendered into the provider vocabulary here.
pub fn build_report_request(
    params: &Params,
    catalog: &Catalog,
    settings: &Settings,
) -> Result<ReportRequest, FilterError> {
    let metrics = params
        .metric
        .iter()
        .map(|alias| provider_name(catalog, alias).map(|expression| MetricRef { expression }))
        .collect::<Result<Vec<_>, _>>()?;

    let dimensions = params
        .dimension
        .iter()
        .map(|alias| provider_name(catalog, alias).map(|name| DimensionRef { name }))
        .collect::<Result<Vec<_>, _>>()?;

    let metric_filters = params
        .where_filters
        .metric_filters
        .filters
        .iter()
        .map(|predicate| render_metric_predicate(predicate, catalog))
        .collect::<Result<Vec<_>, _>>()?;

    let dimension_filters = params
        .where_filters
        .dimension_filters
        .filters
        .iter()
        .map(|predicate| render_dimension_predicate(predicate, catalog))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        metrics = metrics.len(),
        dimensions = dimensions.len(),
        "built report request"
    );

    Ok(ReportRequest {
        view_id: format!("ga:{}", settings.view_id),
        page_size: MAX_RECORD_COUNT,
        date_ranges: vec![DateRange {
            start_date: params.time.start_date.format("%Y-%m-%d").to_string(),
            end_date: params.time.end_date.format("%Y-%m-%d").to_string(),
        }],
        metrics,
        dimensions,
        metric_filter_clauses: vec![MetricFilterClause {
            operator: params.where_filters.metric_filters.connective,
            filters: metric_filters,
        }],
        dimension_filter_clauses: vec![DimensionFilterClause {
            operator: params.where_filters.dimension_filters.connective,
            filters: dimension_filters,
        }],
        include_empty_rows: true,
    })
}

fn provider_name(catalog: &Catalog, column: &str) -> Result<String, FilterError> {
    catalog
        .provider_name(column)
        .map(str::to_string)
        .ok_or_else(|| FilterError::UnknownColumn(column.to_string()))
}
