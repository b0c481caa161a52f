use indexmap::IndexSet;
use tracing::debug;

use crate::catalog::{Catalog, Settings};
use crate::filter::{decompose, Channel, WhereFilters};
use crate::request::{ParamError, RouteParams, TimeRange};

/// Raw query-string parameters accepted alongside the route id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    pub where_clause: Option<String>,
    pub out_fields: Option<String>,
    pub time: Option<String>,
}

/// Validated request parameters with defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Params {
    pub metric: Vec<String>,
    pub dimension: Vec<String>,
    pub where_filters: WhereFilters,
    pub out_fields: Vec<String>,
    pub time: TimeRange,
    /// Route flags after `~`, passed through for the caller to interpret
    /// (e.g. enabling time-series backfill).
    pub options: IndexSet<String>,
}

impl Params {
    pub fn validate(
        id: &str,
        query: &QueryParams,
        catalog: &Catalog,
        settings: &Settings,
    ) -> Result<Params, ParamError> {
        let route = RouteParams::parse(id);

        let metric = route.metric;
        for name in &metric {
            if catalog.channel_of(name) != Some(Channel::Metric) {
                return Err(ParamError::InvalidMetric {
                    name: name.clone(),
                    allowed: catalog.metric_aliases().map(str::to_string).collect(),
                });
            }
        }

        let dimension = strip_none_dimension(route.dimension);
        for name in &dimension {
            if catalog.channel_of(name) != Some(Channel::Dimension) {
                return Err(ParamError::InvalidDimension(name.clone()));
            }
        }

        let where_filters = match query.where_clause.as_deref() {
            Some(clause) => decompose(clause, catalog)?.unwrap_or_default(),
            None => WhereFilters::default(),
        };

        let out_fields = match query.out_fields.as_deref() {
            None | Some("*") => Vec::new(),
            Some(fields) => fields
                .split(',')
                .filter(|field| !field.is_empty())
                .map(str::to_string)
                .collect(),
        };

        let time = match query.time.as_deref() {
            Some(value) => TimeRange::parse(value, settings.start_date)?,
            None => TimeRange::defaults(settings.start_date),
        };

        let out_fields = prepare_out_fields(out_fields, &metric, &dimension, catalog);

        debug!(
            metrics = metric.len(),
            dimensions = dimension.len(),
            "validated request parameters"
        );

        Ok(Params {
            metric,
            dimension,
            where_filters,
            out_fields,
            time,
            options: route.options,
        })
    }
}

/// `none` alone means "no dimensions"; mixed with real dimensions it is
/// stripped.
fn strip_none_dimension(dimension: Vec<String>) -> Vec<String> {
    if dimension.iter().any(|name| name == "none") {
        return dimension.into_iter().filter(|name| name != "none").collect();
    }
    dimension
}

/// Downstream row filtering only sees the requested fields. When the caller
/// did not narrow them, expose the requested metrics and dimensions, plus
/// `timestamp` for time-dimensioned requests.
fn prepare_out_fields(
    out_fields: Vec<String>,
    metric: &[String],
    dimension: &[String],
    catalog: &Catalog,
) -> Vec<String> {
    if !out_fields.is_empty() {
        return out_fields;
    }

    let mut fields: Vec<String> = metric.iter().chain(dimension).cloned().collect();
    if dimension.iter().any(|name| catalog.is_time_dimension(name)) {
        fields.push("timestamp".to_string());
    }

    fields
}
