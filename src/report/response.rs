use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use chrono_tz::Tz;

use crate::catalog::Catalog;
use crate::report::{time_dimension_to_timestamp, TimeError, TimeInterval};

/// Column header of a provider report: dimension names plus typed metric
/// header entries, in row order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColumnHeader {
    pub dimensions: Vec<String>,
    pub metric_header: MetricHeader,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MetricHeader {
    pub metric_header_entries: Vec<MetricHeaderEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MetricHeaderEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportRow {
    pub dimensions: Vec<String>,
    pub metrics: Vec<MetricValues>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MetricValues {
    pub values: Vec<String>,
}

/// Geometry-less feature carrying one report row's properties.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: String,
    pub properties: Map<String, Value>,
    pub geometry: Option<Value>,
}

impl Feature {
    pub fn new(properties: Map<String, Value>) -> Self {
        Self {
            kind: "Feature".to_string(),
            properties,
            geometry: None,
        }
    }

    /// Placeholder feature for a time-series gap.
    pub fn empty_at(timestamp: &str) -> Self {
        let mut properties = Map::new();
        properties.insert("timestamp".to_string(), Value::String(timestamp.to_string()));
        Self::new(properties)
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.properties.get("timestamp").and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: String,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            kind: "FeatureCollection".to_string(),
            features,
        }
    }
}

/// Convert report rows to a feature collection. Dimension values become
/// properties under their alias names, time dimensions become a `timestamp`
/// property, and metrics flagged INTEGER by the header are converted to
/// numbers.
pub fn translate_report(
    header: &ColumnHeader,
    rows: &[ReportRow],
    catalog: &Catalog,
    timezone: Tz,
) -> Result<FeatureCollection, TimeError> {
    let dimension_aliases: Vec<String> = header
        .dimensions
        .iter()
        .map(|name| catalog.alias_of(name).unwrap_or(name).to_string())
        .collect();

    let mut features = Vec::with_capacity(rows.len());
    for row in rows {
        let mut properties = Map::new();

        for (alias, value) in dimension_aliases.iter().zip(&row.dimensions) {
            match TimeInterval::from_alias(alias) {
                Some(interval) if catalog.is_time_dimension(alias) => {
                    let timestamp = time_dimension_to_timestamp(interval, value, timezone)?;
                    properties.insert("timestamp".to_string(), Value::String(timestamp));
                }
                _ => {
                    properties.insert(alias.clone(), Value::String(value.clone()));
                }
            }
        }

        if let Some(metrics) = row.metrics.first() {
            for (entry, value) in header
                .metric_header
                .metric_header_entries
                .iter()
                .zip(&metrics.values)
            {
                let alias = catalog.alias_of(&entry.name).unwrap_or(&entry.name).to_string();
                properties.insert(alias, metric_value(&entry.kind, value));
            }
        }

        features.push(Feature::new(properties));
    }

    Ok(FeatureCollection::new(features))
}

fn metric_value(kind: &str, value: &str) -> Value {
    if kind == "INTEGER" {
        if let Ok(int) = value.parse::<i64>() {
            return Value::Number(int.into());
        }
        if let Some(float) = value.parse::<f64>().ok().and_then(Number::from_f64) {
            return Value::Number(float);
        }
    }

    Value::String(value.to_string())
}
