use indexmap::IndexMap;

use crate::catalog::{Settings, ValueRule};
use crate::filter::Channel;

/// Immutable column catalog: which columns exist, which channel each belongs
/// to, how aliases map to provider names, and which value rules apply.
///
/// Built once at startup from the static base set plus deployment
/// extensions, then shared by reference. Maps keep insertion order so
/// enumerations stay deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    /// Time dimensions: provider name -> alias
    time_dimensions: IndexMap<String, String>,
    /// Non-time dimensions: provider name -> alias
    dimensions: IndexMap<String, String>,
    /// Metrics: provider name -> alias
    metrics: IndexMap<String, String>,
    /// Normalization rules: alias -> rule
    value_rules: IndexMap<String, ValueRule>,
    /// Derived inverse of the three name maps: alias -> provider name
    alias_to_provider: IndexMap<String, String>,
}

impl Catalog {
    /// The static base set, without deployment extensions.
    pub fn base() -> Self {
        Self::build(&IndexMap::new(), &IndexMap::new(), &IndexMap::new())
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::build(&settings.dimensions, &settings.metrics, &settings.value_rules)
    }

    fn build(
        extra_dimensions: &IndexMap<String, String>,
        extra_metrics: &IndexMap<String, String>,
        extra_value_rules: &IndexMap<String, ValueRule>,
    ) -> Self {
        let mut time_dimensions = IndexMap::new();
        time_dimensions.insert("ga:dateHour".to_string(), "hour".to_string());
        time_dimensions.insert("ga:date".to_string(), "day".to_string());
        time_dimensions.insert("ga:yearWeek".to_string(), "week".to_string());
        time_dimensions.insert("ga:yearMonth".to_string(), "month".to_string());

        let mut dimensions = IndexMap::new();
        dimensions.insert("ga:eventCategory".to_string(), "eventCategory".to_string());
        dimensions.insert("ga:eventAction".to_string(), "eventAction".to_string());
        dimensions.insert("ga:eventLabel".to_string(), "eventLabel".to_string());
        dimensions.insert("ga:country".to_string(), "country".to_string());
        dimensions.insert("ga:countryIsoCode".to_string(), "countryIsoCode".to_string());
        for (provider, alias) in extra_dimensions {
            dimensions.insert(provider.clone(), alias.clone());
        }

        let mut metrics = IndexMap::new();
        metrics.insert("ga:pageviews".to_string(), "views".to_string());
        metrics.insert("ga:uniquePageviews".to_string(), "uniqueViews".to_string());
        metrics.insert("ga:totalEvents".to_string(), "totalEvents".to_string());
        metrics.insert("ga:sessions".to_string(), "sessions".to_string());
        for (provider, alias) in extra_metrics {
            metrics.insert(provider.clone(), alias.clone());
        }

        let mut value_rules = IndexMap::new();
        value_rules.insert("hostname".to_string(), ValueRule::Lowercase);
        for (alias, rule) in extra_value_rules {
            value_rules.insert(alias.clone(), *rule);
        }

        let mut alias_to_provider = IndexMap::new();
        for (provider, alias) in time_dimensions.iter().chain(&dimensions).chain(&metrics) {
            alias_to_provider.insert(alias.clone(), provider.clone());
        }

        Self {
            time_dimensions,
            dimensions,
            metrics,
            value_rules,
            alias_to_provider,
        }
    }

    /// Channel of a column alias; `None` for unknown columns.
    pub fn channel_of(&self, column: &str) -> Option<Channel> {
        if self.metrics.values().any(|alias| alias == column) {
            return Some(Channel::Metric);
        }

        if self.dimensions.values().any(|alias| alias == column)
            || self.time_dimensions.values().any(|alias| alias == column)
        {
            return Some(Channel::Dimension);
        }

        None
    }

    /// Provider name for a column alias.
    pub fn provider_name(&self, column: &str) -> Option<&str> {
        self.alias_to_provider.get(column).map(String::as_str)
    }

    /// Column alias for a provider name.
    pub fn alias_of(&self, provider: &str) -> Option<&str> {
        self.time_dimensions
            .get(provider)
            .or_else(|| self.dimensions.get(provider))
            .or_else(|| self.metrics.get(provider))
            .map(String::as_str)
    }

    pub fn is_time_dimension(&self, column: &str) -> bool {
        self.time_dimensions.values().any(|alias| alias == column)
    }

    pub fn is_time_dimension_provider(&self, provider: &str) -> bool {
        self.time_dimensions.contains_key(provider)
    }

    pub fn value_rule(&self, column: &str) -> Option<&ValueRule> {
        self.value_rules.get(column)
    }

    pub fn metric_aliases(&self) -> impl Iterator<Item = &str> {
        self.metrics.values().map(String::as_str)
    }

    /// All dimension aliases, time dimensions included.
    pub fn dimension_aliases(&self) -> impl Iterator<Item = &str> {
        self.dimensions
            .values()
            .chain(self.time_dimensions.values())
            .map(String::as_str)
    }
}
