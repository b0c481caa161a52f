use std::{env, fmt::Display, fs, path::Path};

use chrono::NaiveDate;
use chrono_tz::Tz;
use indexmap::IndexMap;
use serde::Deserialize;
use tracing::warn;

use crate::catalog::ValueRule;

/// Deployment configuration: the provider view to query, its reporting
/// timezone, the earliest queryable date, and catalog extensions.
///
/// Built once at startup (defaults, then optionally a JSON file, then
/// environment overrides) and passed by reference from there on.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub view_id: String,
    pub analytics_timezone: Tz,
    pub start_date: NaiveDate,
    pub cache_ttl: Option<u64>,
    /// Extra dimension columns: provider name -> alias
    pub dimensions: IndexMap<String, String>,
    /// Extra metric columns: provider name -> alias
    pub metrics: IndexMap<String, String>,
    /// Extra normalization rules: alias -> rule
    pub value_rules: IndexMap<String, ValueRule>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            view_id: String::new(),
            analytics_timezone: Tz::UTC,
            start_date: NaiveDate::from_ymd_opt(2005, 1, 1).unwrap_or_default(),
            cache_ttl: None,
            dimensions: IndexMap::new(),
            metrics: IndexMap::new(),
            value_rules: IndexMap::new(),
        }
    }
}

impl Settings {
    pub fn from_json_file(path: &Path) -> Result<Self, SettingsError> {
        let raw = fs::read_to_string(path).map_err(|err| SettingsError::Io(err.to_string()))?;
        serde_json::from_str(&raw).map_err(|err| SettingsError::Parse(err.to_string()))
    }

    /// Environment variables override file-provided values. Malformed values
    /// are ignored with a warning.
    pub fn apply_env(mut self) -> Self {
        if let Ok(view_id) = env::var("GOOGLE_VIEW_ID") {
            self.view_id = view_id;
        }

        if let Ok(timezone) = env::var("GOOGLE_ANALYTICS_TIMEZONE") {
            match timezone.parse::<Tz>() {
                Ok(timezone) => self.analytics_timezone = timezone,
                Err(_) => warn!(%timezone, "ignoring invalid GOOGLE_ANALYTICS_TIMEZONE"),
            }
        }

        if let Ok(start_date) = env::var("GOOGLE_START_DATE") {
            match NaiveDate::parse_from_str(&start_date, "%Y-%m-%d") {
                Ok(start_date) => self.start_date = start_date,
                Err(_) => warn!(%start_date, "ignoring invalid GOOGLE_START_DATE"),
            }
        }

        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(message) => write!(f, "failed to read settings: {}", message),
            SettingsError::Parse(message) => write!(f, "failed to parse settings: {}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use chrono::NaiveDate;
    use chrono_tz::Tz;

    use crate::catalog::{Settings, SettingsError, ValueRule};

    #[test]
    pub fn test_settings_defaults() {
        let settings = Settings::default();

        assert_eq!(settings.analytics_timezone, Tz::UTC);
        assert_eq!(settings.start_date, NaiveDate::from_ymd_opt(2005, 1, 1).unwrap());
        assert!(settings.dimensions.is_empty());
    }

    #[test]
    pub fn test_settings_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        write!(
            file,
            r#"{{
                "viewId": "12345678",
                "analyticsTimezone": "America/New_York",
                "startDate": "2015-06-01",
                "dimensions": {{ "ga:hostname": "hostname" }},
                "metrics": {{ "ga:bounces": "bounces" }},
                "valueRules": {{ "hostname": "lowercase" }}
            }}"#
        )
        .expect("Failed to write temp file");

        let settings = Settings::from_json_file(file.path()).expect("Failed to load settings");

        assert_eq!(settings.view_id, "12345678");
        assert_eq!(settings.analytics_timezone, Tz::America__New_York);
        assert_eq!(settings.start_date, NaiveDate::from_ymd_opt(2015, 6, 1).unwrap());
        assert_eq!(settings.dimensions.get("ga:hostname"), Some(&"hostname".to_string()));
        assert_eq!(settings.metrics.get("ga:bounces"), Some(&"bounces".to_string()));
        assert_eq!(settings.value_rules.get("hostname"), Some(&ValueRule::Lowercase));
    }

    #[test]
    pub fn test_settings_from_missing_file() {
        let result = Settings::from_json_file(std::path::Path::new("/nonexistent/settings.json"));

        match result {
            Err(SettingsError::Io(_)) => {}
            _ => panic!(),
        }
    }

    #[test]
    pub fn test_settings_from_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        write!(file, "not json").expect("Failed to write temp file");

        let result = Settings::from_json_file(file.path());

        match result {
            Err(SettingsError::Parse(_)) => {}
            _ => panic!(),
        }
    }
}
