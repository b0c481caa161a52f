use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex::Regex;

static ID_PARAM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<metrics>[^:]+):?(?:(?P<dimensions>[^~]+)~?(?P<options>.+)?)?$")
        .expect("valid pattern")
});

/// Route id parameter split into its delimited parts:
/// `<metrics>:<dimensions>~<options>`, each part comma-delimited.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteParams {
    pub metric: Vec<String>,
    pub dimension: Vec<String>,
    pub options: IndexSet<String>,
}

impl RouteParams {
    pub fn parse(id: &str) -> RouteParams {
        let Some(captures) = ID_PARAM.captures(id) else {
            return RouteParams::default();
        };

        let metric = captures
            .name("metrics")
            .map(|m| split_list(m.as_str()))
            .unwrap_or_default();
        let dimension = captures
            .name("dimensions")
            .map(|m| split_list(m.as_str()))
            .unwrap_or_default();
        let options = captures
            .name("options")
            .map(|m| split_list(m.as_str()).into_iter().collect())
            .unwrap_or_default();

        RouteParams { metric, dimension, options }
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}
