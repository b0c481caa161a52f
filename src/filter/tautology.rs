use once_cell::sync::Lazy;
use regex::Regex;

static TAUTOLOGY_BEFORE_CONNECTIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\(*\s*1\s*=\s*1\s*\)*\s*(?:AND|OR)").expect("valid pattern"));

static TAUTOLOGY_AFTER_CONNECTIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:AND|OR)\s*\(*\s*1\s*=\s*1\s*\)*").expect("valid pattern"));

static TAUTOLOGY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(*\s*1\s*=\s*1\s*\)*").expect("valid pattern"));

/// Strip literal `1=1` tautology clauses before parsing. The three passes
/// cover the clause positions: before a connective, after a connective, and
/// standalone.
pub fn strip_tautologies(where_sql: &str) -> String {
    let stripped = TAUTOLOGY_BEFORE_CONNECTIVE.replace_all(where_sql, "");
    let stripped = TAUTOLOGY_AFTER_CONNECTIVE.replace_all(&stripped, "");
    TAUTOLOGY.replace_all(&stripped, "").into_owned()
}

#[cfg(test)]
mod tests {
    use crate::filter::strip_tautologies;

    #[test]
    pub fn test_strip_bare_tautology() {
        assert_eq!(strip_tautologies("1=1").trim(), "");
        assert_eq!(strip_tautologies("(1=1)").trim(), "");
        assert_eq!(strip_tautologies("1 = 1").trim(), "");
    }

    #[test]
    pub fn test_strip_leading_tautology() {
        assert_eq!(strip_tautologies("1=1 AND views > 100").trim(), "views > 100");
        assert_eq!(strip_tautologies("(1=1) AND views > 100").trim(), "views > 100");
    }

    #[test]
    pub fn test_strip_trailing_tautology() {
        assert_eq!(strip_tautologies("views > 100 AND (1=1)").trim(), "views > 100");
        assert_eq!(strip_tautologies("views > 100 OR 1=1").trim(), "views > 100");
    }

    #[test]
    pub fn test_strip_leaves_real_predicates_alone() {
        assert_eq!(
            strip_tautologies("country='Canada' AND views>100"),
            "country='Canada' AND views>100"
        );
    }
}
