use tracing::debug;

use crate::catalog::Catalog;
use crate::filter::{emit, enrich, strip_tautologies, validate, FilterError, WhereFilters};
use crate::parser::ast::Expr;

/// Decompose a WHERE-style filter expression into the two-group model.
///
/// Returns `Ok(None)` when the expression is empty once tautologies are
/// stripped, i.e. the filter is absent.
pub fn decompose(where_sql: &str, catalog: &Catalog) -> Result<Option<WhereFilters>, FilterError> {
    let stripped = strip_tautologies(where_sql);
    if stripped.trim().is_empty() {
        return Ok(None);
    }

    let expr = Expr::parse(&stripped)?;
    let enriched = enrich(&expr, catalog)?;
    validate(&enriched)?;

    let filters = emit(&enriched);
    debug!(
        metric_filters = filters.metric_filters.filters.len(),
        dimension_filters = filters.dimension_filters.filters.len(),
        "decomposed where clause"
    );

    Ok(Some(filters))
}
