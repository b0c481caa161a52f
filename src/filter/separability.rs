use crate::filter::{EnrichedExpr, FilterError};
use crate::parser::ast::Connective;

/// Decide whether the enriched expression reduces to the two-group target
/// shape: at most one homogeneous group per channel, joined only by AND.
///
/// Valid shapes are exactly: a single predicate; a uniform-connective group
/// of one channel; one metric and one dimension predicate joined by AND; or
/// a top-level AND of two uniform-connective, single-channel partitions.
pub fn validate(root: &EnrichedExpr) -> Result<(), FilterError> {
    if root.connectives.len() <= 1 {
        // A lone OR is still rejected when it joins the two channels.
        if root.connectives.first() == Some(&Connective::Or) && root.channels.len() > 1 {
            return Err(FilterError::CrossChannelOr);
        }
        return Ok(());
    }

    if root.channels.len() == 1 {
        return Err(FilterError::MixedConnectiveSameChannel);
    }

    // Both channels with more than one connective: only a top-level AND of
    // two clean partitions survives.
    if root.connectives.first() == Some(&Connective::Or) {
        return Err(FilterError::CrossChannelOr);
    }

    // More than one connective implies a logical root.
    let Some((left, right)) = &root.branches else {
        return Ok(());
    };

    if left.channels.len() > 1 || right.channels.len() > 1 {
        return Err(FilterError::UnpartitionedMixedChannel);
    }

    if left.connectives.len() > 1 || right.connectives.len() > 1 {
        return Err(FilterError::MixedConnectiveWithinPartition);
    }

    Ok(())
}
