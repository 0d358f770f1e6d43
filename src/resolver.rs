use tracing::debug;

use crate::context::{parse_context, ContextItem};
use crate::errors::{Result, SelectError};
use crate::list::append_unique;
use crate::wildcard::match_pattern;

/// Select every context in `universe` that satisfies at least one filter.
///
/// Filters are processed in the order given; each one scans the universe in
/// its order, and a filter that selects nothing fails the whole call right
/// there with [`SelectError::NoMatch`]. Matches are accumulated without
/// duplicates, so a context selected by two filters keeps the position of
/// its first match. The call is a pure function of its two arguments.
pub fn resolve_contexts(universe: &[String], filters: &[String]) -> Result<Vec<String>> {
    let mut selected = Vec::new();

    for filter in filters {
        let wanted = parse_context(filter)?;
        let mut matched = 0usize;

        for entry in universe {
            // Universe entries come from the index loader and are expected to
            // be well formed; a bad one surfaces its own grammar error.
            let concrete = parse_context(entry)?;
            if filter_matches(&wanted, &concrete) {
                matched += 1;
                append_unique(&mut selected, entry);
            }
        }

        debug!(filter = %filter, matched, "context filter resolved");
        if matched == 0 {
            return Err(SelectError::NoMatch {
                filter: filter.clone(),
            });
        }
    }

    Ok(selected)
}

/// The filter-match view of two items: an empty filter component accepts any
/// value, a non-empty one must match on its own. This is deliberately not
/// `==`; structural equality treats empty as exactly empty.
fn filter_matches(filter: &ContextItem, concrete: &ContextItem) -> bool {
    component_matches(&filter.project_name, &concrete.project_name)
        && component_matches(&filter.build_type, &concrete.build_type)
        && component_matches(&filter.target_type, &concrete.target_type)
}

fn component_matches(filter: &str, concrete: &str) -> bool {
    filter.is_empty() || match_pattern(filter, concrete)
}
