//! Select build contexts out of a multi-project, multi-target solution.
//!
//! A context names one buildable configuration as
//! `Project.BuildType+TargetType`, any component omissible. Filters use the
//! same grammar plus `*` wildcards inside components; a component left out of
//! a filter matches anything.
//!
//! ```
//! use build_context_selection::resolve_contexts;
//!
//! let universe: Vec<String> = [
//!     "app_core.Debug+EVK",
//!     "app_core.Release+EVK",
//!     "app_boot.Debug+EVK",
//! ]
//! .iter()
//! .map(|s| s.to_string())
//! .collect();
//!
//! let picked = resolve_contexts(&universe, &[".Debug".to_string()]).unwrap();
//! assert_eq!(picked, vec!["app_core.Debug+EVK", "app_boot.Debug+EVK"]);
//! ```

pub mod context;
pub mod errors;
pub mod index;
pub mod list;
pub mod resolver;
pub mod wildcard;

use errors::Result;

/// Owns the ordered universe of known contexts and answers filter queries
/// against it. Thin sugar over [`resolve_contexts`] for callers that load
/// the universe once and select repeatedly.
pub struct Selector {
    universe: Vec<String>,
}

impl Selector {
    pub fn new(universe: Vec<String>) -> Self {
        Self { universe }
    }

    /// The full ordered universe this selector was built from.
    pub fn universe(&self) -> &[String] {
        &self.universe
    }

    /// Resolve `filters` against the universe; see [`resolve_contexts`].
    pub fn select(&self, filters: &[String]) -> Result<Vec<String>> {
        resolver::resolve_contexts(&self.universe, filters)
    }
}

/// Re-export the most-used items for callers that skip the module paths.
pub use context::{parse_context, ContextItem};
pub use errors::SelectError;
pub use resolver::resolve_contexts;
pub use wildcard::match_pattern;
