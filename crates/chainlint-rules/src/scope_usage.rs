//! Per-scope occurrence tracking for dotted chain paths.
//!
//! One `ScopeState` per distinct scope, created lazily on first use and
//! kept until `clear`. Counts are monotonically non-decreasing within a
//! scope; once a key lands in the reported set it never leaves.

use chainlint_ast::NodeIndex;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::chains::ChainPath;

/// Opaque scope key. The tracker never looks inside it.
pub type ScopeId = NodeIndex;

#[derive(Default)]
struct ScopeState {
    counts: FxHashMap<String, u32>,
    reported: FxHashSet<String>,
}

/// A repeat that crossed the configured threshold.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainRepeat {
    /// Dot-joined path key.
    pub joined: String,
    /// Occurrence count at the moment the threshold was crossed.
    pub count: u32,
}

/// Tracks how often each dotted path occurs per scope and which prefixes
/// have already been reported there.
#[derive(Default)]
pub struct ScopeUsage {
    scopes: FxHashMap<ScopeId, ScopeState>,
}

impl ScopeUsage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `path` in `scope`.
    ///
    /// Returns the repeat to report when this occurrence is the first to
    /// exceed `max_repeats`, and `None` otherwise. Paths no longer than
    /// `min_depth` are ignored outright: they are neither counted nor
    /// reported.
    pub fn observe(
        &mut self,
        scope: ScopeId,
        path: &ChainPath,
        max_repeats: u32,
        min_depth: u32,
    ) -> Option<ChainRepeat> {
        if path.len() as u32 <= min_depth {
            return None;
        }

        let state = self.scopes.entry(scope).or_default();
        let joined = path.join();
        let count = {
            let entry = state.counts.entry(joined.clone()).or_insert(0);
            *entry += 1;
            *entry
        };
        tracing::trace!(scope = ?scope, path = %joined, count, "observed chain");

        if state.reported.contains(&joined) {
            return None;
        }
        if count <= max_repeats {
            return None;
        }

        // Mark the full path and every prefix down to min_depth as reported,
        // so neither the exact path nor a sub-chain of it fires again in
        // this scope.
        let mut prefix: Vec<&str> = path.segments().iter().map(String::as_str).collect();
        while prefix.len() as u32 >= min_depth {
            state.reported.insert(prefix.join("."));
            prefix.pop();
        }

        Some(ChainRepeat { joined, count })
    }

    /// Drop all per-scope state; called when the traversal that produced
    /// the scope keys is finished.
    pub fn clear(&mut self) {
        self.scopes.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}
