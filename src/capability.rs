//! Capabilities injected by the host application.
//!
//! Position-aware editors need canvas dimensions, and the algorithm
//! selector needs the engine's algorithm list. Both arrive through narrow
//! traits; absence or failure always degrades to an explicit fallback,
//! never to a silently guessed value.

use crate::foundation::error::ConfigResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Canvas dimensions in pixels.
pub struct ResolutionDimensions {
    /// Canvas width.
    pub width: u32,
    /// Canvas height.
    pub height: u32,
}

impl ResolutionDimensions {
    /// Length of the shortest edge.
    pub fn shortest_side(self) -> u32 {
        self.width.min(self.height)
    }

    /// Length of the longest edge.
    pub fn longest_side(self) -> u32 {
        self.width.max(self.height)
    }
}

/// Project-level state position editors resolve against.
pub trait ProjectState {
    /// Current canvas dimensions.
    fn resolution_dimensions(&self) -> ResolutionDimensions;

    /// Name of the target resolution (e.g. `"1080p"`).
    fn target_resolution(&self) -> String;

    /// Whether the canvas is landscape.
    fn is_horizontal(&self) -> bool;
}

#[derive(Clone, Debug)]
/// A fixed [`ProjectState`] for hosts without live project plumbing.
pub struct FixedProjectState {
    /// Dimensions reported to editors.
    pub dimensions: ResolutionDimensions,
    /// Resolution name reported to editors.
    pub resolution_name: String,
}

impl ProjectState for FixedProjectState {
    fn resolution_dimensions(&self) -> ResolutionDimensions {
        self.dimensions
    }

    fn target_resolution(&self) -> String {
        self.resolution_name.clone()
    }

    fn is_horizontal(&self) -> bool {
        self.dimensions.width >= self.dimensions.height
    }
}

/// Built-in algorithm names used when the engine cannot be asked.
pub const FALLBACK_FIND_VALUE_ALGORITHMS: &[&str] = &[
    "linear",
    "sinusoidal",
    "triangular",
    "sawtooth",
    "square",
    "exponential",
    "logarithmic",
    "random",
];

/// Source of the engine's find-value algorithm names.
#[async_trait::async_trait]
pub trait AlgorithmCatalog: Send + Sync {
    /// List the algorithm names the engine currently supports.
    async fn find_value_algorithms(&self) -> ConfigResult<Vec<String>>;
}

/// Fetch the algorithm list, degrading to the built-in fallback.
///
/// Returns the names plus a `degraded` flag the UI surfaces as a
/// non-blocking warning; selection must stay usable either way.
pub async fn load_find_value_algorithms(
    catalog: Option<&dyn AlgorithmCatalog>,
) -> (Vec<String>, bool) {
    let fallback = || {
        FALLBACK_FIND_VALUE_ALGORITHMS
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
    };

    let Some(catalog) = catalog else {
        tracing::warn!("no algorithm catalog available, using built-in list");
        return (fallback(), true);
    };

    match catalog.find_value_algorithms().await {
        Ok(names) if !names.is_empty() => (names, false),
        Ok(_) => {
            tracing::warn!("algorithm catalog returned an empty list, using built-in list");
            (fallback(), true)
        }
        Err(err) => {
            tracing::warn!(error = %err, "algorithm catalog failed, using built-in list");
            (fallback(), true)
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/capability.rs"]
mod tests;
