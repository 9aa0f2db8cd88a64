//! Search parameter types.

use serde::{Deserialize, Serialize};

/// Heuristic used to construct the initial routes.
///
/// The enumeration is an extension point: strategies such as savings or
/// sweep would slot in as further variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirstSolutionStrategy {
    /// Let the solver pick a strategy suited to the model.
    #[default]
    Automatic,
    /// Greedily extend each route with the cheapest-arc unvisited node.
    PathCheapestArc,
}

impl FirstSolutionStrategy {
    /// Resolves `Automatic` to the concrete strategy the solver runs.
    ///
    /// For unconstrained arc-cost models that is [`PathCheapestArc`](Self::PathCheapestArc).
    pub fn resolve(self) -> Self {
        match self {
            Self::Automatic => Self::PathCheapestArc,
            other => other,
        }
    }
}

/// Improvement pass applied after first-solution construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocalSearch {
    /// Keep the constructed routes as-is.
    #[default]
    Disabled,
    /// Intra-route 2-opt edge reversal until no improvement remains.
    TwoOpt,
}

/// Parameters controlling a single solve.
///
/// # Examples
///
/// ```
/// use routefirst::search::{FirstSolutionStrategy, SearchParameters};
///
/// let params = SearchParameters::default()
///     .with_first_solution_strategy(FirstSolutionStrategy::PathCheapestArc);
/// assert_eq!(
///     params.first_solution_strategy,
///     FirstSolutionStrategy::PathCheapestArc
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParameters {
    /// First-solution construction strategy.
    pub first_solution_strategy: FirstSolutionStrategy,
    /// Improvement pass run on each constructed route.
    pub local_search: LocalSearch,
}

impl SearchParameters {
    /// Sets the first-solution strategy.
    pub fn with_first_solution_strategy(mut self, strategy: FirstSolutionStrategy) -> Self {
        self.first_solution_strategy = strategy;
        self
    }

    /// Sets the improvement pass.
    pub fn with_local_search(mut self, local_search: LocalSearch) -> Self {
        self.local_search = local_search;
        self
    }
}
