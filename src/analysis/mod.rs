//! Equilibrium solver and its options

mod solver;

pub use solver::SectionSolver;

use serde::{Deserialize, Serialize};

/// Default axial force tolerance (N) for neutral-axis searches
pub const DEFAULT_TOLERANCE: f64 = 1e-6;
/// Default number of bisection steps before giving up
pub const DEFAULT_MAX_ITERATIONS: usize = 100;
/// Number of equal neutral-axis increments in an interaction sweep
pub const INTERACTION_STEPS: usize = 50;
/// Curvature (1/m) at which interaction sweeps are evaluated
pub const DEFAULT_INTERACTION_CURVATURE: f64 = 0.002;
/// Half-width of the neutral-axis search when the section has no extent
pub const FALLBACK_HALF_DEPTH: f64 = 10.0;

/// Plane-sections strain field `strain(y) = curvature * (y - neutral_axis)`.
///
/// Positive curvature puts fibers above the neutral axis in tension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrainProfile {
    pub neutral_axis: f64,
    pub curvature: f64,
}

impl StrainProfile {
    pub fn new(neutral_axis: f64, curvature: f64) -> Self {
        Self {
            neutral_axis,
            curvature,
        }
    }

    pub fn strain_at(&self, y: f64) -> f64 {
        self.curvature * (y - self.neutral_axis)
    }
}

/// Options for section analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverOptions {
    /// Axial force convergence tolerance (N)
    pub tolerance: f64,
    /// Maximum bisection steps per neutral-axis search
    pub max_iterations: usize,
    /// Neutral-axis increments in an interaction sweep
    pub interaction_steps: usize,
    /// Curvature used for interaction sweeps
    pub interaction_curvature: f64,
    /// Fixed search half-width; derived from the section depth when `None`
    pub half_depth: Option<f64>,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            interaction_steps: INTERACTION_STEPS,
            interaction_curvature: DEFAULT_INTERACTION_CURVATURE,
            half_depth: None,
        }
    }
}

impl SolverOptions {
    /// Set convergence tolerance
    pub fn with_tolerance(mut self, tol: f64) -> Self {
        self.tolerance = tol;
        self
    }

    /// Set maximum iterations
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iterations = max_iter;
        self
    }

    /// Set the number of neutral-axis increments in an interaction sweep
    pub fn with_interaction_steps(mut self, steps: usize) -> Self {
        self.interaction_steps = steps;
        self
    }

    /// Set the curvature used for interaction sweeps
    pub fn with_interaction_curvature(mut self, curvature: f64) -> Self {
        self.interaction_curvature = curvature;
        self
    }

    /// Search the neutral axis in `[-half_depth, half_depth]`
    pub fn with_half_depth(mut self, half_depth: f64) -> Self {
        self.half_depth = Some(half_depth);
        self
    }
}
