//! Error types for section analysis

use thiserror::Error;

/// Main error type for section operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SectionError {
    #[error("Degenerate geometry: total area {area} must be positive")]
    DegenerateGeometry { area: f64 },

    #[error(
        "Neutral axis not found after {iterations} iterations: bracket [{lower}, {upper}], residual {residual}"
    )]
    Convergence {
        /// Bisection steps performed
        iterations: usize,
        /// Lower bound of the last bracket
        lower: f64,
        /// Upper bound of the last bracket
        upper: f64,
        /// Axial force minus target at the last midpoint
        residual: f64,
    },

    #[error(
        "Axial force is not monotonic in [{lower}, {upper}]: midpoint force {force} lies outside [{force_lower}, {force_upper}]"
    )]
    NonMonotonicBracket {
        lower: f64,
        upper: f64,
        force_lower: f64,
        force_upper: f64,
        force: f64,
    },

    #[error("Invalid {material} input: {reason}")]
    InvalidMaterialInput {
        material: &'static str,
        reason: String,
    },

    #[error("Type mismatch: expected {expected}: {reason}")]
    TypeMismatch {
        expected: &'static str,
        reason: String,
    },

    #[error("Material '{0}' not found in model")]
    MaterialNotFound(String),

    #[error("Duplicate name: '{0}'")]
    DuplicateName(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl SectionError {
    pub(crate) fn invalid_material(material: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidMaterialInput {
            material,
            reason: reason.into(),
        }
    }

    pub(crate) fn type_mismatch(expected: &'static str, err: serde_json::Error) -> Self {
        Self::TypeMismatch {
            expected,
            reason: err.to_string(),
        }
    }

    /// Whether a sweep may skip this failure and continue with the next step
    pub fn is_solver_failure(&self) -> bool {
        matches!(
            self,
            SectionError::Convergence { .. } | SectionError::NonMonotonicBracket { .. }
        )
    }
}

/// Result type for section operations
pub type SectionResult<T> = Result<T, SectionError>;
