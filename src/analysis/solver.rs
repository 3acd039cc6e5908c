//! Neutral-axis equilibrium and curvature sweeps
//!
//! The search for the neutral axis is a bracketed bisection on
//! `N(neutral_axis) - target`. While the residual changes sign across the
//! bracket the midpoint replaces the end with the same sign, which converges
//! for any continuous axial-force curve. When both ends lie on the same side
//! of the target the bracket is walked toward the end nearer the target; a
//! midpoint force outside the end forces proves the curve is not monotonic and
//! is reported separately from plain non-convergence.

use log::{debug, trace, warn};

use super::{SolverOptions, StrainProfile, FALLBACK_HALF_DEPTH};
use crate::elements::Section;
use crate::error::{SectionError, SectionResult};
use crate::results::{InteractionPoint, MomentCurvaturePoint, SweepSummary};

/// Equilibrium solver over a borrowed section
#[derive(Debug, Clone)]
pub struct SectionSolver<'a> {
    section: &'a Section,
    options: SolverOptions,
}

impl<'a> SectionSolver<'a> {
    /// Create a solver with default options
    pub fn new(section: &'a Section) -> Self {
        Self::with_options(section, SolverOptions::default())
    }

    /// Create a solver with explicit options
    pub fn with_options(section: &'a Section, options: SolverOptions) -> Self {
        if !section.is_monotonic() {
            debug!(
                "section '{}' has softening or rupturing materials; neutral-axis searches may not bracket",
                section.name
            );
        }
        Self { section, options }
    }

    /// Section being analysed
    pub fn section(&self) -> &Section {
        self.section
    }

    /// Options in effect
    pub fn options(&self) -> &SolverOptions {
        &self.options
    }

    /// Axial force (N, tension positive) for a neutral axis and curvature
    pub fn calculate_axial_force(&self, neutral_axis: f64, curvature: f64) -> f64 {
        let profile = StrainProfile::new(neutral_axis, curvature);
        self.section.axial_force(|_, y| profile.strain_at(y))
    }

    /// Moment about the section centroid for a neutral axis and curvature
    pub fn calculate_moment(&self, neutral_axis: f64, curvature: f64) -> SectionResult<f64> {
        let profile = StrainProfile::new(neutral_axis, curvature);
        self.section.bending_moment(|_, y| profile.strain_at(y))
    }

    /// Moment with the neutral axis placed at the section centroid
    pub fn calculate_moment_capacity(&self, curvature: f64) -> SectionResult<f64> {
        let neutral_axis = self.section.centroid()?.y;
        self.calculate_moment(neutral_axis, curvature)
    }

    /// Neutral-axis search interval `[-H, H]`.
    ///
    /// `H` is the larger of the section depth and the distance of its far
    /// fiber from `y = 0`, so the interval always spans the whole section.
    pub fn search_bracket(&self) -> SectionResult<(f64, f64)> {
        if let Some(h) = self.options.half_depth {
            return Ok((-h, h));
        }
        let h = match self.section.bounds()? {
            Some(b) => b.height().max(b.min.y.abs()).max(b.max.y.abs()),
            None => 0.0,
        };
        let h = if h > 0.0 { h } else { FALLBACK_HALF_DEPTH };
        Ok((-h, h))
    }

    /// Find the neutral axis giving `target_axial_force` at `curvature` with
    /// the solver's tolerance and iteration limit
    pub fn find_neutral_axis(&self, target_axial_force: f64, curvature: f64) -> SectionResult<f64> {
        self.find_neutral_axis_with(
            target_axial_force,
            curvature,
            self.options.tolerance,
            self.options.max_iterations,
        )
    }

    /// Find the neutral axis with an explicit tolerance and iteration limit.
    ///
    /// # Errors
    /// * [`SectionError::NonMonotonicBracket`] when the target lies outside
    ///   the end forces and a midpoint shows the curve is not monotonic. This
    ///   is returned as soon as it is detected, so sections with rupturing or
    ///   softening materials can fail before `max_iter` steps even when the
    ///   target is simply unreachable.
    /// * [`SectionError::Convergence`] after exactly `max_iter` bisection
    ///   steps without `|N - target| < tolerance`. For sections whose axial
    ///   force is monotonic in the neutral axis this is the only failure.
    pub fn find_neutral_axis_with(
        &self,
        target_axial_force: f64,
        curvature: f64,
        tolerance: f64,
        max_iter: usize,
    ) -> SectionResult<f64> {
        let (mut lower, mut upper) = self.search_bracket()?;
        let mut r_lower = self.calculate_axial_force(lower, curvature) - target_axial_force;
        let mut r_upper = self.calculate_axial_force(upper, curvature) - target_axial_force;
        let mut residual = f64::NAN;

        for iteration in 1..=max_iter {
            let mid = 0.5 * (lower + upper);
            residual = self.calculate_axial_force(mid, curvature) - target_axial_force;
            trace!(
                "iteration {}: bracket [{}, {}], neutral axis {}, residual {}",
                iteration,
                lower,
                upper,
                mid,
                residual
            );

            if residual.abs() < tolerance {
                debug!(
                    "neutral axis {} found in {} iterations (curvature {}, target {})",
                    mid, iteration, curvature, target_axial_force
                );
                return Ok(mid);
            }

            let lower_negative = r_lower < 0.0;
            if lower_negative != (r_upper < 0.0) {
                // Root bracketed: keep the sign change inside
                if (residual < 0.0) == lower_negative {
                    lower = mid;
                    r_lower = residual;
                } else {
                    upper = mid;
                    r_upper = residual;
                }
            } else if (residual < 0.0) != lower_negative {
                // Interior sign change: only a non-monotonic curve gets here
                debug!("interior sign change at neutral axis {}", mid);
                upper = mid;
                r_upper = residual;
            } else {
                let (lo, hi) = (r_lower.min(r_upper), r_lower.max(r_upper));
                if residual < lo - tolerance || residual > hi + tolerance {
                    return Err(SectionError::NonMonotonicBracket {
                        lower,
                        upper,
                        force_lower: r_lower + target_axial_force,
                        force_upper: r_upper + target_axial_force,
                        force: residual + target_axial_force,
                    });
                }
                if r_lower.abs() < r_upper.abs() {
                    upper = mid;
                    r_upper = residual;
                } else {
                    lower = mid;
                    r_lower = residual;
                }
            }
        }

        Err(SectionError::Convergence {
            iterations: max_iter,
            lower,
            upper,
            residual,
        })
    }

    /// Moment-curvature sweep.
    ///
    /// With `axial_force` the neutral axis is re-solved for every curvature so
    /// the section carries that force; steps without equilibrium are recorded
    /// with `moment: None`. Without it the neutral axis stays at the centroid.
    pub fn moment_curvature_analysis<I>(
        &self,
        curvatures: I,
        axial_force: Option<f64>,
    ) -> SectionResult<Vec<MomentCurvaturePoint>>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut results = Vec::new();

        for curvature in curvatures {
            let point = match axial_force {
                None => MomentCurvaturePoint {
                    curvature,
                    neutral_axis: Some(self.section.centroid()?.y),
                    moment: Some(self.calculate_moment_capacity(curvature)?),
                },
                Some(target) => match self.find_neutral_axis(target, curvature) {
                    Ok(neutral_axis) => MomentCurvaturePoint {
                        curvature,
                        neutral_axis: Some(neutral_axis),
                        moment: Some(self.calculate_moment(neutral_axis, curvature)?),
                    },
                    Err(e) if e.is_solver_failure() => {
                        warn!("no equilibrium at curvature {}: {}", curvature, e);
                        MomentCurvaturePoint {
                            curvature,
                            neutral_axis: None,
                            moment: None,
                        }
                    }
                    Err(e) => return Err(e),
                },
            };
            results.push(point);
        }

        let summary = SweepSummary::from_points(&results);
        debug!(
            "moment-curvature sweep of '{}': {} converged, {} failed, peak moment {} at curvature {}",
            self.section.name,
            summary.converged,
            summary.failed,
            summary.peak_moment,
            summary.peak_curvature
        );
        Ok(results)
    }

    /// Interaction sweep at the configured curvature
    pub fn interaction_curve(
        &self,
        neutral_axis_range: (f64, f64),
    ) -> SectionResult<Vec<InteractionPoint>> {
        self.interaction_curve_at(neutral_axis_range, self.options.interaction_curvature)
    }

    /// Sweep the neutral axis over `neutral_axis_range` in equal steps, both
    /// ends included, recording axial force and moment at `curvature`
    pub fn interaction_curve_at(
        &self,
        neutral_axis_range: (f64, f64),
        curvature: f64,
    ) -> SectionResult<Vec<InteractionPoint>> {
        let steps = self.options.interaction_steps;
        if steps == 0 {
            return Err(SectionError::InvalidInput(
                "interaction sweep needs at least one step".to_string(),
            ));
        }

        let (min_na, max_na) = neutral_axis_range;
        let delta = (max_na - min_na) / steps as f64;

        (0..=steps)
            .map(|i| {
                let neutral_axis = min_na + i as f64 * delta;
                Ok(InteractionPoint {
                    neutral_axis,
                    axial_force: self.calculate_axial_force(neutral_axis, curvature),
                    moment: self.calculate_moment(neutral_axis, curvature)?,
                })
            })
            .collect()
    }
}

impl std::fmt::Display for SectionSolver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SectionSolver for {}", self.section.name)
    }
}
