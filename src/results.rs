//! Result types for section analysis

use serde::{Deserialize, Serialize};

/// One step of a moment-curvature sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MomentCurvaturePoint {
    /// Imposed curvature (1/m)
    pub curvature: f64,
    /// Neutral axis used for the step, `None` if equilibrium was not found
    pub neutral_axis: Option<f64>,
    /// Resisting moment (N·m), `None` if equilibrium was not found
    pub moment: Option<f64>,
}

impl MomentCurvaturePoint {
    /// `(curvature, moment)` pair
    pub fn as_tuple(&self) -> (f64, Option<f64>) {
        (self.curvature, self.moment)
    }

    pub fn is_converged(&self) -> bool {
        self.moment.is_some()
    }
}

/// One step of an axial force / moment interaction sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InteractionPoint {
    pub neutral_axis: f64,
    /// Axial force (N), tension positive
    pub axial_force: f64,
    /// Moment about the section centroid (N·m)
    pub moment: f64,
}

impl InteractionPoint {
    /// `(axial_force, moment)` pair
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.axial_force, self.moment)
    }
}

/// Keep only the converged `(curvature, moment)` pairs of a sweep
pub fn converged_points(points: &[MomentCurvaturePoint]) -> Vec<(f64, f64)> {
    points
        .iter()
        .filter_map(|p| p.moment.map(|m| (p.curvature, m)))
        .collect()
}

/// Summary of a moment-curvature sweep
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepSummary {
    /// Largest moment magnitude found
    pub peak_moment: f64,
    /// Curvature at which the peak occurred
    pub peak_curvature: f64,
    /// Steps that reached equilibrium
    pub converged: usize,
    /// Steps recorded without a moment
    pub failed: usize,
}

impl SweepSummary {
    pub fn from_points(points: &[MomentCurvaturePoint]) -> Self {
        let mut summary = Self::default();
        for point in points {
            match point.moment {
                Some(m) => {
                    summary.converged += 1;
                    if m.abs() > summary.peak_moment.abs() {
                        summary.peak_moment = m;
                        summary.peak_curvature = point.curvature;
                    }
                }
                None => summary.failed += 1,
            }
        }
        summary
    }
}

impl Default for SweepSummary {
    fn default() -> Self {
        Self {
            peak_moment: 0.0,
            peak_curvature: 0.0,
            converged: 0,
            failed: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(curvature: f64, moment: Option<f64>) -> MomentCurvaturePoint {
        MomentCurvaturePoint {
            curvature,
            neutral_axis: moment.map(|_| 0.0),
            moment,
        }
    }

    #[test]
    fn test_converged_points_filters_failures() {
        let points = [point(0.0, Some(0.0)), point(0.01, None), point(0.02, Some(5.0))];
        assert_eq!(converged_points(&points), vec![(0.0, 0.0), (0.02, 5.0)]);
        assert_eq!(points[1].as_tuple(), (0.01, None));
        assert!(!points[1].is_converged());
    }

    #[test]
    fn test_summary() {
        let points = [
            point(0.0, Some(0.0)),
            point(0.01, Some(120.0)),
            point(0.02, Some(-150.0)),
            point(0.03, None),
        ];
        let summary = SweepSummary::from_points(&points);
        assert_eq!(summary.converged, 3);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.peak_moment, -150.0);
        assert_eq!(summary.peak_curvature, 0.02);
    }
}
