//! Fiber Section - cross-section analysis by fiber integration
//!
//! A section is discretised into fibers, each with an area, a position and a
//! uniaxial material law. Under a plane-sections strain field
//! `strain(y) = curvature * (y - neutral_axis)` the library integrates fiber
//! stresses into axial force and bending moment, and provides:
//! - Material laws (linear, bilinear steel, Park strain-hardening steel, EC2 concrete)
//! - Section geometry (rectangle, circle, triangle, tee, composites)
//! - Neutral-axis equilibrium search for a target axial force
//! - Moment-curvature and axial force / moment interaction sweeps
//!
//! Tension is positive, compression negative.
//!
//! ## Example
//! ```rust
//! use fiber_section::prelude::*;
//!
//! let mut section = Section::new("RC beam");
//!
//! let concrete = Material::concrete_ec2(30e6, 0.002, 0.0035).unwrap();
//! let steel = Material::bilinear_steel(200e9, 500e6, None).unwrap();
//!
//! // 300 x 500 concrete block meshed into layers
//! section
//!     .add_rectangular_patch(Rectangle::new(0.3, 0.5).at(0.15, 0.25), 1, 20, concrete)
//!     .unwrap();
//!
//! // Bottom reinforcement
//! section.add_fiber(4.0e-4, 0.05, 0.05, steel);
//! section.add_fiber(4.0e-4, 0.25, 0.05, steel);
//!
//! let solver = SectionSolver::new(&section);
//! let curve = solver
//!     .moment_curvature_analysis((0..=10).map(|i| -0.001 * i as f64), Some(0.0))
//!     .unwrap();
//! assert_eq!(curve.len(), 11);
//! ```

pub mod analysis;
pub mod elements;
pub mod error;
pub mod geometry;
pub mod materials;
pub mod model;
pub mod results;

// Re-export common types
pub mod prelude {
    pub use crate::analysis::{SectionSolver, SolverOptions, StrainProfile};
    pub use crate::elements::{Fiber, Section};
    pub use crate::error::{SectionError, SectionResult};
    pub use crate::geometry::{
        Area, Bounds, Circle, CompositeArea, Inertia, Point, PointArea, Rectangle, Tee, Triangle,
    };
    pub use crate::materials::{
        BilinearSteel, ConcreteEc2, LinearElastic, Material, ParkSampsonSteel, PostUltimate,
    };
    pub use crate::model::SectionModel;
    pub use crate::results::{InteractionPoint, MomentCurvaturePoint, SweepSummary};
}
