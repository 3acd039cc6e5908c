//! Fiber section - the collection of fibers and bulk geometry analysed by the solver

use serde::Serialize;

use super::Fiber;
use crate::error::{SectionError, SectionResult};
use crate::geometry::{Area, Bounds, CompositeArea, Inertia, Point, PointArea, Rectangle};
use crate::materials::Material;

/// Cross-section discretised into fibers.
///
/// Every fiber is also registered as a point area in the composite aggregate,
/// so centroid and inertia queries see the same geometry the solver
/// integrates. Bulk areas added with [`Section::add_area`] take part in the
/// geometric properties only. Sections are loaded from documents through
/// [`crate::model::SectionModel`], which keeps that registration intact.
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub name: String,
    fibers: Vec<Fiber>,
    composite: CompositeArea,
}

impl Section {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            fibers: Vec::new(),
            composite: CompositeArea::new(),
        }
    }

    /// Add a fiber of `area` at `(x, y)`. Coincident fibers are allowed.
    pub fn add_fiber(&mut self, area: f64, x: f64, y: f64, material: Material) {
        self.fibers.push(Fiber::new(area, x, y, material));
        self.composite.add_area(PointArea::new(area), x, y);
    }

    /// Register bulk geometry at its own centroid
    pub fn add_area(&mut self, area: impl Into<Area>) {
        self.composite.add_area(area, 0.0, 0.0);
    }

    /// Mesh a rectangle into `nx * ny` equal fibers of one material
    pub fn add_rectangular_patch(
        &mut self,
        rect: Rectangle,
        nx: usize,
        ny: usize,
        material: Material,
    ) -> SectionResult<()> {
        if nx == 0 || ny == 0 {
            return Err(SectionError::InvalidInput(format!(
                "patch needs at least one fiber per direction (received {} x {})",
                nx, ny
            )));
        }
        if !(rect.width > 0.0 && rect.height > 0.0) {
            return Err(SectionError::InvalidInput(format!(
                "patch dimensions must be positive (received {} x {})",
                rect.width, rect.height
            )));
        }

        let dx = rect.width / nx as f64;
        let dy = rect.height / ny as f64;
        let fiber_area = dx * dy;
        let x0 = rect.centroid_x - rect.width / 2.0 + dx / 2.0;
        let y0 = rect.centroid_y - rect.height / 2.0 + dy / 2.0;

        for j in 0..ny {
            for i in 0..nx {
                self.add_fiber(fiber_area, x0 + i as f64 * dx, y0 + j as f64 * dy, material);
            }
        }
        Ok(())
    }

    pub fn fibers(&self) -> &[Fiber] {
        &self.fibers
    }

    pub fn composite(&self) -> &CompositeArea {
        &self.composite
    }

    /// Sum of fiber areas (bulk areas excluded)
    pub fn total_area(&self) -> f64 {
        self.fibers.iter().map(|f| f.area).sum()
    }

    /// Area of everything registered, fibers and bulk geometry
    pub fn gross_area(&self) -> f64 {
        self.composite.area()
    }

    pub fn centroid(&self) -> SectionResult<Point> {
        self.composite.centroid()
    }

    pub fn moment_of_inertia(&self) -> SectionResult<Inertia> {
        self.composite.moment_of_inertia()
    }

    /// Extent of all registered geometry, `None` for an empty section
    pub fn bounds(&self) -> SectionResult<Option<Bounds>> {
        self.composite.bounds()
    }

    /// Vertical extent of the section, zero when empty
    pub fn depth(&self) -> SectionResult<f64> {
        Ok(self.bounds()?.map_or(0.0, |b| b.height()))
    }

    /// Whether every fiber material has non-decreasing stress
    pub fn is_monotonic(&self) -> bool {
        self.fibers.iter().all(|f| f.material.is_monotonic())
    }

    /// Resultant axial force (N, tension positive) for a strain field `strain_fn(x, y)`
    pub fn axial_force<F>(&self, strain_fn: F) -> f64
    where
        F: Fn(f64, f64) -> f64,
    {
        self.fibers
            .iter()
            .map(|f| f.force(strain_fn(f.x, f.y)))
            .sum()
    }

    /// Bending moment (N·m) about the horizontal centroidal axis.
    ///
    /// Each fiber force acts on the signed lever arm `y - y_centroid`. Only
    /// uniaxial bending in the y direction is modelled.
    pub fn bending_moment<F>(&self, strain_fn: F) -> SectionResult<f64>
    where
        F: Fn(f64, f64) -> f64,
    {
        let yc = self.centroid()?.y;
        Ok(self
            .fibers
            .iter()
            .map(|f| f.force(strain_fn(f.x, f.y)) * (f.y - yc))
            .sum())
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Section: {}, {} fibers, total area: {}",
            self.name,
            self.fibers.len(),
            self.total_area()
        )
    }
}
