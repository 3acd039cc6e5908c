//! Composite areas built from offset children

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use super::{Area, Bounds, Inertia, Point};
use crate::error::{SectionError, SectionResult};

/// A child shape placed at an offset inside a composite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub area: Area,
    #[serde(default)]
    pub dx: f64,
    #[serde(default)]
    pub dy: f64,
}

impl Component {
    /// Child centroid in the composite's frame
    fn centroid(&self) -> SectionResult<Point> {
        Ok(self.area.centroid()?.offset(self.dx, self.dy))
    }

    /// Zero-area children (e.g. empty composites) add nothing to any moment
    fn has_area(&self) -> bool {
        self.area.area() != 0.0
    }
}

/// Ordered collection of shapes.
///
/// Area, centroid and second moment are recomputed from the children on every
/// query. Overlapping children are not detected and count twice.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompositeArea {
    #[serde(default)]
    components: Vec<Component>,
}

impl CompositeArea {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a shape shifted by `(dx, dy)`
    pub fn add_area(&mut self, area: impl Into<Area>, dx: f64, dy: f64) {
        self.components.push(Component {
            area: area.into(),
            dx,
            dy,
        });
    }

    /// Builder form of [`CompositeArea::add_area`]
    pub fn with_area(mut self, area: impl Into<Area>, dx: f64, dy: f64) -> Self {
        self.add_area(area, dx, dy);
        self
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn area(&self) -> f64 {
        self.components.iter().map(|c| c.area.area()).sum()
    }

    /// Area-weighted centroid of the children
    pub fn centroid(&self) -> SectionResult<Point> {
        let total = self.area();
        if !(total > 0.0) {
            return Err(SectionError::DegenerateGeometry { area: total });
        }

        let mut first_moment = Vector2::zeros();
        for component in self.components.iter().filter(|c| c.has_area()) {
            first_moment += component.centroid()?.to_vector() * component.area.area();
        }
        Ok(Point::from(first_moment / total))
    }

    /// Second moment about the composite centroid (parallel-axis theorem)
    pub fn moment_of_inertia(&self) -> SectionResult<Inertia> {
        let centroid = self.centroid()?;

        let mut total = Inertia::default();
        for component in self.components.iter().filter(|c| c.has_area()) {
            let a = component.area.area();
            let c = component.centroid()?;
            let own = component.area.moment_of_inertia()?;
            total.ix += own.ix + a * (c.y - centroid.y).powi(2);
            total.iy += own.iy + a * (c.x - centroid.x).powi(2);
        }
        Ok(total)
    }

    /// Extent of all children, `None` when empty
    pub fn bounds(&self) -> SectionResult<Option<Bounds>> {
        let mut bounds: Option<Bounds> = None;
        for component in self.components.iter().filter(|c| c.has_area()) {
            if let Some(child) = component.area.bounds()? {
                let child = child.offset(component.dx, component.dy);
                bounds = Some(match bounds {
                    Some(b) => b.union(&child),
                    None => child,
                });
            }
        }
        Ok(bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Circle, PointArea, Rectangle};
    use approx::assert_relative_eq;

    #[test]
    fn test_symmetric_rectangles() {
        let rect = Rectangle::new(0.3, 0.1);
        let composite = CompositeArea::new()
            .with_area(rect, 0.0, 0.2)
            .with_area(rect, 0.0, -0.2);

        assert_relative_eq!(composite.area(), 2.0 * rect.area(), epsilon = 1e-15);
        let centroid = composite.centroid().unwrap();
        assert!(centroid.y.abs() < 1e-12);
        assert!(centroid.x.abs() < 1e-12);

        let inertia = composite.moment_of_inertia().unwrap();
        let expected_ix = 2.0 * (rect.moment_of_inertia().ix + rect.area() * 0.04);
        assert_relative_eq!(inertia.ix, expected_ix, max_relative = 1e-12);
        assert_relative_eq!(inertia.iy, 2.0 * rect.moment_of_inertia().iy, max_relative = 1e-12);
    }

    #[test]
    fn test_centroid_respects_child_centroids() {
        let composite = CompositeArea::new()
            .with_area(Rectangle::new(1.0, 1.0).at(0.5, 0.5), 0.0, 0.0)
            .with_area(Rectangle::new(1.0, 1.0).at(0.5, 0.5), 1.0, 0.0);
        let centroid = composite.centroid().unwrap();
        assert_relative_eq!(centroid.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(centroid.y, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_nested_composite() {
        let inner = CompositeArea::new()
            .with_area(PointArea::new(1.0), 0.0, 1.0)
            .with_area(PointArea::new(1.0), 0.0, -1.0);
        let outer = CompositeArea::new()
            .with_area(inner, 0.0, 2.0)
            .with_area(Circle::new(0.1), 0.0, 0.0);

        let c = outer.centroid().unwrap();
        let circle_area = Circle::new(0.1).area();
        assert_relative_eq!(c.y, 4.0 / (2.0 + circle_area), max_relative = 1e-12);
    }

    #[test]
    fn test_empty_composite_is_degenerate() {
        let composite = CompositeArea::new();
        assert_eq!(
            composite.centroid(),
            Err(SectionError::DegenerateGeometry { area: 0.0 })
        );
        assert!(composite.moment_of_inertia().is_err());
        assert_eq!(composite.bounds(), Ok(None));
    }

    #[test]
    fn test_zero_area_child_is_ignored() {
        let rect = Rectangle::new(1.0, 1.0).at(0.5, 0.5);
        let composite = CompositeArea::new()
            .with_area(CompositeArea::new(), 0.0, 0.0)
            .with_area(rect, 0.0, 0.0)
            .with_area(PointArea::new(0.0), 5.0, 5.0);

        assert_eq!(composite.area(), 1.0);
        assert_eq!(composite.centroid().unwrap(), Point::new(0.5, 0.5));
        assert_eq!(composite.moment_of_inertia().unwrap(), rect.moment_of_inertia());
        let bounds = composite.bounds().unwrap().unwrap();
        assert_eq!(bounds, rect.bounds());
    }

    #[test]
    fn test_bounds_cover_offsets() {
        let composite = CompositeArea::new()
            .with_area(Rectangle::new(0.25, 0.6).at(0.125, 0.3), 0.0, 0.0)
            .with_area(PointArea::new(3.14e-4), 0.05, 0.7);
        let bounds = composite.bounds().unwrap().unwrap();
        assert_relative_eq!(bounds.min.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(bounds.max.y, 0.7, epsilon = 1e-12);
        assert_relative_eq!(bounds.max.x, 0.25, epsilon = 1e-12);
    }
}
