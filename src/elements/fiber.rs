//! Fiber element - a point area carrying one material

use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::materials::Material;

/// A discrete area of one material at a fixed position in the section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fiber {
    /// Area in m²
    pub area: f64,
    /// X coordinate of the fiber centroid
    pub x: f64,
    /// Y coordinate of the fiber centroid
    pub y: f64,
    pub material: Material,
}

impl Fiber {
    pub fn new(area: f64, x: f64, y: f64, material: Material) -> Self {
        Self { area, x, y, material }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn stress(&self, strain: f64) -> f64 {
        self.material.stress(strain)
    }

    /// Axial force (N) carried at `strain`, positive in tension
    pub fn force(&self, strain: f64) -> f64 {
        self.stress(strain) * self.area
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fiber_force() {
        let steel = Material::bilinear_steel(200e9, 500e6, None).unwrap();
        let fiber = Fiber::new(3.14e-4, 0.05, 0.55, steel);
        assert_eq!(fiber.force(0.01), 500e6 * 3.14e-4);
        assert_eq!(fiber.force(-0.01), -500e6 * 3.14e-4);
        assert_eq!(fiber.position(), Point::new(0.05, 0.55));
    }
}
