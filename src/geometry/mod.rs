//! Section geometry: points, primitive shapes and composite areas

mod composite;
mod point;
mod shapes;

pub use composite::{Component, CompositeArea};
pub use point::Point;
pub use shapes::{Circle, PointArea, Rectangle, Tee, Triangle};

use serde::{Deserialize, Serialize};

use crate::error::{SectionError, SectionResult};

/// Second moment of area about centroidal axes, in m⁴
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Inertia {
    /// About the horizontal (x) axis, governs bending in y
    pub ix: f64,
    /// About the vertical (y) axis
    pub iy: f64,
}

/// Axis-aligned extent of a shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    /// Box of half-sizes `(hx, hy)` around `centre`
    pub fn around(centre: Point, hx: f64, hy: f64) -> Self {
        Self {
            min: centre.offset(-hx, -hy),
            max: centre.offset(hx, hy),
        }
    }

    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self {
            min: self.min.offset(dx, dy),
            max: self.max.offset(dx, dy),
        }
    }

    pub fn union(&self, other: &Bounds) -> Self {
        Self {
            min: Point::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// Any shape that can take part in a section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Area {
    Rectangle(Rectangle),
    Circle(Circle),
    Triangle(Triangle),
    Tee(Tee),
    Point(PointArea),
    Composite(CompositeArea),
}

impl Area {
    /// Parse a shape from its JSON description
    pub fn from_json(json: &str) -> SectionResult<Self> {
        serde_json::from_str(json).map_err(|e| SectionError::type_mismatch("area", e))
    }

    pub fn area(&self) -> f64 {
        match self {
            Area::Rectangle(s) => s.area(),
            Area::Circle(s) => s.area(),
            Area::Triangle(s) => s.area(),
            Area::Tee(s) => s.area(),
            Area::Point(s) => s.area,
            Area::Composite(s) => s.area(),
        }
    }

    pub fn centroid(&self) -> SectionResult<Point> {
        match self {
            Area::Rectangle(s) => Ok(s.centroid()),
            Area::Circle(s) => Ok(s.centroid()),
            Area::Triangle(s) => Ok(s.centroid()),
            Area::Tee(s) => Ok(s.centroid()),
            Area::Point(s) => Ok(s.centroid()),
            Area::Composite(s) => s.centroid(),
        }
    }

    pub fn moment_of_inertia(&self) -> SectionResult<Inertia> {
        match self {
            Area::Rectangle(s) => Ok(s.moment_of_inertia()),
            Area::Circle(s) => Ok(s.moment_of_inertia()),
            Area::Triangle(s) => Ok(s.moment_of_inertia()),
            Area::Tee(s) => s.moment_of_inertia(),
            Area::Point(_) => Ok(Inertia::default()),
            Area::Composite(s) => s.moment_of_inertia(),
        }
    }

    /// Extent of the shape, `None` for an empty composite
    pub fn bounds(&self) -> SectionResult<Option<Bounds>> {
        match self {
            Area::Rectangle(s) => Ok(Some(s.bounds())),
            Area::Circle(s) => Ok(Some(s.bounds())),
            Area::Triangle(s) => Ok(Some(s.bounds())),
            Area::Tee(s) => s.bounds().map(Some),
            Area::Point(s) => Ok(Some(s.bounds())),
            Area::Composite(s) => s.bounds(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Area::Rectangle(_) => "Rectangle",
            Area::Circle(_) => "Circle",
            Area::Triangle(_) => "Triangle",
            Area::Tee(_) => "Tee",
            Area::Point(_) => "Point",
            Area::Composite(_) => "Composite",
        }
    }
}

impl From<Rectangle> for Area {
    fn from(value: Rectangle) -> Self {
        Self::Rectangle(value)
    }
}

impl From<Circle> for Area {
    fn from(value: Circle) -> Self {
        Self::Circle(value)
    }
}

impl From<Triangle> for Area {
    fn from(value: Triangle) -> Self {
        Self::Triangle(value)
    }
}

impl From<Tee> for Area {
    fn from(value: Tee) -> Self {
        Self::Tee(value)
    }
}

impl From<PointArea> for Area {
    fn from(value: PointArea) -> Self {
        Self::Point(value)
    }
}

impl From<CompositeArea> for Area {
    fn from(value: CompositeArea) -> Self {
        Self::Composite(value)
    }
}
