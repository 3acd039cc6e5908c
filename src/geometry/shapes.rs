//! Primitive shapes with closed-form properties
//!
//! Every primitive stores the position of its own centroid. Second moments
//! are about the shape's centroidal axes.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::{Bounds, Inertia, Point};
use crate::error::{SectionError, SectionResult};

/// Solid rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub centroid_x: f64,
    #[serde(default)]
    pub centroid_y: f64,
}

impl Rectangle {
    /// Create a rectangle centred on the origin
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            centroid_x: 0.0,
            centroid_y: 0.0,
        }
    }

    /// Move the centroid to `(x, y)`
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.centroid_x = x;
        self.centroid_y = y;
        self
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn centroid(&self) -> Point {
        Point::new(self.centroid_x, self.centroid_y)
    }

    pub fn moment_of_inertia(&self) -> Inertia {
        Inertia {
            ix: self.width * self.height.powi(3) / 12.0,
            iy: self.height * self.width.powi(3) / 12.0,
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::around(self.centroid(), self.width / 2.0, self.height / 2.0)
    }
}

/// Solid circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub radius: f64,
    #[serde(default)]
    pub centroid_x: f64,
    #[serde(default)]
    pub centroid_y: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            centroid_x: 0.0,
            centroid_y: 0.0,
        }
    }

    /// Circle of the given diameter, e.g. a reinforcing bar
    pub fn from_diameter(diameter: f64) -> Self {
        Self::new(diameter / 2.0)
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.centroid_x = x;
        self.centroid_y = y;
        self
    }

    pub fn area(&self) -> f64 {
        PI * self.radius.powi(2)
    }

    pub fn centroid(&self) -> Point {
        Point::new(self.centroid_x, self.centroid_y)
    }

    pub fn moment_of_inertia(&self) -> Inertia {
        let i = PI * self.radius.powi(4) / 4.0;
        Inertia { ix: i, iy: i }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::around(self.centroid(), self.radius, self.radius)
    }
}

/// Right triangle with the right angle at its lower-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub base: f64,
    pub height: f64,
    #[serde(default)]
    pub centroid_x: f64,
    #[serde(default)]
    pub centroid_y: f64,
}

impl Triangle {
    pub fn new(base: f64, height: f64) -> Self {
        Self {
            base,
            height,
            centroid_x: 0.0,
            centroid_y: 0.0,
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.centroid_x = x;
        self.centroid_y = y;
        self
    }

    pub fn area(&self) -> f64 {
        0.5 * self.base * self.height
    }

    pub fn centroid(&self) -> Point {
        Point::new(self.centroid_x, self.centroid_y)
    }

    pub fn moment_of_inertia(&self) -> Inertia {
        Inertia {
            ix: self.base * self.height.powi(3) / 36.0,
            iy: self.height * self.base.powi(3) / 36.0,
        }
    }

    pub fn bounds(&self) -> Bounds {
        // Centroid sits a third of the way in from the right-angle corner
        Bounds {
            min: Point::new(
                self.centroid_x - self.base / 3.0,
                self.centroid_y - self.height / 3.0,
            ),
            max: Point::new(
                self.centroid_x + 2.0 * self.base / 3.0,
                self.centroid_y + 2.0 * self.height / 3.0,
            ),
        }
    }
}

/// Tee: a flange `bf x hf` on top of a web `bw x hw`, sharing a vertical axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tee {
    /// Flange width
    pub bf: f64,
    /// Flange thickness
    pub hf: f64,
    /// Web width
    pub bw: f64,
    /// Web height (below the flange)
    pub hw: f64,
    #[serde(default)]
    pub centroid_x: f64,
    #[serde(default)]
    pub centroid_y: f64,
}

impl Tee {
    pub fn new(bf: f64, hf: f64, bw: f64, hw: f64) -> Self {
        Self {
            bf,
            hf,
            bw,
            hw,
            centroid_x: 0.0,
            centroid_y: 0.0,
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.centroid_x = x;
        self.centroid_y = y;
        self
    }

    /// Overall depth
    pub fn depth(&self) -> f64 {
        self.hf + self.hw
    }

    fn flange_area(&self) -> f64 {
        self.bf * self.hf
    }

    fn web_area(&self) -> f64 {
        self.bw * self.hw
    }

    pub fn area(&self) -> f64 {
        self.flange_area() + self.web_area()
    }

    /// Height of the centroid above the bottom of the web
    pub fn centroid_height(&self) -> SectionResult<f64> {
        let area = self.area();
        if !(area > 0.0) {
            return Err(SectionError::DegenerateGeometry { area });
        }
        let y_flange = self.hw + self.hf / 2.0;
        let y_web = self.hw / 2.0;
        Ok((self.flange_area() * y_flange + self.web_area() * y_web) / area)
    }

    pub fn centroid(&self) -> Point {
        Point::new(self.centroid_x, self.centroid_y)
    }

    pub fn moment_of_inertia(&self) -> SectionResult<Inertia> {
        let y_bar = self.centroid_height()?;
        let d_flange = self.hw + self.hf / 2.0 - y_bar;
        let d_web = self.hw / 2.0 - y_bar;
        Ok(Inertia {
            ix: self.bf * self.hf.powi(3) / 12.0
                + self.flange_area() * d_flange.powi(2)
                + self.bw * self.hw.powi(3) / 12.0
                + self.web_area() * d_web.powi(2),
            iy: self.hf * self.bf.powi(3) / 12.0 + self.hw * self.bw.powi(3) / 12.0,
        })
    }

    pub fn bounds(&self) -> SectionResult<Bounds> {
        let y_bar = self.centroid_height()?;
        let half_width = self.bf.max(self.bw) / 2.0;
        Ok(Bounds {
            min: Point::new(self.centroid_x - half_width, self.centroid_y - y_bar),
            max: Point::new(
                self.centroid_x + half_width,
                self.centroid_y + self.depth() - y_bar,
            ),
        })
    }
}

/// Concentrated area with no self-inertia, the footprint of a fiber
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointArea {
    pub area: f64,
    #[serde(default)]
    pub centroid_x: f64,
    #[serde(default)]
    pub centroid_y: f64,
}

impl PointArea {
    pub fn new(area: f64) -> Self {
        Self {
            area,
            centroid_x: 0.0,
            centroid_y: 0.0,
        }
    }

    pub fn centroid(&self) -> Point {
        Point::new(self.centroid_x, self.centroid_y)
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::around(self.centroid(), 0.0, 0.0)
    }
}
