//! Section Model - named materials and geometry that build into a [`Section`]

use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::elements::Section;
use crate::error::{SectionError, SectionResult};
use crate::geometry::{Area, Rectangle};
use crate::materials::Material;

/// A single fiber referring to a named material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FiberSpec {
    pub area: f64,
    pub x: f64,
    pub y: f64,
    pub material: String,
}

/// A rectangle meshed into `nx * ny` fibers of a named material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchSpec {
    pub rect: Rectangle,
    pub nx: usize,
    pub ny: usize,
    pub material: String,
}

/// Serialisable description of a fiber section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectionModel {
    pub name: String,
    /// Materials by name
    #[serde(default)]
    pub materials: HashMap<String, Material>,
    /// Bulk geometry, used for section properties only
    #[serde(default)]
    pub areas: Vec<Area>,
    #[serde(default)]
    pub fibers: Vec<FiberSpec>,
    #[serde(default)]
    pub patches: Vec<PatchSpec>,
}

impl SectionModel {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Parse a model from JSON. Material constants are validated while parsing.
    pub fn from_json(json: &str) -> SectionResult<Self> {
        serde_json::from_str(json).map_err(|e| SectionError::type_mismatch("section model", e))
    }

    pub fn to_json(&self) -> SectionResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| SectionError::InvalidInput(e.to_string()))
    }

    /// Add a named material
    pub fn add_material(&mut self, name: &str, material: Material) -> SectionResult<()> {
        if self.materials.contains_key(name) {
            return Err(SectionError::DuplicateName(name.to_string()));
        }
        self.materials.insert(name.to_string(), material);
        Ok(())
    }

    pub fn add_area(&mut self, area: impl Into<Area>) {
        self.areas.push(area.into());
    }

    pub fn add_fiber(&mut self, area: f64, x: f64, y: f64, material: &str) {
        self.fibers.push(FiberSpec {
            area,
            x,
            y,
            material: material.to_string(),
        });
    }

    pub fn add_patch(&mut self, rect: Rectangle, nx: usize, ny: usize, material: &str) {
        self.patches.push(PatchSpec {
            rect,
            nx,
            ny,
            material: material.to_string(),
        });
    }

    fn material(&self, name: &str) -> SectionResult<Material> {
        self.materials
            .get(name)
            .copied()
            .ok_or_else(|| SectionError::MaterialNotFound(name.to_string()))
    }

    /// Assemble the section, resolving material names
    pub fn build(&self) -> SectionResult<Section> {
        let mut section = Section::new(&self.name);
        for area in &self.areas {
            section.add_area(area.clone());
        }
        for patch in &self.patches {
            let material = self.material(&patch.material)?;
            section.add_rectangular_patch(patch.rect, patch.nx, patch.ny, material)?;
        }
        for fiber in &self.fibers {
            let material = self.material(&fiber.material)?;
            section.add_fiber(fiber.area, fiber.x, fiber.y, material);
        }

        debug!("built {}", section);
        Ok(section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BEAM: &str = r#"{
        "name": "Beam",
        "materials": {
            "C30": { "kind": "concrete_ec2", "fcm": 30e6, "ec1": 0.002, "ecu1": 0.0035 },
            "B500": { "kind": "bilinear_steel", "es": 200e9, "fy": 500e6 }
        },
        "patches": [
            { "rect": { "width": 0.3, "height": 0.5, "centroid_x": 0.15, "centroid_y": 0.25 },
              "nx": 1, "ny": 10, "material": "C30" }
        ],
        "fibers": [
            { "area": 4e-4, "x": 0.05, "y": 0.05, "material": "B500" },
            { "area": 4e-4, "x": 0.25, "y": 0.05, "material": "B500" }
        ]
    }"#;

    #[test]
    fn test_build_from_json() {
        let model = SectionModel::from_json(BEAM).unwrap();
        let section = model.build().unwrap();
        assert_eq!(section.name, "Beam");
        assert_eq!(section.fibers().len(), 12);
        assert!((section.total_area() - (0.15 + 8e-4)).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_material() {
        let mut model = SectionModel::new("Bad");
        model.add_fiber(1e-4, 0.0, 0.0, "S355");
        assert_eq!(
            model.build().unwrap_err(),
            SectionError::MaterialNotFound("S355".to_string())
        );
    }

    #[test]
    fn test_invalid_material_rejected_on_parse() {
        let json = r#"{ "name": "Bad", "materials": { "E": { "kind": "linear", "e": -1.0 } } }"#;
        match SectionModel::from_json(json) {
            Err(SectionError::TypeMismatch { expected, reason }) => {
                assert_eq!(expected, "section model");
                assert!(reason.contains("linear elastic"), "{}", reason);
            }
            other => panic!("expected TypeMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_document() {
        assert!(matches!(
            SectionModel::from_json(r#"{ "materials": [] }"#),
            Err(SectionError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_duplicate_material() {
        let mut model = SectionModel::new("Dup");
        let steel = Material::linear(200e9).unwrap();
        model.add_material("S", steel).unwrap();
        assert_eq!(
            model.add_material("S", steel),
            Err(SectionError::DuplicateName("S".to_string()))
        );
    }

    #[test]
    fn test_json_roundtrip() {
        let mut model = SectionModel::new("Round");
        model.add_material("S", Material::linear(200e9).unwrap()).unwrap();
        model.add_area(Rectangle::new(0.2, 0.2));
        model.add_fiber(1e-4, 0.0, 0.05, "S");
        model.add_patch(Rectangle::new(0.1, 0.1), 2, 2, "S");

        let parsed = SectionModel::from_json(&model.to_json().unwrap()).unwrap();
        assert_eq!(parsed.fibers, model.fibers);
        assert_eq!(parsed.patches, model.patches);
        assert_eq!(parsed.areas, model.areas);
        assert_eq!(parsed.build().unwrap().fibers().len(), 5);
    }
}
