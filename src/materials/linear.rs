//! Linear elastic material

use serde::{Deserialize, Serialize};

use crate::error::{SectionError, SectionResult};

/// Linear elastic law `stress = E * strain`, identical in tension and compression
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LinearElasticParams")]
pub struct LinearElastic {
    /// Modulus of elasticity in Pa
    e: f64,
}

/// Constants as read from a document, before validation
#[derive(Debug, Deserialize)]
pub(super) struct LinearElasticParams {
    e: f64,
}

impl TryFrom<LinearElasticParams> for LinearElastic {
    type Error = SectionError;

    fn try_from(params: LinearElasticParams) -> SectionResult<Self> {
        Self::new(params.e)
    }
}

impl LinearElastic {
    /// Create a linear elastic material with modulus `e` (Pa)
    pub fn new(e: f64) -> SectionResult<Self> {
        let material = Self { e };
        material.validate()?;
        Ok(material)
    }

    /// Modulus of elasticity in Pa
    pub fn elastic_modulus(&self) -> f64 {
        self.e
    }

    pub(crate) fn validate(&self) -> SectionResult<()> {
        if !(self.e.is_finite() && self.e > 0.0) {
            return Err(SectionError::invalid_material(
                "linear elastic",
                format!("elastic modulus must be positive (received {})", self.e),
            ));
        }
        Ok(())
    }

    pub fn stress(&self, strain: f64) -> f64 {
        self.e * strain
    }
}
