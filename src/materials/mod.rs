//! Uniaxial stress-strain laws
//!
//! Sign convention used throughout the crate: positive strain and stress are
//! tension, negative are compression.

mod concrete;
mod linear;
mod steel;

pub use concrete::ConcreteEc2;
pub use linear::LinearElastic;
pub use steel::{BilinearSteel, ParkSampsonSteel, PostUltimate};

use concrete::ConcreteEc2Params;
use linear::LinearElasticParams;
use steel::{BilinearSteelParams, ParkSampsonSteelParams};

use serde::{Deserialize, Serialize};

use crate::error::{SectionError, SectionResult};

/// A fiber material, dispatched by kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Material {
    Linear(LinearElastic),
    BilinearSteel(BilinearSteel),
    ParkSampsonSteel(ParkSampsonSteel),
    ConcreteEc2(ConcreteEc2),
}

/// Material document before its constants are checked
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum MaterialParams {
    Linear(LinearElasticParams),
    BilinearSteel(BilinearSteelParams),
    ParkSampsonSteel(ParkSampsonSteelParams),
    ConcreteEc2(ConcreteEc2Params),
}

impl TryFrom<MaterialParams> for Material {
    type Error = SectionError;

    fn try_from(params: MaterialParams) -> SectionResult<Self> {
        match params {
            MaterialParams::Linear(p) => LinearElastic::try_from(p).map(Self::Linear),
            MaterialParams::BilinearSteel(p) => BilinearSteel::try_from(p).map(Self::BilinearSteel),
            MaterialParams::ParkSampsonSteel(p) => {
                ParkSampsonSteel::try_from(p).map(Self::ParkSampsonSteel)
            }
            MaterialParams::ConcreteEc2(p) => ConcreteEc2::try_from(p).map(Self::ConcreteEc2),
        }
    }
}

impl Material {
    /// Linear elastic material with modulus `e` (Pa)
    pub fn linear(e: f64) -> SectionResult<Self> {
        LinearElastic::new(e).map(Self::Linear)
    }

    /// Elastic-perfectly plastic steel, optionally rupturing beyond `euk`
    pub fn bilinear_steel(es: f64, fy: f64, euk: Option<f64>) -> SectionResult<Self> {
        BilinearSteel::new(es, fy, euk).map(Self::BilinearSteel)
    }

    /// Strain-hardening steel (rupture beyond `esu`)
    pub fn park_sampson_steel(
        es: f64,
        fy: f64,
        fu: f64,
        esh: f64,
        esu: f64,
    ) -> SectionResult<Self> {
        ParkSampsonSteel::new(es, fy, fu, esh, esu).map(Self::ParkSampsonSteel)
    }

    /// Eurocode 2 nonlinear concrete
    pub fn concrete_ec2(fcm: f64, ec1: f64, ecu1: f64) -> SectionResult<Self> {
        ConcreteEc2::new(fcm, ec1, ecu1).map(Self::ConcreteEc2)
    }

    /// Parse and validate a material from its JSON description.
    ///
    /// Malformed documents give `TypeMismatch`, bad constants give
    /// `InvalidMaterialInput`.
    pub fn from_json(json: &str) -> SectionResult<Self> {
        let params: MaterialParams =
            serde_json::from_str(json).map_err(|e| SectionError::type_mismatch("material", e))?;
        Material::try_from(params)
    }

    /// Stress (Pa) for a given strain
    pub fn stress(&self, strain: f64) -> f64 {
        match self {
            Material::Linear(m) => m.stress(strain),
            Material::BilinearSteel(m) => m.stress(strain),
            Material::ParkSampsonSteel(m) => m.stress(strain),
            Material::ConcreteEc2(m) => m.stress(strain),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Material::Linear(_) => "linear elastic",
            Material::BilinearSteel(_) => "bilinear steel",
            Material::ParkSampsonSteel(_) => "Park-Sampson steel",
            Material::ConcreteEc2(_) => "EC2 concrete",
        }
    }

    /// Whether stress never decreases with strain. Bisection on the neutral
    /// axis is only reliable for sections made of such materials.
    pub fn is_monotonic(&self) -> bool {
        match self {
            Material::Linear(_) => true,
            Material::BilinearSteel(m) => m.ultimate_strain().is_none(),
            Material::ParkSampsonSteel(m) => m.post_ultimate() == PostUltimate::Plateau,
            Material::ConcreteEc2(_) => false,
        }
    }
}

impl From<LinearElastic> for Material {
    fn from(value: LinearElastic) -> Self {
        Self::Linear(value)
    }
}

impl From<BilinearSteel> for Material {
    fn from(value: BilinearSteel) -> Self {
        Self::BilinearSteel(value)
    }
}

impl From<ParkSampsonSteel> for Material {
    fn from(value: ParkSampsonSteel) -> Self {
        Self::ParkSampsonSteel(value)
    }
}

impl From<ConcreteEc2> for Material {
    fn from(value: ConcreteEc2) -> Self {
        Self::ConcreteEc2(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_matches_variant() {
        let steel = BilinearSteel::new(200e9, 500e6, None).unwrap();
        let material = Material::from(steel);
        assert_eq!(material.stress(0.01), steel.stress(0.01));
        assert_eq!(material.name(), "bilinear steel");
    }

    #[test]
    fn test_from_json() {
        let material = Material::from_json(
            r#"{"kind": "concrete_ec2", "fcm": 30e6, "ec1": 0.0022, "ecu1": 0.0035}"#,
        )
        .unwrap();
        assert!(matches!(material, Material::ConcreteEc2(_)));
        assert!(material.stress(-0.001) < 0.0);
    }

    #[test]
    fn test_from_json_validates() {
        let err = Material::from_json(r#"{"kind": "linear", "e": -1.0}"#).unwrap_err();
        assert!(matches!(err, SectionError::InvalidMaterialInput { .. }));
    }

    #[test]
    fn test_deserialize_rejects_bad_constants() {
        let concrete = r#"{"kind": "concrete_ec2", "fcm": 20e6, "ec1": 0.0, "ecu1": 0.0035}"#;
        assert!(serde_json::from_str::<Material>(concrete).is_err());
        assert!(serde_json::from_str::<Material>(r#"{"kind": "linear", "e": -200e9}"#).is_err());

        let steel: Material =
            serde_json::from_str(r#"{"kind": "bilinear_steel", "es": 200e9, "fy": 500e6}"#).unwrap();
        assert_eq!(steel, Material::bilinear_steel(200e9, 500e6, None).unwrap());
    }

    #[test]
    fn test_serialize_roundtrip() {
        let concrete = Material::concrete_ec2(30e6, 0.002, 0.0035).unwrap();
        let json = serde_json::to_string(&concrete).unwrap();
        assert_eq!(Material::from_json(&json).unwrap(), concrete);
    }

    #[test]
    fn test_from_json_rejects_non_material() {
        let err = Material::from_json(r#"{"shape": "rectangle", "width": 0.3}"#).unwrap_err();
        assert!(matches!(err, SectionError::TypeMismatch { expected: "material", .. }));
    }

    #[test]
    fn test_monotonic_flags() {
        assert!(Material::linear(30e9).unwrap().is_monotonic());
        assert!(Material::bilinear_steel(200e9, 500e6, None).unwrap().is_monotonic());
        assert!(!Material::bilinear_steel(200e9, 500e6, Some(0.02)).unwrap().is_monotonic());
        assert!(!Material::concrete_ec2(20e6, 0.002, 0.0035).unwrap().is_monotonic());
    }
}
