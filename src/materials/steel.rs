//! Reinforcing and structural steel laws
//!
//! Both laws are point-symmetric: compression mirrors tension.

use serde::{Deserialize, Serialize};

use crate::error::{SectionError, SectionResult};

/// Elastic-perfectly plastic steel with optional rupture strain
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BilinearSteelParams")]
pub struct BilinearSteel {
    /// Modulus of elasticity in Pa
    es: f64,
    /// Yield strength in Pa
    fy: f64,
    /// Ultimate (rupture) strain, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    euk: Option<f64>,
}

/// Constants as read from a document, before validation
#[derive(Debug, Deserialize)]
pub(super) struct BilinearSteelParams {
    es: f64,
    fy: f64,
    #[serde(default)]
    euk: Option<f64>,
}

impl TryFrom<BilinearSteelParams> for BilinearSteel {
    type Error = SectionError;

    fn try_from(params: BilinearSteelParams) -> SectionResult<Self> {
        Self::new(params.es, params.fy, params.euk)
    }
}

impl BilinearSteel {
    /// Create a bilinear steel law.
    ///
    /// # Arguments
    /// * `es` - Elastic modulus (Pa)
    /// * `fy` - Yield strength (Pa)
    /// * `euk` - Strain beyond which the bar has ruptured and carries no stress
    pub fn new(es: f64, fy: f64, euk: Option<f64>) -> SectionResult<Self> {
        let steel = Self { es, fy, euk };
        steel.validate()?;
        Ok(steel)
    }

    pub fn elastic_modulus(&self) -> f64 {
        self.es
    }

    pub fn yield_strength(&self) -> f64 {
        self.fy
    }

    pub fn ultimate_strain(&self) -> Option<f64> {
        self.euk
    }

    /// Strain at first yield, `fy / Es`
    pub fn yield_strain(&self) -> f64 {
        self.fy / self.es
    }

    pub(crate) fn validate(&self) -> SectionResult<()> {
        check_positive("bilinear steel", "elastic modulus", self.es)?;
        check_positive("bilinear steel", "yield strength", self.fy)?;
        if let Some(euk) = self.euk {
            if !(euk > self.yield_strain()) {
                return Err(SectionError::invalid_material(
                    "bilinear steel",
                    format!(
                        "ultimate strain {} must exceed yield strain {}",
                        euk,
                        self.yield_strain()
                    ),
                ));
            }
        }
        Ok(())
    }

    pub fn stress(&self, strain: f64) -> f64 {
        let abs = strain.abs();
        if matches!(self.euk, Some(euk) if abs > euk) {
            return 0.0;
        }
        if abs <= self.yield_strain() {
            self.es * strain
        } else {
            self.fy.copysign(strain)
        }
    }
}

/// Stress carried by a Park-Sampson bar strained beyond its ultimate strain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostUltimate {
    /// The bar has fractured: zero stress
    #[default]
    Rupture,
    /// Stress held at the ultimate strength
    Plateau,
}

/// Steel with a yield plateau followed by Park-Paulay strain hardening.
///
/// Between `esh` and `esu` the stress follows
///
/// ```text
/// fs = fy * [ (m d + 2) / (60 d + 2) + d (60 - m) / (2 (30 r + 1)^2) ]
/// m  = ((fu / fy) (30 r + 1)^2 - 60 r - 1) / (15 r^2)
/// ```
///
/// with `d = |strain| - esh` and `r = esu - esh`, which passes through
/// `(esh, fy)` and `(esu, fu)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ParkSampsonSteelParams")]
pub struct ParkSampsonSteel {
    es: f64,
    fy: f64,
    fu: f64,
    /// Strain at onset of hardening
    esh: f64,
    /// Strain at ultimate strength
    esu: f64,
    post_ultimate: PostUltimate,
}

/// Constants as read from a document, before validation
#[derive(Debug, Deserialize)]
pub(super) struct ParkSampsonSteelParams {
    es: f64,
    fy: f64,
    fu: f64,
    esh: f64,
    esu: f64,
    #[serde(default)]
    post_ultimate: PostUltimate,
}

impl TryFrom<ParkSampsonSteelParams> for ParkSampsonSteel {
    type Error = SectionError;

    fn try_from(params: ParkSampsonSteelParams) -> SectionResult<Self> {
        Self::new(params.es, params.fy, params.fu, params.esh, params.esu)
            .map(|steel| steel.with_post_ultimate(params.post_ultimate))
    }
}

impl ParkSampsonSteel {
    /// Create a strain-hardening steel law that ruptures beyond `esu`
    pub fn new(es: f64, fy: f64, fu: f64, esh: f64, esu: f64) -> SectionResult<Self> {
        let steel = Self {
            es,
            fy,
            fu,
            esh,
            esu,
            post_ultimate: PostUltimate::Rupture,
        };
        steel.validate()?;
        Ok(steel)
    }

    /// Choose what happens beyond the ultimate strain
    pub fn with_post_ultimate(mut self, policy: PostUltimate) -> Self {
        self.post_ultimate = policy;
        self
    }

    pub fn elastic_modulus(&self) -> f64 {
        self.es
    }

    pub fn yield_strength(&self) -> f64 {
        self.fy
    }

    pub fn ultimate_strength(&self) -> f64 {
        self.fu
    }

    pub fn hardening_strain(&self) -> f64 {
        self.esh
    }

    pub fn ultimate_strain(&self) -> f64 {
        self.esu
    }

    pub fn post_ultimate(&self) -> PostUltimate {
        self.post_ultimate
    }

    pub fn yield_strain(&self) -> f64 {
        self.fy / self.es
    }

    pub(crate) fn validate(&self) -> SectionResult<()> {
        const NAME: &str = "Park-Sampson steel";
        check_positive(NAME, "elastic modulus", self.es)?;
        check_positive(NAME, "yield strength", self.fy)?;
        if !(self.fu >= self.fy) {
            return Err(SectionError::invalid_material(
                NAME,
                format!("ultimate strength {} is below yield strength {}", self.fu, self.fy),
            ));
        }
        if !(self.esh >= self.yield_strain()) {
            return Err(SectionError::invalid_material(
                NAME,
                format!(
                    "hardening strain {} is below yield strain {}",
                    self.esh,
                    self.yield_strain()
                ),
            ));
        }
        if !(self.esu > self.esh) {
            return Err(SectionError::invalid_material(
                NAME,
                format!(
                    "ultimate strain {} must exceed hardening strain {}",
                    self.esu, self.esh
                ),
            ));
        }
        Ok(())
    }

    fn hardening_stress(&self, abs_strain: f64) -> f64 {
        let r = self.esu - self.esh;
        let d = abs_strain - self.esh;
        let a2 = (30.0 * r + 1.0).powi(2);
        let m = ((self.fu / self.fy) * a2 - 60.0 * r - 1.0) / (15.0 * r * r);
        self.fy * ((m * d + 2.0) / (60.0 * d + 2.0) + d * (60.0 - m) / (2.0 * a2))
    }

    pub fn stress(&self, strain: f64) -> f64 {
        let abs = strain.abs();
        let magnitude = if abs <= self.yield_strain() {
            self.es * abs
        } else if abs <= self.esh {
            self.fy
        } else if abs <= self.esu {
            self.hardening_stress(abs)
        } else {
            match self.post_ultimate {
                PostUltimate::Rupture => 0.0,
                PostUltimate::Plateau => self.fu,
            }
        };
        magnitude.copysign(strain)
    }
}

fn check_positive(material: &'static str, what: &str, value: f64) -> SectionResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SectionError::invalid_material(
            material,
            format!("{} must be positive (received {})", what, value),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn park_sampson() -> ParkSampsonSteel {
        ParkSampsonSteel::new(200e9, 500e6, 600e6, 0.01, 0.05).unwrap()
    }

    #[test]
    fn test_bilinear_yield_boundary() {
        let steel = BilinearSteel::new(200e9, 500e6, None).unwrap();
        assert_relative_eq!(steel.stress(500e6 / 200e9), 500e6, max_relative = 1e-6);
        assert_relative_eq!(steel.stress(-500e6 / 200e9), -500e6, max_relative = 1e-6);
        assert_eq!(steel.stress(0.05), 500e6);
        assert_eq!(steel.stress(-0.05), -500e6);
    }

    #[test]
    fn test_bilinear_monotonic_in_tension() {
        let steel = BilinearSteel::new(200e9, 500e6, None).unwrap();
        let mut previous = steel.stress(0.0);
        for i in 1..=1000 {
            let stress = steel.stress(i as f64 * 1e-5);
            assert!(stress >= previous, "stress dropped at step {}", i);
            previous = stress;
        }
    }

    #[test]
    fn test_bilinear_rupture() {
        let steel = BilinearSteel::new(200e9, 500e6, Some(0.02)).unwrap();
        assert_eq!(steel.stress(0.02), 500e6);
        assert_eq!(steel.stress(0.0201), 0.0);
        assert_eq!(steel.stress(-0.0201), 0.0);
    }

    #[test]
    fn test_bilinear_validation() {
        assert!(BilinearSteel::new(-200e9, 500e6, None).is_err());
        assert!(BilinearSteel::new(200e9, 0.0, None).is_err());
        // Rupture before yield makes no sense
        assert!(BilinearSteel::new(200e9, 500e6, Some(0.001)).is_err());
    }

    #[test]
    fn test_park_sampson_branches() {
        let steel = park_sampson();
        assert_relative_eq!(steel.stress(0.001), 200e6, max_relative = 1e-12);
        assert_eq!(steel.stress(0.005), 500e6);
        assert_relative_eq!(steel.stress(0.01), 500e6, max_relative = 1e-9);
        assert_relative_eq!(steel.stress(0.05), 600e6, max_relative = 1e-9);
        assert_relative_eq!(steel.stress(-0.05), -600e6, max_relative = 1e-9);
    }

    #[test]
    fn test_park_sampson_hardening_is_monotonic() {
        let steel = park_sampson();
        let mut previous = steel.stress(0.01);
        for i in 1..=400 {
            let strain = 0.01 + i as f64 * 1e-4;
            let stress = steel.stress(strain);
            assert!(stress >= previous - 1e-3, "softening at strain {}", strain);
            assert!(stress <= 600e6 * (1.0 + 1e-9));
            previous = stress;
        }
    }

    #[test]
    fn test_park_sampson_post_ultimate_policy() {
        let rupture = park_sampson();
        assert_eq!(rupture.post_ultimate(), PostUltimate::Rupture);
        assert_eq!(rupture.stress(0.06), 0.0);

        let plateau = rupture.with_post_ultimate(PostUltimate::Plateau);
        assert_eq!(plateau.stress(0.06), 600e6);
        assert_eq!(plateau.stress(-0.06), -600e6);
    }

    #[test]
    fn test_park_sampson_validation() {
        // esu <= esh
        assert!(ParkSampsonSteel::new(200e9, 500e6, 600e6, 0.05, 0.05).is_err());
        // fu < fy
        assert!(ParkSampsonSteel::new(200e9, 500e6, 400e6, 0.01, 0.05).is_err());
        // hardening before yield
        assert!(ParkSampsonSteel::new(200e9, 500e6, 600e6, 0.001, 0.05).is_err());
        assert!(ParkSampsonSteel::new(0.0, 500e6, 600e6, 0.01, 0.05).is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let steel: ParkSampsonSteel = serde_json::from_str(
            r#"{"es": 200e9, "fy": 500e6, "fu": 600e6, "esh": 0.01, "esu": 0.05, "post_ultimate": "plateau"}"#,
        )
        .unwrap();
        assert_eq!(steel, park_sampson().with_post_ultimate(PostUltimate::Plateau));
        assert!(serde_json::from_str::<ParkSampsonSteel>(
            r#"{"es": 200e9, "fy": 500e6, "fu": 400e6, "esh": 0.01, "esu": 0.05}"#
        )
        .is_err());

        let bilinear: BilinearSteel = serde_json::from_str(r#"{"es": 200e9, "fy": 500e6}"#).unwrap();
        assert_eq!(bilinear.ultimate_strain(), None);
        assert!(serde_json::from_str::<BilinearSteel>(r#"{"es": 200e9, "fy": 500e6, "euk": 0.001}"#)
            .is_err());
    }
}
