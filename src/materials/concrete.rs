//! Eurocode 2 concrete for nonlinear structural analysis (EN 1992-1-1, 3.1.5)

use serde::{Deserialize, Serialize};

use crate::error::{SectionError, SectionResult};

/// Nonlinear concrete law in compression, no tensile strength.
///
/// ```text
/// sigma / fcm = (k eta - eta^2) / (1 + (k - 2) eta)
/// eta = |strain| / ec1,   k = 1.05 Ecm ec1 / fcm
/// ```
///
/// Compressive strains are negative and give negative stress. Strains beyond
/// `ecu1` are crushed and carry nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ConcreteEc2Params")]
pub struct ConcreteEc2 {
    /// Mean compressive strength in Pa (positive)
    fcm: f64,
    /// Strain magnitude at peak stress
    ec1: f64,
    /// Nominal ultimate strain magnitude
    ecu1: f64,
    /// Secant modulus override in Pa
    #[serde(skip_serializing_if = "Option::is_none")]
    ecm: Option<f64>,
}

/// Constants as read from a document, before validation
#[derive(Debug, Deserialize)]
pub(super) struct ConcreteEc2Params {
    fcm: f64,
    ec1: f64,
    ecu1: f64,
    #[serde(default)]
    ecm: Option<f64>,
}

impl TryFrom<ConcreteEc2Params> for ConcreteEc2 {
    type Error = SectionError;

    fn try_from(params: ConcreteEc2Params) -> SectionResult<Self> {
        let concrete = Self {
            fcm: params.fcm,
            ec1: params.ec1,
            ecu1: params.ecu1,
            ecm: params.ecm,
        };
        concrete.validate()?;
        Ok(concrete)
    }
}

impl ConcreteEc2 {
    /// Create a concrete law from its mean strength and characteristic strains.
    ///
    /// The secant modulus follows `Ecm = 22 (fcm / 10)^0.3` GPa with `fcm` in MPa.
    pub fn new(fcm: f64, ec1: f64, ecu1: f64) -> SectionResult<Self> {
        let concrete = Self {
            fcm,
            ec1,
            ecu1,
            ecm: None,
        };
        concrete.validate()?;
        Ok(concrete)
    }

    /// Use a measured secant modulus instead of the code estimate
    pub fn with_secant_modulus(mut self, ecm: f64) -> SectionResult<Self> {
        self.ecm = Some(ecm);
        self.validate()?;
        Ok(self)
    }

    pub fn mean_strength(&self) -> f64 {
        self.fcm
    }

    pub fn peak_strain(&self) -> f64 {
        self.ec1
    }

    pub fn ultimate_strain(&self) -> f64 {
        self.ecu1
    }

    /// Secant modulus in Pa
    pub fn secant_modulus(&self) -> f64 {
        self.ecm
            .unwrap_or_else(|| 22e9 * (self.fcm / 10e6).powf(0.3))
    }

    /// Curve shape factor `k`
    pub fn k(&self) -> f64 {
        1.05 * self.secant_modulus() * self.ec1 / self.fcm
    }

    pub(crate) fn validate(&self) -> SectionResult<()> {
        const NAME: &str = "EC2 concrete";
        if !(self.fcm.is_finite() && self.fcm > 0.0) {
            return Err(SectionError::invalid_material(
                NAME,
                format!("mean strength must be positive (received {})", self.fcm),
            ));
        }
        if !(self.ec1 > 0.0 && self.ecu1 > self.ec1) {
            return Err(SectionError::invalid_material(
                NAME,
                format!(
                    "strains must satisfy 0 < ec1 < ecu1 (received ec1 = {}, ecu1 = {})",
                    self.ec1, self.ecu1
                ),
            ));
        }
        if let Some(ecm) = self.ecm {
            if !(ecm.is_finite() && ecm > 0.0) {
                return Err(SectionError::invalid_material(
                    NAME,
                    format!("secant modulus must be positive (received {})", ecm),
                ));
            }
        }

        // The curve must stay in compression and keep a positive denominator up to ecu1
        let k = self.k();
        let eta_u = self.ecu1 / self.ec1;
        if 1.0 + (k - 2.0) * eta_u <= 0.0 || k <= eta_u {
            return Err(SectionError::invalid_material(
                NAME,
                format!(
                    "k = {:.3} gives no valid compression branch up to ecu1/ec1 = {:.3}",
                    k, eta_u
                ),
            ));
        }
        Ok(())
    }

    pub fn stress(&self, strain: f64) -> f64 {
        if strain >= 0.0 || -strain > self.ecu1 {
            return 0.0;
        }
        let k = self.k();
        let eta = -strain / self.ec1;
        -self.fcm * (k * eta - eta * eta) / (1.0 + (k - 2.0) * eta)
    }
}
