//! Tolerances shared by the resolvers.

use crate::error::{ConfigError, Result};

/// Tolerance thresholds for host matching and face culling.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ResolverConfig {
    /// Two squared wall distances within this are a tie.
    pub tie_tolerance: f64,
    /// Point-on-segment and collinearity tolerance (plan units).
    pub point_tolerance: f64,
    /// Minimum distance from a wall endpoint for strict interior containment.
    pub containment_tolerance: f64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            tie_tolerance: 1e-3,
            point_tolerance: 1e-6,
            containment_tolerance: 1e-6,
        }
    }
}

impl ResolverConfig {
    /// Checks that every tolerance is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidTolerance` naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("tie_tolerance", self.tie_tolerance),
            ("point_tolerance", self.point_tolerance),
            ("containment_tolerance", self.containment_tolerance),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidTolerance { name, value }.into());
            }
        }
        Ok(())
    }
}
