//! Compatibility Report
//!
//! Derived per request by the evaluator, never stored.

use serde::{Deserialize, Serialize};

/// PSU adequacy for the selected components' summed draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WattageStatus {
    Adequate,
    Marginal,
    Insufficient,
}

/// Pairwise compatibility verdict for a component selection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityReport {
    /// CPU and mainboard share a socket
    pub cpu_mainboard: bool,
    /// RAM/mainboard check is not implemented yet and always reports true
    pub ram_mainboard: bool,
    pub psu_wattage: WattageStatus,
    /// Human-readable warnings, empty when everything checks out
    pub warnings: Vec<String>,
}

impl Default for CompatibilityReport {
    fn default() -> Self {
        Self {
            cpu_mainboard: true,
            ram_mainboard: true,
            psu_wattage: WattageStatus::Adequate,
            warnings: Vec::new(),
        }
    }
}
