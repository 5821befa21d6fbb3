//! Compatibility Evaluator
//!
//! Pure function over a component selection plus catalog lookups. The
//! evaluator never fails: a selected product id that does not resolve is
//! treated as an absent selection and only weakens the verdict.

use shared::models::{Category, CompatibilityReport, ComponentSelection, WattageStatus};

use crate::store::ProductStore;

/// Assumed PSU capacity in watts when the selected PSU declares none
const DEFAULT_PSU_CAPACITY: u32 = 750;

/// Draw above this fraction of PSU capacity is insufficient
const INSUFFICIENT_RATIO: f64 = 0.8;

/// Draw above this fraction of PSU capacity is marginal
const MARGINAL_RATIO: f64 = 0.6;

/// Evaluator output: the report plus the raw summed draw
#[derive(Debug, Clone)]
pub struct Assessment {
    pub report: CompatibilityReport,
    /// Summed power draw in watts across the selected components
    pub total_wattage: u32,
}

/// Evaluate pairwise compatibility and wattage adequacy for a selection
pub fn evaluate(selection: &ComponentSelection, catalog: &ProductStore) -> Assessment {
    let mut report = CompatibilityReport::default();

    // CPU / mainboard socket check. Runs only when both slots are
    // selected; a missing socket on either side counts as a mismatch.
    if let (Some(cpu_id), Some(mainboard_id)) = (
        selection.get(&Category::Cpu),
        selection.get(&Category::Mainboard),
    ) {
        let cpu_socket = catalog.get(cpu_id).and_then(|p| p.socket);
        let mainboard_socket = catalog.get(mainboard_id).and_then(|p| p.socket);

        let sockets_match = match (&cpu_socket, &mainboard_socket) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        };

        if !sockets_match {
            report.cpu_mainboard = false;
            report
                .warnings
                .push("CPU and mainboard sockets are incompatible".to_string());
        }
    }

    // RAM / mainboard memory-type check is not implemented; the report
    // field stays at its always-true default.

    // Sum the draw of every selected component. The PSU's own wattage
    // field describes capacity, not draw, and is excluded.
    let total_wattage: u32 = selection
        .iter()
        .filter(|(category, _)| **category != Category::Psu)
        .filter_map(|(_, id)| catalog.get(id))
        .filter_map(|product| product.wattage)
        .sum();

    // PSU adequacy check, only when a PSU slot is selected
    if let Some(psu_id) = selection.get(&Category::Psu) {
        let capacity = catalog
            .get(psu_id)
            .and_then(|p| p.specs)
            .and_then(|s| s.psu_capacity())
            .unwrap_or(DEFAULT_PSU_CAPACITY);

        let draw = f64::from(total_wattage);
        if draw > INSUFFICIENT_RATIO * f64::from(capacity) {
            report.psu_wattage = WattageStatus::Insufficient;
            report
                .warnings
                .push("Power supply capacity may be insufficient".to_string());
        } else if draw > MARGINAL_RATIO * f64::from(capacity) {
            report.psu_wattage = WattageStatus::Marginal;
            report
                .warnings
                .push("Consider a higher-wattage power supply".to_string());
        }
    }

    tracing::debug!(
        total_wattage,
        cpu_mainboard = report.cpu_mainboard,
        psu_wattage = ?report.psu_wattage,
        "Compatibility evaluated"
    );

    Assessment {
        report,
        total_wattage,
    }
}
