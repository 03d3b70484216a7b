//! Table-formatted output for CLI.

use colored::*;
use comfy_table::{Cell, ContentArrangement, Table};

use unifi_discover_core::types::DeviceReport;

use super::OutputFormatter;

pub struct TableOutput;

impl TableOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TableOutput {
    fn default() -> Self {
        Self::new()
    }
}

/// Absent fields render as a placeholder, never an error.
fn cell(value: Option<&str>) -> Cell {
    Cell::new(value.unwrap_or("-"))
}

impl OutputFormatter for TableOutput {
    fn format_devices(&self, reports: &[DeviceReport]) -> String {
        if reports.is_empty() {
            return "No devices found.".to_string();
        }

        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec![
            "IP", "MAC", "Model", "Model name", "Radio", "ESSID", "Firmware",
        ]);

        for report in reports {
            let device = &report.device;
            table.add_row(vec![
                Cell::new(report.resolved_ip()),
                cell(report.resolved_mac()),
                cell(device.model_short.as_deref()),
                cell(device.model_full.as_deref()),
                cell(device.radio_name.as_deref()),
                cell(device.essid.as_deref()),
                cell(device.firmware.as_deref()),
            ]);
        }

        format!(
            "{}\n\nFound {} device(s)",
            table,
            reports.len().to_string().green()
        )
    }
}
