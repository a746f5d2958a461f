//! Tunables for the dashboard. `Default` carries the shipped values.

use serde::{Deserialize, Serialize};

use super::{csv, input::SimulationRanges, series, theme, toast};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Points kept in the chart window.
    pub chart_capacity: usize,
    pub toast_dismiss_ms: u64,
    pub theme_storage_key: String,
    pub export_filename: String,
    pub simulated_weight: std::ops::Range<f64>,
    pub simulated_size: std::ops::Range<f64>,
}

impl DashboardConfig {
    pub fn simulation_ranges(&self) -> SimulationRanges {
        SimulationRanges {
            weight: self.simulated_weight.clone(),
            size: self.simulated_size.clone(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        let ranges = SimulationRanges::default();
        Self {
            chart_capacity: series::DEFAULT_CAPACITY,
            toast_dismiss_ms: toast::DISMISS_AFTER_MS,
            theme_storage_key: theme::THEME_STORAGE_KEY.to_string(),
            export_filename: csv::CSV_FILENAME.to_string(),
            simulated_weight: ranges.weight,
            simulated_size: ranges.size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shipped_values() {
        let config = DashboardConfig::default();
        assert_eq!(config.chart_capacity, 15);
        assert_eq!(config.toast_dismiss_ms, 3_000);
        assert_eq!(config.theme_storage_key, "theme");
        assert_eq!(config.export_filename, "quality_log.csv");
        assert_eq!(config.simulation_ranges(), SimulationRanges::default());
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config: DashboardConfig =
            serde_json::from_str(r#"{ "chart_capacity": 30 }"#).unwrap();
        assert_eq!(config.chart_capacity, 30);
        assert_eq!(config.toast_dismiss_ms, 3_000);
    }
}
