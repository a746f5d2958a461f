//! Dashboard controller.
//!
//! Owns the chart window, the reading log, the latest status tier and the
//! toast surface. Views hold one `Dashboard` in a signal and call into it from
//! event handlers. Every accepted reading goes through the same sequence:
//! compute index, update status, append chart point, append log entry.

use rand::Rng;
use time::OffsetDateTime;

use super::config::DashboardConfig;
use super::csv::{self, CsvExport, ExportError};
use super::format;
use super::input::{self, InputError, SimulationRanges};
use super::quality::{self, QualityTier};
use super::readings::{LogStore, Reading, ReadingSource};
use super::series::ChartSeries;
use super::toast::{DismissTicket, ToastSeverity, Toaster};

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    config: DashboardConfig,
    ranges: SimulationRanges,
    series: ChartSeries,
    log: LogStore,
    status: Option<QualityTier>,
    toaster: Toaster,
}

impl Dashboard {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            series: ChartSeries::new(config.chart_capacity),
            ranges: config.simulation_ranges(),
            log: LogStore::new(),
            status: None,
            toaster: Toaster::new(),
            config,
        }
    }

    /// Handle the manual form. Invalid input shows an error toast and leaves
    /// chart, log and status untouched.
    pub fn submit_manual(
        &mut self,
        weight: &str,
        size: &str,
        now: OffsetDateTime,
    ) -> Result<Reading, InputError> {
        match input::parse_manual(weight, size) {
            Ok((weight, size)) => Ok(self.record(ReadingSource::Manual, weight, size, now)),
            Err(err) => {
                tracing::debug!(weight, size, "manual input rejected");
                self.notify(err.to_string(), ToastSeverity::Error);
                Err(err)
            }
        }
    }

    /// Generate and record one simulated sensor reading.
    pub fn simulate<R: Rng + ?Sized>(&mut self, rng: &mut R, now: OffsetDateTime) -> Reading {
        let (weight, size) = self.ranges.sample(rng);
        self.record(ReadingSource::Simulated, weight, size, now)
    }

    fn record(
        &mut self,
        source: ReadingSource,
        weight: f64,
        size: f64,
        now: OffsetDateTime,
    ) -> Reading {
        let quality_index = quality::calculate(weight, size);
        self.status = Some(QualityTier::classify(quality_index));
        self.series.append(format::chart_label(now), quality_index);

        let reading = Reading {
            source,
            weight,
            size,
            quality_index,
            timestamp: format::log_timestamp(now),
        };
        self.log.append(reading.clone());
        tracing::info!(
            source = source.as_str(),
            weight,
            size,
            quality_index,
            "reading recorded"
        );
        reading
    }

    /// Serialize the log for download. An empty log shows an error toast.
    pub fn export_csv(&mut self) -> Result<CsvExport, ExportError> {
        match csv::build_csv(self.log.entries()) {
            Ok(body) => {
                tracing::info!(rows = self.log.len(), "csv export prepared");
                Ok(CsvExport {
                    filename: self.config.export_filename.clone(),
                    body,
                })
            }
            Err(err) => {
                self.notify(err.to_string(), ToastSeverity::Error);
                Err(err)
            }
        }
    }

    pub fn notify(&mut self, message: impl Into<String>, severity: ToastSeverity) -> DismissTicket {
        self.toaster.show(message, severity)
    }

    pub fn dismiss_toast(&mut self, ticket: DismissTicket) -> bool {
        self.toaster.dismiss(ticket)
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn series(&self) -> &ChartSeries {
        &self.series
    }

    pub fn log(&self) -> &LogStore {
        &self.log
    }

    pub fn status(&self) -> Option<QualityTier> {
        self.status
    }

    pub fn toaster(&self) -> &Toaster {
        &self.toaster
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(DashboardConfig::default())
    }
}
