//! Dashboard widgets: chart, status line, toast, input controls, export.

mod chart;
pub use chart::{ChartGeometry, ChartStyle, PlotPoint, QualityChart, QUALITY_CHART_STYLE};

mod controls;
pub use controls::ReadingControls;

mod export;
pub use export::ExportPanel;

mod status;
pub use status::StatusDisplay;

mod toast;
pub use toast::ToastHost;
