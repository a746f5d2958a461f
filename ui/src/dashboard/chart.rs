use dioxus::prelude::*;

use crate::core::{format, series::ChartSeries};

/// Styling of the quality line chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartStyle {
    pub y_max: f64,
    pub line_color: &'static str,
    pub fill_color: &'static str,
    pub line_width: f64,
    pub point_radius: f64,
    pub tension: f64,
    pub animation_ms: u32,
    /// CSS timing function approximating ease-out-quart.
    pub easing: &'static str,
}

pub const QUALITY_CHART_STYLE: ChartStyle = ChartStyle {
    y_max: 100.0,
    line_color: "#4f46e5",
    fill_color: "rgba(79, 70, 229, 0.2)",
    line_width: 3.0,
    point_radius: 4.0,
    tension: 0.4,
    animation_ms: 1000,
    easing: "cubic-bezier(0.165, 0.84, 0.44, 1)",
};

const VIEW_WIDTH: f64 = 640.0;
const VIEW_HEIGHT: f64 = 280.0;
const PAD_LEFT: f64 = 48.0;
const PAD_RIGHT: f64 = 16.0;
const PAD_TOP: f64 = 12.0;
const PAD_BOTTOM: f64 = 48.0;
const Y_TICK_STEP: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    pub points: Vec<PlotPoint>,
    /// Smoothed line through all points (`d` attribute).
    pub line_path: String,
    /// Line path closed down to the x axis for the fill.
    pub area_path: String,
    /// `(y, label)` pairs for horizontal grid lines.
    pub y_ticks: Vec<(f64, String)>,
    /// `(x, label)` per point, oldest first; the time axis.
    pub x_ticks: Vec<(f64, String)>,
    pub plot_left: f64,
    pub plot_right: f64,
    pub plot_top: f64,
    pub plot_bottom: f64,
}

impl ChartGeometry {
    pub fn compute(series: &ChartSeries, style: &ChartStyle, width: f64, height: f64) -> Self {
        let plot_left = PAD_LEFT;
        let plot_right = (width - PAD_RIGHT).max(plot_left + 1.0);
        let plot_top = PAD_TOP;
        let plot_bottom = (height - PAD_BOTTOM).max(plot_top + 1.0);
        let plot_w = plot_right - plot_left;
        let plot_h = plot_bottom - plot_top;

        let n = series.len();
        let (points, x_ticks): (Vec<PlotPoint>, Vec<(f64, String)>) = series
            .points()
            .enumerate()
            .map(|(i, (label, value))| {
                let x = if n <= 1 {
                    plot_left + plot_w / 2.0
                } else {
                    plot_left + plot_w * i as f64 / (n - 1) as f64
                };
                let ratio = (value / style.y_max).clamp(0.0, 1.0);
                let point = PlotPoint {
                    x,
                    y: plot_bottom - ratio * plot_h,
                };
                (point, (x, label.to_string()))
            })
            .unzip();

        let line_path = smooth_path(&points, style.tension, plot_top, plot_bottom);
        let area_path = match (points.first(), points.last()) {
            (Some(first), Some(last)) if points.len() > 1 => format!(
                "{line_path} L {:.2} {:.2} L {:.2} {:.2} Z",
                last.x, plot_bottom, first.x, plot_bottom
            ),
            _ => String::new(),
        };

        let mut y_ticks = Vec::new();
        let mut tick = 0.0;
        while tick <= style.y_max + f64::EPSILON {
            let y = plot_bottom - (tick / style.y_max) * plot_h;
            y_ticks.push((y, format!("{tick:.0}")));
            tick += Y_TICK_STEP;
        }

        Self {
            points,
            line_path,
            area_path,
            y_ticks,
            x_ticks,
            plot_left,
            plot_right,
            plot_top,
            plot_bottom,
        }
    }
}

/// Cardinal-spline path through `points`, control points capped to the plot.
fn smooth_path(points: &[PlotPoint], tension: f64, top: f64, bottom: f64) -> String {
    let Some(first) = points.first() else {
        return String::new();
    };
    let mut d = format!("M {:.2} {:.2}", first.x, first.y);
    let k = tension / 2.0;

    for i in 0..points.len().saturating_sub(1) {
        let prev = points[i.saturating_sub(1)];
        let cur = points[i];
        let next = points[i + 1];
        let after = points[(i + 2).min(points.len() - 1)];

        let c1 = PlotPoint {
            x: cur.x + (next.x - prev.x) * k,
            y: (cur.y + (next.y - prev.y) * k).clamp(top, bottom),
        };
        let c2 = PlotPoint {
            x: next.x - (after.x - cur.x) * k,
            y: (next.y - (after.y - cur.y) * k).clamp(top, bottom),
        };
        d.push_str(&format!(
            " C {:.2} {:.2}, {:.2} {:.2}, {:.2} {:.2}",
            c1.x, c1.y, c2.x, c2.y, next.x, next.y
        ));
    }
    d
}

#[component]
pub fn QualityChart(series: ChartSeries) -> Element {
    let style = QUALITY_CHART_STYLE;
    let geometry = ChartGeometry::compute(&series, &style, VIEW_WIDTH, VIEW_HEIGHT);
    let transition = format!("transition: d {}ms {};", style.animation_ms, style.easing);
    let view_box = format!("0 0 {VIEW_WIDTH} {VIEW_HEIGHT}");
    let latest = series.latest().map(|(_, value)| format::format_index(value));
    let x_tick_y = geometry.plot_bottom + 14.0;

    rsx! {
        section { class: "dashboard-card quality-chart",
            div { class: "dashboard-card__header",
                h2 { {crate::t!("chart-title")} }
                span { class: "quality-chart__legend",
                    span {
                        class: "quality-chart__swatch",
                        style: "background: {style.line_color};",
                    }
                    {crate::t!("chart-dataset-label")}
                }
                if let Some(value) = latest {
                    span { class: "dashboard-card__meta", "{value}" }
                }
            }

            svg {
                class: "quality-chart__canvas",
                view_box: "{view_box}",
                role: "img",

                for (y, label) in geometry.y_ticks.iter() {
                    line {
                        class: "quality-chart__grid",
                        x1: "{geometry.plot_left}",
                        x2: "{geometry.plot_right}",
                        y1: "{y}",
                        y2: "{y}",
                    }
                    text {
                        class: "quality-chart__tick",
                        x: "{geometry.plot_left - 8.0}",
                        y: "{y + 4.0}",
                        text_anchor: "end",
                        "{label}"
                    }
                }

                if !geometry.area_path.is_empty() {
                    path {
                        class: "quality-chart__area",
                        d: "{geometry.area_path}",
                        fill: "{style.fill_color}",
                        stroke: "none",
                        style: "{transition}",
                    }
                }
                if !geometry.line_path.is_empty() {
                    path {
                        class: "quality-chart__line",
                        d: "{geometry.line_path}",
                        fill: "none",
                        stroke: "{style.line_color}",
                        stroke_width: "{style.line_width}",
                        style: "{transition}",
                    }
                }

                // Slanted so a full window of labels doesn't overlap.
                for (x, label) in geometry.x_ticks.iter() {
                    text {
                        class: "quality-chart__tick quality-chart__tick--x",
                        x: "{x}",
                        y: "{x_tick_y}",
                        text_anchor: "end",
                        transform: "rotate(-30 {x} {x_tick_y})",
                        "{label}"
                    }
                }

                for (point, (_, label)) in geometry.points.iter().zip(geometry.x_ticks.iter()) {
                    circle {
                        class: "quality-chart__point",
                        cx: "{point.x}",
                        cy: "{point.y}",
                        r: "{style.point_radius}",
                        fill: "{style.line_color}",
                        title { "{label}" }
                    }
                }
            }

            if series.is_empty() {
                p { class: "dashboard-card__placeholder", {crate::t!("chart-empty")} }
            }
        }
    }
}
