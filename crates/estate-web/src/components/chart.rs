//! Price trend chart
//!
//! Inline SVG area chart. Geometry is plain functions over the trend points
//! so it can be checked without a browser.

use leptos::prelude::*;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use estate_core::{format_axis_thousands, TrendPoint};

/// Y axis tops out at the next multiple of this
const AXIS_ROUNDING: Decimal = dec!(100000);
const Y_TICKS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 260.0,
            margin_left: 48.0,
            margin_right: 16.0,
            margin_top: 16.0,
            margin_bottom: 28.0,
        }
    }
}

impl ChartLayout {
    fn plot_width(&self) -> f64 {
        self.width - self.margin_left - self.margin_right
    }

    fn plot_height(&self) -> f64 {
        self.height - self.margin_top - self.margin_bottom
    }

    /// Y coordinate of the zero line
    pub fn baseline_y(&self) -> f64 {
        self.height - self.margin_bottom
    }

    pub fn y_for(&self, value: Decimal, axis_max: Decimal) -> f64 {
        let ratio = if axis_max.is_zero() {
            0.0
        } else {
            (value / axis_max).to_f64().unwrap_or(0.0)
        };
        self.baseline_y() - ratio * self.plot_height()
    }

    pub fn x_for(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return self.margin_left + self.plot_width() / 2.0;
        }
        self.margin_left + self.plot_width() * index as f64 / (count - 1) as f64
    }
}

/// A trend point mapped into SVG coordinates
#[derive(Clone, Debug, PartialEq)]
pub struct PlottedPoint {
    pub x: f64,
    pub y: f64,
    pub year: i32,
    pub is_current: bool,
}

/// Top of the Y axis: the largest value rounded up to a whole 100k
pub fn axis_max(points: &[TrendPoint]) -> Decimal {
    let max = points.iter().map(|p| p.value).max().unwrap_or(Decimal::ZERO);
    let steps = (max / AXIS_ROUNDING).ceil().max(Decimal::ONE);
    steps * AXIS_ROUNDING
}

pub fn plot(points: &[TrendPoint], layout: &ChartLayout) -> Vec<PlottedPoint> {
    let top = axis_max(points);
    points
        .iter()
        .enumerate()
        .map(|(i, p)| PlottedPoint {
            x: layout.x_for(i, points.len()),
            y: layout.y_for(p.value, top),
            year: p.year,
            is_current: p.is_current,
        })
        .collect()
}

pub fn line_path(plotted: &[PlottedPoint]) -> String {
    plotted
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{}{:.1},{:.1}", if i == 0 { "M" } else { "L" }, p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Line path closed down to the baseline
pub fn area_path(plotted: &[PlottedPoint], baseline_y: f64) -> String {
    let (Some(first), Some(last)) = (plotted.first(), plotted.last()) else {
        return String::new();
    };
    format!(
        "{} L{:.1},{:.1} L{:.1},{:.1} Z",
        line_path(plotted),
        last.x,
        baseline_y,
        first.x,
        baseline_y
    )
}

/// Evenly spaced tick values from zero to `top`, inclusive
pub fn y_ticks(top: Decimal, intervals: usize) -> Vec<Decimal> {
    let step = top / Decimal::from(intervals.max(1));
    (0..=intervals).map(|i| step * Decimal::from(i)).collect()
}

#[component]
pub fn TrendChart(points: Vec<TrendPoint>) -> impl IntoView {
    let layout = ChartLayout::default();
    let top = axis_max(&points);
    let plotted = plot(&points, &layout);

    let line = line_path(&plotted);
    let area = area_path(&plotted, layout.baseline_y());

    let grid = y_ticks(top, Y_TICKS)
        .into_iter()
        .map(|tick| {
            let y = format!("{:.1}", layout.y_for(tick, top));
            view! {
                <g class="grid">
                    <line
                        x1=format!("{:.1}", layout.margin_left)
                        x2=format!("{:.1}", layout.width - layout.margin_right)
                        y1=y.clone()
                        y2=y.clone()
                        stroke-dasharray="3 3"
                    />
                    <text x=format!("{:.1}", layout.margin_left - 6.0) y=y text-anchor="end">
                        {format_axis_thousands(tick)}
                    </text>
                </g>
            }
        })
        .collect::<Vec<_>>();

    let markers = plotted
        .iter()
        .map(|p| {
            let (class, radius) = if p.is_current { ("point point-current", "5") } else { ("point", "3") };
            view! {
                <g>
                    <circle
                        class=class
                        cx=format!("{:.1}", p.x)
                        cy=format!("{:.1}", p.y)
                        r=radius
                    />
                    <text
                        class="axis-label"
                        x=format!("{:.1}", p.x)
                        y=format!("{:.1}", layout.height - 8.0)
                        text-anchor="middle"
                    >
                        {p.year.to_string()}
                    </text>
                </g>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <svg
            class="trend-chart"
            viewBox=format!("0 0 {} {}", layout.width, layout.height)
            role="img"
        >
            {grid}
            <path class="trend-area" d=area />
            <path class="trend-line" d=line />
            {markers}
        </svg>
    }
}
