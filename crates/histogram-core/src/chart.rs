// File: crates/histogram-core/src/chart.rs
// Summary: Pure chart layout (scales, bar geometry, axes) and its conversion into an animated graphic.

use chrono::NaiveDateTime;

use crate::animation::{Easing, Transition};
use crate::axis::{Axis, Orientation};
use crate::config::ChartConfig;
use crate::geometry::Rect;
use crate::samples::Samples;
use crate::scale::LinearScale;
use crate::scene::{Graphic, Node};
use crate::theme::Theme;
use crate::tooltip::tooltip_text;
use crate::types::{BAR_GAP, BUCKETS, FONT_SIZE, TICK_SIZE};

/// Final geometry of one bar plus its animation delay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarGeometry {
    pub index: usize,
    pub value: f64,
    pub x: f64,
    pub width: f64,
    /// Top edge once fully grown.
    pub y: f64,
    /// Height once fully grown.
    pub height: f64,
    pub delay_ms: f64,
}

impl BarGeometry {
    pub fn rect(&self) -> Rect { Rect::from_xywh(self.x, self.y, self.width, self.height) }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    /// Y coordinate bars grow up from (top of the time axis).
    pub baseline: f64,
    pub max: f64,
    /// Hour index -> left edge of the bar; index 0 is rightmost.
    pub x_scale: LinearScale,
    /// Magnitude -> bar height.
    pub y_scale: LinearScale,
    pub bars: Vec<BarGeometry>,
    pub time_axis: Axis,
    pub value_axis: Axis,
    pub transition_ms: f64,
    pub easing: Easing,
}

/// Lay out `samples` in a container `width` pixels wide at wall-clock time `now`.
/// Deterministic for its inputs.
pub fn layout(samples: &Samples, width: f64, now: NaiveDateTime, config: &ChartConfig) -> ChartLayout {
    let width = if width.is_finite() { width.max(0.0) } else { 0.0 };
    let padding = config.padding;
    let baseline = config.drawable_height();
    let max = samples.max();
    let last = (BUCKETS - 1) as f64;

    let y_scale = LinearScale::new((0.0, max), (0.0, baseline));
    let x_scale = LinearScale::new((last, 0.0), (padding, width - 2.0 * padding));

    let raw_bar_width = width / BUCKETS as f64 - BAR_GAP;
    let bar_width = if raw_bar_width < 0.0 {
        tracing::warn!(width, "container too narrow for {BUCKETS} bars; bar width clamped to 0");
        0.0
    } else {
        raw_bar_width
    };

    let bars = samples
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let height = y_scale.map(value).max(0.0);
            BarGeometry {
                index,
                value,
                x: x_scale.map(index as f64),
                width: bar_width,
                y: baseline - height,
                height,
                delay_ms: (BUCKETS - index) as f64 * config.stagger_ms,
            }
        })
        .collect();

    let time_axis = Axis::time(&x_scale, bar_width, baseline, now, config.time_ticks);
    let value_axis = Axis::value(&y_scale.with_range((baseline, 0.0)), padding, config.value_ticks);

    ChartLayout {
        width,
        height: config.height,
        baseline,
        max,
        x_scale,
        y_scale,
        bars,
        time_axis,
        value_axis,
        transition_ms: config.transition_ms,
        easing: config.easing,
    }
}

impl ChartLayout {
    /// Build the graphic: both axes, then one bar per sample starting at zero height and
    /// growing to its final geometry.
    pub fn to_graphic(&self, theme: &Theme) -> Graphic {
        let root = Node::new("svg")
            .attr("class", "hourly-histogram")
            .num("width", self.width)
            .num("height", self.height)
            .child(draw_axis(&self.time_axis, theme))
            .child(draw_axis(&self.value_axis, theme))
            .child(self.draw_bars(theme));
        Graphic::new(self.width, self.height, root)
    }

    pub fn bar(&self, index: usize) -> Option<&BarGeometry> { self.bars.get(index) }

    fn draw_bars(&self, theme: &Theme) -> Node {
        let mut group = Node::new("g").attr("class", "bars");
        for bar in &self.bars {
            let rect = Node::new("rect")
                .attr("class", "bar")
                .attr("data-index", bar.index.to_string())
                .num("x", bar.x)
                .num("y", self.baseline)
                .num("width", bar.width)
                .num("height", 0.0)
                .attr("fill", theme.bar)
                .tooltip(tooltip_text(bar.value))
                .transition(self.grow("y", self.baseline, bar.y, bar.delay_ms))
                .transition(self.grow("height", 0.0, bar.height, bar.delay_ms));
            group = group.child(rect);
        }
        group
    }

    fn grow(&self, attr: &'static str, from: f64, to: f64, delay_ms: f64) -> Transition {
        Transition::new(attr, from, to)
            .delay(delay_ms)
            .duration(self.transition_ms)
            .ease(self.easing)
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_axis(axis: &Axis, theme: &Theme) -> Node {
    let (class, domain) = match axis.orientation {
        Orientation::Bottom => (
            "axis axis-time",
            Node::new("line").num("x1", axis.extent.0).num("x2", axis.extent.1).num("y1", 0.0).num("y2", 0.0),
        ),
        Orientation::Left => (
            "axis axis-value",
            Node::new("line").num("x1", 0.0).num("x2", 0.0).num("y1", axis.extent.0).num("y2", axis.extent.1),
        ),
    };
    let mut group = Node::new("g")
        .attr("class", class)
        .translate(axis.origin.0, axis.origin.1)
        .child(domain.attr("class", "domain").attr("stroke", theme.axis_line));

    for tick in &axis.ticks {
        let node = match axis.orientation {
            Orientation::Bottom => Node::new("g")
                .attr("class", "tick")
                .translate(tick.position, 0.0)
                .child(Node::new("line").num("y2", TICK_SIZE).attr("stroke", theme.tick))
                .child(
                    Node::new("text")
                        .num("y", TICK_SIZE + FONT_SIZE)
                        .attr("text-anchor", "middle")
                        .num("font-size", FONT_SIZE)
                        .attr("fill", theme.axis_label)
                        .text(tick.label.clone()),
                ),
            Orientation::Left => Node::new("g")
                .attr("class", "tick")
                .translate(0.0, tick.position)
                .child(Node::new("line").num("x2", -TICK_SIZE).attr("stroke", theme.tick))
                .child(
                    Node::new("text")
                        .num("x", -(TICK_SIZE + 3.0))
                        .attr("dy", "0.32em")
                        .attr("text-anchor", "end")
                        .num("font-size", FONT_SIZE)
                        .attr("fill", theme.axis_label)
                        .text(tick.label.clone()),
                ),
        };
        group = group.child(node);
    }
    group
}
