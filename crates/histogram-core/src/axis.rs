// File: crates/histogram-core/src/axis.rs
// Summary: Axis model (orientation, placement, labelled ticks) for the hour axis and the value axis.

use chrono::{NaiveDateTime, TimeDelta};

use crate::geometry::fmt_num;
use crate::scale::LinearScale;
use crate::types::BUCKETS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Horizontal axis with ticks hanging below the line.
    Bottom,
    /// Vertical axis with ticks and labels to the left of the line.
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Domain value (hour index or sample magnitude).
    pub value: f64,
    /// Pixel offset along the axis, relative to the axis origin.
    pub position: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub orientation: Orientation,
    /// Translation of the axis origin inside the graphic.
    pub origin: (f64, f64),
    /// Extent of the axis line, in pixels along the axis.
    pub extent: (f64, f64),
    pub ticks: Vec<Tick>,
}

/// Wall-clock label `hours_ago` hours before `now`, e.g. `"23:00"` one hour before 00:30.
pub fn hour_label(now: NaiveDateTime, hours_ago: usize) -> String {
    let at = now - TimeDelta::hours(hours_ago as i64);
    at.format("%-H:00").to_string()
}

impl Axis {
    /// Bottom time axis. `x` maps hour index to the bar's left edge; ticks sit at bar centres.
    pub fn time(x: &LinearScale, bar_width: f64, baseline: f64, now: NaiveDateTime, tick_count: usize) -> Self {
        let last = (BUCKETS - 1) as f64;
        let mut ticks: Vec<Tick> = Vec::new();
        for v in crate::ticks::nice_ticks(0.0, last, tick_count.min(BUCKETS)) {
            let index = v.round();
            if ticks.last().map_or(false, |t| t.value == index) {
                continue;
            }
            ticks.push(Tick {
                value: index,
                position: x.map(index) + bar_width * 0.5,
                label: hour_label(now, index as usize),
            });
        }
        let (a, b) = (x.map(last), x.map(0.0));
        Self {
            orientation: Orientation::Bottom,
            origin: (0.0, baseline),
            extent: (a.min(b), a.max(b) + bar_width.max(0.0)),
            ticks,
        }
    }

    /// Left value axis. `y` maps magnitude to a vertical pixel position.
    pub fn value(y: &LinearScale, left: f64, max_ticks: usize) -> Self {
        let ticks = y
            .ticks(max_ticks)
            .into_iter()
            .map(|v| Tick { value: v, position: y.map(v), label: fmt_num(v) })
            .collect();
        let (a, b) = y.range;
        Self {
            orientation: Orientation::Left,
            origin: (left, 0.0),
            extent: (a.min(b), a.max(b)),
            ticks,
        }
    }

    pub fn labels(&self) -> Vec<&str> {
        self.ticks.iter().map(|t| t.label.as_str()).collect()
    }
}
