// File: crates/histogram-core/src/tooltip.rs
// Summary: Hover tooltip text, visibility state and overlay styling shared by hosts.

use crate::theme::Theme;

/// Tooltip text for a raw sample value: the shortest text that reads back as the same
/// number, without a decimal point for whole numbers. Never rounded.
pub fn tooltip_text(value: f64) -> String {
    if value == 0.0 {
        // Also folds -0.0.
        return "0".to_string();
    }
    format!("{value}")
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TooltipState {
    pub visible: bool,
    pub text: String,
    /// Anchor in graphic coordinates (top-centre of the hovered bar).
    pub anchor: (f64, f64),
}

impl TooltipState {
    pub fn show(&mut self, text: impl Into<String>, anchor: (f64, f64)) {
        self.visible = true;
        self.text = text.into();
        self.anchor = anchor;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}

pub const TOOLTIP_PADDING: f64 = 4.0;
pub const TOOLTIP_BORDER_RADIUS: f64 = 4.0;
pub const TOOLTIP_SHADOW_BLUR: f64 = 4.0;
/// Gap between the pointer and the tooltip box.
pub const TOOLTIP_OFFSET: f64 = 8.0;

/// CSS properties for an absolutely positioned HTML tooltip overlay.
pub fn overlay_style(theme: &Theme) -> Vec<(&'static str, String)> {
    vec![
        ("position", "absolute".to_string()),
        ("pointer-events", "none".to_string()),
        ("background-color", theme.tooltip_background.to_string()),
        ("color", theme.tooltip_text.to_string()),
        ("border-radius", format!("{TOOLTIP_BORDER_RADIUS}px")),
        ("box-shadow", format!("0 0 {TOOLTIP_SHADOW_BLUR}px {}", theme.tooltip_shadow)),
        ("padding", format!("{TOOLTIP_PADDING}px")),
        ("font", "12px sans-serif".to_string()),
        ("transform", "translateX(-50%) translateY(-100%)".to_string()),
        ("user-select", "none".to_string()),
        ("white-space", "nowrap".to_string()),
        ("z-index", "2".to_string()),
        ("display", "none".to_string()),
    ]
}
