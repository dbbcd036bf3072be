// File: crates/histogram-core/src/theme.rs
// Summary: Light/Dark theming for chart colors, expressed as CSS hex strings.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    /// Background used when the graphic is rasterized; SVG output stays transparent.
    pub background: &'static str,
    pub bar: &'static str,
    pub axis_line: &'static str,
    pub axis_label: &'static str,
    pub tick: &'static str,
    pub tooltip_background: &'static str,
    pub tooltip_text: &'static str,
    pub tooltip_shadow: &'static str,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: "#121214",
            bar: "#609cff",
            axis_line: "#b4b4be",
            axis_label: "#ebebf5",
            tick: "#9696a0",
            tooltip_background: "#28282d",
            tooltip_text: "#ebebf5",
            tooltip_shadow: "#00000080",
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: "#fafafc",
            bar: "#2878c8",
            axis_line: "#3c3c46",
            axis_label: "#14141e",
            tick: "#64646e",
            tooltip_background: "#ffffff",
            tooltip_text: "#14141e",
            tooltip_shadow: "#00000033",
        }
    }

    pub fn solarized_dark() -> Self {
        // Base colors from Solarized dark palette
        Self {
            name: "solarized-dark",
            background: "#002b36", // base03
            bar: "#268bd2",        // blue
            axis_line: "#93a1a1",  // base1
            axis_label: "#eee8d5", // base2
            tick: "#839496",       // base0
            tooltip_background: "#073642", // base02
            tooltip_text: "#eee8d5",
            tooltip_shadow: "#00000080",
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: "#fdf6e3", // base3
            bar: "#268bd2",
            axis_line: "#657b83",  // base00
            axis_label: "#002b36", // base03
            tick: "#586e75",       // base01
            tooltip_background: "#eee8d5",
            tooltip_text: "#002b36",
            tooltip_shadow: "#00000033",
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: "#000000",
            bar: "#00aaff",
            axis_line: "#ffffff",
            axis_label: "#ffffff",
            tick: "#cccccc",
            tooltip_background: "#000000",
            tooltip_text: "#ffffff",
            tooltip_shadow: "#ffffff80",
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::dark() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::dark(),
        Theme::light(),
        Theme::solarized_dark(),
        Theme::solarized_light(),
        Theme::high_contrast_dark(),
    ]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    tracing::warn!("unknown theme '{name}'; using dark");
    Theme::dark()
}

/// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` into RGBA components.
pub fn parse_hex(color: &str) -> Option<(u8, u8, u8, u8)> {
    let hex = color.strip_prefix('#').filter(|h| h.is_ascii())?;
    let byte = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let mut it = hex.chars().map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
            Some((it.next()??, it.next()??, it.next()??, 255))
        }
        6 => Some((byte(&hex[0..2])?, byte(&hex[2..4])?, byte(&hex[4..6])?, 255)),
        8 => Some((byte(&hex[0..2])?, byte(&hex[2..4])?, byte(&hex[4..6])?, byte(&hex[6..8])?)),
        _ => None,
    }
}
