// File: crates/histogram-core/src/renderer.rs
// Summary: Renders validated samples into a host container, replacing whatever graphic was there before.

use chrono::NaiveDateTime;

use crate::chart::{self, ChartLayout};
use crate::config::ChartConfig;
use crate::error::{ChartError, Result};
use crate::host::{ContainerId, Host};
use crate::samples::Samples;
use crate::scene::Graphic;
use crate::theme::{self, Theme};

#[derive(Clone, Debug)]
pub struct Renderer {
    pub config: ChartConfig,
    pub theme: Theme,
}

impl Default for Renderer {
    fn default() -> Self { Self::new(ChartConfig::default()) }
}

impl Renderer {
    /// Build a renderer, resolving the configured theme by name.
    pub fn new(config: ChartConfig) -> Self {
        let theme = theme::find(&config.theme);
        Self { config, theme }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Layout only; no host involved.
    pub fn layout(&self, samples: &Samples, width: f64, now: NaiveDateTime) -> ChartLayout {
        chart::layout(samples, width, now, &self.config)
    }

    /// Graphic for a given width without mounting it anywhere.
    pub fn graphic(&self, samples: &Samples, width: f64, now: NaiveDateTime) -> Graphic {
        self.layout(samples, width, now).to_graphic(&self.theme)
    }

    /// Measure `container`, lay out `samples` and mount the result, replacing the previous
    /// graphic. Returns the layout that was mounted.
    pub fn render<H: Host + ?Sized>(
        &self,
        host: &H,
        container: ContainerId,
        samples: &Samples,
        now: NaiveDateTime,
    ) -> Result<ChartLayout> {
        if !host.is_attached(container) {
            return Err(ChartError::DetachedContainer(container));
        }
        let width = host.measure_width(container)?;
        let layout = self.layout(samples, width, now);
        tracing::debug!(%container, width, max = layout.max, "rendering hourly histogram");
        host.replace_graphic(container, layout.to_graphic(&self.theme))?;
        Ok(layout)
    }
}
