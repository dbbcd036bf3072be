// File: crates/histogram-core/src/lib.rs
// Summary: Core library entry point; exports the public API for laying out, rendering and redrawing hourly histograms.

pub mod animation;
pub mod axis;
pub mod chart;
pub mod clock;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod geometry;
pub mod host;
pub mod memory;
pub mod registry;
pub mod renderer;
pub mod samples;
pub mod scale;
pub mod scene;
pub mod theme;
pub mod ticks;
pub mod tooltip;
pub mod types;
#[cfg(feature = "raster")]
pub mod raster;

pub use animation::{Easing, Transition};
pub use axis::{Axis, Orientation, Tick};
pub use chart::{BarGeometry, ChartLayout};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::ChartConfig;
pub use coordinator::{Dashboard, ResizeSubscription};
pub use error::{ChartError, Result};
pub use host::{ContainerId, Host, ListenerId};
pub use memory::{Capabilities, MemoryHost};
pub use registry::{ChartId, ChartRegistry, RedrawReport};
pub use renderer::Renderer;
pub use samples::Samples;
pub use scale::LinearScale;
pub use scene::{Graphic, Node};
pub use theme::Theme;
pub use types::BUCKETS;
