// File: crates/histogram-web/src/lib.rs
// Summary: wasm-bindgen entry points; a per-thread dashboard over `WebHost` that redraws every chart on window resize.

pub mod animate;
pub mod dom;
pub mod host;
pub mod table;

use std::cell::RefCell;
use std::rc::Rc;

use histogram_core::{ChartConfig, ChartError, ChartId, Dashboard, Renderer, ResizeSubscription, Samples, SystemClock};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

pub use host::WebHost;

// Field order matters: the subscription must unbind before the host goes away.
struct App {
    _resize: ResizeSubscription,
    dashboard: Dashboard<WebHost>,
}

impl App {
    fn new(config: ChartConfig) -> Result<Self, ChartError> {
        let renderer = Renderer::new(config);
        let host = Rc::new(WebHost::new(renderer.theme));
        let dashboard = Dashboard::new(host, renderer, SystemClock)?;
        let resize = dashboard.subscribe_resize();
        Ok(Self { _resize: resize, dashboard })
    }
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

fn to_js(e: ChartError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn with_app<T>(f: impl FnOnce(&App) -> Result<T, ChartError>) -> Result<T, JsValue> {
    APP.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_none() {
            *slot = Some(App::new(ChartConfig::default()).map_err(to_js)?);
        }
        match slot.as_ref() {
            Some(app) => f(app).map_err(to_js),
            None => Err(JsValue::from_str("dashboard unavailable")),
        }
    })
}

/// Replace the dashboard with one built from a TOML configuration. Registered charts are
/// removed from the page; register them again to draw them with the new settings.
#[wasm_bindgen]
pub fn configure(config_toml: &str) -> Result<(), JsValue> {
    let config = ChartConfig::from_toml_str(config_toml).map_err(to_js)?;
    let app = App::new(config).map_err(to_js)?;
    let old = APP.with(|slot| slot.borrow_mut().replace(app));
    if let Some(old) = old {
        let removed = old.dashboard.unregister_all();
        tracing::info!(removed, "dashboard reconfigured");
    }
    Ok(())
}

/// Render `samples` (48 values, index 0 = current hour) into `container` and keep it
/// redrawn on resize. Returns the chart id.
#[wasm_bindgen]
pub fn register_chart(container: HtmlElement, samples: &[f64]) -> Result<u32, JsValue> {
    // Validate first so bad input never leaves a container behind in the host.
    Samples::try_from(samples).map_err(to_js)?;
    with_app(|app| {
        let id = app.dashboard.host().attach(container);
        app.dashboard.register_chart(id, samples).map(|c| c.0 as u32)
    })
}

#[wasm_bindgen]
pub fn update_chart(chart: u32, samples: &[f64]) -> Result<(), JsValue> {
    with_app(|app| app.dashboard.update_chart(ChartId(chart as u64), samples))
}

#[wasm_bindgen]
pub fn unregister_chart(chart: u32) -> Result<bool, JsValue> {
    with_app(|app| Ok(app.dashboard.unregister_chart(ChartId(chart as u64))))
}

/// Redraw every chart now. Charts whose containers left the page are skipped and kept.
/// Returns how many rendered.
#[wasm_bindgen]
pub fn redraw_all() -> Result<u32, JsValue> {
    with_app(|app| Ok(app.dashboard.redraw_all().rendered as u32))
}

/// Drop charts whose containers left the page and release them. Returns how many were removed.
#[wasm_bindgen]
pub fn prune_detached() -> Result<u32, JsValue> {
    with_app(|app| Ok(app.dashboard.prune_detached() as u32))
}
