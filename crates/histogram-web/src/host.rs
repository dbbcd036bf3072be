// File: crates/histogram-web/src/host.rs
// Summary: `Host` implementation over web-sys: containers are live HTML elements, graphics are inline SVG.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use histogram_core::{ChartError, ContainerId, Graphic, Host, ListenerId, Result, Theme};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

use crate::animate::Animation;
use crate::dom::{self, Handler};
use crate::table::ContainerTable;

fn js_error(context: &str) -> impl Fn(JsValue) -> ChartError + '_ {
    move |e| ChartError::EnvironmentUnavailable(format!("{context}: {e:?}"))
}

/// One mounted graphic with everything that keeps it alive.
struct Mounted {
    svg: Element,
    _handlers: Vec<Handler>,
    animation: Option<Rc<Animation>>,
}

impl Mounted {
    /// Stop the animation and take the SVG out of the page before its handlers drop.
    fn remove(self) {
        if let Some(anim) = &self.animation {
            anim.cancel();
        }
        self.svg.remove();
    }
}

#[derive(Default)]
struct Slot {
    tooltip: Option<HtmlElement>,
    mounted: Option<Mounted>,
}

impl Slot {
    fn clear(&mut self) {
        if let Some(old) = self.mounted.take() {
            old.remove();
        }
        if let Some(t) = self.tooltip.take() {
            t.remove();
        }
    }
}

pub struct WebHost {
    window: Option<Window>,
    document: Option<Document>,
    theme: Theme,
    containers: RefCell<ContainerTable<HtmlElement, Slot>>,
    listeners: RefCell<HashMap<ListenerId, Closure<dyn FnMut()>>>,
    next_listener: Cell<u64>,
}

impl WebHost {
    pub fn new(theme: Theme) -> Self {
        let window = web_sys::window();
        let document = window.as_ref().and_then(Window::document);
        Self {
            window,
            document,
            theme,
            containers: RefCell::new(ContainerTable::new()),
            listeners: RefCell::new(HashMap::new()),
            next_listener: Cell::new(0),
        }
    }

    /// Track `element` as a chart container. Attaching the same element twice returns the same id.
    pub fn attach(&self, element: HtmlElement) -> ContainerId {
        self.containers.borrow_mut().attach(element, Slot::default)
    }

    pub fn attach_by_id(&self, element_id: &str) -> Result<ContainerId> {
        let document = self.document()?;
        let element = document
            .get_element_by_id(element_id)
            .ok_or_else(|| ChartError::InvalidInput(format!("no element with id '{element_id}'")))?;
        let element: HtmlElement = element
            .dyn_into()
            .map_err(|_| ChartError::InvalidInput(format!("'{element_id}' is not an HTML element")))?;
        Ok(self.attach(element))
    }

    /// Number of containers the host currently holds.
    pub fn container_count(&self) -> usize {
        self.containers.borrow().len()
    }

    /// Whether the container still has a transition loop scheduled.
    pub fn is_animating(&self, container: ContainerId) -> bool {
        self.containers
            .borrow()
            .get(container)
            .and_then(|slot| slot.mounted.as_ref())
            .and_then(|m| m.animation.as_ref())
            .map_or(false, |a| a.is_running())
    }

    fn window(&self) -> Result<&Window> {
        self.window.as_ref().ok_or_else(|| ChartError::EnvironmentUnavailable("no window".into()))
    }

    fn document(&self) -> Result<&Document> {
        self.document.as_ref().ok_or_else(|| ChartError::EnvironmentUnavailable("no document".into()))
    }
}

impl Host for WebHost {
    fn probe(&self) -> Result<()> {
        let window = self.window()?;
        self.document()?;
        if window.performance().is_none() {
            return Err(ChartError::EnvironmentUnavailable("no performance clock".into()));
        }
        Ok(())
    }

    fn is_attached(&self, container: ContainerId) -> bool {
        self.containers.borrow().key(container).map_or(false, |el| el.is_connected())
    }

    fn measure_width(&self, container: ContainerId) -> Result<f64> {
        let containers = self.containers.borrow();
        let el = containers
            .key(container)
            .filter(|el| el.is_connected())
            .ok_or(ChartError::DetachedContainer(container))?;
        let width = el.client_width() as f64;
        if width > 0.0 {
            return Ok(width);
        }
        Ok(el.get_bounding_client_rect().width())
    }

    fn replace_graphic(&self, container: ContainerId, graphic: Graphic) -> Result<()> {
        let window = self.window()?;
        let document = self.document()?;
        let mut containers = self.containers.borrow_mut();
        let (element, slot) = containers
            .get_mut(container)
            .filter(|(el, _)| el.is_connected())
            .ok_or(ChartError::DetachedContainer(container))?;

        if let Some(old) = slot.mounted.take() {
            old.remove();
        }
        // Graphics mounted by anything else into the same container go as well.
        while let Ok(Some(stale)) = element.query_selector(":scope > svg") {
            stale.remove();
        }

        let tooltip = match &slot.tooltip {
            Some(t) => t.clone(),
            None => {
                let t = dom::create_overlay(document, element, &self.theme).map_err(js_error("tooltip overlay"))?;
                slot.tooltip = Some(t.clone());
                t
            }
        };
        let _ = tooltip.style().set_property("display", "none");

        let built = dom::build(document, &graphic.root, element, &tooltip).map_err(js_error("build svg"))?;
        let anchor: &web_sys::Node = &tooltip;
        element.insert_before(&built.root, Some(anchor)).map_err(js_error("mount svg"))?;
        let animation = Animation::start(window, built.animated);
        slot.mounted = Some(Mounted { svg: built.root, _handlers: built.handlers, animation });
        Ok(())
    }

    fn clear(&self, container: ContainerId) {
        if let Some((_, slot)) = self.containers.borrow_mut().get_mut(container) {
            slot.clear();
        }
    }

    fn forget(&self, container: ContainerId) {
        let removed = self.containers.borrow_mut().remove(container);
        if let Some((_, mut slot)) = removed {
            slot.clear();
        }
    }

    fn add_resize_listener(&self, listener: Rc<dyn Fn()>) -> ListenerId {
        let id = ListenerId(self.next_listener.get());
        self.next_listener.set(id.0 + 1);
        let closure = Closure::wrap(Box::new(move || listener()) as Box<dyn FnMut()>);
        if let Some(window) = &self.window {
            if let Err(e) = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref()) {
                tracing::warn!(?e, "failed to bind resize listener");
            }
        }
        self.listeners.borrow_mut().insert(id, closure);
        id
    }

    fn remove_resize_listener(&self, id: ListenerId) {
        let Some(closure) = self.listeners.borrow_mut().remove(&id) else { return };
        unbind_resize(self.window.as_ref(), &closure);
    }
}

/// Take every graphic, overlay and listener out of the page before the closures they
/// reference are freed.
impl Drop for WebHost {
    fn drop(&mut self) {
        let slots = self.containers.get_mut().drain();
        let released = slots.len();
        for (_, mut slot) in slots {
            slot.clear();
        }
        for (_, closure) in self.listeners.get_mut().drain() {
            unbind_resize(self.window.as_ref(), &closure);
        }
        tracing::debug!(released, "web host dropped");
    }
}

fn unbind_resize(window: Option<&Window>, closure: &Closure<dyn FnMut()>) {
    if let Some(window) = window {
        let _ = window.remove_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
}
