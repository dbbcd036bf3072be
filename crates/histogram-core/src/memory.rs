// File: crates/histogram-core/src/memory.rs
// Summary: In-memory host: a headless document with containers, a virtual animation clock, hover simulation and resize events.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::error::{ChartError, Result};
use crate::host::{ContainerId, Host, ListenerId};
use crate::geometry::Rect;
use crate::scene::{Graphic, Node};
use crate::tooltip::TooltipState;

/// Primitives the simulated environment offers; a missing one makes `probe` fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capabilities {
    pub elements: bool,
    pub events: bool,
    pub animation: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self { elements: true, events: true, animation: true }
    }
}

struct Mounted {
    graphic: Graphic,
    mounted_at_ms: f64,
}

struct ContainerState {
    width: f64,
    attached: bool,
    children: Vec<Mounted>,
    mounts: usize,
    tooltip: TooltipState,
    /// Set while the host holds chart resources for the container.
    tracked: bool,
}

#[derive(Default)]
struct Document {
    containers: BTreeMap<ContainerId, ContainerState>,
    next_container: u64,
    now_ms: f64,
}

#[derive(Default)]
pub struct MemoryHost {
    capabilities: Capabilities,
    document: RefCell<Document>,
    listeners: RefCell<Vec<(ListenerId, Rc<dyn Fn()>)>>,
    next_listener: Cell<u64>,
}

impl MemoryHost {
    pub fn new() -> Self { Self::default() }

    pub fn with_capabilities(capabilities: Capabilities) -> Self {
        Self { capabilities, ..Self::default() }
    }

    /// Add an attached, empty container of the given width.
    pub fn add_container(&self, width: f64) -> ContainerId {
        let mut doc = self.document.borrow_mut();
        let id = ContainerId(doc.next_container);
        doc.next_container += 1;
        doc.containers.insert(
            id,
            ContainerState {
                width,
                attached: true,
                children: Vec::new(),
                mounts: 0,
                tooltip: TooltipState::default(),
                tracked: false,
            },
        );
        id
    }

    /// Change the laid-out width; takes effect on the next render.
    pub fn set_width(&self, container: ContainerId, width: f64) {
        if let Some(c) = self.document.borrow_mut().containers.get_mut(&container) {
            c.width = width;
        }
    }

    /// Remove the container from the document. Its last graphic stays inspectable.
    pub fn detach(&self, container: ContainerId) {
        if let Some(c) = self.document.borrow_mut().containers.get_mut(&container) {
            c.attached = false;
        }
    }

    /// Fire the window resize notification.
    pub fn resize(&self) {
        let listeners: Vec<Rc<dyn Fn()>> =
            self.listeners.borrow().iter().map(|(_, l)| Rc::clone(l)).collect();
        for listener in listeners {
            listener();
        }
    }

    /// Advance the animation clock.
    pub fn advance(&self, ms: f64) {
        self.document.borrow_mut().now_ms += ms.max(0.0);
    }

    pub fn now_ms(&self) -> f64 { self.document.borrow().now_ms }

    /// The current graphic with transitions evaluated at the animation clock.
    pub fn frame(&self, container: ContainerId) -> Option<Graphic> {
        let doc = self.document.borrow();
        let m = doc.containers.get(&container)?.children.last()?;
        Some(m.graphic.at(doc.now_ms - m.mounted_at_ms))
    }

    pub fn svg(&self, container: ContainerId) -> Option<String> {
        self.frame(container).map(|g| g.to_svg())
    }

    pub fn is_animating(&self, container: ContainerId) -> bool {
        let doc = self.document.borrow();
        doc.containers
            .get(&container)
            .and_then(|c| c.children.last())
            .map_or(false, |m| doc.now_ms - m.mounted_at_ms < m.graphic.animation_end_ms())
    }

    /// Number of graphics currently mounted under the container.
    pub fn graphic_count(&self, container: ContainerId) -> usize {
        self.document.borrow().containers.get(&container).map_or(0, |c| c.children.len())
    }

    /// Number of times a graphic has been mounted into the container.
    pub fn mount_count(&self, container: ContainerId) -> usize {
        self.document.borrow().containers.get(&container).map_or(0, |c| c.mounts)
    }

    pub fn listener_count(&self) -> usize { self.listeners.borrow().len() }

    /// Whether the host still holds chart resources for the container.
    pub fn is_tracked(&self, container: ContainerId) -> bool {
        self.document.borrow().containers.get(&container).map_or(false, |c| c.tracked)
    }

    /// Number of containers the host holds chart resources for.
    pub fn tracked_count(&self) -> usize {
        self.document.borrow().containers.values().filter(|c| c.tracked).count()
    }

    /// Pointer enters bar `index`: shows and returns its tooltip text.
    pub fn hover(&self, container: ContainerId, index: usize) -> Option<String> {
        let frame = self.frame(container)?;
        let bar = frame.bar(index)?;
        self.show_tooltip(container, bar)
    }

    /// Pointer at `(x, y)` in graphic coordinates: shows the tooltip of the bar under it,
    /// or hides the tooltip when no bar is hit.
    pub fn pointer_at(&self, container: ContainerId, x: f64, y: f64) -> Option<String> {
        let frame = self.frame(container)?;
        match frame.bars().into_iter().find(|b| bar_rect(b).contains(x, y)) {
            Some(bar) => self.show_tooltip(container, bar),
            None => {
                self.leave(container);
                None
            }
        }
    }

    fn show_tooltip(&self, container: ContainerId, bar: &Node) -> Option<String> {
        let text = bar.tooltip.clone()?;
        let rect = bar_rect(bar);
        let mut doc = self.document.borrow_mut();
        let state = doc.containers.get_mut(&container)?;
        state.tooltip.show(text.clone(), (rect.center_x(), rect.y));
        Some(text)
    }

    /// Pointer leaves the hovered bar.
    pub fn leave(&self, container: ContainerId) {
        if let Some(c) = self.document.borrow_mut().containers.get_mut(&container) {
            c.tooltip.hide();
        }
    }

    pub fn tooltip(&self, container: ContainerId) -> Option<TooltipState> {
        self.document.borrow().containers.get(&container).map(|c| c.tooltip.clone())
    }
}

impl Host for MemoryHost {
    fn probe(&self) -> Result<()> {
        let Capabilities { elements, events, animation } = self.capabilities;
        let missing: Vec<&str> = [("elements", elements), ("events", events), ("animation", animation)]
            .into_iter()
            .filter(|(_, ok)| !ok)
            .map(|(name, _)| name)
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ChartError::EnvironmentUnavailable(format!("missing {}", missing.join(", "))))
        }
    }

    fn is_attached(&self, container: ContainerId) -> bool {
        self.document.borrow().containers.get(&container).map_or(false, |c| c.attached)
    }

    fn measure_width(&self, container: ContainerId) -> Result<f64> {
        match self.document.borrow().containers.get(&container) {
            Some(c) if c.attached => Ok(c.width),
            _ => Err(ChartError::DetachedContainer(container)),
        }
    }

    fn replace_graphic(&self, container: ContainerId, graphic: Graphic) -> Result<()> {
        let mut doc = self.document.borrow_mut();
        let now_ms = doc.now_ms;
        let state = match doc.containers.get_mut(&container) {
            Some(c) if c.attached => c,
            _ => return Err(ChartError::DetachedContainer(container)),
        };
        // Dropping the old graphics drops their pending transitions with them.
        state.children.clear();
        state.children.push(Mounted { graphic, mounted_at_ms: now_ms });
        state.mounts += 1;
        state.tooltip.hide();
        state.tracked = true;
        Ok(())
    }

    fn clear(&self, container: ContainerId) {
        if let Some(c) = self.document.borrow_mut().containers.get_mut(&container) {
            c.children.clear();
            c.tooltip.hide();
        }
    }

    fn forget(&self, container: ContainerId) {
        self.clear(container);
        if let Some(c) = self.document.borrow_mut().containers.get_mut(&container) {
            c.tracked = false;
        }
    }

    fn add_resize_listener(&self, listener: Rc<dyn Fn()>) -> ListenerId {
        let id = ListenerId(self.next_listener.get());
        self.next_listener.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, listener));
        id
    }

    fn remove_resize_listener(&self, id: ListenerId) {
        self.listeners.borrow_mut().retain(|(l, _)| *l != id);
    }
}

fn bar_rect(bar: &Node) -> Rect {
    let num = |name: &str| bar.get_num(name).unwrap_or(0.0);
    Rect::from_xywh(num("x"), num("y"), num("width"), num("height"))
}
