// File: crates/histogram-core/src/coordinator.rs
// Summary: Application-owned coordinator tying host, renderer, clock and registry together; resize binding as a disposable handle.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::clock::Clock;
use crate::error::{ChartError, Result};
use crate::host::{ContainerId, Host, ListenerId};
use crate::registry::{ChartId, ChartRegistry, RedrawReport};
use crate::renderer::Renderer;
use crate::samples::Samples;

struct Inner<H> {
    host: Rc<H>,
    renderer: Renderer,
    clock: Box<dyn Clock>,
    registry: RefCell<ChartRegistry>,
}

/// Owns the chart registry for one host. Cloning yields another handle to the same dashboard.
pub struct Dashboard<H: Host + 'static> {
    inner: Rc<Inner<H>>,
}

impl<H: Host + 'static> Clone for Dashboard<H> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<H: Host + 'static> Dashboard<H> {
    /// Probe the host and build an empty dashboard. A host lacking required primitives is
    /// rejected with `EnvironmentUnavailable`.
    pub fn new(host: Rc<H>, renderer: Renderer, clock: impl Clock + 'static) -> Result<Self> {
        host.probe()?;
        Ok(Self {
            inner: Rc::new(Inner {
                host,
                renderer,
                clock: Box::new(clock),
                registry: RefCell::new(ChartRegistry::new()),
            }),
        })
    }

    pub fn host(&self) -> &Rc<H> { &self.inner.host }
    pub fn renderer(&self) -> &Renderer { &self.inner.renderer }
    pub fn chart_count(&self) -> usize { self.inner.registry.borrow().len() }

    pub fn chart_for(&self, container: ContainerId) -> Option<ChartId> {
        self.inner.registry.borrow().find_container(container).map(|e| e.id)
    }

    /// Validate `samples`, add or refresh the entry for `container` and render it right away.
    /// Invalid samples register nothing. A render failure is returned but the entry stays,
    /// so a later redraw can pick it up.
    pub fn register_chart(&self, container: ContainerId, samples: &[f64]) -> Result<ChartId> {
        let samples = Samples::try_from(samples)?;
        let id = self.inner.registry.borrow_mut().register(container, samples.clone());
        tracing::info!(chart = id.0, %container, "chart registered");
        self.render(container, &samples)?;
        Ok(id)
    }

    /// Replace the samples of a registered chart and re-render it.
    pub fn update_chart(&self, id: ChartId, samples: &[f64]) -> Result<()> {
        let samples = Samples::try_from(samples)?;
        let container = {
            let mut registry = self.inner.registry.borrow_mut();
            if !registry.update(id, samples.clone()) {
                return Err(ChartError::InvalidInput(format!("unknown chart {}", id.0)));
            }
            registry.get(id).map(|e| e.container)
        };
        match container {
            Some(container) => self.render(container, &samples),
            None => Ok(()),
        }
    }

    /// Forget a chart, remove its graphic and release the host's hold on its container.
    /// Returns false when the id is unknown.
    pub fn unregister_chart(&self, id: ChartId) -> bool {
        let removed = self.inner.registry.borrow_mut().unregister(id);
        match removed {
            Some(entry) => {
                self.inner.host.forget(entry.container);
                tracing::info!(chart = id.0, container = %entry.container, "chart unregistered");
                true
            }
            None => false,
        }
    }

    /// Drop entries whose containers have left the document and release those containers.
    pub fn prune_detached(&self) -> usize {
        let host = &*self.inner.host;
        let detached: Vec<ContainerId> = {
            let mut registry = self.inner.registry.borrow_mut();
            let detached = registry.iter().map(|e| e.container).filter(|c| !host.is_attached(*c)).collect();
            registry.prune_detached(host);
            detached
        };
        for container in &detached {
            host.forget(*container);
        }
        if !detached.is_empty() {
            tracing::info!(removed = detached.len(), "pruned charts with detached containers");
        }
        detached.len()
    }

    /// Unregister every chart, releasing all containers.
    pub fn unregister_all(&self) -> usize {
        let ids: Vec<ChartId> = self.inner.registry.borrow().iter().map(|e| e.id).collect();
        ids.into_iter().filter(|id| self.unregister_chart(*id)).count()
    }

    /// Re-render every registered chart at the containers' current widths.
    pub fn redraw_all(&self) -> RedrawReport {
        let now = self.inner.clock.now();
        let registry = self.inner.registry.borrow();
        registry.redraw_all(&*self.inner.host, &self.inner.renderer, now)
    }

    /// Redraw every chart whenever the host reports a resize, for as long as the returned
    /// handle lives.
    pub fn subscribe_resize(&self) -> ResizeSubscription {
        let weak = Rc::downgrade(&self.inner);
        let listener: Rc<dyn Fn()> = Rc::new(move || {
            if let Some(inner) = weak.upgrade() {
                let report = Dashboard { inner }.redraw_all();
                tracing::debug!(rendered = report.rendered, failed = report.failures.len(), "resize redraw");
            }
        });
        let id = self.inner.host.add_resize_listener(listener);
        let host: Rc<dyn Host> = self.inner.host.clone();
        tracing::info!(listener = id.0, "resize redraw subscribed");
        ResizeSubscription { host: Rc::downgrade(&host), id: Some(id) }
    }

    fn render(&self, container: ContainerId, samples: &Samples) -> Result<()> {
        let now = self.inner.clock.now();
        self.inner.renderer.render(&*self.inner.host, container, samples, now).map(|_| ())
    }
}

/// Live resize binding. Dropping it (or calling [`cancel`](Self::cancel)) removes the listener.
pub struct ResizeSubscription {
    host: Weak<dyn Host>,
    id: Option<ListenerId>,
}

impl ResizeSubscription {
    pub fn is_active(&self) -> bool {
        self.id.is_some() && self.host.strong_count() > 0
    }

    pub fn cancel(mut self) {
        self.unsubscribe();
    }

    fn unsubscribe(&mut self) {
        if let Some(id) = self.id.take() {
            if let Some(host) = self.host.upgrade() {
                host.remove_resize_listener(id);
                tracing::info!(listener = id.0, "resize redraw unsubscribed");
            }
        }
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}
