// File: crates/histogram-core/src/registry.rs
// Summary: Registry of (container, samples) entries with upsert/update/unregister and fault-isolated redraw-all.

use chrono::NaiveDateTime;

use crate::error::ChartError;
use crate::host::{ContainerId, Host};
use crate::renderer::Renderer;
use crate::samples::Samples;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChartId(pub u64);

#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    pub id: ChartId,
    pub container: ContainerId,
    pub samples: Samples,
}

/// Outcome of one redraw-all pass.
#[derive(Debug, Default, PartialEq)]
pub struct RedrawReport {
    pub rendered: usize,
    pub failures: Vec<(ChartId, ChartError)>,
}

impl RedrawReport {
    pub fn is_clean(&self) -> bool { self.failures.is_empty() }
}

/// Entries in insertion order. At most one entry per container.
#[derive(Debug, Default)]
pub struct ChartRegistry {
    entries: Vec<Entry>,
    next_id: u64,
}

impl ChartRegistry {
    pub fn new() -> Self { Self::default() }

    /// Add an entry for `container`, or replace the samples of its existing entry
    /// (keeping its id and position).
    pub fn register(&mut self, container: ContainerId, samples: Samples) -> ChartId {
        if let Some(e) = self.entries.iter_mut().find(|e| e.container == container) {
            e.samples = samples;
            return e.id;
        }
        let id = ChartId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, container, samples });
        id
    }

    /// Replace the samples of `id`. Returns false when the id is unknown.
    pub fn update(&mut self, id: ChartId, samples: Samples) -> bool {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(e) => {
                e.samples = samples;
                true
            }
            None => false,
        }
    }

    pub fn unregister(&mut self, id: ChartId) -> Option<Entry> {
        let pos = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(pos))
    }

    pub fn get(&self, id: ChartId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn find_container(&self, container: ContainerId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.container == container)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> { self.entries.iter() }
    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Drop every entry whose container has left the document. Returns how many were removed.
    pub fn prune_detached<H: Host + ?Sized>(&mut self, host: &H) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| host.is_attached(e.container));
        before - self.entries.len()
    }

    /// Re-render every entry in insertion order with its latest samples and the container's
    /// current width. A failing entry is logged and reported; the rest still render.
    pub fn redraw_all<H: Host + ?Sized>(&self, host: &H, renderer: &Renderer, now: NaiveDateTime) -> RedrawReport {
        let mut report = RedrawReport::default();
        for entry in &self.entries {
            match renderer.render(host, entry.container, &entry.samples, now) {
                Ok(_) => report.rendered += 1,
                Err(err) => {
                    tracing::warn!(chart = entry.id.0, container = %entry.container, "redraw skipped: {err}");
                    report.failures.push((entry.id, err));
                }
            }
        }
        report
    }
}
