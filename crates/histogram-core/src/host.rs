// File: crates/histogram-core/src/host.rs
// Summary: Host environment trait (containers, graphic mounting, animation, resize events) behind which DOM-like backends sit.

use std::fmt;
use std::rc::Rc;

use crate::error::Result;
use crate::scene::Graphic;

/// Opaque handle to a container element owned by a host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContainerId(pub u64);

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Handle to a registered resize listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// A single-threaded, DOM-like environment. Methods take `&self`; implementations use
/// interior mutability and must release their borrows before invoking listeners, since a
/// listener typically calls back into the host.
pub trait Host {
    /// Fails with `EnvironmentUnavailable` when element, event or animation primitives are missing.
    fn probe(&self) -> Result<()>;

    fn is_attached(&self, container: ContainerId) -> bool;

    /// Current rendered width of the container in pixels.
    fn measure_width(&self, container: ContainerId) -> Result<f64>;

    /// Remove every graphic previously mounted under `container` (cancelling its pending
    /// transitions), mount `graphic`, bind its tooltips and start its transitions.
    fn replace_graphic(&self, container: ContainerId, graphic: Graphic) -> Result<()>;

    /// Remove any mounted graphic without replacing it.
    fn clear(&self, container: ContainerId);

    /// Clear `container` and drop everything the host keeps for it (element handle,
    /// overlay, event handlers). Called once no chart refers to the container any more.
    fn forget(&self, container: ContainerId);

    fn add_resize_listener(&self, listener: Rc<dyn Fn()>) -> ListenerId;

    fn remove_resize_listener(&self, id: ListenerId);
}
